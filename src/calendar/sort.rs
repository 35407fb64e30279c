use crate::model::{Action, MonthBucket};

/// Concatenate the actions of every bucket, keeping their relative order.
pub fn flatten_calendar(calendar: Vec<MonthBucket>) -> Vec<Action> {
    calendar.into_iter().flat_map(|bucket| bucket.actions).collect()
}

/// Order actions by `scheduled_date`, ascending.
///
/// Undated actions stay at the positions they already occupy; dated actions
/// are stably sorted among the remaining positions. Equal dates keep their
/// input order, so sorting a sorted list is a no-op.
pub fn sort_by_scheduled_date(actions: Vec<Action>) -> Vec<Action> {
    let mut dated = Vec::new();
    // `None` marks a position owned by a dated action.
    let mut slots: Vec<Option<Action>> = Vec::with_capacity(actions.len());
    for action in actions {
        if action.scheduled_date.is_some() {
            dated.push(action);
            slots.push(None);
        } else {
            slots.push(Some(action));
        }
    }

    dated.sort_by_key(|a| a.scheduled_date);
    let mut dated = dated.into_iter();

    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| dated.next()))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{parse_scheduled_date, ActionStatus};

    pub(crate) fn action(id: &str, date: Option<&str>) -> Action {
        Action {
            id: id.to_string(),
            name: format!("event {}", id),
            status: ActionStatus::Scheduled,
            scheduled_date: date.and_then(parse_scheduled_date),
            arrival_start_window: None,
            arrival_end_window: None,
            vendor: None,
        }
    }

    fn ids(actions: &[Action]) -> Vec<&str> {
        actions.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_flatten_preserves_bucket_order() {
        let calendar = vec![
            MonthBucket {
                actions: vec![action("a", Some("2025-02-01")), action("b", None)],
            },
            MonthBucket { actions: vec![] },
            MonthBucket {
                actions: vec![action("c", Some("2025-01-01"))],
            },
        ];
        assert_eq!(ids(&flatten_calendar(calendar)), ["a", "b", "c"]);
    }

    #[test]
    fn test_sorts_dated_ascending() {
        let sorted = sort_by_scheduled_date(vec![
            action("mar", Some("2025-03-01")),
            action("jan", Some("2025-01-10")),
            action("feb", Some("2025-02-01T08:00:00Z")),
        ]);
        assert_eq!(ids(&sorted), ["jan", "feb", "mar"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let sorted = sort_by_scheduled_date(vec![
            action("b", Some("2025-01-10")),
            action("a", Some("2025-01-10")),
            action("c", Some("2024-12-31")),
        ]);
        assert_eq!(ids(&sorted), ["c", "b", "a"]);
    }

    #[test]
    fn test_undated_keep_their_positions() {
        let sorted = sort_by_scheduled_date(vec![
            action("late", Some("2025-06-01")),
            action("tbd1", None),
            action("early", Some("2025-01-01")),
            action("tbd2", None),
        ]);
        assert_eq!(ids(&sorted), ["early", "tbd1", "late", "tbd2"]);
    }

    #[test]
    fn test_all_undated_is_untouched() {
        let sorted = sort_by_scheduled_date(vec![action("x", None), action("y", None)]);
        assert_eq!(ids(&sorted), ["x", "y"]);
        assert!(sort_by_scheduled_date(Vec::new()).is_empty());
    }

    #[test]
    fn test_sort_is_idempotent() {
        let input = vec![
            action("d", Some("2025-04-01")),
            action("n", None),
            action("a", Some("2025-01-01")),
            action("b", Some("2025-01-01")),
            action("m", None),
            action("c", Some("2025-03-15")),
        ];
        let once = sort_by_scheduled_date(input);
        let once_ids: Vec<String> = once.iter().map(|a| a.id.clone()).collect();
        let twice = sort_by_scheduled_date(once);
        assert_eq!(ids(&twice), once_ids);
    }
}
