//! Response data model for the maintenance calendar endpoint.
//!
//! The payload is a `customer` record plus a `calendar` list of month buckets,
//! each holding the actions (service events) scheduled in that period. Field
//! names follow the endpoint's camelCase JSON.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// Root response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallengeData {
    #[serde(default)]
    pub customer: Option<Customer>,
    pub calendar: Vec<MonthBucket>,
}

/// Customer the calendar belongs to. Only the street is rendered; other
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonthBucket {
    pub actions: Vec<Action>,
}

/// A single maintenance or service event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(deserialize_with = "de_action_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: ActionStatus,
    #[serde(default, deserialize_with = "de_scheduled_date")]
    pub scheduled_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub arrival_start_window: Option<String>,
    #[serde(default)]
    pub arrival_end_window: Option<String>,
    #[serde(default)]
    pub vendor: Option<Vendor>,
}

impl Action {
    /// `"{start} - {end}"`, only for scheduled events that carry a window.
    pub fn arrival_window(&self) -> Option<String> {
        if self.status != ActionStatus::Scheduled {
            return None;
        }
        if self.arrival_start_window.is_none() && self.arrival_end_window.is_none() {
            return None;
        }
        let start = self.arrival_start_window.as_deref().unwrap_or("");
        let end = self.arrival_end_window.as_deref().unwrap_or("");
        Some(format!("{} - {}", start, end))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Lifecycle stage of an action. Unknown values are kept verbatim in
/// `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ActionStatus {
    Completed,
    Scheduled,
    Unscheduled,
    Other(String),
}

impl ActionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ActionStatus::Completed => "Completed",
            ActionStatus::Scheduled => "Scheduled",
            ActionStatus::Unscheduled => "Unscheduled",
            ActionStatus::Other(s) => s,
        }
    }
}

impl Default for ActionStatus {
    fn default() -> Self {
        ActionStatus::Other(String::new())
    }
}

impl From<Option<String>> for ActionStatus {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("Completed") => ActionStatus::Completed,
            Some("Scheduled") => ActionStatus::Scheduled,
            Some("Unscheduled") => ActionStatus::Unscheduled,
            _ => ActionStatus::Other(raw.unwrap_or_default()),
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `scheduledDate` value.
///
/// Accepts ISO 8601 timestamps with or without seconds, with a `Z`, a
/// `+hh:mm` or `+hhmm` offset, or no offset at all, and a bare `YYYY-MM-DD`
/// date which is taken as midnight. When an offset is given the wall-clock
/// time in that offset is kept.
pub fn parse_scheduled_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%MZ",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn de_scheduled_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_scheduled_date(s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid scheduledDate `{}`", s))),
    }
}

fn de_action_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const SAMPLE: &str = r#"{
        "customer": { "id": 7, "street": "123 Main St", "city": "Springfield" },
        "calendar": [
            {
                "month": "March",
                "actions": [
                    {
                        "id": "a1",
                        "name": "Gutter Cleaning",
                        "status": "Completed",
                        "scheduledDate": "2025-03-04T09:00:00Z",
                        "vendor": { "vendorName": "Clean Co", "phoneNumber": "555-0100" }
                    },
                    {
                        "id": 42,
                        "name": "HVAC Service",
                        "status": "Scheduled",
                        "scheduledDate": "2025-03-18",
                        "arrivalStartWindow": "8:00am",
                        "arrivalEndWindow": "10:00am"
                    }
                ]
            },
            {
                "actions": [
                    { "id": "a3", "name": "Roof Inspection", "status": "Unscheduled" }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_decode_sample_payload() {
        let data: ChallengeData = serde_json::from_str(SAMPLE).unwrap();
        let customer = data.customer.unwrap();
        assert_eq!(customer.street.as_deref(), Some("123 Main St"));
        assert_eq!(data.calendar.len(), 2);

        let first = &data.calendar[0].actions[0];
        assert_eq!(first.status, ActionStatus::Completed);
        let date = first.scheduled_date.unwrap();
        assert_eq!((date.year(), date.month(), date.day(), date.hour()), (2025, 3, 4, 9));
        let vendor = first.vendor.as_ref().unwrap();
        assert_eq!(vendor.vendor_name.as_deref(), Some("Clean Co"));
        assert_eq!(vendor.phone_number.as_deref(), Some("555-0100"));

        let second = &data.calendar[0].actions[1];
        assert_eq!(second.id, "42");
        assert_eq!(second.arrival_window().as_deref(), Some("8:00am - 10:00am"));

        let third = &data.calendar[1].actions[0];
        assert!(third.scheduled_date.is_none());
        assert!(third.arrival_window().is_none());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let json = r#"{ "id": "x", "name": "Odd", "status": "Paused" }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action.status, ActionStatus::Other("Paused".into()));
        assert_eq!(action.status.to_string(), "Paused");

        let json = r#"{ "id": "y", "name": "Null status", "status": null }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action.status, ActionStatus::Other(String::new()));
    }

    #[test]
    fn test_empty_or_null_date_is_undated() {
        let json = r#"{ "id": "x", "name": "A", "status": "Unscheduled", "scheduledDate": "" }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert!(action.scheduled_date.is_none());

        let json = r#"{ "id": "x", "name": "A", "status": "Unscheduled", "scheduledDate": null }"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert!(action.scheduled_date.is_none());
    }

    #[test]
    fn test_malformed_date_fails_decode() {
        let json = r#"{ "customer": {}, "calendar": [ { "actions": [
            { "id": "x", "name": "A", "status": "Scheduled", "scheduledDate": "next tuesday" }
        ] } ] }"#;
        assert!(serde_json::from_str::<ChallengeData>(json).is_err());
    }

    #[test]
    fn test_parse_scheduled_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_scheduled_date("2025-01-10T14:30:00Z"), Some(expected));
        assert_eq!(parse_scheduled_date("2025-01-10T14:30:00+05:00"), Some(expected));
        assert_eq!(parse_scheduled_date("2025-01-10T14:30:00"), Some(expected));
        assert_eq!(parse_scheduled_date("2025-01-10T14:30:00.000"), Some(expected));
        assert_eq!(
            parse_scheduled_date("2025-01-10"),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_scheduled_date("01/10/2025"), None);
    }

    #[test]
    fn test_parse_minute_precision_and_compact_offsets() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        for raw in [
            "2025-03-04T09:00",
            "2025-03-04T09:00Z",
            "2025-03-04T09:00+0200",
            "2025-03-04T09:00:00.000+0000",
            "2025-03-04T09:00:00-0500",
        ] {
            assert_eq!(parse_scheduled_date(raw), Some(expected), "{}", raw);
        }
    }

    #[test]
    fn test_minute_precision_date_decodes_payload() {
        let json = r#"{ "calendar": [ { "actions": [
            { "id": "x", "name": "A", "status": "Scheduled", "scheduledDate": "2025-03-04T09:00Z" }
        ] } ] }"#;
        let data: ChallengeData = serde_json::from_str(json).unwrap();
        let date = data.calendar[0].actions[0].scheduled_date.unwrap();
        assert_eq!((date.month(), date.day(), date.hour()), (3, 4, 9));
    }

    #[test]
    fn test_missing_calendar_fails_decode() {
        assert!(serde_json::from_str::<ChallengeData>(r#"{ "customer": {} }"#).is_err());
    }
}
