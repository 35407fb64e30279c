//! Calendar loading: a single GET to the configured endpoint, decoded into
//! the response model, flattened and ordered by date.
//!
//! The view starts one load through [`spawn_load`] and receives the outcome
//! as an [`AppEvent::CalendarLoaded`] on the app event channel.

use crate::app::event::AppEvent;
use crate::calendar::{flatten_calendar, sort_by_scheduled_date};
use crate::config::ApiConfig;
use crate::model::{Action, ChallengeData, Customer};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Text shown to the user for any load failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed calendar payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// The cause is logged, never shown; every variant reads the same.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

/// A decoded calendar ready for display.
#[derive(Debug, Clone, Default)]
pub struct LoadedCalendar {
    pub customer: Option<Customer>,
    /// Every action of every month bucket, ordered by scheduled date.
    pub events: Vec<Action>,
}

impl LoadedCalendar {
    pub fn from_response(data: ChallengeData) -> Self {
        let events = sort_by_scheduled_date(flatten_calendar(data.calendar));
        for action in events.iter().filter(|a| a.scheduled_date.is_none()) {
            debug!(id = %action.id, name = %action.name, "event has no scheduled date");
        }
        Self {
            customer: data.customer,
            events,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarClient {
    http: Client,
    endpoint: String,
}

impl CalendarClient {
    pub fn new(config: &ApiConfig) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build().map_err(LoadError::Client)?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue the GET and decode the body. Non-2xx statuses are errors.
    pub async fn fetch(&self) -> Result<ChallengeData, LoadError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(LoadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(LoadError::Transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn load(&self) -> Result<LoadedCalendar, LoadError> {
        info!(endpoint = %self.endpoint, "fetching calendar");
        match self.fetch().await {
            Ok(data) => {
                let loaded = LoadedCalendar::from_response(data);
                info!(events = loaded.events.len(), "calendar loaded");
                Ok(loaded)
            }
            Err(e) => {
                warn!(error = %e, "calendar fetch failed");
                Err(e)
            }
        }
    }
}

/// Handle to the in-flight load. Dropping it aborts the request.
#[derive(Debug)]
pub struct LoadHandle {
    task: JoinHandle<()>,
}

impl LoadHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn spawn_load(client: CalendarClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> LoadHandle {
    let task = tokio::spawn(async move {
        let result = client.load().await;
        if event_tx.send(AppEvent::CalendarLoaded(result)).is_err() {
            debug!("calendar result dropped, view already closed");
        }
    });
    LoadHandle { task }
}
