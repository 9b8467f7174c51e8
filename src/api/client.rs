use crate::api::{AttendanceSource, ReminderSource};
use crate::core::pagination::{PageQuery, PageResult};
use crate::core::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Reminder, ReminderDraft};
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const ATTENDANCE_PATH: &str = "api/timesheets/attendencelogs/";
const REMINDER_PATH: &str = "api/policies/reminder/";
const ORGANIZATION_HEADER: &str = "x-organization";

/// Longest error body echoed back in `AppError::Api`.
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Deserialize)]
struct AttendancePayload {
    #[serde(default)]
    data: Vec<AttendanceRecord>,
    #[serde(default)]
    count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ReminderPayload {
    #[serde(default)]
    data: Vec<Reminder>,
}

/// HTTP client for the staff portal backend.
///
/// Cloning is cheap: clones share the connection pool and the session store.
/// Every request carries the stored bearer token and organization key.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        session: Arc<dyn SessionStore>,
    ) -> AppResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> AppResult<reqwest::RequestBuilder> {
        match self.session.get()? {
            Some(session) => Ok(req
                .bearer_auth(&session.token)
                .header(ORGANIZATION_HEADER, &session.organization)),
            None => {
                tracing::debug!("no stored session, sending request unauthenticated");
                Ok(req)
            }
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> AppResult<String> {
        let response = self.authorize(req)?.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(body)
    }
}

/// `detail` / `message` from a JSON error body, else the (truncated) raw body.
fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let field = parsed.as_ref().and_then(|v| {
        ["detail", "message", "error"]
            .iter()
            .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
            .map(str::to_string)
    });

    field.unwrap_or_else(|| body.chars().take(MAX_ERROR_BODY).collect())
}

/// Query string for one page request (dates omitted when unbounded).
pub fn page_params(query: &PageQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(4);
    if let Some(d) = query.start_date {
        params.push(("start_date", d.format("%Y-%m-%d").to_string()));
    }
    if let Some(d) = query.end_date {
        params.push(("end_date", d.format("%Y-%m-%d").to_string()));
    }
    params.push(("page", query.api_page().to_string()));
    params.push(("page_size", query.page_size.to_string()));
    params
}

#[async_trait]
impl AttendanceSource for ApiClient {
    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PageResult> {
        let req = self
            .http
            .get(self.url(ATTENDANCE_PATH))
            .query(&page_params(query));

        let body = self.send(req).await?;
        let payload: AttendancePayload = serde_json::from_str(&body)?;

        // A zero count next to actual rows means the server left it unset.
        let total = payload.count.filter(|c| *c > 0);
        Ok(PageResult::new(payload.data, total))
    }
}

#[async_trait]
impl ReminderSource for ApiClient {
    async fn list_reminders(&self) -> AppResult<Vec<Reminder>> {
        let body = self.send(self.http.get(self.url(REMINDER_PATH))).await?;
        let payload: ReminderPayload = serde_json::from_str(&body)?;
        Ok(payload.data)
    }

    async fn create_reminder(&self, draft: &ReminderDraft) -> AppResult<Reminder> {
        let req = self.http.post(self.url(REMINDER_PATH)).json(draft);
        let body = self.send(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn update_reminder(&self, id: i64, draft: &ReminderDraft) -> AppResult<Reminder> {
        let req = self
            .http
            .put(self.url(&format!("{REMINDER_PATH}{id}/")))
            .json(draft);
        let body = self.send(req).await?;

        // Some deployments answer an update with an empty body or a bare status.
        match serde_json::from_str::<Reminder>(&body) {
            Ok(reminder) => Ok(reminder),
            Err(e) => {
                tracing::debug!(id, error = %e, "update response not a reminder, using the sent fields");
                Ok(draft.clone().into_reminder(id))
            }
        }
    }

    async fn delete_reminder(&self, id: i64) -> AppResult<()> {
        let url = self.url(&format!("{REMINDER_PATH}{id}/"));
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
