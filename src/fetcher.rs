// Remote data fetcher: weekly camera documents from the upstream repository layout.
// Every call re-fetches; failures degrade to absence and are only distinguished in logs.

use futures_util::future::join_all;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::instrument;

use crate::config::SourceConfig;
use crate::error::FetchError;
use crate::models::{Month, MonthCorpus, Scope, WeekNumber, WeeklySnapshot};

pub struct SnapshotFetcher {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl SnapshotFetcher {
    /// `token`, when present and non-blank, is sent as a bearer token on every request.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        token: Option<String>,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &SourceConfig, token: Option<String>) -> anyhow::Result<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
            token,
        )
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// `<base>/status/<MM>-<month>/semana<week>.json`
    pub fn week_url(&self, month: Month, week: WeekNumber) -> String {
        format!(
            "{}/status/{}/semana{}.json",
            self.base_url,
            month.path_segment(),
            week
        )
    }

    #[instrument(skip(self), fields(source = "upstream", operation = "fetch_week"))]
    pub async fn try_fetch_week(
        &self,
        month: Month,
        week: WeekNumber,
    ) -> Result<WeeklySnapshot, FetchError> {
        let mut request = self.client.get(self.week_url(month, week));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let snapshot: WeeklySnapshot = response.json().await?;
        if snapshot.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(snapshot)
    }

    /// Snapshot for one week, or `None` when the week has no usable document.
    pub async fn fetch_week(&self, month: Month, week: WeekNumber) -> Option<WeeklySnapshot> {
        match self.try_fetch_week(month, week).await {
            Ok(snapshot) => {
                tracing::debug!(%month, %week, cameras = snapshot.cameras.len(), "fetched weekly snapshot");
                Some(snapshot)
            }
            Err(e) if e.is_missing() => {
                tracing::debug!(%month, %week, reason = %e, "no data for week");
                None
            }
            Err(e) => {
                tracing::warn!(%month, %week, error = %e, url = %self.week_url(month, week), "weekly fetch failed");
                None
            }
        }
    }

    /// Fetch every week in `scope` concurrently; failed weeks stay empty in the corpus.
    pub async fn fetch_scope(&self, month: Month, scope: Scope) -> MonthCorpus {
        let weeks = scope.weeks();
        let results = join_all(weeks.iter().map(|&week| self.fetch_week(month, week))).await;
        let mut corpus = MonthCorpus::new();
        for (week, snapshot) in weeks.into_iter().zip(results) {
            if let Some(snapshot) = snapshot {
                corpus.insert(week, snapshot);
            }
        }
        corpus
    }
}
