pub mod commands;
pub mod parser;

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::session::{FileSessionStore, SessionStore};
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command handler needs, resolved once in `run()`.
pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub session: Arc<FileSessionStore>,
}

impl AppContext {
    /// The session file lives next to the configuration file.
    pub fn new(cfg: Config, config_path: PathBuf) -> Self {
        let session_path = config_path
            .parent()
            .map(|dir| dir.join("session.yaml"))
            .unwrap_or_else(Config::session_file);

        Self {
            cfg,
            config_path,
            session: Arc::new(FileSessionStore::new(session_path)),
        }
    }

    pub fn require_session(&self) -> AppResult<Session> {
        self.session.get()?.ok_or(AppError::NoSession)
    }

    pub fn api_client(&self) -> AppResult<ApiClient> {
        ApiClient::new(
            self.cfg.api_base_url.clone(),
            self.cfg.fetch_timeout(),
            self.session.clone(),
        )
    }
}
