use std::sync::Arc;

use anyhow::{Context, Result};
use minijinja::Environment;
use reqwest::Client;

use crate::config::AppConfig;
use crate::meetup::MeetupClient;
use crate::templates;

/// Everything a handler needs, built once at startup.
pub struct AppState {
    pub config: AppConfig,
    pub meetup: MeetupClient,
    pub templates: Environment<'static>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig) -> Result<SharedState> {
        Self::with_http_client(config, Client::new())
    }

    pub fn with_http_client(config: AppConfig, http: Client) -> Result<SharedState> {
        let meetup = MeetupClient::new(http, &config.meetup_api_url, &config.meetup_api_key);
        let templates = templates::template_env().context("Failed to compile templates")?;

        Ok(Arc::new(Self {
            config,
            meetup,
            templates,
        }))
    }
}
