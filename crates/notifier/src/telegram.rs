//! Telegram delivery — one `sendMessage` call per hook invocation.
//!
//! Credentials come from the job's action overrides first and fall back to the
//! injected process-wide pair. A failed call is reported, never retried.

use serde::Serialize;

use render_common::config::{DEFAULT_TELEGRAM_API_BASE, NotifierConfig};
use render_common::error::NotifyError;
use render_common::types::{Credentials, RenderEvent, RenderJob, RenderSettings};

use crate::formatter::format_message;

/// Parse mode matching the markup produced by the formatter.
const PARSE_MODE: &str = "Markdown";

/// JSON body of a Bot API `sendMessage` request.
#[derive(Debug, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

/// Sends render lifecycle notifications to a Telegram chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    fallback: Credentials,
}

impl TelegramNotifier {
    pub fn new(fallback: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
            fallback,
        }
    }

    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(config.credentials.clone()).with_api_base(&config.api_base)
    }

    /// Use a preconfigured client (timeouts, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Text appended after the job details: the job's own text override, or a
    /// synthesized error line for failed renders.
    pub fn extra_text(job: &RenderJob, event: &RenderEvent) -> String {
        match (job.override_text(), job.error()) {
            (Some(text), _) => text.to_string(),
            (None, Some(error)) if event.is_error() => format!("Error: {}", error),
            _ => String::new(),
        }
    }

    /// Format and deliver a notification for `job` at lifecycle stage `event`.
    ///
    /// `settings` is part of the hook contract but does not affect delivery.
    /// Resolves with the raw Bot API response once Telegram answers 2xx.
    pub async fn notify(
        &self,
        job: &RenderJob,
        _settings: &RenderSettings,
        event: &RenderEvent,
    ) -> Result<reqwest::Response, NotifyError> {
        let bot_token = job.override_bot_token().or(self.fallback.bot_token());
        let chat_id = job.override_chat_id().or(self.fallback.chat_id());
        let extra = Self::extra_text(job, event);

        let (Some(bot_token), Some(chat_id)) = (bot_token, chat_id) else {
            return Err(NotifyError::MissingCredentials);
        };

        let text = format_message(job, event, &extra);
        let body = SendMessage {
            chat_id,
            text: &text,
            parse_mode: PARSE_MODE,
        };

        let url = format!("{}/bot{}/sendMessage", self.api_base, bot_token);

        let result = self.send(&url, &body).await;

        match &result {
            Ok(_) => tracing::info!(
                job_uid = job.uid().unwrap_or_default(),
                event = %event,
                chat_id,
                "Telegram notification delivered"
            ),
            Err(e) => tracing::error!(
                job_uid = job.uid().unwrap_or_default(),
                event = %event,
                status = e.status(),
                error = %e,
                "Failed to send Telegram message"
            ),
        }

        result
    }

    async fn send(
        &self,
        url: &str,
        body: &SendMessage<'_>,
    ) -> Result<reqwest::Response, NotifyError> {
        // reqwest's `json` sets `content-type: application/json`.
        // The url carries the bot token, so it is stripped from transport errors.
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            return Err(NotifyError::DeliveryFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}
