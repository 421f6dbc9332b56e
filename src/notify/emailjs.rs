//! EmailJS backend for contact notifications.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::EmailConfig;
use crate::error::EmailError;
use crate::notify::Mailer;
use crate::pipeline::types::ContactSubmission;

/// Hosted send endpoint.
const DEFAULT_API_URL: &str = "https://api.emailjs.com";

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request timeout for dispatch calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire format of an EmailJS send request.
#[derive(Debug, Serialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: Value,
}

/// EmailJS client — renders the contact template server-side and delivers it.
pub struct EmailJsMailer {
    config: EmailConfig,
    api_url: String,
    client: Client,
}

impl EmailJsMailer {
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            config,
            api_url: DEFAULT_API_URL.to_string(),
            client,
        })
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

/// Build the template variable map for one submission.
///
/// Each logical field is sent under every alias key known to be used by
/// contact templates in the wild (bare, `from_`-prefixed, `user_`-prefixed),
/// so the template binds no matter which convention it follows. A deliberate
/// compatibility shim, not redundancy to clean up.
fn template_params(submission: &ContactSubmission, to_email: &str, time: &str) -> Value {
    json!({
        "name": submission.name,
        "from_name": submission.name,
        "user_name": submission.name,

        "email": submission.email,
        "from_email": submission.email,
        "user_email": submission.email,
        "reply_to": submission.email,

        "message": submission.message,
        "message_html": submission.message,

        "time": time,
        "to_email": to_email,
    })
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send_contact_notification(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), EmailError> {
        let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let request = SendRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.expose_secret().to_string(),
            template_params: template_params(submission, &self.config.to_email, &time),
        };

        tracing::debug!(
            service = %request.service_id,
            template = %request.template_id,
            "Dispatching contact notification"
        );

        let url = format!("{}{}", self.api_url.trim_end_matches('/'), SEND_PATH);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // EmailJS reports errors as plain text
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(EmailError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::debug!("Contact notification accepted for delivery");
        Ok(())
    }
}
