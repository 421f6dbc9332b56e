//! Configuration types.
//!
//! All configuration is read from environment variables once at startup and
//! is immutable afterwards. Each external collaborator has its own config
//! struct whose `from_env` returns `None` when the collaborator is not
//! configured — an absent collaborator is a disabled feature, not an error.

use std::time::Duration;

use secrecy::SecretString;

/// Marker left in env values by a template `.env` file. A value still
/// carrying it counts as unconfigured.
const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Read an env var, treating empty and placeholder values as unset.
fn env_value(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let value = value.trim().to_string();
    if value.is_empty() || value.contains(PLACEHOLDER_MARKER) {
        return None;
    }
    Some(value)
}

// ── Record store ────────────────────────────────────────────────────

/// Supabase record-store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Anonymous API key.
    pub api_key: SecretString,
}

impl StoreConfig {
    /// Build config from environment variables.
    /// Returns `None` if `SUPABASE_URL` or `SUPABASE_ANON_KEY` is unset or
    /// still a placeholder (store disabled).
    pub fn from_env() -> Option<Self> {
        let base_url = env_value("SUPABASE_URL")?;
        let api_key = env_value("SUPABASE_ANON_KEY")?;
        Some(Self {
            base_url,
            api_key: SecretString::from(api_key),
        })
    }
}

// ── Email dispatch ──────────────────────────────────────────────────

/// Default destination for contact notifications.
const DEFAULT_TO_EMAIL: &str = "sarveshsundaram26@gmail.com";

/// EmailJS dispatch configuration.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Public (user) key passed as `user_id`.
    pub public_key: SecretString,
    pub service_id: String,
    pub template_id: String,
    /// Fixed destination address for notifications.
    pub to_email: String,
}

impl EmailConfig {
    /// Build config from environment variables.
    /// Returns `None` unless public key, service id and template id are all
    /// present and non-placeholder (dispatch disabled).
    pub fn from_env() -> Option<Self> {
        let public_key = env_value("EMAILJS_PUBLIC_KEY")?;
        let service_id = env_value("EMAILJS_SERVICE_ID")?;
        let template_id = env_value("EMAILJS_TEMPLATE_ID")?;
        let to_email =
            env_value("CONTACT_TO_EMAIL").unwrap_or_else(|| DEFAULT_TO_EMAIL.to_string());
        Some(Self {
            public_key: SecretString::from(public_key),
            service_id,
            template_id,
            to_email,
        })
    }
}

// ── Pipeline ────────────────────────────────────────────────────────

/// Submission pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether a submission with no record store configured still counts as
    /// success. `true` matches the historical behavior; `false` shows the
    /// user a "nothing was saved" notice instead.
    pub accept_unpersisted: bool,
    /// How long the success indicator stays visible.
    pub success_display: Duration,
    /// Collection the contact records are inserted into.
    pub contacts_table: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            accept_unpersisted: true,
            success_display: Duration::from_secs(5),
            contacts_table: "contacts".to_string(),
        }
    }
}
