use std::env;

use crate::app::NotificationSettings;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Airtable personal access token
    pub airtable_api_key: Option<String>,
    /// Airtable base holding the leads table
    pub airtable_base_id: Option<String>,
    pub airtable_table: String,
    pub airtable_api_url: String,
    /// Resend API key
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub notify_from: String,
    /// Recipient used when a lead leaves no email address
    pub notify_fallback_to: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            airtable_api_key: var("AIRTABLE_API_KEY"),
            airtable_base_id: var("AIRTABLE_BASE_ID"),
            airtable_table: var("AIRTABLE_TABLE").unwrap_or_else(|| "Leads".to_string()),
            airtable_api_url: var("AIRTABLE_API_URL")
                .unwrap_or_else(|| "https://api.airtable.com".to_string()),
            resend_api_key: var("RESEND_API_KEY"),
            resend_api_url: var("RESEND_API_URL")
                .unwrap_or_else(|| "https://api.resend.com".to_string()),
            notify_from: var("NOTIFY_FROM")
                .unwrap_or_else(|| "CRM Waitlist <onboarding@resend.dev>".to_string()),
            notify_fallback_to: var("NOTIFY_FALLBACK_TO")
                .unwrap_or_else(|| "notifications@yourcompany.com".to_string()),
        }
    }

    pub fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings {
            from: self.notify_from.clone(),
            fallback_to: self.notify_fallback_to.clone(),
        }
    }

    /// Names of credentials that are not configured
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.airtable_api_key.is_none() {
            missing.push("AIRTABLE_API_KEY");
        }
        if self.airtable_base_id.is_none() {
            missing.push("AIRTABLE_BASE_ID");
        }
        if self.resend_api_key.is_none() {
            missing.push("RESEND_API_KEY");
        }
        missing
    }
}
