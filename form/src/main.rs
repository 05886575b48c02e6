//! Waitlist signup form
//!
//! Collects a lead from the terminal, validates it locally, and posts it to
//! the configured submission endpoint. Field flags pre-fill the prompts.

mod client;
mod config;
mod error;
mod form;
mod schema;
mod terminal;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use client::SubmissionClient;
use config::FormConfig;
use form::LeadForm;
use schema::Field;
use terminal::Terminal;

#[derive(Parser, Debug)]
#[command(name = "waitlist-form", version, about = "Join the CRM waitlist")]
struct Cli {
    #[arg(long)]
    business_name: Option<String>,

    #[arg(long)]
    phone_number: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    website: Option<String>,

    /// One of: WhatsApp, Telegram, Messenger, WeChat, Signal, Other
    #[arg(long)]
    messaging_platform: Option<String>,

    #[arg(long)]
    business_sector: Option<String>,

    /// Submission URL; overrides FORM_ENDPOINT and FORMSPREE_FORM_ID
    #[arg(long)]
    endpoint: Option<String>,
}

impl Cli {
    fn values(&self) -> [(Field, Option<&String>); 6] {
        [
            (Field::BusinessName, self.business_name.as_ref()),
            (Field::PhoneNumber, self.phone_number.as_ref()),
            (Field::Email, self.email.as_ref()),
            (Field::Website, self.website.as_ref()),
            (Field::MessagingPlatform, self.messaging_platform.as_ref()),
            (Field::BusinessSector, self.business_sector.as_ref()),
        ]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the form prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FormConfig::from_env().with_endpoint_override(cli.endpoint.clone());
    if config.endpoint.is_none() {
        tracing::warn!("No submission endpoint configured; submissions will fail");
    }

    let client = SubmissionClient::new(config.endpoint.as_deref())?;
    let mut form = LeadForm::new(client);
    for (field, value) in cli.values() {
        if let Some(value) = value {
            form.set(field, value.as_str());
        }
    }

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    let delivered = terminal.run(&mut form).await?;
    tracing::info!(delivered, "Session finished");

    Ok(())
}
