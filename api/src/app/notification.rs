//! Notification email rendering
//!
//! Builds the operator-facing summary of a new lead.

use chrono::{DateTime, Utc};

use crate::domain::entities::Lead;
use crate::domain::ports::NotificationEmail;

/// Sender and fallback recipient for lead notifications
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub from: String,
    /// Used when the lead did not leave an email address
    pub fallback_to: String,
}

/// Render the notification for a stored lead.
///
/// Business name and phone are always listed; the optional fields only
/// when the lead filled them in.
pub fn compose_notification(
    lead: &Lead,
    submitted_at: DateTime<Utc>,
    settings: &NotificationSettings,
) -> NotificationEmail {
    let subject = format!("New CRM Waitlist Signup: {}", lead.business_name());

    let mut items = vec![
        list_item("Business Name", lead.business_name()),
        list_item("Phone Number", lead.phone_number()),
    ];
    let optional = [
        ("Email", lead.email()),
        ("Website", lead.website()),
        ("Messaging Platform", lead.messaging_platform()),
        ("Business Sector", lead.business_sector()),
    ];
    items.extend(
        optional
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| list_item(label, value)),
    );

    let html = format!(
        "<h1>{}</h1>\n<h2>Contact Details</h2>\n<ul>\n{}\n</ul>\n<p><em>Submitted on {}</em></p>\n",
        escape_html(&subject),
        items.join("\n"),
        submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    let to = if lead.email().is_empty() {
        settings.fallback_to.clone()
    } else {
        lead.email().to_string()
    };

    NotificationEmail {
        from: settings.from.clone(),
        to,
        subject,
        html,
    }
}

fn list_item(label: &str, value: &str) -> String {
    format!("  <li><strong>{}:</strong> {}</li>", label, escape_html(value))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
