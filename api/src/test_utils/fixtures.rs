//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::NotificationSettings;
use crate::domain::entities::LeadSubmission;

/// The reference submission: required fields plus platform and sector
pub fn acme_submission() -> LeadSubmission {
    LeadSubmission {
        business_name: Some("Acme Co".to_string()),
        phone_number: Some("+15551234567".to_string()),
        email: Some(String::new()),
        website: Some(String::new()),
        messaging_platform: Some("WhatsApp".to_string()),
        business_sector: Some("Retail".to_string()),
    }
}

/// A submission carrying only the required fields
pub fn minimal_submission() -> LeadSubmission {
    LeadSubmission {
        business_name: Some("Corner Bakery".to_string()),
        phone_number: Some("+2348000000000".to_string()),
        ..Default::default()
    }
}

/// A submission with every field filled in
pub fn full_submission() -> LeadSubmission {
    LeadSubmission {
        business_name: Some("Globex".to_string()),
        phone_number: Some("+15550001111".to_string()),
        email: Some("hank@globex.test".to_string()),
        website: Some("https://globex.test".to_string()),
        messaging_platform: Some("Telegram".to_string()),
        business_sector: Some("Technology".to_string()),
    }
}

pub fn test_notification_settings() -> NotificationSettings {
    NotificationSettings {
        from: "CRM Waitlist <onboarding@resend.dev>".to_string(),
        fallback_to: "notifications@yourcompany.com".to_string(),
    }
}
