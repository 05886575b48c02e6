//! Lead form schema
//!
//! Field rules for the waitlist form, checked before anything leaves the
//! machine. Length and email rules come from `validator`; the choice lists
//! are checked by hand.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::Validate;

/// Choices offered for the preferred messaging platform
pub const MESSAGING_PLATFORMS: [&str; 6] = [
    "WhatsApp",
    "Telegram",
    "Messenger",
    "WeChat",
    "Signal",
    "Other",
];

/// Choices offered for the business sector
pub const BUSINESS_SECTORS: [&str; 10] = [
    "Technology",
    "Healthcare",
    "Finance",
    "Retail",
    "Manufacturing",
    "Education",
    "Real Estate",
    "Hospitality",
    "Professional Services",
    "Other",
];

/// The six form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    BusinessName,
    PhoneNumber,
    Email,
    Website,
    MessagingPlatform,
    BusinessSector,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::BusinessName,
        Field::PhoneNumber,
        Field::Email,
        Field::Website,
        Field::MessagingPlatform,
        Field::BusinessSector,
    ];

    /// Wire name, as sent in the JSON body
    pub fn name(self) -> &'static str {
        match self {
            Field::BusinessName => "businessName",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
            Field::Website => "website",
            Field::MessagingPlatform => "messagingPlatform",
            Field::BusinessSector => "businessSector",
        }
    }

    /// Human label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::BusinessName => "Business Name",
            Field::PhoneNumber => "Phone Number",
            Field::Email => "Email Address",
            Field::Website => "Business Website",
            Field::MessagingPlatform => "Preferred Messaging Platform",
            Field::BusinessSector => "Business Sector",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::BusinessName | Field::PhoneNumber)
    }

    /// Fixed choice list, for the two select fields
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Field::MessagingPlatform => Some(&MESSAGING_PLATFORMS),
            Field::BusinessSector => Some(&BUSINESS_SECTORS),
            _ => None,
        }
    }

    fn from_key(key: &str) -> Option<Field> {
        match key {
            "business_name" | "businessName" => Some(Field::BusinessName),
            "phone_number" | "phoneNumber" => Some(Field::PhoneNumber),
            "email" => Some(Field::Email),
            "website" => Some(Field::Website),
            "messaging_platform" | "messagingPlatform" => Some(Field::MessagingPlatform),
            "business_sector" | "businessSector" => Some(Field::BusinessSector),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level error messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Keep the first message reported for a field
    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw values as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadInput {
    pub business_name: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub messaging_platform: String,
    pub business_sector: String,
}

impl LeadInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BusinessName => &self.business_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Website => &self.website,
            Field::MessagingPlatform => &self.messaging_platform,
            Field::BusinessSector => &self.business_sector,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::BusinessName => self.business_name = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Email => self.email = value,
            Field::Website => self.website = value,
            Field::MessagingPlatform => self.messaging_platform = value,
            Field::BusinessSector => self.business_sector = value,
        }
    }

    /// Check every field and produce the JSON body on success.
    ///
    /// All values are trimmed first. Empty optional fields are allowed and
    /// are sent as `""`.
    pub fn validate(&self) -> Result<LeadPayload, FieldErrors> {
        let checked = CheckedLead {
            business_name: self.business_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: non_empty(&self.email),
            website: non_empty(&self.website),
            messaging_platform: non_empty(&self.messaging_platform),
            business_sector: non_empty(&self.business_sector),
        };

        let mut errors = FieldErrors::default();

        if checked.business_name.is_empty() {
            errors.add(Field::BusinessName, "Business name is required");
        }
        if checked.phone_number.is_empty() {
            errors.add(Field::PhoneNumber, "Phone number is required");
        }

        if let Err(report) = checked.validate() {
            for (key, failures) in report.field_errors() {
                let Some(field) = Field::from_key(&key) else {
                    continue;
                };
                if let Some(failure) = failures.first() {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| failure.code.to_string());
                    errors.add(field, message);
                }
            }
        }

        if let Some(email) = &checked.email {
            if !has_dotted_domain(email) {
                errors.add(Field::Email, "Invalid email address");
            }
        }

        if let Some(platform) = &checked.messaging_platform {
            if !MESSAGING_PLATFORMS.contains(&platform.as_str()) {
                errors.add(
                    Field::MessagingPlatform,
                    "Select a supported messaging platform",
                );
            }
        }
        if let Some(sector) = &checked.business_sector {
            if !BUSINESS_SECTORS.contains(&sector.as_str()) {
                errors.add(Field::BusinessSector, "Select a supported business sector");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeadPayload {
            business_name: checked.business_name,
            phone_number: checked.phone_number,
            email: checked.email.unwrap_or_default(),
            website: checked.website.unwrap_or_default(),
            messaging_platform: checked.messaging_platform.unwrap_or_default(),
            business_sector: checked.business_sector.unwrap_or_default(),
        })
    }
}

/// Domain must have at least two non-empty labels, as in `acme.test`
fn has_dotted_domain(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.') && !domain.split('.').any(str::is_empty),
        None => false,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed values with the length and format rules attached
#[derive(Debug, Validate)]
struct CheckedLead {
    #[validate(length(max = 200, message = "Business name must be at most 200 characters"))]
    business_name: String,

    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"))]
    phone_number: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    email: Option<String>,

    #[validate(length(max = 500, message = "Website must be at most 500 characters"))]
    website: Option<String>,

    #[validate(length(max = 100, message = "Select a supported messaging platform"))]
    messaging_platform: Option<String>,

    #[validate(length(max = 200, message = "Select a supported business sector"))]
    business_sector: Option<String>,
}

/// JSON body sent to the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub business_name: String,
    pub phone_number: String,
    pub email: String,
    pub website: String,
    pub messaging_platform: String,
    pub business_sector: String,
}
