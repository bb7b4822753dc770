use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

/// Checks a raw field value. Whitespace at either end is ignored and length
/// is counted in UTF-16 code units, as the browser reports it.
pub fn validate(field: ContactField, raw: &str) -> Result<(), &'static str> {
    let value = raw.trim();
    let length = value.encode_utf16().count();

    match field {
        ContactField::Name if value.is_empty() => Err("Name is required"),
        ContactField::Name if length < 2 => Err("Name must be at least 2 characters"),
        ContactField::Email if value.is_empty() => Err("Email is required"),
        ContactField::Email if !EMAIL_RE.is_match(value) => Err("Please enter a valid email"),
        ContactField::Subject if value.is_empty() => Err("Subject is required"),
        ContactField::Message if value.is_empty() => Err("Message is required"),
        ContactField::Message if length < 10 => Err("Message must be at least 10 characters"),
        _ => Ok(()),
    }
}

/// What a form group shows for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldVisual {
    #[default]
    Neutral,
    Success,
    Error(&'static str),
}

impl FieldVisual {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Success => Some("success"),
            Self::Error(_) => Some("error"),
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Typing drops the error and its message without re-checking; a success
    /// mark from an earlier blur stays.
    pub fn cleared(self) -> Self {
        match self {
            Self::Error(_) => Self::Neutral,
            other => other,
        }
    }
}

/// Validates and picks the visual; success is only shown for non-empty input.
pub fn field_visual(field: ContactField, raw: &str) -> FieldVisual {
    match validate(field, raw) {
        Err(message) => FieldVisual::Error(message),
        Ok(()) if !raw.trim().is_empty() => FieldVisual::Success,
        Ok(()) => FieldVisual::Neutral,
    }
}
