use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason an editor submission was rejected.
///
/// Rejections are silent towards the user: no entity is created or
/// modified and nothing is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    MissingDate,
    MissingTime,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::MissingDate => write!(f, "event date is required"),
            Self::MissingTime => write!(f, "event time is required"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `raw` and rejects it when nothing is left.
pub fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Trims optional free text; blank input becomes `None`.
pub fn normalize_optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
