use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Lowest person identifier known to the recommendation service
pub const PERSON_ID_MIN: i64 = 1;
/// Highest person identifier known to the recommendation service
pub const PERSON_ID_MAX: i64 = 50;

/// Name of the query parameter that carries the identifier between views
pub const PERSON_ID_QUERY_KEY: &str = "id";

/// Identifier of the customer whose catalog, history and recipe are shown.
///
/// Only obtainable through [`PersonId::validate`], so a value of this type is
/// always inside `PERSON_ID_MIN..=PERSON_ID_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    #[error("Person ID is missing")]
    Missing,

    #[error("Person ID must be a whole number, got \"{0}\"")]
    NotANumber(String),

    #[error("Person ID must be between 1 and 50, got {0}")]
    OutOfRange(i64),
}

impl PersonId {
    /// Validate raw input coming from the search box or the `id` query parameter.
    ///
    /// Empty input is reported as `Missing` before any numeric parse is attempted.
    pub fn validate(raw: &str) -> Result<Self, IdValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdValidationError::Missing);
        }

        let value = match trimmed.parse::<i64>() {
            Ok(v) => v,
            Err(_) if is_integer_literal(trimmed) => {
                // Too many digits for i64, but still an integer
                let saturated = if trimmed.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                };
                return Err(IdValidationError::OutOfRange(saturated));
            }
            Err(_) => return Err(IdValidationError::NotANumber(trimmed.to_string())),
        };

        if !(PERSON_ID_MIN..=PERSON_ID_MAX).contains(&value) {
            return Err(IdValidationError::OutOfRange(value));
        }

        Ok(Self(value as u8))
    }

    /// Same as [`PersonId::validate`], treating an absent parameter as `Missing`.
    pub fn validate_optional(raw: Option<&str>) -> Result<Self, IdValidationError> {
        raw.map_or(Err(IdValidationError::Missing), Self::validate)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Free-standing form of [`PersonId::validate`]
pub fn validate(raw: &str) -> Result<PersonId, IdValidationError> {
    PersonId::validate(raw)
}

impl FromStr for PersonId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
