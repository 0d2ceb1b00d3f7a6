//! Feedback Context - Value Objects

use serde::{Deserialize, Serialize};

use super::FeedbackError;

/// A star rating between 1 and 5, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, FeedbackError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(FeedbackError::InvalidRating(value as i64));
        }
        Ok(Self(value))
    }

    /// Accepts the raw wire value (any integer) so that out-of-range input
    /// reports the offending number instead of a deserialization failure.
    pub fn from_wire(value: i64) -> Result<Self, FeedbackError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or(FeedbackError::InvalidRating(value))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An optional free-text comment, capped at 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(String);

impl Comment {
    pub const MAX_CHARS: usize = 1000;

    pub fn new(text: impl Into<String>) -> Result<Self, FeedbackError> {
        let text = text.into();
        let chars = text.chars().count();
        if chars > Self::MAX_CHARS {
            return Err(FeedbackError::CommentTooLong {
                chars,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
