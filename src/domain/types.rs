//! Strongly-typed value objects used by domain entities.
//!
//! Catalog records carry these wrappers instead of raw strings and integers so
//! identifiers, facet values and video offsets are validated once, when a row
//! leaves the store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A ratio was requested with more hits than samples.
    #[error("positive count {positive} exceeds total {total}")]
    InvalidRatio { positive: usize, total: usize },
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Generates a trimmed, non-empty text wrapper tagged with its field name.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

non_empty_string_newtype!(ProductId, "Stable identifier of a catalog product.", "product_id");
non_empty_string_newtype!(ReviewId, "Identifier of a single review snippet.", "review_id");
non_empty_string_newtype!(
    VideoId,
    "Video identifier as used by the video platform.",
    "video_id"
);
non_empty_string_newtype!(ProductName, "Product display name.", "product name");
non_empty_string_newtype!(BrandName, "Brand facet value.", "brand");
non_empty_string_newtype!(CategoryName, "Category facet value.", "category");
non_empty_string_newtype!(ChannelName, "Channel facet value.", "channel");

non_negative_i32_newtype!(
    VideoTimestamp,
    "Offset in seconds into the source video where a product is discussed.",
    "timestamp_seconds"
);

/// Three-way classification of a review snippet.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// String representation used in persistence and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Interprets a stored label. Anything other than `positive` or
    /// `negative` counts as neutral.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("positive") => Self::Positive,
            Some("negative") => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Option<String>> for Sentiment {
    fn from(value: Option<String>) -> Self {
        Self::from_label(value.as_deref())
    }
}

/// Share of positive reviews, as a whole percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PositiveRate(u8);

impl PositiveRate {
    /// Rounds `100 * positive / total` half up. No samples yield zero.
    pub fn from_counts(positive: usize, total: usize) -> Result<Self, TypeConstraintError> {
        if positive > total {
            return Err(TypeConstraintError::InvalidRatio { positive, total });
        }
        if total == 0 {
            return Ok(Self(0));
        }
        let rate = (200 * positive + total) / (2 * total);
        Ok(Self(rate as u8))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Display for PositiveRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u8> for PositiveRate {
    fn eq(&self, other: &u8) -> bool {
        self.0 == *other
    }
}

/// Ordering applied to product listings.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Most recently added first.
    #[default]
    Newest,
    /// Most reviewed first; equal counts keep the newest-first order.
    MostReviewed,
}

impl ProductSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::MostReviewed => "most_reviewed",
        }
    }
}

impl Display for ProductSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ProductSort {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "newest" => Ok(Self::Newest),
            "most_reviewed" => Ok(Self::MostReviewed),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "product sort: {other}"
            ))),
        }
    }
}
