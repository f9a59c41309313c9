//! Line item identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemIdError {
    /// The input string is empty or only whitespace.
    #[error("item id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("item id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Opaque identifier of a line item, unique within a cart.
///
/// Identity is by exact string match. The id carries no meaning beyond
/// equality; product names and prices live on [`LineItem`](super::LineItem).
///
/// Ids read back from storage are accepted verbatim through the `From`
/// conversions. [`ItemId::parse`] is the validating path for ids that come
/// from user input.
///
/// ## Examples
///
/// ```
/// use arcana_cart_core::ItemId;
///
/// assert!(ItemId::parse("card-42").is_ok());
/// assert!(ItemId::parse("").is_err());
/// assert!(ItemId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Maximum length of a user-supplied item id.
    pub const MAX_LENGTH: usize = 256;

    /// Parse an `ItemId` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, ItemIdError> {
        if s.trim().is_empty() {
            return Err(ItemIdError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(ItemIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ItemId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
