//! Strongly-typed contact id
//!
//! Ids are positive integers assigned by the store. The newtype keeps them
//! from being mixed up with list positions or counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Identifier of a contact within the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(NonZeroU64);

impl ContactId {
    /// The id given to the first contact of an empty collection
    pub const FIRST: ContactId = ContactId(NonZeroU64::MIN);

    /// Create an id from a raw value, rejecting zero
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Get the raw value
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// The id following this one, or `None` once `u64::MAX` is reached
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when text is not a positive integer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContactIdError(String);

impl fmt::Display for ParseContactIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a positive number", self.0)
    }
}

impl std::error::Error for ParseContactIdError {}

impl FromStr for ContactId {
    type Err = ParseContactIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseContactIdError(s.trim().to_string()))
    }
}
