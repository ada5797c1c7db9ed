// Identifier and timestamp primitives shared by every module.
//
// Purpose
// - Keep user and hotel identifiers apart at the type level.
// - Render timestamps the way API clients expect them (ISO-8601, millisecond precision, UTC).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("identifier must be a positive integer, got {0:?}")]
pub struct InvalidId(pub String);

fn parse_positive(raw: &str) -> Result<i64, InvalidId> {
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InvalidId(raw.to_string())),
    }
}

fn ensure_positive(value: i64) -> Result<i64, InvalidId> {
    if value > 0 {
        Ok(value)
    } else {
        Err(InvalidId(value.to_string()))
    }
}

/// Verified user identifier handed over by the upstream authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = InvalidId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_positive(raw).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HotelId(i64);

impl HotelId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for HotelId {
    type Error = InvalidId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        ensure_positive(value).map(Self)
    }
}

impl FromStr for HotelId {
    type Err = InvalidId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_positive(raw).map(Self)
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn format_iso_millis(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` target for timestamp fields.
pub fn serialize_iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso_millis(value))
}
