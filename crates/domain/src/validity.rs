use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RRSIG timestamps are 32-bit serial numbers (RFC 4034 §3.1.5, RFC 1982).
pub const SERIAL_MODULUS: i64 = 1 << 32;

/// Largest distance from the current time a serial can be unwrapped to.
pub const SERIAL_HALF_RANGE: i64 = 1 << 31;

/// Absolute signature validity interval in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub start: i64,
    pub end: i64,
}

impl ValidityWindow {
    /// Unwraps the truncated 32-bit inception/expiration fields against `now`:
    /// each becomes the value `field + k * 2^32` nearest to the current time.
    pub fn from_rrsig(inception: u32, expiration: u32, now: i64) -> Self {
        Self {
            start: unwrap_timestamp(inception, now),
            end: unwrap_timestamp(expiration, now),
        }
    }

    pub fn contains(&self, now: i64) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.start, 0)
    }

    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.end, 0)
    }
}

impl fmt::Display for ValidityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_utc(), self.end_utc()) {
            (Some(start), Some(end)) => write!(
                f,
                "{} -> {}",
                start.format("%Y-%m-%d %H:%M:%S"),
                end.format("%Y-%m-%d %H:%M:%S")
            ),
            _ => write!(f, "{} -> {}", self.start, self.end),
        }
    }
}

fn unwrap_timestamp(field: u32, now: i64) -> i64 {
    let field = i64::from(field);
    let wraps = (now - field + SERIAL_HALF_RANGE).div_euclid(SERIAL_MODULUS);
    field + wraps * SERIAL_MODULUS
}

pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}
