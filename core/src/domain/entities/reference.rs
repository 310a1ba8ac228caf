//! Reference codes quoted back to reporters for later correlation.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of random characters in a web reference code
pub const WEB_REFERENCE_RANDOM_LENGTH: usize = 9;

/// Random characters after the timestamp in an SMS reference code
pub const SMS_REFERENCE_RANDOM_LENGTH: usize = 4;

/// Short identifier attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// `DR-<year>-<9 random base36 characters>` for web submissions
    pub fn for_web(now: DateTime<Utc>) -> Self {
        Self(format!("DR-{}-{}", now.year(), random_base36(WEB_REFERENCE_RANDOM_LENGTH)))
    }

    /// `DR-SMS-<epoch millis in base36>-<4 random base36>` for inbound SMS
    ///
    /// Webhooks arriving in the same millisecond still get distinct codes.
    pub fn for_sms(now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis().max(0) as u64;
        Self(format!(
            "DR-SMS-{}-{}",
            to_base36(millis),
            random_base36(SMS_REFERENCE_RANDOM_LENGTH)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn random_base36(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())] as char)
        .collect()
}

/// Upper-case base36 rendering of an unsigned integer
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
