// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Timestamp resolution.
//!
//! The clock is the only source of non-determinism in the encoder, so it
//! sits behind a trait and can be swapped out in tests.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;

use crate::error::EncodeError;

/// Source of wall-clock timestamps in nanoseconds since the Unix epoch.
pub trait Clock {
    fn now_nanos(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch");
        now.as_nanos() as i64
    }
}

/// Resolve an explicit RFC 3339 time to nanoseconds since the Unix epoch.
///
/// Whole seconds are multiplied by 1e9; fractional seconds in the input
/// are discarded. `2009-11-10T23:00:00Z` → `1257894000000000000`.
pub fn resolve_rfc3339(value: &str) -> Result<i64, EncodeError> {
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|source| {
        EncodeError::InvalidTime {
            value: value.to_string(),
            source,
        }
    })?;
    Ok(parsed.timestamp() * 1_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rfc3339_whole_seconds() {
        let nanos = resolve_rfc3339("2009-11-10T23:00:00Z").expect("parse");
        assert_eq!(nanos, 1_257_894_000_000_000_000);
    }

    #[test]
    fn test_resolve_rfc3339_discards_subseconds() {
        let nanos = resolve_rfc3339("2009-11-10T23:00:00.531Z").expect("parse");
        assert_eq!(nanos, 1_257_894_000_000_000_000);
    }

    #[test]
    fn test_resolve_rfc3339_honors_offset() {
        let nanos = resolve_rfc3339("2009-11-11T00:00:00+01:00").expect("parse");
        assert_eq!(nanos, 1_257_894_000_000_000_000);
    }

    #[test]
    fn test_resolve_rejects_unparseable_time() {
        match resolve_rfc3339("not-a-time") {
            Err(EncodeError::InvalidTime { value, .. }) => {
                assert_eq!(value, "not-a-time");
            }
            other => panic!("expected InvalidTime, got: {:?}", other),
        }
    }

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in nanoseconds
        let cutoff = 1_577_836_800_000_000_000;
        assert!(SystemClock.now_nanos() > cutoff);
    }
}
