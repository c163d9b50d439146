//! Timestamp-derived record ids.

use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out millisecond timestamps that never repeat within the process.
///
/// Two calls inside the same millisecond (or a clock that steps backwards) get
/// `last + 1` instead of the raw clock value.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, now_ms: i64) -> i64 {
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now_ms.max(prev + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_clock_when_it_advances() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(2_000), 2_000);
    }

    #[test]
    fn test_same_millisecond_is_bumped() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(5_000), 5_000);
        assert_eq!(ids.next(5_000), 5_001);
        assert_eq!(ids.next(5_000), 5_002);
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(9_000), 9_000);
        assert_eq!(ids.next(8_000), 9_001);
    }
}
