//! A stored value together with its deadline.

use std::time::{Duration, Instant};

/// A cache entry.
///
/// `expires_at == None` means the entry never expires.
#[derive(Debug, Clone)]
pub struct Item<V> {
    pub value: V,
    pub expires_at: Option<Instant>,
}

impl<V> Item<V> {
    /// Build an item stamped at `now`. A zero `ttl` yields an item that never expires.
    ///
    /// A deadline beyond what `Instant` can represent is treated as never.
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl)
        };

        Self { value, expires_at }
    }

    pub fn never_expires(&self) -> bool {
        self.expires_at.is_none()
    }

    /// The deadline is exclusive: an item read exactly at `expires_at` is still valid.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now > deadline,
            None => false,
        }
    }

    /// Time left before expiry, `None` if the item never expires.
    ///
    /// Returns `Some(Duration::ZERO)` once the deadline has been reached.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ttl_never_expires() {
        let now = Instant::now();
        let item = Item::new("v", Duration::ZERO, now);

        assert!(item.never_expires());
        assert!(!item.is_expired_at(now + Duration::from_secs(86_400 * 365)));
        assert_eq!(item.remaining(now), None);
    }

    #[test]
    fn test_deadline_is_exclusive() {
        let now = Instant::now();
        let item = Item::new(1, Duration::from_millis(50), now);
        let deadline = now + Duration::from_millis(50);

        assert!(!item.is_expired_at(deadline));
        assert!(item.is_expired_at(deadline + Duration::from_nanos(1)));
    }

    #[test]
    fn test_remaining() {
        let now = Instant::now();
        let item = Item::new(1, Duration::from_secs(10), now);

        assert_eq!(
            item.remaining(now + Duration::from_secs(4)),
            Some(Duration::from_secs(6))
        );
        assert_eq!(
            item.remaining(now + Duration::from_secs(11)),
            Some(Duration::ZERO)
        );
    }
}
