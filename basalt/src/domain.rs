use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Absolute expiry of a stored entry, in unix seconds.
///
/// Computed once when the entry is saved and never recomputed on access, so
/// there is no sliding expiration. Every backend compares against the same
/// second-granularity wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expiry {
    /// The entry never expires (the requested lifetime was zero).
    Never,
    /// The entry expires once wall-clock time reaches this instant.
    At(i64),
}

impl Expiry {
    /// Convert a requested lifetime into an absolute expiry.
    ///
    /// Lifetimes truncate to whole seconds, so a sub-second lifetime lands
    /// on the current second and expires on the next observation.
    pub fn from_lifetime(lifetime: Duration) -> Self {
        if lifetime.is_zero() {
            Expiry::Never
        } else {
            Expiry::At(Utc::now().timestamp() + lifetime.as_secs() as i64)
        }
    }

    /// Whether the expiry has elapsed at unix time `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self {
            Expiry::Never => false,
            Expiry::At(at) => *at <= now,
        }
    }

    /// Whether the expiry has elapsed right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }
}

/// A stored value plus its expiry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: String,
    pub expires_at: Expiry,
}

impl CacheEntry {
    pub fn new(value: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            value: value.into(),
            expires_at: Expiry::from_lifetime(lifetime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lifetime_never_expires() {
        let expiry = Expiry::from_lifetime(Duration::ZERO);

        assert_eq!(expiry, Expiry::Never);
        assert!(!expiry.is_expired());
        assert!(!expiry.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_positive_lifetime_expires_in_the_future() {
        let now = Utc::now().timestamp();
        let expiry = Expiry::from_lifetime(Duration::from_secs(60));

        assert!(!expiry.is_expired());
        match expiry {
            Expiry::At(at) => assert!(at >= now + 60),
            Expiry::Never => panic!("expected an absolute expiry"),
        }
    }

    #[test]
    fn test_sub_second_lifetime_expires_on_next_observation() {
        let expiry = Expiry::from_lifetime(Duration::from_nanos(1));

        assert!(expiry.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        // an entry is expired the moment the clock reaches its instant
        assert!(Expiry::At(100).is_expired_at(100));
        assert!(Expiry::At(100).is_expired_at(101));
        assert!(!Expiry::At(100).is_expired_at(99));
    }

    #[test]
    fn test_entry_carries_value_and_expiry() {
        let entry = CacheEntry::new("bar", Duration::ZERO);

        assert_eq!(entry.value, "bar");
        assert_eq!(entry.expires_at, Expiry::Never);
    }
}
