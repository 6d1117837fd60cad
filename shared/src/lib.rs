// shared/src/lib.rs

/// Boxed native failure carried as the wrapped cause of an I/O error kind.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The failure kinds shared by every cache backend.
///
/// `CacheExpired` and `KeyNotFound` are terminal sentinels returned directly
/// from the fetch family; the remaining kinds wrap a backend's native I/O
/// failure, keeping the cause inspectable through `source()` while callers
/// match on the stable variant.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cache expired")]
    CacheExpired,
    #[error("key not found")]
    KeyNotFound,
    #[error("unable to save")]
    SaveFailed(#[source] BoxError),
    #[error("unable to delete")]
    DeleteFailed(#[source] BoxError),
    #[error("unable to flush")]
    FlushFailed(#[source] BoxError),
    #[error("unable to fetch")]
    FetchFailed(#[source] BoxError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_messages_are_stable() {
        assert_eq!(Error::CacheExpired.to_string(), "cache expired");
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }

    #[test]
    fn test_wrapped_kinds_keep_their_cause() {
        let cause = std::io::Error::other("disk detached");
        let err = Error::SaveFailed(Box::new(cause));

        assert_eq!(err.to_string(), "unable to save");

        let source = std::error::Error::source(&err).expect("cause should be attached");
        assert_eq!(source.to_string(), "disk detached");
    }

    #[test]
    fn test_sentinels_carry_no_cause() {
        assert!(std::error::Error::source(&Error::KeyNotFound).is_none());
        assert!(std::error::Error::source(&Error::CacheExpired).is_none());
    }
}
