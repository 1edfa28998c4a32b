//! Process-wide default API key.
//!
//! Prefer configuring a key on [`EasyPostConfig`](crate::EasyPostConfig) or
//! passing one per call. The default is read only by the request dispatcher,
//! and only when neither of those is present.

use std::sync::{PoisonError, RwLock};

use crate::config::ApiKey;

static DEFAULT_API_KEY: RwLock<Option<ApiKey>> = RwLock::new(None);

/// Sets the process-wide default API key.
///
/// Not intended for programs that talk to the API on behalf of several
/// accounts at once; give each client its own key instead.
pub fn set_default_api_key(key: ApiKey) {
    *DEFAULT_API_KEY.write().unwrap_or_else(PoisonError::into_inner) = Some(key);
}

/// Removes the process-wide default API key.
pub fn clear_default_api_key() {
    *DEFAULT_API_KEY.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Returns the process-wide default API key in effect right now, if any.
#[must_use]
pub fn default_api_key() -> Option<ApiKey> {
    DEFAULT_API_KEY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the default key is global and tests run in parallel.
    #[test]
    fn test_default_api_key_set_and_clear_survive_poisoning() {
        set_default_api_key(ApiKey::new("default-key").unwrap());
        assert_eq!(
            default_api_key().map(|k| k.as_ref().to_string()),
            Some("default-key".to_string())
        );

        clear_default_api_key();
        assert!(default_api_key().is_none());

        let poisoner = std::thread::spawn(|| {
            let _guard = DEFAULT_API_KEY
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            panic!("poison the default key lock");
        });
        assert!(poisoner.join().is_err());
        assert!(DEFAULT_API_KEY.is_poisoned());

        set_default_api_key(ApiKey::new("after-poison").unwrap());
        assert_eq!(
            default_api_key().map(|k| k.as_ref().to_string()),
            Some("after-poison".to_string())
        );

        clear_default_api_key();
        assert!(default_api_key().is_none());
    }
}
