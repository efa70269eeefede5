//! Presence check over the stored credential pair.

use crate::error::{Result, SessionError};
use crate::store::{ACCOUNT_KEY, SessionStore, TOKEN_KEY};

/// The (account, token) pair read from storage.
///
/// Both values are opaque strings. Nothing here inspects the token's
/// structure or expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInfo {
    pub account: String,
    pub token: String,
}

/// Reads the credential pair from the store.
///
/// Returns the pair only when both values are present and non-empty.
/// The store is never mutated, so repeated reads against an unchanged
/// store yield identical results.
///
/// # Errors
///
/// Returns [`SessionError::LoginInfoNotFound`] when either value is
/// missing or empty.
pub fn read_login_info(store: &impl SessionStore) -> Result<LoginInfo> {
    let account = store.get(ACCOUNT_KEY).filter(|v| !v.is_empty());
    let token = store.get(TOKEN_KEY).filter(|v| !v.is_empty());

    match (account, token) {
        (Some(account), Some(token)) => Ok(LoginInfo { account, token }),
        _ => Err(SessionError::LoginInfoNotFound),
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemoryStore;

    use super::*;

    fn populated() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(ACCOUNT_KEY, "alice").insert(TOKEN_KEY, "tok123");
        store
    }

    #[test]
    fn returns_pair_when_both_present() {
        let info = read_login_info(&populated()).unwrap();
        assert_eq!(
            info,
            LoginInfo {
                account: "alice".into(),
                token: "tok123".into(),
            }
        );
    }

    #[test]
    fn empty_store_is_not_found() {
        let err = read_login_info(&MemoryStore::new()).unwrap_err();
        assert_eq!(err, SessionError::LoginInfoNotFound);
    }

    #[test]
    fn missing_token_is_not_found() {
        let mut store = MemoryStore::new();
        store.insert(ACCOUNT_KEY, "alice");
        assert_eq!(
            read_login_info(&store).unwrap_err(),
            SessionError::LoginInfoNotFound
        );
    }

    #[test]
    fn missing_account_is_not_found() {
        let mut store = MemoryStore::new();
        store.insert(TOKEN_KEY, "tok123");
        assert_eq!(
            read_login_info(&store).unwrap_err(),
            SessionError::LoginInfoNotFound
        );
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let mut store = MemoryStore::new();
        store.insert(ACCOUNT_KEY, "").insert(TOKEN_KEY, "tok123");
        assert_eq!(
            read_login_info(&store).unwrap_err(),
            SessionError::LoginInfoNotFound
        );
    }

    #[test]
    fn repeated_reads_are_identical() {
        let store = populated();
        let first = read_login_info(&store).unwrap();
        let second = read_login_info(&store).unwrap();
        assert_eq!(first, second);
    }
}
