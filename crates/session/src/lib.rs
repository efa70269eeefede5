//! Login-info reading over an injected browser storage boundary.
//!
//! The browser's persistent key-value store is modeled as the
//! [`SessionStore`] trait so the presence checks can run against an
//! in-memory map or real captured storage state instead of a live page.
//! The stored pair is opaque: no format validation, no expiry handling,
//! no refresh. Population of the store is entirely external.

pub mod error;
pub mod reader;
pub mod store;

pub use error::{Result, SessionError};
pub use reader::{LoginInfo, read_login_info};
pub use store::{ACCOUNT_KEY, MemoryStore, SessionStore, StateFileStore, TOKEN_KEY};
