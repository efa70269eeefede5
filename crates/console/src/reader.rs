//! Login-info read with sign-in fallback.

use console_session::{LoginInfo, Result, SessionError, SessionStore, read_login_info};
use tracing::info;

use crate::trigger::trigger_sign_in;
use crate::ui::UiTree;

/// Reads the credential pair, falling back to the sign-in control when
/// the pair is missing.
///
/// This couples the read with its remediation: a failed presence check
/// first fires exactly one simulated click on the sign-in control, then
/// surfaces [`SessionError::LoginInfoNotFound`] to the caller anyway.
/// The click happens before the error, so callers observing the failure
/// may already have a login flow under way.
pub struct SessionReader<'a, S, U> {
    store: &'a S,
    ui: &'a mut U,
}

impl<'a, S, U> SessionReader<'a, S, U> {
    pub fn new(store: &'a S, ui: &'a mut U) -> Self {
        Self { store, ui }
    }
}

impl<S: SessionStore, U: UiTree> SessionReader<'_, S, U> {
    /// Reads the pair, triggering the sign-in flow when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginInfoNotFound`] after firing the
    /// trigger, or [`SessionError::ElementNotFound`] when the sign-in
    /// control itself is missing from the page.
    pub fn read(&mut self) -> Result<LoginInfo> {
        match read_login_info(self.store) {
            Ok(info) => Ok(info),
            Err(SessionError::LoginInfoNotFound) => {
                info!(target = "console", "no stored login info, triggering sign-in");
                trigger_sign_in(self.ui)?;
                Err(SessionError::LoginInfoNotFound)
            }
            Err(err) => Err(err),
        }
    }
}
