//! Simulated activation of the sign-in control.

use console_session::Result;

use crate::ui::{SIGN_BTN_ID, UiTree};

/// Simulates one user activation on the sign-in control.
///
/// Pure side effect with no return value beyond success. The control is
/// assumed to exist; its absence propagates as
/// [`SessionError::ElementNotFound`].
///
/// [`SessionError::ElementNotFound`]: console_session::SessionError::ElementNotFound
pub fn trigger_sign_in(ui: &mut impl UiTree) -> Result<()> {
    ui.click(SIGN_BTN_ID)
}
