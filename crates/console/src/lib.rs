//! Console page glue: sign-in fallback and signed-in view updates.
//!
//! Builds on `console_session` by adding the page-side collaborators:
//! a [`UiTree`] boundary over the element tree, the sign-in trigger used
//! as a fallback when no login info is stored, and the [`ViewUpdater`]
//! that reflects a present session into the page. Everything is
//! synchronous and single-pass; there is no retry or recovery path.

pub mod reader;
pub mod trigger;
pub mod ui;
pub mod view;

pub use reader::SessionReader;
pub use trigger::trigger_sign_in;
pub use ui::{ACCOUNT_NAME_ID, FakePage, SIGN_BTN_ID, UiTree};
pub use view::{LogOnly, SIGNED_IN_LABEL, SignedInHook, ViewUpdater};
