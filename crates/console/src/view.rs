//! Signed-in view updates and the post-sign-in extension point.

use console_session::{LoginInfo, Result, SessionStore};
use tracing::debug;

use crate::reader::SessionReader;
use crate::ui::{ACCOUNT_NAME_ID, SIGN_BTN_ID, UiTree};

/// Label shown on the sign-in control once a session is present.
pub const SIGNED_IN_LABEL: &str = "Sign out";

/// Extension point invoked after the signed-in view has been updated.
///
/// The production behavior behind this hook is owned by another team and
/// not implemented here. [`LogOnly`] keeps that gap visible instead of
/// silently doing nothing.
pub trait SignedInHook {
    fn on_signed_in(&mut self, info: &LoginInfo);
}

/// Default hook: emits the placeholder diagnostic and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnly;

impl SignedInHook for LogOnly {
    fn on_signed_in(&mut self, info: &LoginInfo) {
        debug!(target = "console", account = %info.account, "auto click not implemented yet");
    }
}

/// Reflects the stored session into the page.
pub struct ViewUpdater<'a, S, U, H = LogOnly> {
    store: &'a S,
    ui: &'a mut U,
    hook: H,
}

impl<'a, S, U> ViewUpdater<'a, S, U> {
    pub fn new(store: &'a S, ui: &'a mut U) -> Self {
        Self {
            store,
            ui,
            hook: LogOnly,
        }
    }
}

impl<'a, S, U, H> ViewUpdater<'a, S, U, H> {
    /// Replaces the post-update hook.
    pub fn with_hook<H2: SignedInHook>(self, hook: H2) -> ViewUpdater<'a, S, U, H2> {
        ViewUpdater {
            store: self.store,
            ui: self.ui,
            hook,
        }
    }
}

impl<S: SessionStore, U: UiTree, H: SignedInHook> ViewUpdater<'_, S, U, H> {
    /// Reads the session and updates the signed-in view.
    ///
    /// On success the sign-in control is relabeled to
    /// [`SIGNED_IN_LABEL`], the account-name element receives the
    /// account identifier, and the hook runs. There is no recovery
    /// path: a missing session propagates to the caller (after the
    /// reader's fallback click) and the view is left untouched.
    pub fn refresh(&mut self) -> Result<LoginInfo> {
        let info = SessionReader::new(self.store, self.ui).read()?;
        self.ui.set_text(SIGN_BTN_ID, SIGNED_IN_LABEL)?;
        self.ui.set_text(ACCOUNT_NAME_ID, &info.account)?;
        self.hook.on_signed_in(&info);
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use console_session::{ACCOUNT_KEY, MemoryStore, SessionError, TOKEN_KEY};

    use crate::ui::FakePage;

    use super::*;

    fn signed_in_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(ACCOUNT_KEY, "bob").insert(TOKEN_KEY, "tok456");
        store
    }

    fn full_page() -> FakePage {
        FakePage::new()
            .with_element(SIGN_BTN_ID)
            .with_element(ACCOUNT_NAME_ID)
    }

    #[derive(Default)]
    struct Recording {
        accounts: Vec<String>,
    }

    impl SignedInHook for Recording {
        fn on_signed_in(&mut self, info: &LoginInfo) {
            self.accounts.push(info.account.clone());
        }
    }

    #[test]
    fn refresh_updates_labels_and_runs_hook() {
        let store = signed_in_store();
        let mut page = full_page();
        let mut updater =
            ViewUpdater::new(&store, &mut page).with_hook(Recording::default());

        let info = updater.refresh().unwrap();
        assert_eq!(info.account, "bob");
        assert_eq!(updater.hook.accounts, ["bob"]);

        assert_eq!(page.text(SIGN_BTN_ID), Some(SIGNED_IN_LABEL));
        assert_eq!(page.text(ACCOUNT_NAME_ID), Some("bob"));
        assert!(page.clicks().is_empty());
    }

    #[test]
    fn refresh_propagates_missing_session_and_leaves_view_untouched() {
        let store = MemoryStore::new();
        let mut page = full_page();

        let err = ViewUpdater::new(&store, &mut page).refresh().unwrap_err();
        assert_eq!(err, SessionError::LoginInfoNotFound);

        assert_eq!(page.text(SIGN_BTN_ID), Some(""));
        assert_eq!(page.text(ACCOUNT_NAME_ID), Some(""));
        assert_eq!(page.clicks(), [SIGN_BTN_ID]);
    }

    #[test]
    fn refresh_fails_when_account_name_element_is_missing() {
        let store = signed_in_store();
        let mut page = FakePage::new().with_element(SIGN_BTN_ID);

        let err = ViewUpdater::new(&store, &mut page).refresh().unwrap_err();
        assert_eq!(
            err,
            SessionError::ElementNotFound {
                id: ACCOUNT_NAME_ID.into()
            }
        );
    }
}
