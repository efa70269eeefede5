//! Injected boundary over the page's element tree.

use std::collections::HashMap;

use console_session::{Result, SessionError};

/// Element id of the sign-in control.
pub const SIGN_BTN_ID: &str = "signBtn";

/// Element id of the account-name display element.
pub const ACCOUNT_NAME_ID: &str = "accountName";

/// Mutable view of the page's element tree.
///
/// Lookup failures surface as [`SessionError::ElementNotFound`] instead
/// of the null dereference a direct DOM lookup would produce.
pub trait UiTree {
    /// Sets the text content of the element with the given id.
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Simulates a user activation on the element with the given id.
    fn click(&mut self, id: &str) -> Result<()>;
}

/// In-memory page double recording text mutations and clicks.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    elements: HashMap<String, String>,
    clicks: Vec<String>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element with empty text content.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), String::new());
        self
    }

    /// Returns the text content of an element, if the element exists.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    /// Returns the element ids clicked so far, in order.
    pub fn clicks(&self) -> &[String] {
        &self.clicks
    }
}

impl UiTree for FakePage {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = text.to_string();
                Ok(())
            }
            None => Err(SessionError::ElementNotFound { id: id.to_string() }),
        }
    }

    fn click(&mut self, id: &str) -> Result<()> {
        if !self.elements.contains_key(id) {
            return Err(SessionError::ElementNotFound { id: id.to_string() });
        }
        self.clicks.push(id.to_string());
        Ok(())
    }
}
