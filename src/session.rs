//! The seam between this crate and the underlying automation driver.
//!
//! The driver session is an opaque handle supplied by the caller; this
//! module defines the minimal surface the wait-and-act operations need from
//! it. Backends implement these traits for a concrete driver (see
//! [`crate::backend`]).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;

/// Locator for finding elements in a page.
///
/// Each input kind is an explicit variant; there is no runtime dispatch on
/// the shape of a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector.
    Css(String),
    /// Element id attribute.
    Id(String),
    /// Form-control name attribute.
    Name(String),
    /// Tag name.
    Tag(String),
    /// XPath expression.
    XPath(String),
    /// Anchor with this exact text.
    LinkText(String),
    /// Anchor containing this text.
    PartialLinkText(String),
}

impl Selector {
    pub fn css(value: impl Into<String>) -> Self {
        Self::Css(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::XPath(value.into())
    }

    pub fn link_text(value: impl Into<String>) -> Self {
        Self::LinkText(value.into())
    }

    pub fn partial_link_text(value: impl Into<String>) -> Self {
        Self::PartialLinkText(value.into())
    }

    /// The locator strategy name, as the WebDriver protocol spells it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Css(_) => "css selector",
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::Tag(_) => "tag name",
            Self::XPath(_) => "xpath",
            Self::LinkText(_) => "link text",
            Self::PartialLinkText(_) => "partial link text",
        }
    }

    /// The query string of the locator.
    pub fn value(&self) -> &str {
        match self {
            Self::Css(value)
            | Self::Id(value)
            | Self::Name(value)
            | Self::Tag(value)
            | Self::XPath(value)
            | Self::LinkText(value)
            | Self::PartialLinkText(value) => value,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.value())
    }
}

/// A browser-automation session.
///
/// The session is owned by the caller; this crate never opens or closes it.
#[async_trait]
pub trait Session: Send + Sync {
    type Element: ElementHandle;
    type Alert: AlertHandle;

    /// Navigate the session to a URL.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Find the first element matching the selector.
    async fn find(&self, selector: &Selector) -> Result<Self::Element>;

    /// Find every element matching the selector.
    async fn find_all(&self, selector: &Selector) -> Result<Vec<Self::Element>>;

    /// Execute a script in the page. Element handles may be passed as
    /// arguments via [`ElementHandle::script_arg`].
    async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value>;

    /// Switch the session context into a child frame.
    async fn enter_frame(&self, frame: &Self::Element) -> Result<()>;

    /// Restore the session context to the parent frame.
    async fn enter_parent_frame(&self) -> Result<()>;

    /// The currently active modal alert.
    async fn active_alert(&self) -> Result<Self::Alert>;
}

/// A located element.
#[async_trait]
pub trait ElementHandle: Send + Sync {
    /// Click the element through the driver's native interaction.
    async fn click(&self) -> Result<()>;

    /// Clear the element's value.
    async fn clear(&self) -> Result<()>;

    /// Send keystrokes to the element.
    async fn send_keys(&self, text: &str) -> Result<()>;

    /// The element's current value attribute, `None` when absent.
    async fn value(&self) -> Result<Option<String>>;

    /// Whether the element is displayed and enabled.
    async fn is_interactable(&self) -> Result<bool>;

    /// Select the dropdown option with this exact visible text.
    async fn select_visible_text(&self, text: &str) -> Result<()>;

    /// Serialized form of the handle, usable as a script argument.
    fn script_arg(&self) -> Result<Value>;
}

/// A handle to an active modal alert.
#[async_trait]
pub trait AlertHandle: Send + Sync {
    /// The alert's message text.
    async fn text(&self) -> Result<String>;

    /// Accept the alert.
    async fn accept(&self) -> Result<()>;

    /// Dismiss the alert.
    async fn dismiss(&self) -> Result<()>;
}
