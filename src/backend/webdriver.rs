//! Selenium-protocol binding via `thirtyfour`.
//!
//! Wraps an already-connected [`thirtyfour::WebDriver`] behind the crate's
//! session traits. The caller owns the driver lifecycle: starting the
//! browser, connecting, and quitting the session all happen outside this
//! crate.

use async_trait::async_trait;
use serde_json::Value;
use thirtyfour::components::SelectElement;
use thirtyfour::error::WebDriverError;
use thirtyfour::{By, WebDriver, WebElement};

use crate::error::{Error, Result};
use crate::session::{AlertHandle, ElementHandle, Selector, Session};

impl From<WebDriverError> for Error {
    fn from(error: WebDriverError) -> Self {
        Error::Driver(error.to_string())
    }
}

fn to_by(selector: &Selector) -> By {
    match selector {
        Selector::Css(value) => By::Css(value.clone()),
        Selector::Id(value) => By::Id(value.clone()),
        Selector::Name(value) => By::Name(value.clone()),
        Selector::Tag(value) => By::Tag(value.clone()),
        Selector::XPath(value) => By::XPath(value.clone()),
        Selector::LinkText(value) => By::LinkText(value.clone()),
        Selector::PartialLinkText(value) => By::PartialLinkText(value.clone()),
    }
}

/// A `thirtyfour` session usable with this crate's operations.
#[derive(Clone)]
pub struct WebDriverSession {
    driver: WebDriver,
}

impl WebDriverSession {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// The wrapped driver, for operations outside this crate's surface.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }
}

#[async_trait]
impl Session for WebDriverSession {
    type Element = WebDriverElement;
    type Alert = WebDriverAlert;

    async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn find(&self, selector: &Selector) -> Result<Self::Element> {
        let element = self.driver.find(to_by(selector)).await?;
        Ok(WebDriverElement { element })
    }

    async fn find_all(&self, selector: &Selector) -> Result<Vec<Self::Element>> {
        let elements = self.driver.find_all(to_by(selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| WebDriverElement { element })
            .collect())
    }

    async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        let ret = self.driver.execute(script, args).await?;
        Ok(ret.json().clone())
    }

    async fn enter_frame(&self, frame: &Self::Element) -> Result<()> {
        frame.element.clone().enter_frame().await?;
        Ok(())
    }

    async fn enter_parent_frame(&self) -> Result<()> {
        self.driver.enter_parent_frame().await?;
        Ok(())
    }

    async fn active_alert(&self) -> Result<Self::Alert> {
        // Reading the text doubles as the protocol's presence check.
        self.driver.get_alert_text().await?;
        Ok(WebDriverAlert {
            driver: self.driver.clone(),
        })
    }
}

/// An element handle bound to a `thirtyfour` session.
#[derive(Clone)]
pub struct WebDriverElement {
    element: WebElement,
}

impl WebDriverElement {
    /// The wrapped element, for operations outside this crate's surface.
    pub fn element(&self) -> &WebElement {
        &self.element
    }
}

#[async_trait]
impl ElementHandle for WebDriverElement {
    async fn click(&self) -> Result<()> {
        self.element.click().await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.element.clear().await?;
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        self.element.send_keys(text).await?;
        Ok(())
    }

    async fn value(&self) -> Result<Option<String>> {
        Ok(self.element.attr("value").await?)
    }

    async fn is_interactable(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await? && self.element.is_enabled().await?)
    }

    async fn select_visible_text(&self, text: &str) -> Result<()> {
        let select = SelectElement::new(&self.element).await?;
        select.select_by_exact_text(text).await?;
        Ok(())
    }

    fn script_arg(&self) -> Result<Value> {
        Ok(self.element.to_json()?)
    }
}

/// Handle to the active alert of a `thirtyfour` session.
#[derive(Clone)]
pub struct WebDriverAlert {
    driver: WebDriver,
}

#[async_trait]
impl AlertHandle for WebDriverAlert {
    async fn text(&self) -> Result<String> {
        Ok(self.driver.get_alert_text().await?)
    }

    async fn accept(&self) -> Result<()> {
        self.driver.accept_alert().await?;
        Ok(())
    }

    async fn dismiss(&self) -> Result<()> {
        self.driver.dismiss_alert().await?;
        Ok(())
    }
}
