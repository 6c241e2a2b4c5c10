//! High-level bundle of a driver session with wait-and-act conveniences.

use std::future::Future;

use serde_json::Value;

use crate::actions;
use crate::alert;
use crate::config::WaitConfig;
use crate::error::Result;
use crate::frame;
use crate::session::{Selector, Session};

/// A driver session paired with a default wait policy.
///
/// Every lookup method has a `*_within` variant taking an explicit
/// [`WaitConfig`] for calls that need their own budget.
#[derive(Debug, Clone)]
pub struct Automation<S> {
    session: S,
    wait: WaitConfig,
}

impl<S: Session> Automation<S> {
    /// Wrap a session with the crate-default wait policy.
    pub fn new(session: S) -> Self {
        Self::with_wait(session, WaitConfig::default())
    }

    /// Wrap a session with an explicit default wait policy.
    pub fn with_wait(session: S, wait: WaitConfig) -> Self {
        Self { session, wait }
    }

    /// The wrapped session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// The default wait policy.
    pub fn wait(&self) -> WaitConfig {
        self.wait
    }

    /// Navigate to a URL.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.session.goto(url).await
    }

    /// Execute a script in the page.
    pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.session.execute(script, args).await
    }

    pub async fn find_element(&self, selector: &Selector) -> Option<S::Element> {
        actions::find_element(&self.session, selector, &self.wait).await
    }

    pub async fn find_element_within(
        &self,
        selector: &Selector,
        wait: &WaitConfig,
    ) -> Option<S::Element> {
        actions::find_element(&self.session, selector, wait).await
    }

    pub async fn find_elements(&self, selector: &Selector) -> Vec<S::Element> {
        actions::find_elements(&self.session, selector, &self.wait).await
    }

    pub async fn find_elements_within(
        &self,
        selector: &Selector,
        wait: &WaitConfig,
    ) -> Vec<S::Element> {
        actions::find_elements(&self.session, selector, wait).await
    }

    pub async fn find_clickable(&self, selector: &Selector) -> Option<S::Element> {
        actions::find_clickable(&self.session, selector, &self.wait).await
    }

    pub async fn find_clickable_within(
        &self,
        selector: &Selector,
        wait: &WaitConfig,
    ) -> Option<S::Element> {
        actions::find_clickable(&self.session, selector, wait).await
    }

    /// Click an already-located element.
    pub async fn click(&self, element: Option<&S::Element>) -> bool {
        actions::click(&self.session, element).await
    }

    /// Wait for a clickable element matching `selector` and click it.
    pub async fn click_selector(&self, selector: &Selector) -> bool {
        let element = self.find_clickable(selector).await;
        actions::click(&self.session, element.as_ref()).await
    }

    /// Clear an already-located field and type into it.
    pub async fn type_text(&self, element: Option<&S::Element>, text: &str) -> bool {
        actions::type_text(element, text).await
    }

    /// Wait for a clickable field matching `selector` and type into it.
    pub async fn type_into(&self, selector: &Selector, text: &str) -> bool {
        let element = self.find_clickable(selector).await;
        actions::type_text(element.as_ref(), text).await
    }

    /// Select a dropdown option by visible text.
    pub async fn select_option(&self, element: Option<&S::Element>, text: &str) -> bool {
        actions::select_option(element, text).await
    }

    /// Run `scope` with the session switched into `frame`; the parent
    /// context is restored afterwards on every path.
    pub async fn with_frame<F, Fut, T>(&self, frame: Option<&S::Element>, scope: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        frame::with_frame(&self.session, frame, scope).await
    }

    pub async fn find_alert(&self) -> Option<S::Alert> {
        alert::find_alert(&self.session, &self.wait).await
    }

    pub async fn accept_alert(&self) -> bool {
        alert::accept_alert(&self.session, &self.wait).await
    }

    pub async fn accept_alert_with_text(&self, expected: &str) -> bool {
        alert::accept_alert_with_text(&self.session, expected, &self.wait).await
    }

    pub async fn dismiss_alert(&self) -> bool {
        alert::dismiss_alert(&self.session, &self.wait).await
    }
}
