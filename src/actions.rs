//! Element lookup and null-safe action adapters.
//!
//! Lookups poll the driver through [`crate::wait::resolve`] and return an
//! absence marker on timeout. Actions take `Option`al handles so the result
//! of a lookup can be passed straight in; a missing handle is failure, not
//! a panic or an error.

use tracing::debug;

use crate::config::WaitConfig;
use crate::session::{ElementHandle, Selector, Session};
use crate::wait;

/// Script used when the driver rejects a native click.
const CLICK_FALLBACK_SCRIPT: &str = "arguments[0].click();";

/// Wait for the first element matching `selector` to be present.
pub async fn find_element<S: Session>(
    session: &S,
    selector: &Selector,
    wait: &WaitConfig,
) -> Option<S::Element> {
    wait::resolve(
        move || async move { session.find(selector).await.ok() },
        wait,
    )
    .await
}

/// Wait for at least one element matching `selector`; empty on timeout.
pub async fn find_elements<S: Session>(
    session: &S,
    selector: &Selector,
    wait: &WaitConfig,
) -> Vec<S::Element> {
    wait::resolve(
        move || async move {
            match session.find_all(selector).await {
                Ok(elements) if !elements.is_empty() => Some(elements),
                _ => None,
            }
        },
        wait,
    )
    .await
    .unwrap_or_default()
}

/// Wait for an element matching `selector` to be present and interactable.
pub async fn find_clickable<S: Session>(
    session: &S,
    selector: &Selector,
    wait: &WaitConfig,
) -> Option<S::Element> {
    wait::resolve(
        move || async move {
            let element = session.find(selector).await.ok()?;
            match element.is_interactable().await {
                Ok(true) => Some(element),
                _ => None,
            }
        },
        wait,
    )
    .await
}

/// Click an element.
///
/// When the driver rejects the native interaction (overlays, custom
/// widgets), the click is retried as a synthetic script click against the
/// same element.
pub async fn click<S: Session>(session: &S, element: Option<&S::Element>) -> bool {
    let Some(element) = element else {
        return false;
    };

    if element.click().await.is_ok() {
        return true;
    }

    debug!("native click rejected, retrying via script");
    let Ok(arg) = element.script_arg() else {
        return false;
    };
    session
        .execute(CLICK_FALLBACK_SCRIPT, vec![arg])
        .await
        .is_ok()
}

/// Clear a field and type `text` into it.
///
/// A field that still reports a non-empty value after clearing fails the
/// operation before any keystroke is sent.
pub async fn type_text<E: ElementHandle>(element: Option<&E>, text: &str) -> bool {
    let Some(element) = element else {
        return false;
    };

    if element.clear().await.is_err() {
        return false;
    }
    match element.value().await {
        Ok(None) => {}
        Ok(Some(value)) if value.is_empty() => {}
        _ => return false,
    }

    element.send_keys(text).await.is_ok()
}

/// Select the dropdown option with the given visible text.
pub async fn select_option<E: ElementHandle>(element: Option<&E>, text: &str) -> bool {
    let Some(element) = element else {
        return false;
    };
    element.select_visible_text(text).await.is_ok()
}
