//! Modal alert lookup and handling.

use crate::config::WaitConfig;
use crate::session::{AlertHandle, Session};
use crate::wait;

/// Wait for a modal alert to become active.
pub async fn find_alert<S: Session>(session: &S, wait: &WaitConfig) -> Option<S::Alert> {
    wait::resolve(
        move || async move { session.active_alert().await.ok() },
        wait,
    )
    .await
}

/// Wait for an alert and accept it.
pub async fn accept_alert<S: Session>(session: &S, wait: &WaitConfig) -> bool {
    let Some(alert) = find_alert(session, wait).await else {
        return false;
    };
    alert.accept().await.is_ok()
}

/// Wait for an alert and accept it only when its text contains `expected`.
///
/// A mismatching alert is left open.
pub async fn accept_alert_with_text<S: Session>(
    session: &S,
    expected: &str,
    wait: &WaitConfig,
) -> bool {
    let Some(alert) = find_alert(session, wait).await else {
        return false;
    };
    match alert.text().await {
        Ok(text) if text.contains(expected) => alert.accept().await.is_ok(),
        _ => false,
    }
}

/// Wait for an alert and dismiss it.
pub async fn dismiss_alert<S: Session>(session: &S, wait: &WaitConfig) -> bool {
    let Some(alert) = find_alert(session, wait).await else {
        return false;
    };
    alert.dismiss().await.is_ok()
}
