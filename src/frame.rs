//! Scoped frame-context switching.

use std::future::Future;

use tracing::warn;

use crate::session::Session;

/// Run `scope` with the session switched into `frame`, then restore the
/// parent context.
///
/// The parent frame is restored whatever the scope produced, including
/// error values, so a failing operation cannot leak its frame context into
/// the next one. Returns `None` without running the scope when the frame
/// handle is missing or the switch itself fails; a failed restore is logged.
pub async fn with_frame<S, F, Fut, T>(
    session: &S,
    frame: Option<&S::Element>,
    scope: F,
) -> Option<T>
where
    S: Session,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let frame = frame?;
    if session.enter_frame(frame).await.is_err() {
        return None;
    }

    let output = scope().await;

    if let Err(error) = session.enter_parent_frame().await {
        warn!(%error, "failed to restore the parent frame context");
    }
    Some(output)
}
