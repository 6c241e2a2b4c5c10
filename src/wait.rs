//! The bounded-retry polling loop behind every lookup in this crate.

use std::future::Future;

use tokio::time::{sleep, Instant};
use tracing::warn;

use crate::config::WaitConfig;

/// Poll `probe` until it yields a value or the time budget runs out.
///
/// The probe runs at least once before the budget is checked, so a zero
/// timeout still performs a single attempt. A probe that succeeds on its
/// Nth attempt is invoked exactly N times.
///
/// Probes must map their own lookup errors to `None`; the resolver treats
/// `None` as "no result yet" and never fails itself. On timeout the elapsed
/// time and retry count are logged and `None` is returned.
pub async fn resolve<T, F, Fut>(mut probe: F, wait: &WaitConfig) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let start = Instant::now();
    let mut retries: u32 = 0;
    loop {
        retries += 1;
        if let Some(found) = probe().await {
            return Some(found);
        }

        let elapsed = start.elapsed();
        if elapsed > wait.timeout {
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                timeout_ms = wait.timeout.as_millis() as u64,
                interval_ms = wait.interval.as_millis() as u64,
                retries,
                "lookup did not resolve within its time budget"
            );
            return None;
        }

        sleep(wait.interval).await;
    }
}
