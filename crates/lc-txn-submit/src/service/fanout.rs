//! Bounded concurrent fan-out.
//!
//! One task per target, at most `max_in_flight` running at once, each
//! request under its own deadline. Results come back in target order and a
//! failing target never cancels the others.

use crate::config::FanOutConfig;
use crate::domain::TransportError;
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::error;

/// Run `call` against every target concurrently.
pub(crate) async fn fan_out<T, R, F, Fut>(
    targets: &[Arc<T>],
    config: &FanOutConfig,
    call: F,
) -> Vec<Result<R, TransportError>>
where
    T: ?Sized + Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(Arc<T>) -> Fut,
    Fut: Future<Output = Result<R, TransportError>> + Send + 'static,
{
    let permits = config.max_in_flight.clamp(1, Semaphore::MAX_PERMITS);
    let semaphore = Arc::new(Semaphore::new(permits));
    let deadline = config.timeout();
    let timeout_ms = config.timeout_ms;

    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
            error!("[lc-txn] Fan-out semaphore closed; skipping remaining targets");
            break;
        };
        let request = call(Arc::clone(target));
        handles.push(tokio::spawn(async move {
            let _permit = permit;
            match tokio::time::timeout(deadline, request).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::Timeout(timeout_ms)),
            }
        }));
    }

    let mut results: Vec<Result<R, TransportError>> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap_or_else(|e| Err(task_failure(e))))
        .collect();

    while results.len() < targets.len() {
        results.push(Err(TransportError::TaskFailed(
            "fan-out aborted before dispatch".to_string(),
        )));
    }
    results
}

fn task_failure(error: JoinError) -> TransportError {
    if error.is_panic() {
        error!("[lc-txn] Fan-out task panicked");
        TransportError::TaskFailed("task panicked".to_string())
    } else {
        TransportError::TaskFailed(error.to_string())
    }
}
