use std::future::Future;
use tracing::{debug, warn};
use crate::core::library::LibraryResult;

/// Resolves a lookup through an optional primary source, falling back to a second source
/// when the primary is absent or fails.
///
/// Futures are lazy, so `fallback` is never polled when `primary` succeeds. Errors from the
/// primary are logged and discarded; only the fallback's error reaches the caller.
pub(crate) async fn resolve<T, P, F>(operation: &str, primary: Option<P>, fallback: F) -> LibraryResult<T>
    where P: Future<Output=LibraryResult<T>>,
          F: Future<Output=LibraryResult<T>> {
    if let Some(primary) = primary {
        match primary.await {
            Ok(res) => {
                debug!("{} resolved by primary source", operation);
                return Ok(res);
            }
            Err(err) => {
                warn!("{} failed on primary source (retryable: {}), falling back: {}",
                    operation, err.retryable(), err);
            }
        }
    }
    fallback.await
}
