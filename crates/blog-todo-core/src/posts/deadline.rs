//! Request Deadline
//!
//! The timer is passed in so the browser can use a JS timeout while tests
//! use ready or pending futures.

use futures::future::{self, Either};
use std::future::Future;

use crate::error::FetchError;

/// Resolve with `request` unless `timer` fires first, which becomes
/// `FetchError::Timeout(timeout_ms)`. The losing future is dropped.
pub async fn race_timeout<T, F, D>(request: F, timer: D, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Request abandoned after {} ms", timeout_ms);
            Err(FetchError::Timeout(timeout_ms))
        }
    }
}
