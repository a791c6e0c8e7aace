use std::{future::Future, time::Duration};

use crate::error::{ReelError, Result};

/// Await an adapter call for at most `limit`
pub(crate) async fn bounded<T, E>(
    limit: Duration,
    call: &'static str,
    future: impl Future<Output = std::result::Result<T, E>>,
) -> Result<T>
where
    ReelError: From<E>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result.map_err(ReelError::from),
        Err(_) => Err(ReelError::UpstreamUnavailable(format!(
            "{call} timed out after {:.1}s",
            limit.as_secs_f64()
        ))),
    }
}
