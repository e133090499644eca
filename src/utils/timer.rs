/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Timer capability used to wait out throttle delays.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current task for a given duration
///
/// The connector only sleeps between a throttled attempt and its retry, so
/// swapping the timer lets tests observe the requested delays without
/// actually waiting.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Completes once `duration` has elapsed
    async fn sleep(&self, duration: Duration);
}

/// [`Timer`] backed by `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
