//! Transient notification with a cancellable auto-dismiss deadline

use std::time::Duration;
use tokio::time::Instant;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A single on-screen notification
///
/// Each `show` bumps the generation; a timer armed for an older generation
/// can no longer dismiss the newer message.
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    deadline: Option<Instant>,
    generation: u64,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `message`, replacing anything already visible
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        self.generation += 1;
        self.message = Some(message.into());
        self.deadline = Some(now + TOAST_DURATION);
        self.generation
    }

    /// Hide immediately and disarm the timer
    pub fn dismiss(&mut self) {
        self.message = None;
        self.deadline = None;
    }

    /// Timer callback: hides the toast only if `generation` is still current
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Pending deadline and the generation it belongs to
    pub fn pending(&self) -> Option<(Instant, u64)> {
        self.deadline.map(|d| (d, self.generation))
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

/// Sleep until the toast deadline, or forever when nothing is pending
pub async fn wait_for(pending: Option<(Instant, u64)>) -> u64 {
    match pending {
        Some((deadline, generation)) => {
            tokio::time::sleep_until(deadline).await;
            generation
        }
        None => std::future::pending().await,
    }
}
