//! The "slot machine" reveal: a short burst of random keys before the real redemption.
//!
//! The animation runs as its own tokio task. Each tick publishes a throwaway key on a `watch`
//! channel for display; after the last tick the task calls [`RedemptionService::redeem`] and
//! publishes the real key. The animation itself never touches ledger state, so a cancelled
//! reveal (explicit `cancel()` or a dropped handle) costs nothing.

use crate::app::redemption_service::RedemptionService;
use crate::domain::keygen::{generate_key, LOCKED_KEY_MASK};
use crate::domain::{LedgerError, Redemption};
use crate::infra::config;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    duration: Duration,
    interval: Duration,
}

impl RevealTiming {
    /// `interval` is clamped to at least 1ms.
    pub fn new(duration: Duration, interval: Duration) -> Self {
        Self {
            duration,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(
            config::reveal_duration()?,
            config::reveal_interval()?,
        ))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of throwaway frames shown before redeeming. Always at least one.
    pub fn steps(&self) -> u32 {
        let steps = self.duration.as_millis() / self.interval.as_millis().max(1);
        steps.clamp(1, u32::MAX as u128) as u32
    }
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(50))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed(Redemption),
    /// The animation ran but the ledger refused the redemption (e.g. the balance changed
    /// in the meantime).
    Rejected(LedgerError),
    Cancelled,
}

/// Owner of a running reveal. Dropping it cancels the animation if it is still ticking.
pub struct RevealHandle {
    item_id: String,
    frames: watch::Receiver<String>,
    cancel: Arc<Notify>,
    task: Option<JoinHandle<RevealOutcome>>,
}

impl RevealHandle {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    /// Display frames: the mask first, then one random key per tick, then the issued key.
    pub fn frames(&self) -> watch::Receiver<String> {
        self.frames.clone()
    }

    pub fn cancel(&self) {
        self.cancel.notify_one();
    }

    /// Waits for the animation and the redemption that ends it.
    pub async fn finish(mut self) -> RevealOutcome {
        match self.task.take() {
            Some(task) => match task.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("> Reveal: animation task for '{}' failed: {}", self.item_id, e);
                    RevealOutcome::Cancelled
                }
            },
            None => RevealOutcome::Cancelled,
        }
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        // No-op once the task has finished.
        self.cancel.notify_one();
    }
}

/// Starts the reveal for `item_id`.
///
/// Items that cannot be redeemed right now (unknown, already redeemed, too expensive) are
/// rejected here and no animation is started.
pub async fn start_reveal(
    service: Arc<RedemptionService>,
    item_id: &str,
    timing: RevealTiming,
) -> Result<RevealHandle, LedgerError> {
    service.check_redeemable(item_id).await?;

    let (frames_tx, frames_rx) = watch::channel(LOCKED_KEY_MASK.to_string());
    let cancel = Arc::new(Notify::new());
    let task = tokio::spawn(run_reveal(
        service,
        item_id.to_string(),
        timing,
        frames_tx,
        cancel.clone(),
    ));

    Ok(RevealHandle {
        item_id: item_id.to_string(),
        frames: frames_rx,
        cancel,
        task: Some(task),
    })
}

async fn run_reveal(
    service: Arc<RedemptionService>,
    item_id: String,
    timing: RevealTiming,
    frames: watch::Sender<String>,
    cancel: Arc<Notify>,
) -> RevealOutcome {
    let mut ticker = interval(timing.interval());
    // The first tick of a tokio interval completes immediately.
    ticker.tick().await;

    for _ in 0..timing.steps() {
        tokio::select! {
            _ = ticker.tick() => {
                let _ = frames.send(generate_key());
            }
            _ = cancel.notified() => {
                println!("> Reveal: Animation for '{}' cancelled, nothing redeemed", item_id);
                return RevealOutcome::Cancelled;
            }
        }
    }

    match service.redeem(&item_id).await {
        Ok(redemption) => {
            let _ = frames.send(redemption.key.clone());
            RevealOutcome::Revealed(redemption)
        }
        Err(e) => RevealOutcome::Rejected(e),
    }
}
