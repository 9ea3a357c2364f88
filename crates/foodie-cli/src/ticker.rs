//! Periodic opening-hours re-check.

use std::time::Duration;

use chrono::NaiveDateTime;
use foodie_core::{is_open, OpeningHours};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Background task that re-evaluates opening hours every `period` and
/// publishes transitions on a watch channel.
///
/// The task is aborted when the ticker is dropped.
pub(crate) struct AvailabilityTicker {
    handle: JoinHandle<()>,
    receiver: watch::Receiver<bool>,
}

impl AvailabilityTicker {
    /// Evaluate once immediately, then again on every tick of `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn<C>(hours: OpeningHours, period: Duration, clock: C) -> Self
    where
        C: Fn() -> NaiveDateTime + Send + 'static,
    {
        let (sender, receiver) = watch::channel(is_open(&hours, &clock()));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial state is already published.
            interval.tick().await;

            loop {
                interval.tick().await;
                let open = is_open(&hours, &clock());
                sender.send_if_modified(|current| {
                    let changed = *current != open;
                    *current = open;
                    changed
                });
                if sender.is_closed() {
                    break;
                }
            }
        });

        Self { handle, receiver }
    }

    /// A receiver notified on every open/closed transition.
    pub(crate) fn subscribe(&self) -> watch::Receiver<bool> {
        self.receiver.clone()
    }

    pub(crate) fn is_open(&self) -> bool {
        *self.receiver.borrow()
    }
}

impl Drop for AvailabilityTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
