//! Self-dismissing values: toasts and modals that disappear after a fixed
//! lifetime unless replaced or closed first.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    value: Option<T>,
}

/// A value that is visible for `lifetime` after each [`Transient::show`].
///
/// Showing a new value restarts the lifetime. Each show bumps a generation
/// counter, so a timer that outlives its value can never clear a newer one.
/// The pending timer is aborted on replace, close and drop.
#[derive(Debug)]
pub struct Transient<T> {
    slot: Arc<Mutex<Slot<T>>>,
    lifetime: Duration,
    timer: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + 'static> Transient<T> {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                value: None,
            })),
            lifetime,
            timer: None,
        }
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Shows `value`, replacing whatever was visible.
    ///
    /// Must be called within a tokio runtime.
    pub fn show(&mut self, value: T) {
        self.show_with(value, || {});
    }

    /// Like [`Transient::show`], running `on_expire` if the lifetime elapses
    /// before the value is replaced or closed.
    pub fn show_with<F>(&mut self, value: T, on_expire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel_timer();

        let generation = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            slot.generation += 1;
            slot.value = Some(value);
            slot.generation
        };

        let slot = Arc::clone(&self.slot);
        let lifetime = self.lifetime;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            let expired = {
                let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
                if slot.generation == generation {
                    slot.value = None;
                    true
                } else {
                    false
                }
            };
            if expired {
                tracing::debug!(generation, "transient expired");
                on_expire();
            }
        }));
    }

    /// The visible value, if any.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .is_some()
    }

    /// Hides the value now without running its expiry callback.
    pub fn close(&mut self) -> Option<T> {
        self.cancel_timer();
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.generation += 1;
        slot.value.take()
    }
}

impl<T> Transient<T> {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> Drop for Transient<T> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
