//! Applied-scheme tracking and change broadcast.
//!
//! The applied scheme is derived from two inputs: the OS-level preference
//! and an optional explicit override (the analogue of a forced root class).
//! The override, when set, always wins. Changes are broadcast over a watch
//! channel; subscribers hold a [`ThemeSubscription`] with an explicit
//! [`cancel`](ThemeSubscription::cancel) handle instead of a fire-and-forget
//! callback.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::scheme::ColorScheme;

#[derive(Debug, Clone, Copy)]
struct Inputs {
    system: ColorScheme,
    explicit: Option<ColorScheme>,
}

impl Inputs {
    fn applied(&self) -> ColorScheme {
        self.explicit.unwrap_or(self.system)
    }
}

struct ThemeEngineInner {
    inputs: Mutex<Inputs>,
    tx: watch::Sender<ColorScheme>,
}

/// Tracks the applied color scheme and broadcasts changes.
///
/// Cheap to clone (Arc internals). Applying a preference is infallible;
/// consumers that ignore updates simply lag behind.
#[derive(Clone)]
pub struct ThemeEngine {
    inner: Arc<ThemeEngineInner>,
}

impl ThemeEngine {
    /// Creates an engine with the given system preference and no override.
    pub fn new(system: ColorScheme) -> Self {
        let inputs = Inputs {
            system,
            explicit: None,
        };
        let (tx, _rx) = watch::channel(inputs.applied());
        Self {
            inner: Arc::new(ThemeEngineInner {
                inputs: Mutex::new(inputs),
                tx,
            }),
        }
    }

    /// The currently applied scheme.
    pub fn applied(&self) -> ColorScheme {
        *self.inner.tx.borrow()
    }

    /// The current system preference, ignoring any override.
    pub fn system_preference(&self) -> ColorScheme {
        self.lock_inputs().system
    }

    /// Records a change in the OS-level preference.
    pub fn set_system_preference(&self, scheme: ColorScheme) {
        self.update(|inputs| inputs.system = scheme);
    }

    /// Forces a scheme regardless of the system preference, or clears the
    /// override with `None` to fall back to it.
    pub fn set_override(&self, scheme: Option<ColorScheme>) {
        self.update(|inputs| inputs.explicit = scheme);
    }

    /// Subscribes to applied-scheme changes.
    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            rx: self.inner.tx.subscribe(),
            cancelled: false,
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut Inputs)) {
        let applied = {
            let mut inputs = self.lock_inputs();
            mutate(&mut inputs);
            inputs.applied()
        };
        let changed = self.inner.tx.send_if_modified(|current| {
            if *current == applied {
                return false;
            }
            *current = applied;
            true
        });
        if changed {
            tracing::debug!(scheme = %applied, "applied color scheme changed");
        }
    }

    fn lock_inputs(&self) -> std::sync::MutexGuard<'_, Inputs> {
        // The lock is only held for field reads/writes; poisoning would
        // require a panic inside one of those.
        match self.inner.inputs.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("applied", &self.applied())
            .finish()
    }
}

/// Handle on a stream of applied-scheme changes.
///
/// Dropping the subscription also stops delivery; `cancel` exists so
/// consumers can keep the handle around and still make the teardown
/// explicit.
pub struct ThemeSubscription {
    rx: watch::Receiver<ColorScheme>,
    cancelled: bool,
}

impl ThemeSubscription {
    /// The applied scheme as of the last observation.
    pub fn current(&self) -> ColorScheme {
        *self.rx.borrow()
    }

    /// Waits for the next applied-scheme change.
    ///
    /// Returns `None` once the subscription is cancelled or the engine has
    /// been dropped.
    pub async fn changed(&mut self) -> Option<ColorScheme> {
        if self.cancelled {
            return None;
        }
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Stops receiving updates.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the subscription has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_applied_follows_system() {
        let engine = ThemeEngine::new(ColorScheme::Dark);
        assert_eq!(engine.applied(), ColorScheme::Dark);
        assert_eq!(engine.system_preference(), ColorScheme::Dark);
    }

    #[test]
    fn test_system_preference_change_updates_applied() {
        let engine = ThemeEngine::new(ColorScheme::Dark);
        engine.set_system_preference(ColorScheme::Light);
        assert_eq!(engine.applied(), ColorScheme::Light);
    }

    #[test]
    fn test_override_beats_system_preference() {
        let engine = ThemeEngine::new(ColorScheme::Dark);
        engine.set_override(Some(ColorScheme::Light));
        assert_eq!(engine.applied(), ColorScheme::Light);

        // System changes are absorbed while the override holds.
        engine.set_system_preference(ColorScheme::Dark);
        assert_eq!(engine.applied(), ColorScheme::Light);

        engine.set_override(None);
        assert_eq!(engine.applied(), ColorScheme::Dark);
    }

    #[test]
    fn test_clone_shares_state() {
        let engine = ThemeEngine::new(ColorScheme::Light);
        let other = engine.clone();
        other.set_system_preference(ColorScheme::Dark);
        assert_eq!(engine.applied(), ColorScheme::Dark);
    }

    #[tokio::test]
    async fn test_subscription_observes_changes() {
        let engine = ThemeEngine::new(ColorScheme::Light);
        let mut subscription = engine.subscribe();
        assert_eq!(subscription.current(), ColorScheme::Light);

        engine.set_system_preference(ColorScheme::Dark);
        assert_eq!(subscription.changed().await, Some(ColorScheme::Dark));
    }

    #[tokio::test]
    async fn test_redundant_updates_do_not_notify() {
        let engine = ThemeEngine::new(ColorScheme::Dark);
        let mut subscription = engine.subscribe();

        // Same applied scheme from a different input combination.
        engine.set_override(Some(ColorScheme::Dark));

        engine.set_system_preference(ColorScheme::Light);
        engine.set_override(None);
        // The first observed change is the real one: dark to light.
        assert_eq!(subscription.changed().await, Some(ColorScheme::Light));
    }

    #[tokio::test]
    async fn test_cancelled_subscription_stops_delivery() {
        let engine = ThemeEngine::new(ColorScheme::Light);
        let mut subscription = engine.subscribe();
        subscription.cancel();
        assert!(subscription.is_cancelled());

        engine.set_system_preference(ColorScheme::Dark);
        assert_eq!(subscription.changed().await, None);
    }

    #[tokio::test]
    async fn test_engine_drop_ends_subscription() {
        let engine = ThemeEngine::new(ColorScheme::Light);
        let mut subscription = engine.subscribe();
        drop(engine);
        assert_eq!(subscription.changed().await, None);
    }
}
