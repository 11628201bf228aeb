//! Registration teardown handles.
//!
//! Every `add_*`/`register_*` call in the SDK returns a [`Disposer`]: a
//! one-shot capability that reverses exactly that registration. Disposers
//! are idempotent and never fail, so callers may invoke them early, hand
//! them to the lifecycle controller, or both.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Teardown = Box<dyn FnOnce() + Send>;

/// A one-shot, idempotent teardown handle for a single registration.
///
/// Clones share the same one-shot state: whichever clone runs first consumes
/// the teardown, and every later call on any clone is a no-op.
#[derive(Clone)]
pub struct Disposer {
    inner: Arc<Mutex<Option<Teardown>>>,
}

impl Disposer {
    /// Wrap a teardown closure.
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(Box::new(teardown)))),
        }
    }

    /// A disposer that does nothing. Useful for registrations the host
    /// tracks elsewhere.
    pub fn noop() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Run the teardown if it has not run yet. Calling this more than once
    /// is a no-op, never an error.
    pub fn dispose(&self) {
        if let Some(teardown) = self.lock().take() {
            teardown();
        }
    }

    /// Whether the teardown has already run.
    pub fn is_disposed(&self) -> bool {
        self.lock().is_none()
    }

    // A poisoned lock only means a panic elsewhere while disposing; the
    // teardown slot itself is still valid, so disposal must keep working.
    fn lock(&self) -> MutexGuard<'_, Option<Teardown>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
