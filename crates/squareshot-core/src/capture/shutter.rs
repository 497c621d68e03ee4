//! Shutter gating.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The shutter button's enabled state, shared between UI and worker.
#[derive(Debug, Clone, Default)]
pub struct Shutter {
    disabled: Arc<AtomicBool>,
}

/// Proof that a capture owns the shutter. Dropping it re-arms the shutter.
#[derive(Debug)]
pub struct ShutterGuard {
    disabled: Arc<AtomicBool>,
}

impl Shutter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press would start a capture.
    pub fn is_enabled(&self) -> bool {
        !self.disabled.load(Ordering::Acquire)
    }

    /// Disable the shutter for one capture, or `None` if one is in flight.
    pub fn press(&self) -> Option<ShutterGuard> {
        if self.disabled.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(ShutterGuard {
            disabled: Arc::clone(&self.disabled),
        })
    }
}

impl Drop for ShutterGuard {
    fn drop(&mut self) {
        self.disabled.store(false, Ordering::Release);
    }
}
