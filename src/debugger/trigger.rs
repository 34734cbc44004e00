// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Debug trigger entry point
//!
//! Whatever detects the "show me the debug view" gesture calls [`DebugTrigger::fire`];
//! registered callbacks surface the view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

/// Callback run when the trigger fires
pub type TriggerCallback = Arc<dyn Fn() + Send + Sync>;

/// Fan-out point for debug view requests
#[derive(Clone, Default)]
pub struct DebugTrigger {
    callbacks: Arc<RwLock<Vec<TriggerCallback>>>,
    fired: Arc<AtomicU64>,
}

impl DebugTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn on_fire<F: Fn() + Send + Sync + 'static>(&self, callback: F) {
        self.callbacks.write().push(Arc::new(callback));
    }

    /// Run every callback; returns how many ran
    pub fn fire(&self) -> usize {
        self.fired.fetch_add(1, Ordering::Relaxed);
        // Callbacks may register further callbacks
        let callbacks = self.callbacks.read().clone();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }

    /// Times the trigger fired
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_fire_runs_callbacks() {
        let trigger = DebugTrigger::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        trigger.on_fire(move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(trigger.fire(), 1);
        assert_eq!(trigger.fire(), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(trigger.fired(), 2);
    }

    #[test]
    fn test_fire_without_callbacks() {
        assert_eq!(DebugTrigger::new().fire(), 0);
    }
}
