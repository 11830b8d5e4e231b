//! Per-dialog guard against duplicate submissions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// "Submitting" flag for one control. Clones share the flag, so a
/// presentation layer can hold a clone to grey out its button.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
}

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or `None` while another submission holds it.
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitTicket { busy: Arc::clone(&self.busy) })
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its gate when dropped, whether the submission succeeded or not.
#[derive(Debug)]
pub struct SubmitTicket {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused() {
        let gate = SubmitGate::new();
        let ticket = gate.try_begin();
        assert!(ticket.is_some());
        assert!(gate.is_submitting());
        assert!(gate.try_begin().is_none());
    }

    #[test]
    fn test_drop_releases() {
        let gate = SubmitGate::new();
        drop(gate.try_begin());
        assert!(!gate.is_submitting());
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn test_clones_share_flag() {
        let gate = SubmitGate::new();
        let ui_handle = gate.clone();
        let _ticket = gate.try_begin().unwrap();
        assert!(ui_handle.is_submitting());
        assert!(ui_handle.try_begin().is_none());
    }
}
