// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating player activity events.
//!
//! Controllers hold a cheap cloneable handle; the app drains the channel
//! into a memory-bounded buffer on its tick.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind, PlayerAction};
use crate::config::DIAGNOSTICS_BUFFER_CAPACITY;

/// Channel capacity between handles and the collector. Events beyond it
/// are dropped rather than blocking the caller.
const CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to hand to every player controller.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a user action. Non-blocking; drops the event if the
    /// channel is full.
    pub fn log_action(&self, action: PlayerAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Action { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Records a degraded-path warning. Non-blocking.
    pub fn log_warning(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Records an adaptive session teardown. Non-blocking.
    pub fn log_session_teardown(&self, source: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::SessionTeardown {
            source: source.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Records a failed manifest probe. Non-blocking.
    pub fn log_probe_failed(&self, url: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::ProbeFailed { url: url.into() });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for diagnostic events.
///
/// Receives events through a channel and stores them in a circular
/// buffer; old events are evicted at capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events from the channel into the buffer. Call on
    /// each tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
