//! # Theme State
//!
//! The single owner of the application's [`ThemeMode`].
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Theme Propagation                                  │
//! │                                                                         │
//! │  Profile screen                                                         │
//! │       │ toggle()                                                        │
//! │       ▼                                                                 │
//! │  ThemeState (watch::Sender<ThemeMode>)                                  │
//! │       │                                                                 │
//! │       ├──────────────► Home screen        (watch::Receiver)             │
//! │       ├──────────────► Cart screen        (watch::Receiver)             │
//! │       ├──────────────► Orders screen      (watch::Receiver)             │
//! │       └──────────────► Product details    (watch::Receiver)             │
//! │                                                                         │
//! │  One explicit, injectable owner instead of ambient global state.       │
//! │  A mode change is observable by EVERY consumer simultaneously; each    │
//! │  subscriber re-resolves its styles when the channel signals a change.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::watch;
use tracing::debug;

use shopfront_core::{resolve_style, ElementKind, Style, ThemeMode};

/// Shared theme state backed by a watch channel.
///
/// Process lifetime, starts at [`ThemeMode::Light`], and only ever moves
/// along the two-state toggle cycle.
#[derive(Debug)]
pub struct ThemeState {
    tx: watch::Sender<ThemeMode>,
}

impl ThemeState {
    /// Creates the theme state at the process-start default (light).
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ThemeMode::default());
        ThemeState { tx }
    }

    /// Current mode.
    pub fn mode(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    /// Flips the mode and publishes the new value to every subscriber.
    ///
    /// Returns the mode after the toggle.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        debug!(mode = ?next, "theme toggled");
        self.tx.send_replace(next);
        next
    }

    /// Subscribes to mode changes. The receiver immediately observes the
    /// current value and is notified on every subsequent toggle.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }

    /// Resolves the style for an element kind under the current mode.
    pub fn style(&self, kind: ElementKind) -> Style {
        resolve_style(self.mode(), kind)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
