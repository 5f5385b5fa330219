use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::{Direction, TranslatorPair};
use crate::ui::window::WindowWidgets;

/// Events sent from background tasks to the GTK main thread.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    ModelLoadFailed(String),
    TranslationComplete { text: String, direction: Direction },
    TranslationFailed(String),
}

/// Lifecycle of the translation models. Transitions only ever move forward:
/// Uninitialized → Loading → Ready or Failed. Failed is terminal; the user
/// restarts the app to retry.
#[derive(Clone)]
pub enum ModelPhase {
    Uninitialized,
    Loading,
    Ready(Arc<TranslatorPair>),
    Failed(String),
}

impl ModelPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelPhase::Ready(_))
    }

    pub fn translators(&self) -> Option<Arc<TranslatorPair>> {
        match self {
            ModelPhase::Ready(pair) => Some(pair.clone()),
            _ => None,
        }
    }
}

/// Visual tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
/// Background tasks never touch this directly; they report via `BackendEvent`.
pub struct AppState {
    pub phase: ModelPhase,
    /// True while a translation is in flight. Guards re-entrancy explicitly,
    /// in addition to the disabled Translate button.
    pub busy: bool,
    pub config: Config,
    pub tokio_rt: tokio::runtime::Runtime,
    pub backend_sender: async_channel::Sender<BackendEvent>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(sender: async_channel::Sender<BackendEvent>) -> Self {
        let config = Config::load();
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            phase: ModelPhase::Uninitialized,
            busy: false,
            config,
            tokio_rt,
            backend_sender: sender,
            window: None,
        }
    }
}

/// Helper to update the status line text and tone.
pub fn update_status(state: &Rc<RefCell<AppState>>, tone: StatusTone, text: &str) {
    let s = state.borrow();
    if let Some(ref win) = s.window {
        crate::ui::window::set_status(win, tone, text);
    }
}
