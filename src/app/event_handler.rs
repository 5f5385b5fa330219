use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use super::state::{update_status, AppState, BackendEvent, ModelPhase, StatusTone};
use crate::ui;

/// Handle a backend event on the GTK main thread. The only place where
/// background outcomes turn into widget updates.
pub fn handle_backend_event(state: &Rc<RefCell<AppState>>, event: BackendEvent) {
    match event {
        BackendEvent::ModelLoadFailed(err) => {
            log::error!("Model loading failed: {err}");
            state.borrow_mut().phase = ModelPhase::Failed(err.clone());
            update_status(state, StatusTone::Error, &format!("Model loading failed: {err}"));
            let s = state.borrow();
            if let Some(ref win) = s.window {
                ui::dialogs::error(win, &format!("Failed to load models: {err}"));
            }
        }
        BackendEvent::TranslationComplete { text, direction } => {
            log::info!("Translation complete ({} chars)", text.len());
            finish_request(state);
            {
                let s = state.borrow();
                if let Some(ref win) = s.window {
                    ui::window::show_output(win, &text, direction);
                }
            }
            update_status(state, StatusTone::Success, "Translation completed");
        }
        BackendEvent::TranslationFailed(err) => {
            log::error!("Translation failed: {err}");
            finish_request(state);
            update_status(state, StatusTone::Error, &format!("Translation failed: {err}"));
            let s = state.borrow();
            if let Some(ref win) = s.window {
                ui::dialogs::error(win, &format!("Translation failed: {err}"));
            }
        }
    }
}

/// Clear the busy flag and re-enable the Translate button. Every attempt that
/// reached dispatch ends here exactly once, success or failure.
fn finish_request(state: &Rc<RefCell<AppState>>) {
    let mut s = state.borrow_mut();
    s.busy = false;
    if let Some(ref win) = s.window {
        win.translate_button.set_sensitive(true);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::super::state::{AppState, BackendEvent};
    use super::handle_backend_event;
    use crate::engine::Direction;

    // No window handles, so the handler only touches state.
    fn busy_state() -> Rc<RefCell<AppState>> {
        let (tx, _rx) = async_channel::unbounded::<BackendEvent>();
        let state = Rc::new(RefCell::new(AppState::new(tx)));
        state.borrow_mut().busy = true;
        state
    }

    #[test]
    fn successful_translation_clears_busy() {
        let state = busy_state();
        handle_backend_event(
            &state,
            BackendEvent::TranslationComplete {
                text: "Hello".into(),
                direction: Direction::ArToEn,
            },
        );
        assert!(!state.borrow().busy);
    }

    #[test]
    fn failed_translation_clears_busy() {
        let state = busy_state();
        handle_backend_event(&state, BackendEvent::TranslationFailed("decode error".into()));
        assert!(!state.borrow().busy);
    }

    #[test]
    fn model_load_failure_does_not_touch_busy() {
        // Not a translation attempt; the flag belongs to the dispatcher.
        let state = busy_state();
        handle_backend_event(&state, BackendEvent::ModelLoadFailed("missing files".into()));
        assert!(state.borrow().busy);
    }
}
