use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use super::state::{update_status, AppState, BackendEvent, StatusTone};
use crate::ui;

/// Why a translation request was refused before any work started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    Busy,
    ModelsNotReady,
    EmptyInput,
}

impl Refusal {
    pub fn message(self) -> &'static str {
        match self {
            Refusal::Busy => "A translation is already running. Please wait.",
            Refusal::ModelsNotReady => "Models are still loading. Please wait.",
            Refusal::EmptyInput => "Please enter text to translate",
        }
    }
}

/// Precondition check, kept free of widget access so it can be unit tested.
/// Returns the trimmed input on success.
pub fn check_request(busy: bool, models_ready: bool, raw_input: &str) -> Result<String, Refusal> {
    if busy {
        return Err(Refusal::Busy);
    }
    if !models_ready {
        return Err(Refusal::ModelsNotReady);
    }
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(Refusal::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Handle a press of the Translate button: validate, mark busy, and run the
/// model call on the tokio runtime. The outcome arrives as a `BackendEvent`.
pub fn start_translation(state: &Rc<RefCell<AppState>>) {
    let (text, direction, translators) = {
        let s = state.borrow();
        let win = match s.window {
            Some(ref win) => win,
            None => return,
        };
        let raw = ui::window::input_text(win);
        match check_request(s.busy, s.phase.is_ready(), &raw) {
            Ok(text) => (
                text,
                ui::window::selected_direction(win),
                s.phase.translators(),
            ),
            Err(refusal) => {
                log::info!("Translation refused: {refusal:?}");
                ui::dialogs::warning(win, refusal.message());
                return;
            }
        }
    };
    let translators = match translators {
        Some(pair) => pair,
        None => return,
    };

    {
        let mut s = state.borrow_mut();
        s.busy = true;
        if let Some(ref win) = s.window {
            win.translate_button.set_sensitive(false);
        }
    }
    update_status(state, StatusTone::Neutral, "Translating...");
    log::info!("Translating {} chars, {}", text.len(), direction.label());

    let sender = state.borrow().backend_sender.clone();
    state.borrow().tokio_rt.spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            translators.translate(direction, &text)
        })
        .await;

        match result {
            Ok(Ok(text)) => {
                let _ = sender
                    .send(BackendEvent::TranslationComplete { text, direction })
                    .await;
            }
            Ok(Err(e)) => {
                let _ = sender
                    .send(BackendEvent::TranslationFailed(format!("{e:#}")))
                    .await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::TranslationFailed(format!(
                        "Translation task panicked: {e}"
                    )))
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::{check_request, Refusal};

    #[test]
    fn empty_or_whitespace_input_is_refused() {
        assert_eq!(check_request(false, true, ""), Err(Refusal::EmptyInput));
        assert_eq!(check_request(false, true, "  \n\t "), Err(Refusal::EmptyInput));
    }

    #[test]
    fn not_ready_is_refused_even_with_input() {
        assert_eq!(
            check_request(false, false, "مرحبا"),
            Err(Refusal::ModelsNotReady)
        );
    }

    #[test]
    fn busy_wins_over_everything() {
        assert_eq!(check_request(true, true, "hello"), Err(Refusal::Busy));
        assert_eq!(check_request(true, false, ""), Err(Refusal::Busy));
    }

    #[test]
    fn valid_input_is_trimmed() {
        assert_eq!(check_request(false, true, "  hello \n"), Ok("hello".into()));
    }
}
