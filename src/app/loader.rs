use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gtk4::glib;

use super::state::{update_status, AppState, BackendEvent, ModelPhase, StatusTone};
use crate::engine::TranslatorPair;

/// Load both directional models off the main thread. Invoked once at startup;
/// the UI stays responsive and translation is simply refused until Ready.
pub fn start_model_load(state: &Rc<RefCell<AppState>>) {
    log::info!("Loading translation models...");
    state.borrow_mut().phase = ModelPhase::Loading;
    update_status(state, StatusTone::Neutral, "Loading models...");

    let sender = state.borrow().backend_sender.clone();
    let config = state.borrow().config.clone();

    // Loaded translators can't ride the event enum (opaque native handles),
    // so they come back to the main thread over their own channel.
    let (pair_tx, pair_rx) = async_channel::bounded::<TranslatorPair>(1);

    state.borrow().tokio_rt.spawn(async move {
        let result =
            tokio::task::spawn_blocking(move || TranslatorPair::load(&config)).await;

        match result {
            Ok(Ok(pair)) => {
                let _ = pair_tx.send(pair).await;
            }
            Ok(Err(e)) => {
                let _ = sender
                    .send(BackendEvent::ModelLoadFailed(format!("{e:#}")))
                    .await;
            }
            Err(e) => {
                let _ = sender
                    .send(BackendEvent::ModelLoadFailed(format!(
                        "Model load panicked: {e}"
                    )))
                    .await;
            }
        }
    });

    // Receive the loaded pair on the GTK main thread
    let state_clone = state.clone();
    glib::spawn_future_local(async move {
        if let Ok(pair) = pair_rx.recv().await {
            state_clone.borrow_mut().phase = ModelPhase::Ready(Arc::new(pair));
            update_status(&state_clone, StatusTone::Success, "Models loaded successfully");
            log::info!("Translation models ready");
        }
    });
}
