mod app;
mod clipboard;
mod config;
mod engine;
mod textio;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::gio;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, BackendEvent, StatusTone};

fn main() {
    env_logger::init();
    log::info!("Translingo starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.translingo.Translingo")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Async channel for backend → UI communication
    let (backend_tx, backend_rx) = async_channel::unbounded::<BackendEvent>();

    let state = Rc::new(RefCell::new(AppState::new(backend_tx)));

    // Apply the persisted theme before the window first paints
    ui::window::apply_color_scheme(state.borrow().config.dark_mode);

    let window = ui::window::build_window(app, state.borrow().config.dark_mode);

    // Wire up the Translate button
    {
        let state_clone = state.clone();
        window.translate_button.connect_clicked(move |_| {
            app::start_translation(&state_clone);
        });
    }

    // Wire up the Swap button
    {
        let state_clone = state.clone();
        window.swap_button.connect_clicked(move |_| {
            let s = state_clone.borrow();
            if let Some(ref win) = s.window {
                let direction = ui::window::selected_direction(win);
                ui::window::set_direction(win, direction.swapped());
            }
        });
    }

    // Wire up the theme toggle
    {
        let state_clone = state.clone();
        window.theme_button.connect_clicked(move |button| {
            let dark_mode = {
                let mut s = state_clone.borrow_mut();
                s.config.dark_mode = !s.config.dark_mode;
                if let Err(e) = s.config.save() {
                    log::warn!("Failed to save config: {e}");
                }
                s.config.dark_mode
            };
            ui::window::apply_color_scheme(dark_mode);
            button.set_icon_name(ui::window::theme_icon(dark_mode));
        });
    }

    // Wire up Clear
    {
        let state_clone = state.clone();
        window.clear_button.connect_clicked(move |_| {
            let s = state_clone.borrow();
            if let Some(ref win) = s.window {
                win.input_view.buffer().set_text("");
            }
        });
    }

    // Wire up Paste: append clipboard text to the input pane
    {
        let state_clone = state.clone();
        window.paste_button.connect_clicked(move |_| {
            let s = state_clone.borrow();
            let win = match s.window {
                Some(ref win) => win,
                None => return,
            };
            match clipboard::read_from_clipboard() {
                Ok(text) => {
                    let buf = win.input_view.buffer();
                    buf.insert(&mut buf.end_iter(), &text);
                }
                Err(e) => {
                    log::info!("Paste failed: {e}");
                    ui::dialogs::warning(win, "No text in clipboard");
                }
            }
        });
    }

    // Wire up Copy
    {
        let state_clone = state.clone();
        window.copy_button.connect_clicked(move |_| {
            let s = state_clone.borrow();
            let win = match s.window {
                Some(ref win) => win,
                None => return,
            };
            let text = ui::window::output_text(win);
            match clipboard::copy_to_clipboard(&text) {
                Ok(()) => {
                    ui::window::set_status(
                        win,
                        StatusTone::Success,
                        "Translation copied to clipboard",
                    );
                }
                Err(e) => {
                    log::error!("Clipboard error: {e}");
                    ui::dialogs::error(win, &format!("Failed to copy to clipboard: {e}"));
                }
            }
        });
    }

    // Wire up Save: write the output pane to a user-chosen file
    {
        let state_clone = state.clone();
        let parent = window.window.clone();
        window.save_button.connect_clicked(move |_| {
            let text = {
                let s = state_clone.borrow();
                let win = match s.window {
                    Some(ref win) => win,
                    None => return,
                };
                let text = ui::window::output_text(win);
                if text.trim().is_empty() {
                    ui::dialogs::warning(win, "No translation to save");
                    return;
                }
                text
            };

            let dialog = gtk4::FileDialog::builder()
                .title("Save Translation")
                .initial_name("translation.txt")
                .build();

            let state_inner = state_clone.clone();
            dialog.save(Some(&parent), None::<&gio::Cancellable>, move |result| {
                let file = match result {
                    Ok(file) => file,
                    Err(e) => {
                        log::info!("Save dialog dismissed: {e}");
                        return;
                    }
                };
                let Some(path) = file.path() else { return };
                let s = state_inner.borrow();
                let win = match s.window {
                    Some(ref win) => win,
                    None => return,
                };
                match textio::save_text(&path, &text) {
                    Ok(()) => {
                        ui::window::set_status(
                            win,
                            StatusTone::Success,
                            &format!("Translation saved to {}", path.display()),
                        );
                    }
                    Err(e) => {
                        log::error!("Save failed: {e:#}");
                        ui::dialogs::error(win, &format!("Failed to save file: {e:#}"));
                        ui::window::set_status(win, StatusTone::Error, "Save failed");
                    }
                }
            });
        });
    }

    // Wire up Open: load a text file into the input pane
    {
        let state_clone = state.clone();
        let parent = window.window.clone();
        window.open_button.connect_clicked(move |_| {
            let dialog = gtk4::FileDialog::builder()
                .title("Open Text File")
                .build();

            let state_inner = state_clone.clone();
            dialog.open(Some(&parent), None::<&gio::Cancellable>, move |result| {
                let file = match result {
                    Ok(file) => file,
                    Err(e) => {
                        log::info!("Open dialog dismissed: {e}");
                        return;
                    }
                };
                let Some(path) = file.path() else { return };
                let s = state_inner.borrow();
                let win = match s.window {
                    Some(ref win) => win,
                    None => return,
                };
                match textio::load_text(&path) {
                    Ok(text) => {
                        win.input_view.buffer().set_text(&text);
                        ui::window::set_status(
                            win,
                            StatusTone::Success,
                            &format!("Loaded text from {}", path.display()),
                        );
                    }
                    Err(e) => {
                        log::error!("Load failed: {e:#}");
                        ui::dialogs::error(win, &format!("Failed to load file: {e:#}"));
                        ui::window::set_status(win, StatusTone::Error, "Load failed");
                    }
                }
            });
        });
    }

    // Store UI handles in state and show the window
    state.borrow_mut().window = Some(window);
    state.borrow().window.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        gtk4::glib::spawn_future_local(async move {
            while let Ok(event) = backend_rx.recv().await {
                app::handle_backend_event(&state_clone, event);
            }
        });
    }

    // Start loading the translation models
    app::start_model_load(&state);
}
