use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::ui::window::WindowWidgets;

/// Modal warning for recoverable, user-correctable problems.
pub fn warning(win: &WindowWidgets, body: &str) {
    alert(win, "Warning", body);
}

/// Modal error report.
pub fn error(win: &WindowWidgets, body: &str) {
    alert(win, "Error", body);
}

fn alert(win: &WindowWidgets, heading: &str, body: &str) {
    let dialog = libadwaita::AlertDialog::builder()
        .heading(heading)
        .body(body)
        .build();
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.present(Some(&win.window));
}
