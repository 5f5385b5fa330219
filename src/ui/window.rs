use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::app::StatusTone;
use crate::engine::Direction;

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub input_view: gtk4::TextView,
    pub output_view: gtk4::TextView,
    pub ar_en_toggle: gtk4::ToggleButton,
    pub en_ar_toggle: gtk4::ToggleButton,
    pub swap_button: gtk4::Button,
    pub translate_button: gtk4::Button,
    pub clear_button: gtk4::Button,
    pub paste_button: gtk4::Button,
    pub open_button: gtk4::Button,
    pub copy_button: gtk4::Button,
    pub save_button: gtk4::Button,
    pub theme_button: gtk4::Button,
    pub status_label: gtk4::Label,
}

/// Build the main window: direction selector, input/output panes, translate
/// button and status line.
pub fn build_window(app: &libadwaita::Application, dark_mode: bool) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Translingo")
        .default_width(1000)
        .default_height(700)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let theme_button = gtk4::Button::from_icon_name(theme_icon(dark_mode));
    theme_button.set_tooltip_text(Some("Toggle light/dark theme"));
    header.pack_end(&theme_button);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Direction selector row ---
    let direction_row = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);

    let ar_en_toggle = gtk4::ToggleButton::with_label(Direction::ArToEn.label());
    ar_en_toggle.set_active(true);
    let en_ar_toggle = gtk4::ToggleButton::with_label(Direction::EnToAr.label());
    en_ar_toggle.set_group(Some(&ar_en_toggle));
    direction_row.append(&ar_en_toggle);
    direction_row.append(&en_ar_toggle);

    let spacer = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    direction_row.append(&spacer);

    let swap_button = gtk4::Button::with_label("⇄ Swap");
    direction_row.append(&swap_button);

    content.append(&direction_row);

    // --- Text panes ---
    let panes = gtk4::Box::new(gtk4::Orientation::Horizontal, 16);
    panes.set_vexpand(true);
    panes.set_homogeneous(true);

    // Input column
    let input_column = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    let input_label = gtk4::Label::new(Some("Input Text:"));
    input_label.set_xalign(0.0);
    input_column.append(&input_label);

    let input_view = gtk4::TextView::new();
    input_view.set_wrap_mode(gtk4::WrapMode::Word);
    input_view.set_top_margin(10);
    input_view.set_bottom_margin(10);
    input_view.set_left_margin(10);
    input_view.set_right_margin(10);
    let input_scroll = gtk4::ScrolledWindow::builder()
        .child(&input_view)
        .vexpand(true)
        .build();
    input_scroll.add_css_class("card");
    input_column.append(&input_scroll);

    let input_buttons = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    let clear_button = gtk4::Button::with_label("Clear");
    let paste_button = gtk4::Button::with_label("Paste");
    let open_button = gtk4::Button::with_label("Open...");
    input_buttons.append(&clear_button);
    input_buttons.append(&paste_button);
    input_buttons.append(&open_button);
    input_column.append(&input_buttons);

    panes.append(&input_column);

    // Output column
    let output_column = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    let output_label = gtk4::Label::new(Some("Translation:"));
    output_label.set_xalign(0.0);
    output_column.append(&output_label);

    let output_view = gtk4::TextView::new();
    output_view.set_wrap_mode(gtk4::WrapMode::Word);
    output_view.set_editable(false);
    output_view.set_cursor_visible(false);
    output_view.set_top_margin(10);
    output_view.set_bottom_margin(10);
    output_view.set_left_margin(10);
    output_view.set_right_margin(10);
    let output_scroll = gtk4::ScrolledWindow::builder()
        .child(&output_view)
        .vexpand(true)
        .build();
    output_scroll.add_css_class("card");
    output_column.append(&output_scroll);

    let output_buttons = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    let copy_button = gtk4::Button::with_label("Copy");
    let save_button = gtk4::Button::with_label("Save...");
    output_buttons.append(&copy_button);
    output_buttons.append(&save_button);
    output_column.append(&output_buttons);

    panes.append(&output_column);
    content.append(&panes);

    // --- Translate button ---
    let translate_button = gtk4::Button::with_label("Translate");
    translate_button.add_css_class("suggested-action");
    translate_button.add_css_class("pill");
    translate_button.set_halign(gtk4::Align::Center);
    content.append(&translate_button);

    // --- Status line ---
    let status_label = gtk4::Label::new(Some("Starting..."));
    status_label.set_xalign(0.0);
    status_label.add_css_class("dim-label");
    content.append(&status_label);

    toolbar_view.set_content(Some(&content));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        input_view,
        output_view,
        ar_en_toggle,
        en_ar_toggle,
        swap_button,
        translate_button,
        clear_button,
        paste_button,
        open_button,
        copy_button,
        save_button,
        theme_button,
        status_label,
    }
}

/// Full contents of the input pane.
pub fn input_text(win: &WindowWidgets) -> String {
    let buf = win.input_view.buffer();
    buf.text(&buf.start_iter(), &buf.end_iter(), false).to_string()
}

/// Full contents of the output pane.
pub fn output_text(win: &WindowWidgets) -> String {
    let buf = win.output_view.buffer();
    buf.text(&buf.start_iter(), &buf.end_iter(), false).to_string()
}

/// Replace the output pane contents, right-justified when the target
/// language renders right-to-left.
pub fn show_output(win: &WindowWidgets, text: &str, direction: Direction) {
    win.output_view.set_justification(if direction.target_is_rtl() {
        gtk4::Justification::Right
    } else {
        gtk4::Justification::Left
    });
    win.output_view.buffer().set_text(text);
}

/// Direction currently selected in the UI.
pub fn selected_direction(win: &WindowWidgets) -> Direction {
    if win.ar_en_toggle.is_active() {
        Direction::ArToEn
    } else {
        Direction::EnToAr
    }
}

pub fn set_direction(win: &WindowWidgets, direction: Direction) {
    match direction {
        Direction::ArToEn => win.ar_en_toggle.set_active(true),
        Direction::EnToAr => win.en_ar_toggle.set_active(true),
    }
}

/// Update the status line text and tone. Uses the Adwaita success/error
/// color classes.
pub fn set_status(win: &WindowWidgets, tone: StatusTone, text: &str) {
    let label = &win.status_label;
    label.set_text(text);
    label.remove_css_class("dim-label");
    label.remove_css_class("success");
    label.remove_css_class("error");
    match tone {
        StatusTone::Neutral => label.add_css_class("dim-label"),
        StatusTone::Success => label.add_css_class("success"),
        StatusTone::Error => label.add_css_class("error"),
    }
}

/// Force the Adwaita color scheme to match the stored preference.
pub fn apply_color_scheme(dark_mode: bool) {
    let style = libadwaita::StyleManager::default();
    style.set_color_scheme(if dark_mode {
        libadwaita::ColorScheme::ForceDark
    } else {
        libadwaita::ColorScheme::ForceLight
    });
}

pub fn theme_icon(dark_mode: bool) -> &'static str {
    if dark_mode {
        "weather-clear-night-symbolic"
    } else {
        "weather-clear-symbolic"
    }
}
