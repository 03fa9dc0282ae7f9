use fltk::{
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    misc::HelpView,
    prelude::*,
    text::TextEditor,
    window::Window,
};

fn muted_text() -> Color {
    Color::from_rgb(90, 90, 90)
}

pub fn apply_theme(editor: &mut TextEditor, preview: &mut HelpView, window: &mut Window) {
    editor.set_color(Color::White);
    editor.set_text_color(Color::Black);
    editor.set_cursor_color(Color::Black);
    editor.set_selection_color(Color::from_rgb(173, 216, 230));
    editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
    editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
    preview.set_color(Color::from_rgb(252, 252, 250));
    window.set_color(Color::from_rgb(240, 240, 240));
    window.set_label_color(Color::Black);

    editor.redraw();
    preview.redraw();
    window.redraw();
}

/// Paint a mode tab as selected or idle.
pub fn style_tab(tab: &mut Button, active: bool) {
    if active {
        tab.set_color(Color::White);
        tab.set_label_color(Color::Black);
        tab.set_label_font(Font::HelveticaBold);
    } else {
        tab.set_color(Color::from_rgb(226, 226, 226));
        tab.set_label_color(muted_text());
        tab.set_label_font(Font::Helvetica);
    }
    tab.redraw();
}

pub fn style_stat(frame: &mut Frame) {
    frame.set_label_size(12);
    frame.set_label_color(muted_text());
}
