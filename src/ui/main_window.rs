use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType, Shortcut},
    frame::Frame,
    group::{Flex, FlexType},
    menu::{MenuBar, MenuFlag},
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{AppSettings, Message, StatField, ViewMode};
use super::file_dialogs::open_markdown_dialog;
use super::theme::{apply_theme, style_stat, style_tab};

pub const MENU_HEIGHT: i32 = 30;
pub const TAB_ROW_HEIGHT: i32 = 32;
pub const STATS_ROW_HEIGHT: i32 = 24;
const STATUS_LABEL_WIDTH: i32 = 150;

pub struct MainWidgets {
    pub wind: Window,
    /// Row holding the editor and preview panes; re-laid out when a pane is hidden.
    pub content_row: Flex,
    pub tabs: Vec<(ViewMode, Button)>,
    pub status_label: Frame,
    pub buffer: TextBuffer,
    pub text_editor: TextEditor,
    pub preview: HelpView,
    pub stats: Vec<(StatField, Frame)>,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 960, 640, "MarkPad");
    wind.set_xclass("MarkPad");

    let mut flex = Flex::new(0, 0, 960, 640, None);
    flex.set_type(FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    build_menu(&mut menu, sender);
    flex.fixed(&menu, MENU_HEIGHT);

    let mut tab_row = Flex::default();
    tab_row.set_type(FlexType::Row);
    let mut tabs = Vec::with_capacity(ViewMode::all().len());
    for mode in ViewMode::all().iter().copied() {
        let mut tab = Button::default().with_label(mode.tab_title());
        tab.set_frame(FrameType::FlatBox);
        tab.set_label_size(13);
        tab.set_tooltip(&format!("Alt+{}", mode.shortcut()));
        style_tab(&mut tab, false);
        let s = sender.clone();
        tab.set_callback(move |_| s.send(Message::SelectMode(mode)));
        tabs.push((mode, tab));
    }
    let mut status_label = Frame::default();
    status_label.set_label_font(Font::HelveticaBold);
    status_label.set_label_size(13);
    status_label.set_align(Align::Right | Align::Inside);
    tab_row.fixed(&status_label, STATUS_LABEL_WIDTH);
    tab_row.end();
    flex.fixed(&tab_row, TAB_ROW_HEIGHT);

    let mut content_row = Flex::default();
    content_row.set_type(FlexType::Row);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::default();
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(settings.font_size as i32);
    if settings.line_numbers_enabled {
        text_editor.set_linenumber_width(40);
    }
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    let mut preview = HelpView::default();
    preview.set_text_size(settings.font_size as i32);
    preview.hide();

    content_row.end();

    let mut stats_row = Flex::default();
    stats_row.set_type(FlexType::Row);
    stats_row.set_margins(8, 0, 8, 0);
    let stats = StatField::all()
        .iter()
        .copied()
        .map(|field| {
            let mut frame = Frame::default();
            frame.set_align(Align::Left | Align::Inside);
            style_stat(&mut frame);
            (field, frame)
        })
        .collect();
    stats_row.end();
    flex.fixed(&stats_row, STATS_ROW_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    apply_theme(&mut text_editor, &mut preview, &mut wind);

    MainWidgets {
        wind,
        content_row,
        tabs,
        status_label,
        buffer,
        text_editor,
        preview,
        stats,
    }
}

fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender.clone();
    menu.add(
        "File/Open...",
        Shortcut::Ctrl | 'o',
        MenuFlag::Normal,
        move |_| {
            let Some(path) = open_markdown_dialog() else {
                return;
            };
            match std::fs::read_to_string(&path) {
                Ok(content) => s.send(Message::LoadDocument(content)),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Failed to open document");
                    fltk::dialog::alert_default(&format!("Error opening file: {}", e));
                }
            }
        },
    );
    menu.add_emit(
        "File/Quit",
        Shortcut::Ctrl | 'q',
        MenuFlag::Normal,
        sender.clone(),
        Message::Quit,
    );

    for mode in ViewMode::all().iter().copied() {
        let key = mode.shortcut();
        menu.add_emit(
            &format!("View/{}", mode.tab_title()),
            Shortcut::Alt | key,
            MenuFlag::Normal,
            sender.clone(),
            Message::Shortcut(key),
        );
    }
}
