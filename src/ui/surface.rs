use std::collections::HashMap;

use fltk::{
    button::Button, enums::Color, frame::Frame, group::Flex, misc::HelpView, prelude::*,
    text::TextEditor,
};

use crate::app::infrastructure::surface::{ElementKey, Surface};
use super::main_window::MainWidgets;
use super::theme::style_tab;

/// A widget the core can address. Cloning an fltk widget clones the handle,
/// not the widget.
#[derive(Clone)]
pub enum FltkElement {
    Editor(TextEditor),
    Preview(HelpView),
    Tab(Button),
    Label(Frame),
}

impl FltkElement {
    fn is_alive(&self) -> bool {
        match self {
            Self::Editor(w) => !w.was_deleted(),
            Self::Preview(w) => !w.was_deleted(),
            Self::Tab(w) => !w.was_deleted(),
            Self::Label(w) => !w.was_deleted(),
        }
    }
}

/// Wrap HTML in HelpView-compatible font tags.
pub fn wrap_html_for_helpview(html: &str) -> String {
    format!("<font face=\"Helvetica\" size=\"4\">{}</font>", html)
}

fn show_or_hide<W: WidgetExt>(widget: &mut W, visible: bool) {
    if visible {
        widget.show();
    } else {
        widget.hide();
    }
}

pub struct FltkSurface {
    elements: HashMap<ElementKey, FltkElement>,
    content_row: Flex,
}

impl FltkSurface {
    pub fn new(widgets: &MainWidgets) -> Self {
        let mut elements = HashMap::new();
        elements.insert(ElementKey::EditorPane, FltkElement::Editor(widgets.text_editor.clone()));
        elements.insert(ElementKey::PreviewPane, FltkElement::Preview(widgets.preview.clone()));
        // HelpView is both the pane and the region the HTML lands in
        elements.insert(ElementKey::PreviewOutput, FltkElement::Preview(widgets.preview.clone()));
        elements.insert(ElementKey::StatusLabel, FltkElement::Label(widgets.status_label.clone()));
        for (mode, tab) in &widgets.tabs {
            elements.insert(ElementKey::Tab(*mode), FltkElement::Tab(tab.clone()));
        }
        for (field, frame) in &widgets.stats {
            elements.insert(ElementKey::Stat(*field), FltkElement::Label(frame.clone()));
        }
        Self {
            elements,
            content_row: widgets.content_row.clone(),
        }
    }
}

impl Surface for FltkSurface {
    type Handle = FltkElement;

    fn resolve(&self, key: ElementKey) -> Option<FltkElement> {
        self.elements.get(&key).filter(|e| e.is_alive()).cloned()
    }

    fn set_visible(&mut self, handle: &FltkElement, visible: bool) -> bool {
        if !handle.is_alive() {
            return false;
        }
        match handle.clone() {
            FltkElement::Editor(mut w) => show_or_hide(&mut w, visible),
            FltkElement::Preview(mut w) => show_or_hide(&mut w, visible),
            FltkElement::Tab(mut w) => show_or_hide(&mut w, visible),
            FltkElement::Label(mut w) => show_or_hide(&mut w, visible),
        }
        if !self.content_row.was_deleted() {
            self.content_row.layout();
            self.content_row.redraw();
        }
        true
    }

    fn set_html(&mut self, handle: &FltkElement, html: &str) -> bool {
        match handle.clone() {
            FltkElement::Preview(mut view) if !view.was_deleted() => {
                view.set_value(&wrap_html_for_helpview(html));
                view.redraw();
                true
            }
            _ => false,
        }
    }

    fn set_text(&mut self, handle: &FltkElement, text: &str) -> bool {
        match handle.clone() {
            FltkElement::Label(mut frame) if !frame.was_deleted() => {
                frame.set_label(text);
                frame.redraw();
                true
            }
            _ => false,
        }
    }

    fn set_active(&mut self, handle: &FltkElement, active: bool) -> bool {
        match handle.clone() {
            FltkElement::Tab(mut tab) if !tab.was_deleted() => {
                style_tab(&mut tab, active);
                true
            }
            _ => false,
        }
    }

    fn set_accent(&mut self, handle: &FltkElement, color: u32) -> bool {
        match handle.clone() {
            FltkElement::Label(mut frame) if !frame.was_deleted() => {
                frame.set_label_color(Color::from_hex(color));
                frame.redraw();
                true
            }
            _ => false,
        }
    }
}
