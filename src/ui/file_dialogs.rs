use fltk::dialog;

/// FLTK filter for markdown sources.
pub const MARKDOWN_FILTER: &str = "*.{md,markdown,mdown,txt}";

pub fn open_markdown_dialog() -> Option<String> {
    dialog::file_chooser("Open Markdown", MARKDOWN_FILTER, ".", false)
}
