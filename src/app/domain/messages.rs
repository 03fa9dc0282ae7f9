use super::view_mode::ViewMode;

/// Everything the host can tell an editor session.
/// Widget callbacks send one of these; the dispatch loop hands them to `EditorSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The editor text changed (one per keystroke).
    ContentChanged(String),
    /// A whole document arrived from the outside (file open, drop, paste).
    LoadDocument(String),
    /// Tab click.
    SelectMode(ViewMode),
    /// Numeric shortcut key, `'1'..='5'`.
    Shortcut(char),
    /// Timer wake-up; runs whichever debounce windows have elapsed.
    Tick,
    Quit,
}
