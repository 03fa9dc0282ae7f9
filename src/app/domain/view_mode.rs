use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// Which panes the editor shows. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Editor,
    Preview,
    Split,
    Annotation,
    Reader,
}

/// Pane visibility for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub editor: bool,
    pub preview: bool,
}

/// Status label text plus its accent colour as 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLabel {
    pub text: &'static str,
    pub color: u32,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[
            Self::Editor,
            Self::Preview,
            Self::Split,
            Self::Annotation,
            Self::Reader,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Preview => "preview",
            Self::Split => "split",
            Self::Annotation => "annotation",
            Self::Reader => "reader",
        }
    }

    /// Label shown on the mode's tab.
    pub fn tab_title(&self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Preview => "Preview",
            Self::Split => "Split",
            Self::Annotation => "Annotate",
            Self::Reader => "Reader",
        }
    }

    pub fn layout(&self) -> PaneLayout {
        match self {
            Self::Editor | Self::Annotation => PaneLayout { editor: true, preview: false },
            Self::Preview | Self::Reader => PaneLayout { editor: false, preview: true },
            Self::Split => PaneLayout { editor: true, preview: true },
        }
    }

    pub fn shows_preview(&self) -> bool {
        self.layout().preview
    }

    pub fn status_label(&self) -> StatusLabel {
        match self {
            Self::Editor => StatusLabel { text: "Editing", color: 0x2563EB },
            Self::Preview => StatusLabel { text: "Preview", color: 0x16A34A },
            Self::Split => StatusLabel { text: "Split View", color: 0x9333EA },
            Self::Annotation => StatusLabel { text: "Annotation Mode", color: 0xD97706 },
            Self::Reader => StatusLabel { text: "Reader Mode", color: 0x0D9488 },
        }
    }

    /// Keyboard shortcuts `1`..`5`, in tab order.
    pub fn from_shortcut(key: char) -> Option<ViewMode> {
        let index = key.to_digit(10)?.checked_sub(1)?;
        Self::all().get(index as usize).copied()
    }

    pub fn shortcut(&self) -> char {
        match self {
            Self::Editor => '1',
            Self::Preview => '2',
            Self::Split => '3',
            Self::Annotation => '4',
            Self::Reader => '5',
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| AppError::InvalidMode(s.to_string()))
    }
}
