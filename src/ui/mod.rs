//! FLTK front-end: widget construction and the `Surface` the editing core
//! paints into.

pub mod buffer;
pub mod file_dialogs;
pub mod main_window;
pub mod surface;
pub mod theme;
