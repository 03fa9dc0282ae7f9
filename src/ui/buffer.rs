use fltk::text::TextBuffer;

/// Copy the buffer's text into a Rust `String` and free FLTK's copy.
///
/// `TextBuffer::text()` leaks the C string it gets back from
/// `Fl_Text_Buffer_text()`. The editor reads the whole buffer on every
/// keystroke, so the leak would grow with every edit.
pub fn read_buffer(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: `as_ptr` is valid while `buf` lives. The returned pointer is a
    // NUL-terminated malloc'd string (or null), released with `free` after copying.
    unsafe {
        let raw = Fl_Text_Buffer_text(buf.as_ptr() as *mut std::ffi::c_void);
        if raw.is_null() {
            return String::new();
        }
        let text = std::ffi::CStr::from_ptr(raw).to_string_lossy().into_owned();
        free(raw as *mut std::ffi::c_void);
        text
    }
}
