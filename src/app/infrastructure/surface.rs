//! The display surface the core writes to, and the cache of element handles
//! resolved from it.

use std::collections::HashMap;

use crate::app::domain::stats::StatField;
use crate::app::domain::view_mode::ViewMode;

/// Every surface element the core touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKey {
    EditorPane,
    PreviewPane,
    /// Region the rendered HTML is written into.
    PreviewOutput,
    Tab(ViewMode),
    StatusLabel,
    Stat(StatField),
}

/// Host-side display. Handles are whatever the host uses to address an
/// element (a widget clone, an id, ...).
///
/// Every write returns `false` when the handle no longer points at a live
/// element; the write is then a no-op.
pub trait Surface {
    type Handle: Clone;

    fn resolve(&self, key: ElementKey) -> Option<Self::Handle>;

    fn set_visible(&mut self, handle: &Self::Handle, visible: bool) -> bool;

    fn set_html(&mut self, handle: &Self::Handle, html: &str) -> bool;

    fn set_text(&mut self, handle: &Self::Handle, text: &str) -> bool;

    /// Marks a tab indicator as the active one (or not).
    fn set_active(&mut self, handle: &Self::Handle, active: bool) -> bool;

    /// Accent colour as 0xRRGGBB.
    fn set_accent(&mut self, handle: &Self::Handle, color: u32) -> bool;
}

/// Lazily populated key → handle map.
///
/// Entries are resolved on first use and reused afterwards. When a write
/// through a cached handle reports the element gone, the entry is evicted so
/// the next access resolves again against the current surface.
pub struct ElementCache<H> {
    handles: HashMap<ElementKey, H>,
}

impl<H: Clone> ElementCache<H> {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    pub fn get<S>(&mut self, surface: &S, key: ElementKey) -> Option<H>
    where
        S: Surface<Handle = H>,
    {
        if let Some(handle) = self.handles.get(&key) {
            return Some(handle.clone());
        }
        let handle = surface.resolve(key)?;
        tracing::debug!(?key, "Resolved surface element");
        self.handles.insert(key, handle.clone());
        Some(handle)
    }

    /// Run a write against the element for `key`. Missing elements and stale
    /// handles are no-ops; a stale handle is dropped from the cache.
    pub fn write<S, F>(&mut self, surface: &mut S, key: ElementKey, op: F) -> bool
    where
        S: Surface<Handle = H>,
        F: FnOnce(&mut S, &H) -> bool,
    {
        let Some(handle) = self.get(&*surface, key) else {
            tracing::debug!(?key, "Surface element missing; skipping write");
            return false;
        };
        if op(surface, &handle) {
            return true;
        }
        tracing::debug!(?key, "Surface element went stale; evicting");
        self.handles.remove(&key);
        false
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

impl<H: Clone> Default for ElementCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed surface plus its element cache, handed to controllers for the
/// duration of one operation.
pub struct SurfaceContext<'a, S: Surface> {
    pub surface: &'a mut S,
    pub cache: &'a mut ElementCache<S::Handle>,
}

impl<'a, S: Surface> SurfaceContext<'a, S> {
    pub fn new(surface: &'a mut S, cache: &'a mut ElementCache<S::Handle>) -> Self {
        Self { surface, cache }
    }

    pub fn write<F>(&mut self, key: ElementKey, op: F) -> bool
    where
        F: FnOnce(&mut S, &S::Handle) -> bool,
    {
        self.cache.write(&mut *self.surface, key, op)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::Cell;

    /// In-memory surface recording every element's state.
    #[derive(Default)]
    pub struct MemorySurface {
        pub visible: HashMap<ElementKey, bool>,
        pub html: HashMap<ElementKey, String>,
        pub text: HashMap<ElementKey, String>,
        pub active: HashMap<ElementKey, bool>,
        pub accent: HashMap<ElementKey, u32>,
        /// Elements torn down by "external code".
        pub removed: Vec<ElementKey>,
        pub html_writes: usize,
        pub queries: Cell<usize>,
    }

    impl MemorySurface {
        pub fn is_visible(&self, key: ElementKey) -> bool {
            self.visible.get(&key).copied().unwrap_or(false)
        }
    }

    impl Surface for MemorySurface {
        type Handle = ElementKey;

        fn resolve(&self, key: ElementKey) -> Option<ElementKey> {
            self.queries.set(self.queries.get() + 1);
            (!self.removed.contains(&key)).then_some(key)
        }

        fn set_visible(&mut self, handle: &ElementKey, visible: bool) -> bool {
            if self.removed.contains(handle) {
                return false;
            }
            self.visible.insert(*handle, visible);
            true
        }

        fn set_html(&mut self, handle: &ElementKey, html: &str) -> bool {
            if self.removed.contains(handle) {
                return false;
            }
            self.html_writes += 1;
            self.html.insert(*handle, html.to_string());
            true
        }

        fn set_text(&mut self, handle: &ElementKey, text: &str) -> bool {
            if self.removed.contains(handle) {
                return false;
            }
            self.text.insert(*handle, text.to_string());
            true
        }

        fn set_active(&mut self, handle: &ElementKey, active: bool) -> bool {
            if self.removed.contains(handle) {
                return false;
            }
            self.active.insert(*handle, active);
            true
        }

        fn set_accent(&mut self, handle: &ElementKey, color: u32) -> bool {
            if self.removed.contains(handle) {
                return false;
            }
            self.accent.insert(*handle, color);
            true
        }
    }
}
