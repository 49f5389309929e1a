// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine shared by the gallery viewer and the project
//! detail modal.
//!
//! Owns the selection index, the zoom flag, and the set of images whose
//! assets have finished loading. Navigation clamps at the ends of the
//! list instead of wrapping, and every operation is total: out-of-range
//! or invalid-for-state requests are ignored rather than reported.
//!
//! The page scroll lock is paired with the open state. It is engaged on
//! the closed-to-open transition, released on the open-to-closed
//! transition, and released again on drop so a controller torn down
//! while open cannot leave the page stuck.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Feature switches for one lightbox instance.
///
/// A single controller parameterized by these flags serves both the
/// gallery viewer (everything on) and the project detail modal
/// (paging and zoom off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Allow moving between images (arrow keys and paging controls).
    pub navigation: bool,
    /// Allow toggling between fit and enlarged display.
    pub zoom: bool,
    /// Show the caption of the open image when one exists.
    pub captions: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            navigation: true,
            zoom: true,
            captions: true,
        }
    }
}

impl Options {
    /// Configuration for a single-item detail modal: no paging, no zoom.
    #[must_use]
    pub fn detail() -> Self {
        Self {
            navigation: false,
            zoom: false,
            captions: true,
        }
    }
}

/// Keys the lightbox reacts to while open. All other keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    ArrowLeft,
    ArrowRight,
    Space,
}

/// Flag suppressing page scrolling while a modal overlay is up.
///
/// Clones share one flag, so the application can hand the same lock to
/// every modal controller and consult it from the layout code.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    engaged: Arc<AtomicBool>,
}

impl ScrollLock {
    /// Whether page scrolling is currently suppressed.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::Relaxed)
    }

    fn engage(&self) {
        self.engaged.store(true, Ordering::Relaxed);
    }

    fn release(&self) {
        self.engaged.store(false, Ordering::Relaxed);
    }
}

/// Modal image browser state.
///
/// `selected` is the sole source of truth for open/closed: `None` means
/// the modal is closed. `zoomed` is meaningful only while open and is
/// cleared on every selection change so a zoomed view never leaks into
/// the next image.
#[derive(Debug)]
pub struct Lightbox {
    count: usize,
    selected: Option<usize>,
    zoomed: bool,
    loaded: HashSet<usize>,
    options: Options,
    lock: ScrollLock,
}

impl Lightbox {
    /// Create a closed lightbox over `count` images with its own lock.
    #[must_use]
    pub fn new(count: usize, options: Options) -> Self {
        Self::with_lock(count, options, ScrollLock::default())
    }

    /// Create a closed lightbox sharing an externally owned lock.
    #[must_use]
    pub fn with_lock(count: usize, options: Options, lock: ScrollLock) -> Self {
        Self {
            count,
            selected: None,
            zoomed: false,
            loaded: HashSet::new(),
            options,
            lock,
        }
    }

    /// Open the modal at `index`. Out-of-range indices are ignored.
    ///
    /// Always lands in an unzoomed state, also when the modal was
    /// already open on another image.
    pub fn open(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.transition(Some(index));
    }

    /// Close the modal. Idempotent.
    pub fn close(&mut self) {
        self.transition(None);
    }

    /// Move to the following image, clamping at the last index.
    pub fn next(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.count {
                self.transition(Some(index + 1));
            }
        }
    }

    /// Move to the preceding image, clamping at index zero.
    pub fn previous(&mut self) {
        if let Some(index) = self.selected {
            if index > 0 {
                self.transition(Some(index - 1));
            }
        }
    }

    /// Flip between fit and enlarged display.
    ///
    /// Inert while closed and when zoom is disabled for this instance.
    pub fn toggle_zoom(&mut self) {
        if !self.options.zoom {
            return;
        }
        if self.selected.is_some() {
            self.zoomed = !self.zoomed;
        }
    }

    /// Record that the asset for `index` finished loading. Idempotent;
    /// the set only grows until the image list itself is replaced.
    pub fn mark_loaded(&mut self, index: usize) {
        if index < self.count {
            self.loaded.insert(index);
        }
    }

    /// Rebind the controller to a new image list of `count` entries.
    ///
    /// Selection indices and load tracking from the old list are
    /// meaningless against the new one, so this closes the modal and
    /// clears the loaded set.
    pub fn replace_images(&mut self, count: usize) {
        self.transition(None);
        self.loaded.clear();
        self.count = count;
    }

    /// Map a key press to a transition, reporting whether it was
    /// consumed. Space reports consumed so the caller can keep the key
    /// from scrolling the page underneath.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        if self.selected.is_none() {
            return false;
        }
        match key {
            KeyPress::Escape => {
                self.close();
                true
            }
            KeyPress::ArrowLeft if self.options.navigation => {
                self.previous();
                true
            }
            KeyPress::ArrowRight if self.options.navigation => {
                self.next();
                true
            }
            KeyPress::Space if self.options.zoom => {
                self.toggle_zoom();
                true
            }
            KeyPress::ArrowLeft | KeyPress::ArrowRight | KeyPress::Space => false,
        }
    }

    /// Index of the open image, or `None` while closed.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the open image is enlarged. Always `false` while closed.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether the asset for `index` has finished loading.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    /// Whether the selection sits on the first image.
    #[must_use]
    pub fn at_first(&self) -> bool {
        self.selected == Some(0)
    }

    /// Whether the selection sits on the last image.
    #[must_use]
    pub fn at_last(&self) -> bool {
        self.count > 0 && self.selected == Some(self.count - 1)
    }

    /// One-based position and total for the "3 / 7" style counter.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.selected.map(|index| (index + 1, self.count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Handle to the scroll-lock flag shared with the layout code.
    #[must_use]
    pub fn scroll_lock(&self) -> ScrollLock {
        self.lock.clone()
    }

    /// Single place where the selection changes. Keeps the zoom reset
    /// and the lock engage/release paired with the open/closed edges.
    fn transition(&mut self, target: Option<usize>) {
        let was_open = self.selected.is_some();
        self.selected = target;
        self.zoomed = false;
        match (was_open, self.selected.is_some()) {
            (false, true) => self.lock.engage(),
            (true, false) => self.lock.release(),
            _ => {}
        }
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        // Release only a lock this instance engaged. A closed instance
        // sharing the flag with an open sibling must not stomp it.
        if self.selected.is_some() {
            self.lock.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_lightbox(count: usize, index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(count, Options::default());
        lightbox.open(index);
        lightbox
    }

    #[test]
    fn open_selects_index_without_zoom() {
        for count in 1..=4 {
            for index in 0..count {
                let lightbox = open_lightbox(count, index);
                assert_eq!(lightbox.selected(), Some(index));
                assert!(!lightbox.is_zoomed());
            }
        }
    }

    #[test]
    fn open_ignores_out_of_range_index() {
        let mut lightbox = Lightbox::new(3, Options::default());
        lightbox.open(3);
        assert_eq!(lightbox.selected(), None);
        lightbox.open(usize::MAX);
        assert_eq!(lightbox.selected(), None);
    }

    #[test]
    fn reopening_clears_zoom() {
        let mut lightbox = open_lightbox(3, 0);
        lightbox.toggle_zoom();
        assert!(lightbox.is_zoomed());
        lightbox.open(2);
        assert_eq!(lightbox.selected(), Some(2));
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn close_is_idempotent() {
        let mut lightbox = open_lightbox(3, 1);
        lightbox.close();
        assert_eq!(lightbox.selected(), None);
        assert!(!lightbox.is_zoomed());
        lightbox.close();
        assert_eq!(lightbox.selected(), None);
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn next_clamps_at_last_index() {
        let mut lightbox = open_lightbox(3, 2);
        lightbox.next();
        assert_eq!(lightbox.selected(), Some(2));
        assert!(lightbox.at_last());
    }

    #[test]
    fn previous_clamps_at_first_index() {
        let mut lightbox = open_lightbox(3, 0);
        lightbox.previous();
        assert_eq!(lightbox.selected(), Some(0));
        assert!(lightbox.at_first());
    }

    #[test]
    fn navigation_resets_zoom() {
        let mut lightbox = open_lightbox(3, 1);
        lightbox.toggle_zoom();
        lightbox.next();
        assert_eq!(lightbox.selected(), Some(2));
        assert!(!lightbox.is_zoomed());

        lightbox.toggle_zoom();
        lightbox.previous();
        assert_eq!(lightbox.selected(), Some(1));
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn navigation_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3, Options::default());
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.selected(), None);
    }

    #[test]
    fn toggle_zoom_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3, Options::default());
        lightbox.toggle_zoom();
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn toggle_zoom_ignored_when_disabled() {
        let mut lightbox = Lightbox::new(3, Options::detail());
        lightbox.open(1);
        lightbox.toggle_zoom();
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn browse_sequence_through_three_images() {
        let mut lightbox = Lightbox::new(3, Options::default());

        lightbox.open(0);
        assert_eq!(lightbox.selected(), Some(0));
        assert!(!lightbox.is_zoomed());

        lightbox.next();
        assert_eq!(lightbox.selected(), Some(1));
        assert!(!lightbox.is_zoomed());

        lightbox.next();
        assert_eq!(lightbox.selected(), Some(2));
        assert!(!lightbox.is_zoomed());

        lightbox.next();
        assert_eq!(lightbox.selected(), Some(2));

        lightbox.toggle_zoom();
        assert!(lightbox.is_zoomed());

        lightbox.close();
        assert_eq!(lightbox.selected(), None);
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn mark_loaded_is_idempotent() {
        let mut lightbox = Lightbox::new(3, Options::default());
        assert!(!lightbox.is_loaded(1));

        lightbox.mark_loaded(1);
        assert!(lightbox.is_loaded(1));

        lightbox.mark_loaded(1);
        assert!(lightbox.is_loaded(1));
        assert!(!lightbox.is_loaded(0));
        assert!(!lightbox.is_loaded(2));
    }

    #[test]
    fn mark_loaded_ignores_out_of_range_index() {
        let mut lightbox = Lightbox::new(2, Options::default());
        lightbox.mark_loaded(2);
        assert!(!lightbox.is_loaded(2));
    }

    #[test]
    fn replace_images_closes_and_clears_loading_state() {
        let mut lightbox = open_lightbox(3, 2);
        lightbox.mark_loaded(0);
        lightbox.mark_loaded(2);

        lightbox.replace_images(5);

        assert_eq!(lightbox.selected(), None);
        assert_eq!(lightbox.len(), 5);
        assert!(!lightbox.is_loaded(0));
        assert!(!lightbox.is_loaded(2));
        assert!(!lightbox.scroll_lock().is_engaged());
    }

    #[test]
    fn scroll_lock_tracks_open_state() {
        let mut lightbox = Lightbox::new(3, Options::default());
        let lock = lightbox.scroll_lock();
        assert!(!lock.is_engaged());

        lightbox.open(0);
        assert!(lock.is_engaged());

        lightbox.next();
        assert!(lock.is_engaged());

        lightbox.previous();
        assert!(lock.is_engaged());

        lightbox.close();
        assert!(!lock.is_engaged());

        lightbox.close();
        assert!(!lock.is_engaged());

        lightbox.open(2);
        assert!(lock.is_engaged());
    }

    #[test]
    fn scroll_lock_released_on_drop_while_open() {
        let lock = ScrollLock::default();
        {
            let mut lightbox = Lightbox::with_lock(3, Options::default(), lock.clone());
            lightbox.open(1);
            assert!(lock.is_engaged());
        }
        assert!(!lock.is_engaged());
    }

    #[test]
    fn closed_sibling_keeps_shared_lock_engaged() {
        let lock = ScrollLock::default();
        let mut gallery = Lightbox::with_lock(3, Options::default(), lock.clone());
        gallery.open(0);

        {
            let mut detail = Lightbox::with_lock(2, Options::detail(), lock.clone());
            detail.close();
            assert!(lock.is_engaged());
        }
        // Dropping the closed sibling must not release the gallery's lock.
        assert!(lock.is_engaged());

        gallery.close();
        assert!(!lock.is_engaged());
    }

    #[test]
    fn escape_key_closes() {
        let mut lightbox = open_lightbox(3, 1);
        assert!(lightbox.handle_key(KeyPress::Escape));
        assert_eq!(lightbox.selected(), None);
    }

    #[test]
    fn arrow_keys_navigate_when_enabled() {
        let mut lightbox = open_lightbox(3, 1);
        assert!(lightbox.handle_key(KeyPress::ArrowRight));
        assert_eq!(lightbox.selected(), Some(2));
        assert!(lightbox.handle_key(KeyPress::ArrowLeft));
        assert_eq!(lightbox.selected(), Some(1));
    }

    #[test]
    fn arrow_keys_inert_when_navigation_disabled() {
        let mut lightbox = Lightbox::new(3, Options::detail());
        lightbox.open(1);
        assert!(!lightbox.handle_key(KeyPress::ArrowRight));
        assert!(!lightbox.handle_key(KeyPress::ArrowLeft));
        assert_eq!(lightbox.selected(), Some(1));
    }

    #[test]
    fn space_toggles_zoom_and_is_consumed() {
        let mut lightbox = open_lightbox(3, 0);
        assert!(lightbox.handle_key(KeyPress::Space));
        assert!(lightbox.is_zoomed());
        assert!(lightbox.handle_key(KeyPress::Space));
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn space_not_consumed_when_zoom_disabled() {
        let mut lightbox = Lightbox::new(3, Options::detail());
        lightbox.open(0);
        assert!(!lightbox.handle_key(KeyPress::Space));
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3, Options::default());
        assert!(!lightbox.handle_key(KeyPress::Escape));
        assert!(!lightbox.handle_key(KeyPress::ArrowRight));
        assert!(!lightbox.handle_key(KeyPress::Space));
        assert_eq!(lightbox.selected(), None);
    }
}
