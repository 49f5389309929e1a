// SPDX-License-Identifier: MPL-2.0
//! Gallery state: entries, decoded images and the viewer.

use crate::content::ImageEntry;
use crate::error::MediaError;
use crate::lightbox::{KeyPress, Lightbox, Options, ScrollLock};
use crate::media::ImageData;

/// Loading state of one gallery slot.
#[derive(Debug, Clone)]
pub enum Slot {
    /// Decode still in flight.
    Loading,
    /// Decoded and displayable.
    Ready(ImageData),
    /// The source could not be fetched or decoded. Carries the failure
    /// so views can show a kind-specific notice.
    Broken(MediaError),
}

impl Slot {
    /// The decoded image, when available.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            Slot::Ready(image) => Some(image),
            Slot::Loading | Slot::Broken(_) => None,
        }
    }
}

/// Messages emitted by the gallery grid and viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    ThumbnailPressed(usize),
    /// The backdrop around the viewer content was clicked.
    BackdropPressed,
    /// The close button was clicked.
    ClosePressed,
    /// The previous arrow was clicked.
    PreviousPressed,
    /// The next arrow was clicked.
    NextPressed,
    /// The image itself was clicked (toggles zoom).
    ImagePressed,
    /// An asset load finished.
    Loaded(usize, Result<ImageData, MediaError>),
}

/// Thumbnail grid plus full screen viewer.
#[derive(Debug)]
pub struct Gallery {
    entries: Vec<ImageEntry>,
    slots: Vec<Slot>,
    lightbox: Lightbox,
}

impl Gallery {
    /// Create a gallery over `entries`, sharing `lock` with other modals.
    #[must_use]
    pub fn new(entries: Vec<ImageEntry>, options: Options, lock: ScrollLock) -> Self {
        let slots = vec![Slot::Loading; entries.len()];
        let lightbox = Lightbox::with_lock(entries.len(), options, lock);
        Self {
            entries,
            slots,
            lightbox,
        }
    }

    /// Process a gallery message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::ThumbnailPressed(index) => self.lightbox.open(index),
            Message::BackdropPressed | Message::ClosePressed => self.lightbox.close(),
            Message::PreviousPressed => self.lightbox.previous(),
            Message::NextPressed => self.lightbox.next(),
            Message::ImagePressed => self.lightbox.toggle_zoom(),
            Message::Loaded(index, result) => self.store(index, result),
        }
    }

    fn store(&mut self, index: usize, result: Result<ImageData, MediaError>) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        match result {
            Ok(image) => {
                *slot = Slot::Ready(image);
                self.lightbox.mark_loaded(index);
            }
            Err(e) => {
                eprintln!("Gallery image {index} failed to load: {e}");
                *slot = Slot::Broken(e);
            }
        }
    }

    /// Route a key press to the viewer. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        self.lightbox.handle_key(key)
    }

    /// Swap in a new image list. The viewer closes and loading restarts.
    pub fn replace_entries(&mut self, entries: Vec<ImageEntry>) {
        self.lightbox.replace_images(entries.len());
        self.slots = vec![Slot::Loading; entries.len()];
        self.entries = entries;
    }

    /// The gallery entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Loading state for one slot.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The underlying viewer state.
    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Whether the viewer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: usize) -> Vec<ImageEntry> {
        (0..count)
            .map(|i| ImageEntry::new(format!("assets/content/gallery-{i}.png")))
            .collect()
    }

    fn image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0; 16])
    }

    fn open_gallery(count: usize, index: usize) -> Gallery {
        let mut gallery = Gallery::new(entries(count), Options::default(), ScrollLock::default());
        gallery.handle_message(Message::ThumbnailPressed(index));
        gallery
    }

    #[test]
    fn thumbnail_press_opens_viewer_at_index() {
        let gallery = open_gallery(4, 2);
        assert!(gallery.is_open());
        assert_eq!(gallery.lightbox().selected(), Some(2));
    }

    #[test]
    fn successful_load_fills_slot_and_marks_loaded() {
        let mut gallery = open_gallery(3, 0);
        gallery.handle_message(Message::Loaded(1, Ok(image())));

        assert!(gallery.slot(1).unwrap().image().is_some());
        assert!(gallery.lightbox().is_loaded(1));
    }

    #[test]
    fn failed_load_marks_slot_broken_and_viewer_stays_open() {
        let mut gallery = open_gallery(3, 1);
        gallery.handle_message(Message::Loaded(
            1,
            Err(MediaError::DecodeFailed("bad data".to_string())),
        ));

        assert!(matches!(gallery.slot(1), Some(Slot::Broken(_))));
        assert!(gallery.is_open());
        assert!(!gallery.lightbox().is_loaded(1));
    }

    #[test]
    fn broken_slot_keeps_the_failure_kind() {
        let mut gallery = open_gallery(2, 0);
        gallery.handle_message(Message::Loaded(
            0,
            Err(MediaError::Network("dns failure".to_string())),
        ));

        match gallery.slot(0) {
            Some(Slot::Broken(err)) => assert_eq!(err.i18n_key(), "error-asset-network"),
            other => panic!("expected a broken slot, got {other:?}"),
        }
    }

    #[test]
    fn load_result_for_unknown_index_is_ignored() {
        let mut gallery = open_gallery(2, 0);
        gallery.handle_message(Message::Loaded(9, Ok(image())));
        assert!(gallery.slot(9).is_none());
    }

    #[test]
    fn backdrop_and_close_button_both_close() {
        let mut gallery = open_gallery(3, 1);
        gallery.handle_message(Message::BackdropPressed);
        assert!(!gallery.is_open());

        gallery.handle_message(Message::ThumbnailPressed(1));
        gallery.handle_message(Message::ClosePressed);
        assert!(!gallery.is_open());
    }

    #[test]
    fn arrows_navigate_and_reset_zoom() {
        let mut gallery = open_gallery(3, 1);
        gallery.handle_message(Message::ImagePressed);
        assert!(gallery.lightbox().is_zoomed());

        gallery.handle_message(Message::NextPressed);
        assert_eq!(gallery.lightbox().selected(), Some(2));
        assert!(!gallery.lightbox().is_zoomed());

        gallery.handle_message(Message::PreviousPressed);
        assert_eq!(gallery.lightbox().selected(), Some(1));
    }

    #[test]
    fn image_press_ignored_when_zoom_disabled() {
        let options = Options {
            zoom: false,
            ..Options::default()
        };
        let mut gallery = Gallery::new(entries(3), options, ScrollLock::default());
        gallery.handle_message(Message::ThumbnailPressed(0));
        gallery.handle_message(Message::ImagePressed);
        assert!(!gallery.lightbox().is_zoomed());
    }

    #[test]
    fn escape_key_closes_through_delegation() {
        let mut gallery = open_gallery(3, 0);
        assert!(gallery.handle_key(KeyPress::Escape));
        assert!(!gallery.is_open());
    }

    #[test]
    fn replacing_entries_closes_viewer_and_resets_slots() {
        let mut gallery = open_gallery(3, 2);
        gallery.handle_message(Message::Loaded(0, Ok(image())));

        gallery.replace_entries(entries(5));

        assert!(!gallery.is_open());
        assert_eq!(gallery.entries().len(), 5);
        assert_eq!(gallery.lightbox().len(), 5);
        assert!(matches!(gallery.slot(0), Some(Slot::Loading)));
        assert!(!gallery.lightbox().is_loaded(0));
    }
}
