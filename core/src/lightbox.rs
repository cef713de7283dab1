use std::cell::Cell;

use crate::gesture::{KeyCommand, Navigation};
use crate::item::{GalleryItem, MediaKind};

/// Presentation side of the lightbox overlay.
///
/// `is_open` is the source of truth for the open/closed state; the controller
/// never caches it.
pub trait LightboxView {
    fn is_open(&self) -> bool;
    fn open(&self);
    fn close_overlay(&self);
    /// Deactivates both media slots, drops their sources and stops video playback.
    /// Must be safe to call repeatedly.
    fn clear_media(&self);
    fn load_image(&self, src: &str);
    fn load_video(&self, src: &str);
    fn play_video(&self);
}

pub fn normalize_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(index.rem_euclid(len as i64) as usize)
}

pub struct Lightbox<V> {
    items: Vec<GalleryItem>,
    view: V,
    current: Cell<usize>,
}

impl<V: LightboxView> Lightbox<V> {
    pub fn new(items: Vec<GalleryItem>, view: V) -> Self {
        Self {
            items,
            view,
            current: Cell::new(0),
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    pub fn is_open(&self) -> bool {
        self.view.is_open()
    }

    pub fn show(&self, index: i64) -> bool {
        let Some(index) = normalize_index(index, self.items.len()) else {
            return false;
        };
        self.current.set(index);
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.full_src.is_empty() {
            return false;
        }

        self.view.clear_media();
        match item.kind {
            MediaKind::Video => {
                self.view.load_video(&item.full_src);
                self.view.open();
                self.view.play_video();
            }
            MediaKind::Image => {
                self.view.load_image(&item.full_src);
                self.view.open();
            }
        }
        true
    }

    pub fn navigate(&self, navigation: Navigation) -> bool {
        self.show(self.current.get() as i64 + navigation.offset())
    }

    pub fn next(&self) -> bool {
        self.navigate(Navigation::Next)
    }

    pub fn previous(&self) -> bool {
        self.navigate(Navigation::Previous)
    }

    pub fn close(&self) {
        self.view.close_overlay();
        self.view.clear_media();
    }

    pub fn handle_key(&self, command: KeyCommand) -> bool {
        if !self.is_open() {
            return false;
        }
        match command {
            KeyCommand::Close => self.close(),
            KeyCommand::Navigate(navigation) => {
                self.navigate(navigation);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_index(0, 3), Some(0));
        assert_eq!(normalize_index(3, 3), Some(0));
        assert_eq!(normalize_index(4, 3), Some(1));
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(-4, 3), Some(2));
        assert_eq!(normalize_index(7, 0), None);
    }
}
