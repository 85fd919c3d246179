use log::debug;

/// Position within one project's image list.
///
/// A fresh cursor is created every time a project page is entered, so the
/// gallery always opens on the first image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    position: usize,
    len: usize,
}

/// Gallery interactions coming from buttons, thumbnails or the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Next,
    Previous,
    Select(usize),
}

impl GalleryCursor {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Single-image projects get no prev/next controls and no thumbnail strip
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.position = (self.position + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.position = (self.position + self.len - 1) % self.len;
        }
    }

    pub fn select_at(&mut self, index: usize) {
        if index < self.len {
            self.position = index;
        } else {
            debug!("Ignoring gallery selection {} of {}", index, self.len);
        }
    }

    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Next => self.next(),
            GalleryAction::Previous => self.previous(),
            GalleryAction::Select(index) => self.select_at(index),
        }
    }

    /// "2 / 5"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.position + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut cursor = GalleryCursor::new(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.position(), 2);
        cursor.next();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut cursor = GalleryCursor::new(3);
        cursor.previous();
        assert_eq!(cursor.position(), 2);
        cursor.previous();
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_select_at() {
        let mut cursor = GalleryCursor::new(4);
        cursor.apply(GalleryAction::Select(3));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.counter_label(), "4 / 4");

        // Out of range selections leave the cursor alone
        cursor.apply(GalleryAction::Select(9));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_single_image_has_no_navigation() {
        let mut cursor = GalleryCursor::new(1);
        assert!(!cursor.has_navigation());
        cursor.next();
        assert_eq!(cursor.position(), 0);
        assert!(GalleryCursor::new(2).has_navigation());
    }

    #[test]
    fn test_empty_cursor_never_moves() {
        let mut cursor = GalleryCursor::new(0);
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.position(), 0);
    }
}
