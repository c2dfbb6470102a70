//! Photo carousel cursor.

use super::Photo;

/// Cursor over a project's photos with wrap-around navigation.
///
/// An empty gallery has no current photo and navigation is a no-op.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    photos: &'a [Photo],
    index: usize,
}

impl<'a> Gallery<'a> {
    pub fn new(photos: &'a [Photo]) -> Self {
        Self { photos, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Navigation arrows are only shown for more than one photo.
    pub fn has_navigation(&self) -> bool {
        self.photos.len() > 1
    }

    pub fn current(&self) -> Option<&'a Photo> {
        self.photos.get(self.index)
    }

    /// Advances to the next photo, wrapping from last to first.
    pub fn next(&mut self) -> Option<&'a Photo> {
        if !self.is_empty() {
            self.index = if self.index + 1 >= self.photos.len() {
                0
            } else {
                self.index + 1
            };
        }
        self.current()
    }

    /// Steps back, wrapping from first to last.
    pub fn previous(&mut self) -> Option<&'a Photo> {
        if !self.is_empty() {
            self.index = if self.index == 0 {
                self.photos.len() - 1
            } else {
                self.index - 1
            };
        }
        self.current()
    }

    /// Jumps to a thumbnail. Out-of-range indices leave the cursor unchanged.
    pub fn go_to(&mut self, index: usize) -> Option<&'a Photo> {
        if index < self.photos.len() {
            self.index = index;
        }
        self.current()
    }
}
