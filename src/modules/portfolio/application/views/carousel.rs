use serde::Serialize;
use utoipa::ToSchema;

/// Wrap-around cursor over an image gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImageCarousel {
    pub index: usize,
    pub len: usize,
}

impl ImageCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index` modulo the gallery length.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.go_to(index);
        carousel
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = if self.len == 0 { 0 } else { index % self.len };
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Detail overlay for one item, with its own carousel.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DetailModal<T> {
    selected: Option<T>,
    carousel: ImageCarousel,
}

impl<T> Default for DetailModal<T> {
    fn default() -> Self {
        Self {
            selected: None,
            carousel: ImageCarousel::default(),
        }
    }
}

impl<T> DetailModal<T> {
    pub fn open(&mut self, item: T, image_count: usize) {
        self.selected = Some(item);
        self.carousel = ImageCarousel::new(image_count);
    }

    /// Closing also rewinds the carousel.
    pub fn close(&mut self) {
        self.selected = None;
        self.carousel.reset();
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn carousel(&self) -> &ImageCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut ImageCarousel {
        &mut self.carousel
    }
}
