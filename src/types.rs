//! Shared types passed from the content provider into composition.

/// What a page exposes for sharing.
///
/// Supplied fresh per render by the content provider. `excerpt` and
/// `image_url` may be empty; every channel omits the query parameter an empty
/// field would have filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMetadata {
    /// Absolute URL of the page.
    pub permalink: String,
    /// Plain-text title.
    pub title: String,
    /// Plain-text summary, possibly empty.
    pub excerpt: String,
    /// Absolute URL of the featured image, or empty.
    pub image_url: String,
}

impl ContentMetadata {
    pub fn new(permalink: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            permalink: permalink.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}
