use crate::constants::MEDIA_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    #[allow(dead_code)]
    Video,
}

/// One slide of the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u32,
    pub source: String,
    pub kind: MediaKind,
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn photo(id: u32) -> Self {
        Self {
            id,
            source: format!("foto{}.jpg", id),
            kind: MediaKind::Image,
            caption: Some(format!("Recuerdo especial {}", id)),
        }
    }

    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.source)
    }

    /// Short kind label used in the header counter.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "Fotografía",
            MediaKind::Video => "Video",
        }
    }

    /// Second line of the caption overlay.
    pub fn subtitle(&self) -> String {
        match self.kind {
            MediaKind::Image => format!("Fotografía {}", self.id),
            MediaKind::Video => "Video especial".to_string(),
        }
    }
}

/// Ordered, immutable list of slides built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_items((1..=MEDIA_COUNT).map(MediaItem::photo).collect())
    }

    pub fn with_items(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_sixty_four_sequential_photos() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 64);
        for index in 0..catalog.len() {
            let item = catalog.get(index).unwrap();
            assert_eq!(item.id as usize, index + 1);
            assert_eq!(item.kind, MediaKind::Image);
        }
    }

    #[test]
    fn sources_and_captions_follow_id() {
        let catalog = Catalog::new();
        let first = catalog.get(0).unwrap();
        assert_eq!(first.source, "foto1.jpg");
        assert_eq!(first.caption(), "Recuerdo especial 1");
        assert_eq!(first.subtitle(), "Fotografía 1");

        let last = catalog.get(63).unwrap();
        assert_eq!(last.source, "foto64.jpg");
        assert_eq!(last.caption(), "Recuerdo especial 64");
        assert!(catalog.get(64).is_none());
    }

    #[test]
    fn video_items_use_video_labels() {
        let item = MediaItem {
            id: 7,
            source: "clip.mp4".to_string(),
            kind: MediaKind::Video,
            caption: None,
        };
        assert_eq!(item.kind_label(), "Video");
        assert_eq!(item.subtitle(), "Video especial");
        assert_eq!(item.caption(), "clip.mp4");
    }
}
