pub const DEFAULT_DIMENSION: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_is_video(is_video: bool) -> Self {
        if is_video {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }

    pub fn media_tag(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EntryAttributes {
    pub width: Option<String>,
    pub height: Option<String>,
    pub is_video: bool,
    pub full_src: Option<String>,
    pub media_src: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub aspect_ratio: f64,
    pub kind: MediaKind,
    pub thumb_src: String,
    pub full_src: String,
}

impl GalleryItem {
    pub fn from_attributes(attrs: &EntryAttributes) -> Self {
        let width = parse_dimension(attrs.width.as_deref());
        let height = parse_dimension(attrs.height.as_deref());
        let thumb_src = attrs.media_src.clone().unwrap_or_default();
        let full_src = match attrs.full_src.as_deref() {
            Some(full) if !full.is_empty() => full.to_string(),
            _ => thumb_src.clone(),
        };
        Self {
            aspect_ratio: width / height,
            kind: MediaKind::from_is_video(attrs.is_video),
            thumb_src,
            full_src,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }
}

pub fn parse_dimension(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(DEFAULT_DIMENSION)
}

pub fn aspect_ratios(items: &[GalleryItem]) -> Vec<f64> {
    items.iter().map(|item| item.aspect_ratio).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(width: Option<&str>, height: Option<&str>) -> EntryAttributes {
        EntryAttributes {
            width: width.map(str::to_string),
            height: height.map(str::to_string),
            media_src: Some("thumbs/a.jpg".to_string()),
            ..EntryAttributes::default()
        }
    }

    #[test]
    fn aspect_ratio_from_hints() {
        let item = GalleryItem::from_attributes(&attrs(Some("1600"), Some("900")));
        assert!((item.aspect_ratio - 16.0 / 9.0).abs() < 1e-9);
        assert_eq!(item.kind, MediaKind::Image);
    }

    #[test]
    fn unusable_hints_fall_back_to_square() {
        for (w, h) in [
            (None, None),
            (Some(""), Some("")),
            (Some("wide"), Some("tall")),
            (Some("0"), Some("0")),
            (Some("-4"), Some("NaN")),
        ] {
            let item = GalleryItem::from_attributes(&attrs(w, h));
            assert_eq!(item.aspect_ratio, 1.0, "hints {w:?}x{h:?}");
        }
    }

    #[test]
    fn one_missing_hint_only_defaults_that_side() {
        let item = GalleryItem::from_attributes(&attrs(Some(" 300 "), None));
        assert_eq!(item.aspect_ratio, 300.0);
    }

    #[test]
    fn full_src_defaults_to_thumbnail() {
        let item = GalleryItem::from_attributes(&attrs(Some("1"), Some("1")));
        assert_eq!(item.thumb_src, "thumbs/a.jpg");
        assert_eq!(item.full_src, "thumbs/a.jpg");

        let mut with_full = attrs(Some("1"), Some("1"));
        with_full.full_src = Some("full/a.jpg".to_string());
        let item = GalleryItem::from_attributes(&with_full);
        assert_eq!(item.full_src, "full/a.jpg");

        let mut empty_full = attrs(Some("1"), Some("1"));
        empty_full.full_src = Some(String::new());
        assert_eq!(GalleryItem::from_attributes(&empty_full).full_src, "thumbs/a.jpg");
    }

    #[test]
    fn missing_media_leaves_sources_empty() {
        let item = GalleryItem::from_attributes(&EntryAttributes {
            is_video: true,
            ..EntryAttributes::default()
        });
        assert!(item.is_video());
        assert!(item.thumb_src.is_empty());
        assert!(item.full_src.is_empty());
    }
}
