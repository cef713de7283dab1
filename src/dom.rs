use js_sys::Reflect;
use scrapbook_core::{EntryAttributes, GalleryItem, MediaKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

pub(crate) const CONTAINER_ID: &str = "grid";
pub(crate) const ENTRY_SELECTOR: &str = ".jl-item";
pub(crate) const VIDEO_CLASS: &str = "is-video";
pub(crate) const WIDTH_ATTR: &str = "data-w";
pub(crate) const HEIGHT_ATTR: &str = "data-h";
pub(crate) const FULL_SRC_ATTR: &str = "data-full";
pub(crate) const FULLSCREEN_BUTTON_SELECTOR: &str = ".fs-btn";
pub(crate) const VIDEO_ENTRY_SELECTOR: &str = ".jl-item.is-video";

pub(crate) const MODAL_ID: &str = "gallery-modal";
pub(crate) const BACKDROP_SELECTOR: &str = ".gm-backdrop";
pub(crate) const FRAME_SELECTOR: &str = ".gm-frame";
pub(crate) const IMAGE_SELECTOR: &str = ".gm-image";
pub(crate) const VIDEO_SELECTOR: &str = ".gm-video";
pub(crate) const ACTIVE_CLASS: &str = "is-active";
pub(crate) const BODY_OPEN_CLASS: &str = "is-lightbox-open";
pub(crate) const ARIA_HIDDEN: &str = "aria-hidden";

pub(crate) struct GalleryEntry {
    pub(crate) element: HtmlElement,
    pub(crate) item: GalleryItem,
}

pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query_as<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub(crate) fn document_loaded(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

pub(crate) fn read_entry_attributes(element: &Element) -> EntryAttributes {
    let is_video = element.class_list().contains(VIDEO_CLASS);
    let media_tag = MediaKind::from_is_video(is_video).media_tag();
    let media_src = element
        .query_selector(media_tag)
        .ok()
        .flatten()
        .and_then(|media| media.get_attribute("src"));
    EntryAttributes {
        width: element.get_attribute(WIDTH_ATTR),
        height: element.get_attribute(HEIGHT_ATTR),
        is_video,
        full_src: element.get_attribute(FULL_SRC_ATTR),
        media_src,
    }
}

pub(crate) fn extract_entries(container: &Element) -> Vec<GalleryEntry> {
    query_all(container, ENTRY_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let item = GalleryItem::from_attributes(&read_entry_attributes(&el));
            let element = el.dyn_into::<HtmlElement>().ok()?;
            Some(GalleryEntry { element, item })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn entries_follow_document_order() {
        let fixture = Fixture::standard();
        let entries = extract_entries(&fixture.container());
        assert_eq!(entries.len(), 4);

        let kinds: Vec<bool> = entries.iter().map(|entry| entry.item.is_video()).collect();
        assert_eq!(kinds, vec![false, false, true, true]);

        assert_eq!(entries[0].item.aspect_ratio, 1.0);
        assert_eq!(entries[1].item.aspect_ratio, 2.0);
        assert_eq!(entries[0].item.full_src, "a.jpg");
        assert_eq!(entries[1].item.full_src, "b-full.jpg");
        assert_eq!(entries[1].item.thumb_src, "b.jpg");
        assert_eq!(entries[3].item.thumb_src, "d.mp4");
        assert_eq!(entries[3].item.full_src, "d-full.mp4");
    }

    #[wasm_bindgen_test]
    fn entry_without_media_keeps_empty_sources() {
        let fixture = Fixture::with_grid(r#"<figure class="jl-item" data-w="x"></figure>"#);
        let entries = extract_entries(&fixture.container());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item.aspect_ratio, 1.0);
        assert!(entries[0].item.thumb_src.is_empty());
        assert!(entries[0].item.full_src.is_empty());
    }
}
