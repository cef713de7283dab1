use scrapbook_core::LightboxView;
use web_sys::{Element, HtmlElement, HtmlImageElement, HtmlVideoElement};

use crate::dom::{ACTIVE_CLASS, ARIA_HIDDEN, BODY_OPEN_CLASS};
use crate::media::{play_detached, reset_video};

pub(crate) struct DomLightbox {
    body: Option<HtmlElement>,
    modal: Element,
    image: HtmlImageElement,
    video: HtmlVideoElement,
}

impl DomLightbox {
    pub(crate) fn new(
        body: Option<HtmlElement>,
        modal: Element,
        image: HtmlImageElement,
        video: HtmlVideoElement,
    ) -> Self {
        Self {
            body,
            modal,
            image,
            video,
        }
    }
}

impl LightboxView for DomLightbox {
    fn is_open(&self) -> bool {
        self.modal.get_attribute(ARIA_HIDDEN).as_deref() == Some("false")
    }

    fn open(&self) {
        let _ = self.modal.set_attribute(ARIA_HIDDEN, "false");
        if let Some(body) = &self.body {
            let _ = body.class_list().add_1(BODY_OPEN_CLASS);
        }
    }

    fn close_overlay(&self) {
        let _ = self.modal.set_attribute(ARIA_HIDDEN, "true");
        if let Some(body) = &self.body {
            let _ = body.class_list().remove_1(BODY_OPEN_CLASS);
        }
    }

    fn clear_media(&self) {
        let _ = self.image.class_list().remove_1(ACTIVE_CLASS);
        let _ = self.video.class_list().remove_1(ACTIVE_CLASS);
        let _ = self.image.remove_attribute("src");
        reset_video(&self.video);
    }

    fn load_image(&self, src: &str) {
        self.image.set_src(src);
        self.image.set_alt("");
        let _ = self.image.class_list().add_1(ACTIVE_CLASS);
    }

    fn load_video(&self, src: &str) {
        self.video.set_src(src);
        let _ = self.video.class_list().add_1(ACTIVE_CLASS);
    }

    fn play_video(&self) {
        play_detached(&self.video);
    }
}
