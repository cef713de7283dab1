use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use scrapbook_core::{aspect_ratios, FullscreenApi, GalleryConfig, Lightbox, SwipeTracker};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlVideoElement, Window};

use crate::config::load_config;
use crate::dom::{
    extract_entries, query_as, BACKDROP_SELECTOR, CONTAINER_ID, FRAME_SELECTOR, IMAGE_SELECTOR,
    MODAL_ID, VIDEO_SELECTOR,
};
use crate::fullscreen::probe_fullscreen;
use crate::input;
use crate::lightbox::DomLightbox;
use crate::renderer::LayoutRenderer;

#[derive(Debug, Error)]
pub(crate) enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("#{0} not found")]
    MissingAnchor(&'static str),
    #[error("{0} not found inside the lightbox modal")]
    MissingModalPart(&'static str),
}

thread_local! {
    static GALLERY: RefCell<Option<Rc<Gallery>>> = RefCell::new(None);
}

pub(crate) struct Gallery {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) renderer: LayoutRenderer,
    pub(crate) lightbox: Lightbox<DomLightbox>,
    pub(crate) fullscreen: Option<FullscreenApi>,
    pub(crate) backdrop: Element,
    pub(crate) frame: Element,
    pub(crate) touch: RefCell<SwipeTracker>,
    pub(crate) drag: RefCell<SwipeTracker>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Gallery {
    pub(crate) fn new(window: Window, config: GalleryConfig) -> Result<Rc<Self>, MountError> {
        let document = window.document().ok_or(MountError::NoDocument)?;
        let container = document
            .get_element_by_id(CONTAINER_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(MountError::MissingAnchor(CONTAINER_ID))?;
        let modal = document
            .get_element_by_id(MODAL_ID)
            .ok_or(MountError::MissingAnchor(MODAL_ID))?;
        let backdrop = query_as::<Element>(&modal, BACKDROP_SELECTOR)
            .ok_or(MountError::MissingModalPart(BACKDROP_SELECTOR))?;
        let frame = query_as::<Element>(&modal, FRAME_SELECTOR)
            .ok_or(MountError::MissingModalPart(FRAME_SELECTOR))?;
        let image = query_as::<HtmlImageElement>(&modal, IMAGE_SELECTOR)
            .ok_or(MountError::MissingModalPart(IMAGE_SELECTOR))?;
        let video = query_as::<HtmlVideoElement>(&modal, VIDEO_SELECTOR)
            .ok_or(MountError::MissingModalPart(VIDEO_SELECTOR))?;

        let (elements, items): (Vec<_>, Vec<_>) = extract_entries(&container)
            .into_iter()
            .map(|entry| (entry.element, entry.item))
            .unzip();
        let ratios = aspect_ratios(&items);

        let threshold = config.swipe_threshold_px;
        let renderer =
            LayoutRenderer::new(window.clone(), container, elements, ratios, config);
        let view = DomLightbox::new(document.body(), modal, image, video);
        let fullscreen = probe_fullscreen(&document);

        let gallery = Rc::new(Self {
            window,
            document,
            renderer,
            lightbox: Lightbox::new(items, view),
            fullscreen,
            backdrop,
            frame,
            touch: RefCell::new(SwipeTracker::new(threshold)),
            drag: RefCell::new(SwipeTracker::new(threshold)),
            listeners: RefCell::new(Vec::new()),
        });
        let listeners = input::install(&gallery);
        *gallery.listeners.borrow_mut() = listeners;
        Ok(gallery)
    }

    pub(crate) fn render(&self) {
        self.renderer.render();
    }

    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.lightbox.items().len()
    }
}

pub(crate) fn mount() {
    let Some(window) = web_sys::window() else {
        console::log!("scrapbook inactive:", MountError::NoWindow.to_string());
        return;
    };
    let config = load_config(&window);
    match Gallery::new(window, config) {
        Ok(gallery) => {
            console::log!("scrapbook mounted", gallery.entry_count() as u32, "entries");
            GALLERY.with(|slot| {
                if let Some(previous) = slot.borrow_mut().replace(gallery) {
                    previous.detach();
                }
            });
        }
        Err(err) => {
            console::log!("scrapbook inactive:", err.to_string());
        }
    }
}
