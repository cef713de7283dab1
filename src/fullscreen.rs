use js_sys::{Function, Promise, Reflect};
use scrapbook_core::FullscreenApi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlVideoElement};

use crate::dom::{closest, query_as, FULLSCREEN_BUTTON_SELECTOR, VIDEO_ENTRY_SELECTOR};
use crate::media::{discard_promise, play_detached};

pub(crate) fn probe_fullscreen(document: &Document) -> Option<FullscreenApi> {
    let probe = document.create_element("video").ok()?;
    FullscreenApi::probe(|method| {
        Reflect::get(&probe, &JsValue::from_str(method))
            .map(|value| value.is_function())
            .unwrap_or(false)
    })
}

pub(crate) fn request_fullscreen(api: FullscreenApi, element: &Element) {
    let Ok(method) = Reflect::get(element, &JsValue::from_str(api.method_name())) else {
        return;
    };
    let Ok(method) = method.dyn_into::<Function>() else {
        return;
    };
    let Ok(result) = method.call0(element) else {
        return;
    };
    if let Ok(promise) = result.dyn_into::<Promise>() {
        discard_promise(promise);
    }
}

pub(crate) fn handle_fullscreen_click(api: Option<FullscreenApi>, target: &Element) {
    let Some(button) = closest(target, FULLSCREEN_BUTTON_SELECTOR) else {
        return;
    };
    let Some(entry) = closest(&button, VIDEO_ENTRY_SELECTOR) else {
        return;
    };
    let Some(video) = query_as::<HtmlVideoElement>(&entry, "video") else {
        return;
    };
    if let Some(api) = api {
        request_fullscreen(api, &video);
    }
    play_detached(&video);
}
