use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};

pub(crate) fn discard_promise(promise: Promise) {
    spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}

pub(crate) fn play_detached(media: &HtmlMediaElement) {
    if let Ok(promise) = media.play() {
        discard_promise(promise);
    }
}

pub(crate) fn prepare_autoplay(video: &HtmlVideoElement) {
    video.set_muted(true);
    video.set_loop(true);
    let _ = Reflect::set(video, &JsValue::from_str("playsInline"), &JsValue::TRUE);
    let _ = video.set_attribute("playsinline", "");
}

pub(crate) fn reset_video(video: &HtmlVideoElement) {
    let _ = video.pause();
    let _ = video.remove_attribute("src");
    video.load();
}
