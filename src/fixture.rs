use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{CONTAINER_ID, MODAL_ID};
use crate::renderer::LAYOUT_GLOBAL;

const STANDARD_GRID: &str = r#"
<figure class="jl-item" data-w="1000" data-h="1000"><img src="a.jpg"></figure>
<figure class="jl-item" data-w="1600" data-h="800" data-full="b-full.jpg"><img src="b.jpg"></figure>
<figure class="jl-item is-video" data-w="1280" data-h="720"><video src="c.mp4"></video></figure>
<figure class="jl-item is-video" data-w="1920" data-h="1080" data-full="d-full.mp4">
  <video src="d.mp4"></video>
  <button class="fs-btn" type="button"><span class="fs-icon">fs</span></button>
</figure>
"#;

const MODAL: &str = r#"
<div id="gallery-modal" aria-hidden="true">
  <div class="gm-backdrop"></div>
  <div class="gm-frame">
    <img class="gm-image" alt="placeholder">
    <video class="gm-video"></video>
  </div>
</div>
"#;

pub(crate) struct Fixture {
    host: HtmlElement,
}

impl Fixture {
    pub(crate) fn standard() -> Self {
        Self::with_grid(STANDARD_GRID)
    }

    pub(crate) fn with_grid(entries: &str) -> Self {
        let document = document();
        let host = document
            .create_element("div")
            .expect("create host")
            .dyn_into::<HtmlElement>()
            .expect("host is an HtmlElement");
        host.set_inner_html(&format!(
            r#"<div id="{CONTAINER_ID}" style="position: relative; width: 1000px;">{entries}</div>{MODAL}"#
        ));
        document
            .body()
            .expect("test page has a body")
            .append_child(&host)
            .expect("append host");
        Self { host }
    }

    pub(crate) fn container(&self) -> Element {
        document()
            .get_element_by_id(CONTAINER_ID)
            .expect("grid container")
    }

    pub(crate) fn modal(&self) -> Element {
        document().get_element_by_id(MODAL_ID).expect("modal")
    }

    pub(crate) fn query(&self, selector: &str) -> HtmlElement {
        self.host
            .query_selector(selector)
            .expect("valid selector")
            .expect("fixture element")
            .dyn_into::<HtmlElement>()
            .expect("HtmlElement")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.host.remove();
    }
}

pub(crate) fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("test page document")
}

pub(crate) fn window() -> Window {
    web_sys::window().expect("window")
}

// Fake `justifiedLayout` recording its JSON-encoded arguments.
const CALLS_GLOBAL: &str = "__scrapbookLayoutCalls";

pub(crate) fn install_fake_layout(body: &str) {
    let fake = Function::new_with_args(
        "items, config",
        &format!(
            "window.{CALLS_GLOBAL}.push([JSON.stringify(items), JSON.stringify(config)]); {body}"
        ),
    );
    let _ = Reflect::set(
        &window(),
        &JsValue::from_str(CALLS_GLOBAL),
        &Array::new(),
    );
    let _ = Reflect::set(&window(), &JsValue::from_str(LAYOUT_GLOBAL), &fake);
}

pub(crate) fn remove_fake_layout() {
    let _ = Reflect::delete_property(&window(), &JsValue::from_str(LAYOUT_GLOBAL));
    let _ = Reflect::delete_property(&window(), &JsValue::from_str(CALLS_GLOBAL));
}

pub(crate) fn recorded_calls() -> Vec<(String, String)> {
    let calls = Reflect::get(&window(), &JsValue::from_str(CALLS_GLOBAL))
        .map(|value| Array::from(&value))
        .expect("calls array");
    calls
        .iter()
        .map(|call| {
            let call = Array::from(&call);
            (
                call.get(0).as_string().unwrap_or_default(),
                call.get(1).as_string().unwrap_or_default(),
            )
        })
        .collect()
}
