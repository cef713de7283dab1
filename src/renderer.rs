use gloo::console;
use js_sys::{Array, Function, Object, Reflect};
use scrapbook_core::{
    plan_layout, px, translate, GalleryConfig, JustifiedLayout, LayoutBox, LayoutConfig,
    LayoutEngine, LayoutError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlVideoElement, Window};

use crate::dom::query_all;
use crate::media::{play_detached, prepare_autoplay};

pub(crate) const LAYOUT_GLOBAL: &str = "justifiedLayout";

pub(crate) struct JsJustifiedLayout {
    window: Window,
}

impl JsJustifiedLayout {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }

    fn function(&self) -> Option<Function> {
        Reflect::get(&self.window, &JsValue::from_str(LAYOUT_GLOBAL))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }
}

impl LayoutEngine for JsJustifiedLayout {
    fn compute(
        &self,
        aspect_ratios: &[f64],
        config: &LayoutConfig,
    ) -> Result<JustifiedLayout, LayoutError> {
        let layout = self.function().ok_or(LayoutError::Unavailable)?;
        let result = layout
            .call2(
                &JsValue::NULL,
                &layout_input(aspect_ratios),
                &layout_options(config),
            )
            .map_err(|err| LayoutError::Call(format!("{err:?}")))?;
        read_layout(&result)
    }
}

fn set_number(target: &Object, key: &str, value: f64) {
    let _ = Reflect::set(target, &JsValue::from_str(key), &JsValue::from_f64(value));
}

fn get_number(source: &JsValue, key: &str) -> Result<f64, LayoutError> {
    Reflect::get(source, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .ok_or_else(|| LayoutError::Malformed(format!("missing numeric `{key}`")))
}

fn layout_input(aspect_ratios: &[f64]) -> Array {
    aspect_ratios
        .iter()
        .map(|ratio| {
            let entry = Object::new();
            set_number(&entry, "aspectRatio", *ratio);
            JsValue::from(entry)
        })
        .collect()
}

fn layout_options(config: &LayoutConfig) -> Object {
    let options = Object::new();
    set_number(&options, "containerWidth", config.container_width);
    set_number(&options, "targetRowHeight", config.target_row_height);
    set_number(&options, "boxSpacing", config.box_spacing);
    options
}

fn read_layout(result: &JsValue) -> Result<JustifiedLayout, LayoutError> {
    if !result.is_object() {
        return Err(LayoutError::Malformed("result is not an object".to_string()));
    }
    let container_height = get_number(result, "containerHeight")?;
    let boxes = Reflect::get(result, &JsValue::from_str("boxes"))
        .ok()
        .filter(Array::is_array)
        .map(|value| Array::from(&value))
        .ok_or_else(|| LayoutError::Malformed("missing `boxes` array".to_string()))?;
    let boxes = boxes
        .iter()
        .map(|value| {
            Ok(LayoutBox {
                left: get_number(&value, "left")?,
                top: get_number(&value, "top")?,
                width: get_number(&value, "width")?,
                height: get_number(&value, "height")?,
            })
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;
    Ok(JustifiedLayout {
        container_height,
        boxes,
    })
}

pub(crate) struct LayoutRenderer {
    window: Window,
    container: HtmlElement,
    entries: Vec<HtmlElement>,
    aspect_ratios: Vec<f64>,
    config: GalleryConfig,
    engine: Box<dyn LayoutEngine>,
}

impl LayoutRenderer {
    pub(crate) fn new(
        window: Window,
        container: HtmlElement,
        entries: Vec<HtmlElement>,
        aspect_ratios: Vec<f64>,
        config: GalleryConfig,
    ) -> Self {
        let engine = Box::new(JsJustifiedLayout::new(window.clone()));
        Self {
            window,
            container,
            entries,
            aspect_ratios,
            config,
            engine,
        }
    }

    pub(crate) fn entries(&self) -> &[HtmlElement] {
        &self.entries
    }

    pub(crate) fn render(&self) {
        let container_width = f64::from(self.container.client_width());
        let profile = self.config.profile(self.is_compact_viewport());
        match plan_layout(
            self.engine.as_ref(),
            &self.aspect_ratios,
            container_width,
            profile,
        ) {
            Ok(Some(layout)) => {
                self.apply(&layout);
                self.autoplay_videos();
            }
            Ok(None) => {}
            Err(LayoutError::Unavailable) => {
                console::error!("justifiedLayout not found; layout skipped");
            }
            Err(err) => {
                console::warn!("layout skipped", err.to_string());
            }
        }
    }

    fn is_compact_viewport(&self) -> bool {
        let query = self.config.compact_media_query();
        if let Ok(Some(list)) = self.window.match_media(&query) {
            return list.matches();
        }
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map(|width| self.config.is_compact_width(width))
            .unwrap_or(false)
    }

    fn apply(&self, layout: &JustifiedLayout) {
        let _ = self
            .container
            .style()
            .set_property("height", &px(layout.container_height));
        for (element, layout_box) in self.entries.iter().zip(&layout.boxes) {
            let style = element.style();
            let _ = style.set_property("transform", &translate(layout_box));
            let _ = style.set_property("width", &px(layout_box.width));
            let _ = style.set_property("height", &px(layout_box.height));
        }
    }

    fn autoplay_videos(&self) {
        for element in query_all(&self.container, "video") {
            let Ok(video) = element.dyn_into::<HtmlVideoElement>() else {
                continue;
            };
            prepare_autoplay(&video);
            play_detached(&video);
        }
    }
}
