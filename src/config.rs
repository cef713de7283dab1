use js_sys::Reflect;
use scrapbook_core::{ConfigOverrides, GalleryConfig};
use wasm_bindgen::JsValue;
use web_sys::Window;

const CONFIG_GLOBAL: &str = "__SCRAPBOOK_CONFIG";

fn read_number(source: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(source, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

pub(crate) fn read_overrides(window: &Window) -> ConfigOverrides {
    let Ok(value) = Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return ConfigOverrides::default();
    };
    if !value.is_object() {
        return ConfigOverrides::default();
    }
    ConfigOverrides {
        breakpoint_px: read_number(&value, "breakpoint"),
        compact_row_height: read_number(&value, "compactRowHeight"),
        compact_spacing: read_number(&value, "compactSpacing"),
        wide_row_height: read_number(&value, "wideRowHeight"),
        wide_spacing: read_number(&value, "wideSpacing"),
        swipe_threshold_px: read_number(&value, "swipeThreshold"),
    }
}

pub(crate) fn load_config(window: &Window) -> GalleryConfig {
    GalleryConfig::with_overrides(&read_overrides(window))
}
