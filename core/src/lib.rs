pub mod config;
pub mod fullscreen;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod lightbox;

pub use config::{ConfigOverrides, GalleryConfig, COMPACT_PROFILE, WIDE_PROFILE};
pub use fullscreen::FullscreenApi;
pub use gesture::{key_command, swipe_navigation, KeyCommand, Navigation, SwipeTracker};
pub use item::{aspect_ratios, parse_dimension, EntryAttributes, GalleryItem, MediaKind};
pub use layout::{
    plan_layout, px, translate, JustifiedLayout, LayoutBox, LayoutConfig, LayoutEngine,
    LayoutError, LayoutProfile,
};
pub use lightbox::{normalize_index, Lightbox, LightboxView};
