use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutProfile {
    pub target_row_height: f64,
    pub box_spacing: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub container_width: f64,
    pub target_row_height: f64,
    pub box_spacing: f64,
}

impl LayoutConfig {
    pub fn new(container_width: f64, profile: LayoutProfile) -> Self {
        Self {
            container_width,
            target_row_height: profile.target_row_height,
            box_spacing: profile.box_spacing,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JustifiedLayout {
    pub container_height: f64,
    pub boxes: Vec<LayoutBox>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("justified layout function is not available")]
    Unavailable,
    #[error("justified layout call failed: {0}")]
    Call(String),
    #[error("justified layout returned a malformed result: {0}")]
    Malformed(String),
    #[error("justified layout returned {found} boxes for {expected} items")]
    BoxCount { expected: usize, found: usize },
}

pub trait LayoutEngine {
    fn compute(
        &self,
        aspect_ratios: &[f64],
        config: &LayoutConfig,
    ) -> Result<JustifiedLayout, LayoutError>;
}

/// Runs one render pass worth of layout. `Ok(None)` means the container has no
/// width yet and the pass is skipped.
pub fn plan_layout<E: LayoutEngine + ?Sized>(
    engine: &E,
    aspect_ratios: &[f64],
    container_width: f64,
    profile: LayoutProfile,
) -> Result<Option<JustifiedLayout>, LayoutError> {
    if container_width <= 0.0 || !container_width.is_finite() {
        return Ok(None);
    }
    let config = LayoutConfig::new(container_width, profile);
    let layout = engine.compute(aspect_ratios, &config)?;
    if layout.boxes.len() != aspect_ratios.len() {
        return Err(LayoutError::BoxCount {
            expected: aspect_ratios.len(),
            found: layout.boxes.len(),
        });
    }
    Ok(Some(layout))
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn translate(layout_box: &LayoutBox) -> String {
    format!("translate({}px, {}px)", layout_box.left, layout_box.top)
}
