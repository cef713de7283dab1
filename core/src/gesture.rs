#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
}

impl Navigation {
    pub fn offset(self) -> i64 {
        match self {
            Navigation::Next => 1,
            Navigation::Previous => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Navigate(Navigation),
}

pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::Close),
        "ArrowRight" => Some(KeyCommand::Navigate(Navigation::Next)),
        "ArrowLeft" => Some(KeyCommand::Navigate(Navigation::Previous)),
        _ => None,
    }
}

pub fn swipe_navigation(dx: f64, threshold: f64) -> Option<Navigation> {
    if !dx.is_finite() || dx.abs() <= threshold {
        return None;
    }
    if dx < 0.0 {
        Some(Navigation::Next)
    } else {
        Some(Navigation::Previous)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the gesture at `x`. Tracking state is cleared whether or not the
    /// threshold was crossed.
    pub fn finish(&mut self, x: f64) -> Option<Navigation> {
        let start = self.start_x.take()?;
        swipe_navigation(x - start, self.threshold)
    }

    pub fn reset(&mut self) {
        self.start_x = None;
    }
}
