#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Ms,
}

impl FullscreenApi {
    pub const PROBE_ORDER: [FullscreenApi; 3] =
        [FullscreenApi::Standard, FullscreenApi::Webkit, FullscreenApi::Ms];

    pub fn method_name(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Webkit => "webkitRequestFullscreen",
            FullscreenApi::Ms => "msRequestFullscreen",
        }
    }

    pub fn probe(mut supports: impl FnMut(&str) -> bool) -> Option<Self> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|api| supports(api.method_name()))
    }
}
