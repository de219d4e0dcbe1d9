use crate::{SectionId, VideoStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub menu_open: bool,
    /// Scroll progress in `[0, 1]`.
    pub progress: f64,
    pub nav_scrolled: bool,
    pub scroll_top_visible: bool,
    pub revealed_sections: Vec<SectionId>,
    pub video: VideoView,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoView {
    pub status: VideoStatus,
    pub attempts: u32,
    pub last_rejection: Option<String>,
}
