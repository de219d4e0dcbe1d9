use std::collections::BTreeSet;
use std::fmt;

use crate::view_model::{PageViewModel, VideoView};
use crate::{FrameCoalescer, PageConfig, ScrollMetrics};

/// Index of a non-hero section in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(pub usize);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section#{}", self.0)
    }
}

/// Which optional regions were found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub has_menu_toggle: bool,
    pub has_menu_panel: bool,
    pub has_main_nav: bool,
    pub has_scroll_top: bool,
    pub section_count: usize,
    pub has_video: bool,
}

/// Kinds of first user interaction that may unlock video playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interaction {
    Click,
    Scroll,
}

/// What caused a `play()` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTrigger {
    DataLoaded,
    Interaction(Interaction),
}

impl fmt::Display for PlayTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayTrigger::DataLoaded => write!(f, "data loaded"),
            PlayTrigger::Interaction(Interaction::Click) => write!(f, "first click"),
            PlayTrigger::Interaction(Interaction::Scroll) => write!(f, "first scroll"),
        }
    }
}

/// Result of a `play()` promise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Started,
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoStatus {
    /// No hero video on the page.
    #[default]
    Absent,
    Loading,
    Playing,
    /// The browser refused playback, typically an autoplay policy.
    Blocked,
    /// The source failed to load; the element is hidden for good.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct VideoState {
    pub(crate) status: VideoStatus,
    pub(crate) interactions_used: BTreeSet<Interaction>,
    pub(crate) attempts: u32,
    pub(crate) last_rejection: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    config: PageConfig,
    layout: PageLayout,
    started: bool,
    menu_open: bool,
    frames: FrameCoalescer,
    progress: f64,
    nav_scrolled: bool,
    scroll_top_visible: bool,
    revealed: BTreeSet<SectionId>,
    pub(crate) video: VideoState,
    dirty: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageLayout::default())
    }
}

impl PageState {
    pub fn new(layout: PageLayout) -> Self {
        Self::with_config(layout, PageConfig::default())
    }

    pub fn with_config(layout: PageLayout, config: PageConfig) -> Self {
        let video = VideoState {
            status: if layout.has_video {
                VideoStatus::Loading
            } else {
                VideoStatus::Absent
            },
            ..VideoState::default()
        };
        Self {
            config,
            layout,
            started: false,
            menu_open: false,
            frames: FrameCoalescer::new(),
            progress: 0.0,
            nav_scrolled: false,
            scroll_top_visible: false,
            revealed: BTreeSet::new(),
            video,
            dirty: false,
        }
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel {
            menu_open: self.menu_open,
            progress: self.progress,
            nav_scrolled: self.nav_scrolled,
            scroll_top_visible: self.scroll_top_visible,
            revealed_sections: self.revealed.iter().copied().collect(),
            video: VideoView {
                status: self.video.status,
                attempts: self.video.attempts,
                last_rejection: self.video.last_rejection.clone(),
            },
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    pub fn frames_run(&self) -> u64 {
        self.frames.frames_run()
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_started(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Outside clicks are only judged when both the toggle and the panel exist.
    pub(crate) fn has_menu(&self) -> bool {
        self.layout.has_menu_toggle && self.layout.has_menu_panel
    }

    pub(crate) fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.dirty = true;
    }

    pub(crate) fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.dirty = true;
        }
    }

    pub(crate) fn frames_mut(&mut self) -> &mut FrameCoalescer {
        &mut self.frames
    }

    /// Projects sampled geometry onto progress, nav and scroll-to-top state.
    pub(crate) fn apply_metrics(&mut self, metrics: ScrollMetrics) {
        let progress = metrics.progress();
        let nav_scrolled =
            self.layout.has_main_nav && metrics.scroll_top > self.config.nav_scrolled_after;
        let scroll_top_visible =
            self.layout.has_scroll_top && metrics.scroll_top > self.config.scroll_top_after;

        if progress != self.progress
            || nav_scrolled != self.nav_scrolled
            || scroll_top_visible != self.scroll_top_visible
        {
            self.dirty = true;
        }
        self.progress = progress;
        self.nav_scrolled = nav_scrolled;
        self.scroll_top_visible = scroll_top_visible;
    }

    /// Marks a section revealed; returns `false` if it already was or is unknown.
    pub(crate) fn reveal(&mut self, section: SectionId) -> bool {
        if section.0 >= self.layout.section_count {
            return false;
        }
        self.revealed.insert(section)
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }
}
