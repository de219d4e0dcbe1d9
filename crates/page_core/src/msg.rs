use crate::{Interaction, PlayTrigger, PlaybackOutcome, ScrollMetrics, SectionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Document is ready and all listeners are wired.
    Ready,
    /// User clicked the hamburger toggle.
    MenuToggleClicked,
    /// User clicked one of the navigation links.
    NavLinkClicked,
    /// User clicked a call-to-action button inside the menu.
    CtaClicked,
    /// Any click on the document; `outside_menu` is true when the target is
    /// contained in neither the toggle nor the menu panel.
    DocumentClicked { outside_menu: bool },
    /// Raw scroll event from the window.
    Scrolled,
    /// A scheduled animation frame is running with freshly sampled geometry.
    AnimationFrame(ScrollMetrics),
    /// Intersection observer entry for a non-hero section.
    SectionIntersected {
        section: SectionId,
        is_intersecting: bool,
    },
    /// User activated the scroll-to-top control.
    ScrollTopClicked,
    /// The hero video reported a load error.
    VideoLoadFailed { source: Option<String> },
    /// The hero video has its first frame available.
    VideoDataLoaded,
    /// First click or first scroll on the document.
    FirstInteraction {
        kind: Interaction,
        video_paused: bool,
    },
    /// A `play()` attempt resolved.
    PlaybackSettled {
        trigger: PlayTrigger,
        outcome: PlaybackOutcome,
    },
}
