use crate::{AosConfig, PlayTrigger, SectionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Schedule one animation frame; the platform answers with `Msg::AnimationFrame`.
    RequestAnimationFrame,
    RevealSection(SectionId),
    /// Smoothly scroll the window back to the top.
    ScrollToTop,
    /// Drop the eager preload hint and force the video to reload its source.
    ReloadVideo,
    HideVideo { failed_source: Option<String> },
    /// Call `play()`; the platform answers with `Msg::PlaybackSettled`.
    PlayVideo { trigger: PlayTrigger },
    /// Initialize the animate-on-scroll library if the page loaded it.
    InitScrollAnimations(AosConfig),
    PreloadImage { href: String },
}
