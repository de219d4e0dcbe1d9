//! Page core: pure state machine behind the page interactivity layer.
mod config;
mod effect;
mod frame;
mod msg;
mod once;
mod scroll;
mod state;
mod update;
mod view_model;

pub use config::{AosConfig, ClassNames, PageConfig, RevealOptions, Selectors};
pub use effect::Effect;
pub use frame::FrameCoalescer;
pub use msg::Msg;
pub use once::FireOnce;
pub use scroll::{progress_ratio, ScrollMetrics};
pub use state::{
    Interaction, PageLayout, PageState, PlayTrigger, PlaybackOutcome, SectionId, VideoStatus,
};
pub use update::update;
pub use view_model::{PageViewModel, VideoView};
