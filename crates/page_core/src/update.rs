use crate::{Effect, Msg, PageState, PlayTrigger, PlaybackOutcome, VideoStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::Ready => {
            if !state.mark_started() {
                return (state, Vec::new());
            }
            let config = state.config();
            let mut effects = Vec::with_capacity(2 + config.preload_images.len());
            if state.layout().has_video {
                effects.push(Effect::ReloadVideo);
            }
            effects.push(Effect::InitScrollAnimations(config.aos.clone()));
            for href in &config.preload_images {
                effects.push(Effect::PreloadImage {
                    href: (*href).to_owned(),
                });
            }
            effects
        }
        Msg::MenuToggleClicked => {
            if state.layout().has_menu_toggle {
                state.toggle_menu();
            }
            Vec::new()
        }
        Msg::NavLinkClicked | Msg::CtaClicked => {
            state.close_menu();
            Vec::new()
        }
        Msg::DocumentClicked { outside_menu } => {
            if outside_menu && state.has_menu() {
                state.close_menu();
            }
            Vec::new()
        }
        Msg::Scrolled => {
            if state.frames_mut().request() {
                vec![Effect::RequestAnimationFrame]
            } else {
                Vec::new()
            }
        }
        Msg::AnimationFrame(metrics) => {
            // Clear the pending flag before any work so scrolls during this
            // frame schedule the next one.
            state.frames_mut().begin_frame();
            state.apply_metrics(metrics);
            Vec::new()
        }
        Msg::SectionIntersected {
            section,
            is_intersecting,
        } => {
            if is_intersecting && state.reveal(section) {
                vec![Effect::RevealSection(section)]
            } else {
                Vec::new()
            }
        }
        Msg::ScrollTopClicked => {
            if state.layout().has_scroll_top {
                vec![Effect::ScrollToTop]
            } else {
                Vec::new()
            }
        }
        Msg::VideoLoadFailed { source } => match state.video.status {
            VideoStatus::Absent | VideoStatus::Failed => Vec::new(),
            _ => {
                state.video.status = VideoStatus::Failed;
                vec![Effect::HideVideo {
                    failed_source: source,
                }]
            }
        },
        Msg::VideoDataLoaded => {
            if can_attempt_playback(&state) {
                state.video.attempts += 1;
                vec![Effect::PlayVideo {
                    trigger: PlayTrigger::DataLoaded,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::FirstInteraction { kind, video_paused } => {
            if state.video.status == VideoStatus::Absent
                || !state.video.interactions_used.insert(kind)
            {
                return (state, Vec::new());
            }
            if video_paused && can_attempt_playback(&state) {
                state.video.attempts += 1;
                vec![Effect::PlayVideo {
                    trigger: PlayTrigger::Interaction(kind),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::PlaybackSettled { outcome, .. } => {
            if state.video.status != VideoStatus::Failed {
                match outcome {
                    PlaybackOutcome::Started => {
                        state.video.status = VideoStatus::Playing;
                    }
                    PlaybackOutcome::Rejected(reason) => {
                        state.video.status = VideoStatus::Blocked;
                        state.video.last_rejection = Some(reason);
                    }
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn can_attempt_playback(state: &PageState) -> bool {
    !matches!(
        state.video.status,
        VideoStatus::Absent | VideoStatus::Failed
    )
}
