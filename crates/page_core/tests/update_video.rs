use std::sync::Once;

use page_core::{
    update, Effect, Interaction, Msg, PageLayout, PageState, PlayTrigger, PlaybackOutcome,
    VideoStatus,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(page_logging::initialize_for_tests);
}

fn video_page() -> PageState {
    PageState::new(PageLayout {
        has_video: true,
        ..PageLayout::default()
    })
}

fn play_effects(effects: &[Effect]) -> Vec<PlayTrigger> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::PlayVideo { trigger } => Some(*trigger),
            _ => None,
        })
        .collect()
}

fn first_click(state: PageState, video_paused: bool) -> (PageState, Vec<Effect>) {
    update(
        state,
        Msg::FirstInteraction {
            kind: Interaction::Click,
            video_paused,
        },
    )
}

#[test]
fn data_loaded_attempts_playback() {
    init_logging();
    let (state, effects) = update(video_page(), Msg::VideoDataLoaded);

    assert_eq!(play_effects(&effects), vec![PlayTrigger::DataLoaded]);
    assert_eq!(state.view().video.attempts, 1);

    let (state, effects) = update(
        state,
        Msg::PlaybackSettled {
            trigger: PlayTrigger::DataLoaded,
            outcome: PlaybackOutcome::Started,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().video.status, VideoStatus::Playing);
}

#[test]
fn rejected_autoplay_is_absorbed_and_first_click_retries_once() {
    init_logging();
    let (state, _) = update(video_page(), Msg::VideoDataLoaded);
    let (state, effects) = update(
        state,
        Msg::PlaybackSettled {
            trigger: PlayTrigger::DataLoaded,
            outcome: PlaybackOutcome::Rejected("NotAllowedError".to_string()),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.video.status, VideoStatus::Blocked);
    assert_eq!(view.video.last_rejection.as_deref(), Some("NotAllowedError"));

    let (state, effects) = first_click(state, true);
    assert_eq!(
        play_effects(&effects),
        vec![PlayTrigger::Interaction(Interaction::Click)]
    );

    let (state, effects) = first_click(state, true);
    assert!(effects.is_empty());
    assert_eq!(state.view().video.attempts, 2);
}

#[test]
fn click_and_scroll_each_fire_at_most_once() {
    init_logging();
    let (state, click) = first_click(video_page(), true);
    let (state, scroll) = update(
        state,
        Msg::FirstInteraction {
            kind: Interaction::Scroll,
            video_paused: true,
        },
    );
    let (state, again) = update(
        state,
        Msg::FirstInteraction {
            kind: Interaction::Scroll,
            video_paused: true,
        },
    );

    assert_eq!(click.len(), 1);
    assert_eq!(scroll.len(), 1);
    assert!(again.is_empty());
    assert_eq!(state.view().video.attempts, 2);
}

#[test]
fn interaction_on_playing_video_does_nothing() {
    init_logging();
    let (state, effects) = first_click(video_page(), false);

    assert!(effects.is_empty());
    // The click trigger is spent even though nothing was played.
    let (_, effects) = first_click(state, true);
    assert!(effects.is_empty());
}

#[test]
fn interaction_before_data_loaded_still_plays() {
    init_logging();
    let (state, effects) = first_click(video_page(), true);
    assert_eq!(play_effects(&effects).len(), 1);

    let (state, effects) = update(state, Msg::VideoDataLoaded);
    assert_eq!(play_effects(&effects), vec![PlayTrigger::DataLoaded]);
    assert_eq!(state.view().video.attempts, 2);
}

#[test]
fn load_failure_hides_video_and_stops_attempts() {
    init_logging();
    let (state, effects) = update(
        video_page(),
        Msg::VideoLoadFailed {
            source: Some("./Videos/hero.mp4".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::HideVideo {
            failed_source: Some("./Videos/hero.mp4".to_string()),
        }]
    );

    let (state, effects) = update(state, Msg::VideoLoadFailed { source: None });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::VideoDataLoaded);
    assert!(effects.is_empty());
    let (state, effects) = first_click(state, true);
    assert!(effects.is_empty());

    // A late promise result cannot resurrect a failed video.
    let (state, _) = update(
        state,
        Msg::PlaybackSettled {
            trigger: PlayTrigger::DataLoaded,
            outcome: PlaybackOutcome::Started,
        },
    );
    assert_eq!(state.view().video.status, VideoStatus::Failed);
}

#[test]
fn pages_without_video_ignore_media_messages() {
    init_logging();
    let state = PageState::new(PageLayout::default());
    let (state, loaded) = update(state, Msg::VideoDataLoaded);
    let (state, failed) = update(state, Msg::VideoLoadFailed { source: None });
    let (state, clicked) = first_click(state, true);

    assert!(loaded.is_empty());
    assert!(failed.is_empty());
    assert!(clicked.is_empty());
    assert_eq!(state.view().video.status, VideoStatus::Absent);
}
