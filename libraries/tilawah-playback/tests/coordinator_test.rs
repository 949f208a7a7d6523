//! Integration tests for the audio coordinator
//!
//! Drive the coordinator through the scripted backend and check what the
//! backend actually saw: clip creation, pause/rewind, release.

mod common;

use common::{al_falaq, al_ikhlas, coordinator, play_confirmed, verse_url, MockBackend};
use tilawah_playback::{ClipEvent, PlaybackEvent, PlaybackState};

// ============================================================================
// play()
// ============================================================================

mod play {
    use super::*;

    #[test]
    fn starts_in_loading_until_confirmed() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());

        assert_eq!(coordinator.state(), PlaybackState::Loading);
        assert!(!coordinator.is_playing());
        assert_eq!(coordinator.current_verse_number(), Some(1));
        assert_eq!(coordinator.current_chapter().map(|c| c.number), Some(112));
        assert_eq!(coordinator.chapter_verses().map(|v| v.len()), Some(4));

        assert_eq!(coordinator.pump(), 1);
        assert_eq!(coordinator.state(), PlaybackState::Playing);
        assert!(coordinator.is_playing());
    }

    #[test]
    fn switching_verse_leaves_exactly_one_clip() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        let first = backend.last_clip().id;
        play_confirmed(&mut coordinator, &chapter, &verses, 3);

        let old = backend.clip(first);
        assert_eq!(old.pause_calls, 1);
        assert_eq!(old.rewind_calls, 1);
        assert!(old.released);

        assert_eq!(backend.live_count(), 1);
        assert_eq!(backend.last_clip().url, verse_url(6224));
        assert_eq!(coordinator.active_clip_id(), Some(backend.last_clip().id));
        assert_eq!(coordinator.current_verse_number(), Some(3));
        assert!(coordinator.is_playing());
    }

    #[test]
    fn switching_chapter_replaces_snapshot() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (ikhlas, ikhlas_verses) = al_ikhlas();
        let (falaq, falaq_verses) = al_falaq();

        play_confirmed(&mut coordinator, &ikhlas, &ikhlas_verses, 2);
        play_confirmed(&mut coordinator, &falaq, &falaq_verses, 2);

        assert_eq!(coordinator.current_chapter().map(|c| c.number), Some(113));
        assert_eq!(coordinator.chapter_verses().map(|v| v.len()), Some(5));
        assert_eq!(backend.live_count(), 1);
        assert_eq!(backend.sounding_count(), 1);
    }

    #[test]
    fn same_verse_twice_stops() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
        assert!(coordinator.current_chapter().is_none());
        assert_eq!(backend.clips().len(), 1, "no new clip for the second tap");
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn same_verse_number_in_other_chapter_switches() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (ikhlas, ikhlas_verses) = al_ikhlas();
        let (falaq, falaq_verses) = al_falaq();

        play_confirmed(&mut coordinator, &ikhlas, &ikhlas_verses, 1);
        play_confirmed(&mut coordinator, &falaq, &falaq_verses, 1);

        assert!(coordinator.is_playing());
        assert!(coordinator.is_current(113, 1));
        assert_eq!(backend.clips().len(), 2);
    }

    #[test]
    fn same_verse_while_paused_still_stops() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 2);
        coordinator.toggle_play_pause();
        coordinator.pump();
        assert_eq!(coordinator.state(), PlaybackState::Paused);

        coordinator.play(&verse_url(6223), 2, &chapter, verses.clone());
        assert_eq!(coordinator.state(), PlaybackState::Idle);
    }

    #[test]
    fn replay_after_stop_starts_again() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.stop();
        play_confirmed(&mut coordinator, &chapter, &verses, 1);

        assert!(coordinator.is_playing());
        assert_eq!(backend.clips().len(), 2);
    }

    #[test]
    fn load_failure_collapses_to_idle() {
        let backend = MockBackend::new();
        backend.fail_load_for(&verse_url(6223));
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.drain_events();
        coordinator.play(&verse_url(6223), 2, &chapter, verses.clone());

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
        assert!(coordinator.current_chapter().is_none());
        assert!(coordinator.active_clip_id().is_none());
        assert_eq!(backend.live_count(), 0);

        let events = coordinator.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::PlaybackFailed { .. })));
    }

    #[test]
    fn start_failure_releases_new_clip() {
        let backend = MockBackend::new();
        backend.fail_play_for(&verse_url(6222));
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert_eq!(backend.clips().len(), 1);
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn async_failure_clears_state() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());
        let id = backend.last_clip().id;
        backend.emit(id, ClipEvent::Failed("MEDIA_ERR_NETWORK".to_string()));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
        assert!(backend.clip(id).released);
    }
}

// ============================================================================
// togglePlayPause / stop / toggleAutoplay
// ============================================================================

mod controls {
    use super::*;

    #[test]
    fn toggle_without_clip_is_noop() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);

        coordinator.toggle_play_pause();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(!coordinator.has_pending_events());
    }

    #[test]
    fn toggle_pauses_and_resumes_through_confirmations() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);

        coordinator.toggle_play_pause();
        assert!(coordinator.is_playing(), "state waits for the clip");
        coordinator.pump();
        assert_eq!(coordinator.state(), PlaybackState::Paused);
        assert_eq!(coordinator.current_verse_number(), Some(1));

        coordinator.toggle_play_pause();
        coordinator.pump();
        assert!(coordinator.is_playing());

        let clip = backend.last_clip();
        assert_eq!(clip.play_calls, 2);
        assert_eq!(clip.pause_calls, 1);
        assert_eq!(backend.clips().len(), 1);
    }

    #[test]
    fn failed_resume_keeps_paused() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.toggle_play_pause();
        coordinator.pump();

        backend.fail_play_for(&verse_url(6222));
        coordinator.toggle_play_pause();
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Paused);
        assert!(!coordinator.is_playing());
    }

    #[test]
    fn stop_clears_identity_fields() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 3);
        let id = backend.last_clip().id;
        coordinator.stop();

        assert!(coordinator.current_verse_number().is_none());
        assert!(coordinator.current_chapter().is_none());
        assert!(coordinator.chapter_verses().is_none());
        assert!(!coordinator.is_playing());
        assert_eq!(coordinator.state(), PlaybackState::Idle);

        let clip = backend.clip(id);
        assert_eq!(clip.pause_calls, 1);
        assert_eq!(clip.rewind_calls, 1);
        assert!(clip.released);
    }

    #[test]
    fn stop_when_idle_is_noop() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);

        coordinator.stop();

        assert!(!coordinator.has_pending_events());
    }

    #[test]
    fn toggle_autoplay_twice_restores_value() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let initial = coordinator.is_autoplay_enabled();

        assert_eq!(coordinator.toggle_autoplay(), !initial);
        assert_eq!(coordinator.toggle_autoplay(), initial);
        assert_eq!(coordinator.is_autoplay_enabled(), initial);
    }

    #[test]
    fn toggle_autoplay_does_not_touch_playing_clip() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.toggle_autoplay();

        assert!(coordinator.is_playing());
        assert_eq!(backend.last_clip().pause_calls, 0);
    }

    #[test]
    fn shutdown_releases_clip() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        coordinator.shutdown();

        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.sounding_count(), 0);
        assert!(!coordinator.has_pending_events());
    }

    #[test]
    fn dropping_coordinator_releases_clip() {
        let backend = MockBackend::new();
        {
            let mut coordinator = coordinator(&backend);
            let (chapter, verses) = al_ikhlas();
            play_confirmed(&mut coordinator, &chapter, &verses, 1);
        }

        assert_eq!(backend.live_count(), 0);
        assert_eq!(backend.last_clip().rewind_calls, 1);
    }
}

// ============================================================================
// Autoplay
// ============================================================================

mod autoplay {
    use super::*;

    #[test]
    fn chains_through_chapter_then_idles() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_falaq();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);

        for expected in 2..=5 {
            backend.finish(coordinator.active_clip_id().expect("active clip"));
            coordinator.pump();
            assert_eq!(coordinator.current_verse_number(), Some(expected));
            assert!(coordinator.is_playing());
            assert_eq!(backend.last_clip().url, verse_url(6225 + expected));
        }

        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
        assert_eq!(backend.clips().len(), 5, "no sixth clip");
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn disabled_autoplay_idles_after_verse() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_falaq();

        coordinator.toggle_autoplay();
        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
        assert_eq!(backend.clips().len(), 1);
    }

    #[test]
    fn toggle_applies_at_next_completion() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_falaq();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();
        assert_eq!(coordinator.current_verse_number(), Some(2));

        coordinator.toggle_autoplay();
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
    }

    #[test]
    fn ended_clip_is_not_paused() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        coordinator.toggle_autoplay();
        play_confirmed(&mut coordinator, &chapter, &verses, 4);
        let id = backend.last_clip().id;
        backend.finish(id);
        coordinator.pump();

        let clip = backend.clip(id);
        assert_eq!(clip.pause_calls, 0);
        assert!(clip.released);
    }

    #[test]
    fn next_verse_without_audio_ends_chain() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, mut verses) = al_ikhlas();
        verses[1].audio_url = None;

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert_eq!(backend.clips().len(), 1);
    }

    #[test]
    fn uses_snapshot_passed_to_play() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        // Only the last two verses were handed in
        let tail = verses[2..].to_vec();
        coordinator.play(&verse_url(6224), 3, &chapter, tail);
        coordinator.pump();
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.current_verse_number(), Some(4));
        assert_eq!(backend.last_clip().url, verse_url(6225));
    }

    #[test]
    fn failed_next_verse_collapses_to_idle() {
        let backend = MockBackend::new();
        backend.fail_load_for(&verse_url(6223));
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        play_confirmed(&mut coordinator, &chapter, &verses, 1);
        backend.finish(coordinator.active_clip_id().expect("active clip"));
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert_eq!(backend.live_count(), 0);
    }
}

// ============================================================================
// Stale notifications
// ============================================================================

mod stale_events {
    use super::*;

    #[test]
    fn late_confirmation_from_replaced_clip_is_ignored() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        // A never confirms before B is requested
        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());
        let a = backend.last_clip().id;
        coordinator.play(&verse_url(6223), 2, &chapter, verses.clone());
        let b = backend.last_clip().id;

        // Queue: A Playing, A Paused (from halt), B Playing
        coordinator.pump();
        assert_eq!(coordinator.active_clip_id(), Some(b));
        assert!(coordinator.is_playing());

        backend.emit(a, ClipEvent::Paused);
        backend.emit(a, ClipEvent::Failed("aborted".to_string()));
        coordinator.pump();

        assert!(coordinator.is_playing());
        assert_eq!(coordinator.current_verse_number(), Some(2));
    }

    #[test]
    fn late_ended_from_replaced_clip_does_not_autoplay() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (ikhlas, ikhlas_verses) = al_ikhlas();
        let (falaq, falaq_verses) = al_falaq();

        play_confirmed(&mut coordinator, &ikhlas, &ikhlas_verses, 1);
        let a = backend.last_clip().id;
        play_confirmed(&mut coordinator, &falaq, &falaq_verses, 3);

        backend.emit(a, ClipEvent::Ended);
        coordinator.pump();

        assert!(coordinator.is_current(113, 3));
        assert_eq!(backend.clips().len(), 2);
    }

    #[test]
    fn events_after_stop_are_ignored() {
        let backend = MockBackend::new();
        let mut coordinator = coordinator(&backend);
        let (chapter, verses) = al_ikhlas();

        coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());
        coordinator.stop();
        coordinator.pump();

        assert_eq!(coordinator.state(), PlaybackState::Idle);
        assert!(coordinator.current_verse_number().is_none());
    }
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn play_emits_verse_and_state_events() {
    let backend = MockBackend::new();
    let mut coordinator = coordinator(&backend);
    let (chapter, verses) = al_ikhlas();

    coordinator.play(&verse_url(6222), 1, &chapter, verses.clone());
    coordinator.pump();

    assert_eq!(
        coordinator.drain_events(),
        vec![
            PlaybackEvent::VerseChanged {
                chapter_number: Some(112),
                verse_number: Some(1),
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Loading,
            },
            PlaybackEvent::StateChanged {
                state: PlaybackState::Playing,
            },
        ]
    );
}

#[test]
fn snapshot_reflects_state() {
    let backend = MockBackend::new();
    let mut coordinator = coordinator(&backend);
    let (chapter, verses) = al_ikhlas();

    play_confirmed(&mut coordinator, &chapter, &verses, 2);
    let snapshot = coordinator.snapshot();

    assert_eq!(snapshot.state, PlaybackState::Playing);
    assert_eq!(snapshot.verse_number, Some(2));
    assert_eq!(snapshot.chapter, Some(chapter));
    assert!(snapshot.is_playing);
    assert!(snapshot.is_autoplay_enabled);
}

// ============================================================================
// Al-Ikhlas walkthrough
// ============================================================================

#[test]
fn al_ikhlas_walkthrough() {
    let backend = MockBackend::new();
    let mut coordinator = coordinator(&backend);
    let (chapter, verses) = al_ikhlas();

    play_confirmed(&mut coordinator, &chapter, &verses, 1);
    assert_eq!(coordinator.current_verse_number(), Some(1));
    assert!(coordinator.is_playing());

    backend.finish(coordinator.active_clip_id().expect("active clip"));
    coordinator.pump();
    assert_eq!(coordinator.current_verse_number(), Some(2));
    assert!(coordinator.is_playing());

    // User taps verse 2 again
    coordinator.play(&verse_url(6223), 2, &chapter, verses.clone());
    assert_eq!(coordinator.state(), PlaybackState::Idle);
    assert!(coordinator.current_verse_number().is_none());
    assert_eq!(backend.sounding_count(), 0);
}
