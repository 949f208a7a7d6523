//! Scripted audio backend shared by the integration tests
//!
//! Clips confirm `play()` and `pause()` by queueing `Playing` / `Paused`
//! through their notifier, the way a browser fires `play` / `pause`. The
//! coordinator only sees those after `pump()`.

#![allow(dead_code)]

use std::{cell::RefCell, collections::HashSet, rc::Rc};
use tilawah_core::{Chapter, RevelationPlace, Verse};
use tilawah_playback::{
    AudioBackend, AudioClip, AudioCoordinator, ClipEvent, ClipId, ClipNotifier, PlaybackConfig,
    PlaybackError, Result,
};

/// Everything the mock observed about one clip
#[derive(Debug, Clone)]
pub struct ClipRecord {
    pub id: ClipId,
    pub url: String,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub rewind_calls: usize,
    pub sounding: bool,
    pub released: bool,
}

#[derive(Default)]
struct MockState {
    clips: Vec<ClipRecord>,
    notifiers: Vec<ClipNotifier>,
    failing_loads: HashSet<String>,
    failing_plays: HashSet<String>,
}

impl MockState {
    fn record_mut(&mut self, id: ClipId) -> &mut ClipRecord {
        self.clips
            .iter_mut()
            .find(|c| c.id == id)
            .expect("unknown clip")
    }
}

/// Cloneable handle: one clone goes into the coordinator, the test keeps one
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Rc<RefCell<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_load_for(&self, url: &str) {
        self.state.borrow_mut().failing_loads.insert(url.to_string());
    }

    pub fn fail_play_for(&self, url: &str) {
        self.state.borrow_mut().failing_plays.insert(url.to_string());
    }

    pub fn clips(&self) -> Vec<ClipRecord> {
        self.state.borrow().clips.clone()
    }

    pub fn clip(&self, id: ClipId) -> ClipRecord {
        self.state
            .borrow()
            .clips
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .expect("unknown clip")
    }

    pub fn last_clip(&self) -> ClipRecord {
        self.state.borrow().clips.last().cloned().expect("no clips")
    }

    /// Clips currently producing sound
    pub fn sounding_count(&self) -> usize {
        self.state.borrow().clips.iter().filter(|c| c.sounding).count()
    }

    /// Clips not yet released
    pub fn live_count(&self) -> usize {
        self.state.borrow().clips.iter().filter(|c| !c.released).count()
    }

    /// Queue an arbitrary notification from clip `id`
    pub fn emit(&self, id: ClipId, event: ClipEvent) {
        let state = self.state.borrow();
        let notifier = state
            .notifiers
            .iter()
            .find(|n| n.clip_id() == id)
            .expect("unknown clip");
        notifier.notify(event);
    }

    /// Clip `id` reaches the end of its recording
    pub fn finish(&self, id: ClipId) {
        {
            let mut state = self.state.borrow_mut();
            let record = state.record_mut(id);
            if !record.released {
                record.sounding = false;
            }
        }
        self.emit(id, ClipEvent::Ended);
    }
}

impl AudioBackend for MockBackend {
    fn load(&mut self, url: &str, notifier: ClipNotifier) -> Result<Box<dyn AudioClip>> {
        let mut state = self.state.borrow_mut();
        if state.failing_loads.contains(url) {
            return Err(PlaybackError::ClipLoad {
                url: url.to_string(),
                reason: "unsupported source".to_string(),
            });
        }

        state.clips.push(ClipRecord {
            id: notifier.clip_id(),
            url: url.to_string(),
            play_calls: 0,
            pause_calls: 0,
            rewind_calls: 0,
            sounding: false,
            released: false,
        });
        state.notifiers.push(notifier.clone());

        Ok(Box::new(MockClip {
            id: notifier.clip_id(),
            url: url.to_string(),
            notifier,
            state: Rc::clone(&self.state),
        }))
    }
}

struct MockClip {
    id: ClipId,
    url: String,
    notifier: ClipNotifier,
    state: Rc<RefCell<MockState>>,
}

impl AudioClip for MockClip {
    fn play(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.failing_plays.contains(&self.url) {
            return Err(PlaybackError::ClipStart("NotAllowedError".to_string()));
        }
        let record = state.record_mut(self.id);
        record.play_calls += 1;
        record.sounding = true;
        self.notifier.notify(ClipEvent::Playing);
        Ok(())
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        let record = state.record_mut(self.id);
        record.pause_calls += 1;
        record.sounding = false;
        self.notifier.notify(ClipEvent::Paused);
    }

    fn rewind(&mut self) {
        self.state.borrow_mut().record_mut(self.id).rewind_calls += 1;
    }
}

impl Drop for MockClip {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        let record = state.record_mut(self.id);
        record.released = true;
        record.sounding = false;
    }
}

// ===== Fixtures =====

pub fn coordinator(backend: &MockBackend) -> AudioCoordinator {
    AudioCoordinator::new(Box::new(backend.clone()), PlaybackConfig::default())
}

pub fn verse_url(global_number: u32) -> String {
    format!("https://cdn.test/quran/audio/128/ar.alafasy/{}.mp3", global_number)
}

fn make_verses(first_global: u32, count: u32) -> Vec<Verse> {
    (1..=count)
        .map(|n| Verse {
            global_number: first_global + n - 1,
            text: format!("verse {}", n),
            number_in_chapter: n,
            juz_index: 30,
            page_number: 604,
            audio_url: Some(verse_url(first_global + n - 1)),
        })
        .collect()
}

/// Chapter 112 with its four verses (global 6222..=6225)
pub fn al_ikhlas() -> (Chapter, Vec<Verse>) {
    let chapter = Chapter {
        number: 112,
        arabic_name: "سورة الإخلاص".to_string(),
        transliterated_name: "Al-Ikhlas".to_string(),
        translated_name: "Sincerity".to_string(),
        verse_count: 4,
        revelation_place: RevelationPlace::Meccan,
    };
    (chapter, make_verses(6222, 4))
}

/// Chapter 113 with its five verses (global 6226..=6230)
pub fn al_falaq() -> (Chapter, Vec<Verse>) {
    let chapter = Chapter {
        number: 113,
        arabic_name: "سورة الفلق".to_string(),
        transliterated_name: "Al-Falaq".to_string(),
        translated_name: "The Daybreak".to_string(),
        verse_count: 5,
        revelation_place: RevelationPlace::Meccan,
    };
    (chapter, make_verses(6226, 5))
}

/// Plays `verse_number` of the given chapter and confirms it started
pub fn play_confirmed(
    coordinator: &mut AudioCoordinator,
    chapter: &Chapter,
    verses: &[Verse],
    verse_number: u32,
) {
    let url = verses[(verse_number - 1) as usize]
        .audio_url
        .clone()
        .expect("fixture verse has audio");
    coordinator.play(&url, verse_number, chapter, verses.to_vec());
    coordinator.pump();
}
