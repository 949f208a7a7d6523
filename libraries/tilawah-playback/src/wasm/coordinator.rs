//! WASM-compatible AudioCoordinator wrapper

use super::backend::{HtmlAudioBackend, WakeHook};
use crate::{AudioCoordinator, PlaybackConfig, PlaybackEvent};
use js_sys::Function;
use std::{cell::RefCell, rc::Rc};
use tilawah_core::{Chapter, Verse};
use wasm_bindgen::prelude::*;

/// WASM-compatible audio coordinator
///
/// Wraps the core coordinator over `HtmlAudioElement`s with a
/// JavaScript-friendly API. The page calls `pump()` from the wake
/// callback, which fires whenever an audio element reports something.
#[wasm_bindgen]
pub struct WasmAudioCoordinator {
    inner: AudioCoordinator,
    wake: WakeHook,

    // Event callbacks
    on_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmAudioCoordinator {
    /// Create a new coordinator
    #[wasm_bindgen(constructor)]
    pub fn new(autoplay: bool) -> Self {
        console_error_panic_hook::set_once();

        let wake: WakeHook = Rc::new(RefCell::new(None));
        let backend = HtmlAudioBackend::with_wake_hook(Rc::clone(&wake));

        Self {
            inner: AudioCoordinator::new(Box::new(backend), PlaybackConfig { autoplay }),
            wake,
            on_change: None,
            on_error: None,
        }
    }

    // ===== Transport =====

    /// Play a verse; `chapter` and `chapter_verses` are plain JS objects
    /// in the content service's shape
    pub fn play(
        &mut self,
        audio_url: &str,
        verse_number: u32,
        chapter: JsValue,
        chapter_verses: JsValue,
    ) -> Result<(), JsValue> {
        let chapter: Chapter = serde_wasm_bindgen::from_value(chapter)
            .map_err(|e| JsValue::from_str(&format!("Invalid chapter: {}", e)))?;
        let verses: Vec<Verse> = serde_wasm_bindgen::from_value(chapter_verses)
            .map_err(|e| JsValue::from_str(&format!("Invalid verses: {}", e)))?;

        self.inner.play(audio_url, verse_number, &chapter, verses);
        self.flush();
        Ok(())
    }

    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) {
        self.inner.toggle_play_pause();
        self.flush();
    }

    pub fn stop(&mut self) {
        self.inner.stop();
        self.flush();
    }

    #[wasm_bindgen(js_name = toggleAutoplay)]
    pub fn toggle_autoplay(&mut self) -> bool {
        let enabled = self.inner.toggle_autoplay();
        self.flush();
        enabled
    }

    /// Apply queued audio element notifications
    pub fn pump(&mut self) -> usize {
        let processed = self.inner.pump();
        self.flush();
        processed
    }

    // ===== State Queries =====

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(getter, js_name = isAutoplayEnabled)]
    pub fn is_autoplay_enabled(&self) -> bool {
        self.inner.is_autoplay_enabled()
    }

    #[wasm_bindgen(getter, js_name = currentVerseNumber)]
    pub fn current_verse_number(&self) -> Option<u32> {
        self.inner.current_verse_number()
    }

    /// Full state as a plain JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    // ===== Callbacks =====

    /// Called with no arguments when an audio element has news; call `pump()`
    #[wasm_bindgen(js_name = onWake)]
    pub fn on_wake(&mut self, callback: Function) {
        *self.wake.borrow_mut() = Some(callback);
    }

    /// Called with a snapshot after every change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Called with a message when a verse fails to play
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal =====

    fn flush(&mut self) {
        let events = self.inner.drain_events();
        if events.is_empty() {
            return;
        }

        if let Some(cb) = &self.on_error {
            for event in &events {
                if let PlaybackEvent::PlaybackFailed { message } = event {
                    cb.call1(&JsValue::NULL, &JsValue::from_str(message)).ok();
                }
            }
        }

        if let Some(cb) = &self.on_change {
            cb.call1(&JsValue::NULL, &self.snapshot()).ok();
        }
    }
}

impl Drop for WasmAudioCoordinator {
    fn drop(&mut self) {
        self.wake.borrow_mut().take();
        self.inner.shutdown();
    }
}
