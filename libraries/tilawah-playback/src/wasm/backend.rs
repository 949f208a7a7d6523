//! `HtmlAudioElement` backend

use crate::{
    clip::{AudioBackend, AudioClip, ClipEvent, ClipNotifier},
    error::{PlaybackError, Result},
};
use js_sys::Function;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Called after a clip queued a notification, so the page can pump
pub(crate) type WakeHook = Rc<RefCell<Option<Function>>>;

fn ring(hook: &WakeHook) {
    if let Some(cb) = hook.borrow().as_ref() {
        cb.call0(&JsValue::NULL).ok();
    }
}

/// Creates one `HtmlAudioElement` per verse
pub struct HtmlAudioBackend {
    wake: WakeHook,
}

impl HtmlAudioBackend {
    pub fn new() -> Self {
        Self {
            wake: Rc::new(RefCell::new(None)),
        }
    }

    pub(crate) fn with_wake_hook(wake: WakeHook) -> Self {
        Self { wake }
    }
}

impl Default for HtmlAudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBackend for HtmlAudioBackend {
    fn load(&mut self, url: &str, notifier: ClipNotifier) -> Result<Box<dyn AudioClip>> {
        let element = HtmlAudioElement::new_with_src(url).map_err(|e| PlaybackError::ClipLoad {
            url: url.to_string(),
            reason: describe(&e),
        })?;

        Ok(Box::new(HtmlAudioClip::attach(
            element,
            notifier,
            Rc::clone(&self.wake),
        )))
    }
}

/// A single audio element with its listeners
pub struct HtmlAudioClip {
    element: HtmlAudioElement,
    notifier: ClipNotifier,
    wake: WakeHook,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl HtmlAudioClip {
    fn attach(element: HtmlAudioElement, notifier: ClipNotifier, wake: WakeHook) -> Self {
        let mut listeners = Vec::with_capacity(4);

        for name in ["play", "pause", "ended", "error"] {
            let notifier = notifier.clone();
            let wake = Rc::clone(&wake);
            let target = element.clone();

            let callback = Closure::wrap(Box::new(move || {
                let event = match name {
                    "play" => ClipEvent::Playing,
                    "pause" => ClipEvent::Paused,
                    "ended" => ClipEvent::Ended,
                    _ => ClipEvent::Failed(
                        target
                            .error()
                            .map(|e| format!("media error {}: {}", e.code(), e.message()))
                            .unwrap_or_else(|| "media error".to_string()),
                    ),
                };
                notifier.notify(event);
                ring(&wake);
            }) as Box<dyn FnMut()>);

            let _ = element
                .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
            listeners.push((name, callback));
        }

        Self {
            element,
            notifier,
            wake,
            listeners,
        }
    }
}

impl AudioClip for HtmlAudioClip {
    fn play(&mut self) -> Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| PlaybackError::ClipStart(describe(&e)))?;

        // Rejections arrive later (autoplay policy, unsupported source)
        let notifier = self.notifier.clone();
        let wake = Rc::clone(&self.wake);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                // A pause() issued while starting rejects with AbortError
                if error_name(&e).as_deref() != Some("AbortError") {
                    notifier.notify(ClipEvent::Failed(describe(&e)));
                    ring(&wake);
                }
            }
        });

        Ok(())
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }
}

impl Drop for HtmlAudioClip {
    fn drop(&mut self) {
        for (name, callback) in &self.listeners {
            let _ = self
                .element
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
        }
        let _ = self.element.pause();
        self.element.set_src("");
    }
}

fn error_name(value: &JsValue) -> Option<String> {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.name()))
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
