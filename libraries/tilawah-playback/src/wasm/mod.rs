//! WASM bindings for tilawah-playback
//!
//! A browser backend over `HtmlAudioElement` and a JavaScript-friendly
//! wrapper around the [`AudioCoordinator`](crate::AudioCoordinator).

pub mod backend;
pub mod coordinator;

pub use backend::{HtmlAudioBackend, HtmlAudioClip};
pub use coordinator::WasmAudioCoordinator;
