//! Recitation audio locations.
//!
//! The content service does not return usable audio links; the CDN path is
//! `{audio_cdn}/{bitrate}/{reciter}/{global_number}.mp3`.

use crate::types::ContentConfig;

/// CDN URL of the recitation of the verse with the given global number
pub fn audio_url(config: &ContentConfig, global_number: u32) -> String {
    format!(
        "{}/{}/{}/{}.mp3",
        config.audio_cdn.trim_end_matches('/'),
        config.bitrate,
        config.reciter,
        global_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cdn_layout() {
        let config = ContentConfig::default();
        assert_eq!(
            audio_url(&config, 6222),
            "https://cdn.islamic.network/quran/audio/128/ar.alafasy/6222.mp3"
        );
    }

    #[test]
    fn custom_reciter_and_bitrate() {
        let config = ContentConfig {
            audio_cdn: "https://audio.test/quran/".to_string(),
            bitrate: 64,
            reciter: "ar.husary".to_string(),
            ..ContentConfig::default()
        };
        assert_eq!(
            audio_url(&config, 1),
            "https://audio.test/quran/64/ar.husary/1.mp3"
        );
    }
}
