//! Chapter ("surah") types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of chapters in the corpus
pub const CHAPTER_COUNT: u32 = 114;

/// Where a chapter was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationPlace::Meccan => write!(f, "Meccan"),
            RevelationPlace::Medinan => write!(f, "Medinan"),
        }
    }
}

/// A chapter descriptor as served by the content service.
///
/// Field names on the wire follow the service (`englishName`,
/// `numberOfAyahs`, ...); extra fields such as embedded verses are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,

    /// Name in Arabic script
    #[serde(rename = "name")]
    pub arabic_name: String,

    #[serde(rename = "englishName")]
    pub transliterated_name: String,

    #[serde(rename = "englishNameTranslation")]
    pub translated_name: String,

    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u32,

    #[serde(rename = "revelationType")]
    pub revelation_place: RevelationPlace,
}

impl Chapter {
    /// Whether `number` names an existing chapter (1-114)
    pub fn is_valid_number(number: u32) -> bool {
        (1..=CHAPTER_COUNT).contains(&number)
    }
}
