use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Number of surahs in the Quran
pub const SURAH_COUNT: u16 = 114;

/// A chapter of the Quran in the normalized shape served to clients.
///
/// Field names follow the JSON contract the UI consumes regardless of
/// which upstream text provider produced the record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Surah {
    /// Surah number (1-114)
    #[validate(range(min = 1, max = 114, message = "Surah number must be between 1 and 114"))]
    pub number: u16,

    /// Native (Arabic) name
    #[validate(length(min = 1, message = "Surah name is required"))]
    pub name: String,

    /// Transliterated name
    #[serde(rename = "englishName")]
    pub english_name: String,

    /// Translated meaning of the name
    #[serde(rename = "englishNameTranslation")]
    pub english_name_translation: String,

    /// Declared ayah count
    #[serde(rename = "numberOfAyahs")]
    #[validate(range(min = 1, message = "Ayah count must be positive"))]
    pub number_of_ayahs: u32,

    /// Revelation place (Mecca / Medina)
    #[serde(rename = "revelationType")]
    pub revelation_type: String,

    /// Upstream-provided description, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Representative full-surah recitation URL (first narrator)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// Full per-narrator recitation map, when the upstream provides one
    #[serde(rename = "audioFull", skip_serializing_if = "Option::is_none")]
    pub audio_full: Option<BTreeMap<String, String>>,
}

/// A verse within a surah.
///
/// Optional fields are absent when the upstream does not provide them;
/// they are never filled with invented defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ayah {
    /// Verse number
    pub number: u32,

    /// Position within the surah (1..=numberOfAyahs)
    #[serde(rename = "numberInSurah")]
    pub number_in_surah: u32,

    /// Arabic text
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,

    /// Representative recitation URL (first narrator)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,

    /// Per-narrator recitation map, when provided
    #[serde(rename = "audioFull", skip_serializing_if = "Option::is_none")]
    pub audio_full: Option<BTreeMap<String, String>>,
}

/// A surah together with its ayahs, as served by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurahDetail {
    #[serde(flatten)]
    pub surah: Surah,
    pub ayahs: Vec<Ayah>,
}

impl Surah {
    /// Creates a surah record with validation
    pub fn new(
        number: u16,
        name: String,
        english_name: String,
        english_name_translation: String,
        number_of_ayahs: u32,
        revelation_type: String,
    ) -> Result<Self> {
        let surah = Self {
            number,
            name,
            english_name,
            english_name_translation,
            number_of_ayahs,
            revelation_type,
            description: None,
            audio: None,
            audio_full: None,
        };
        surah.validate()?;
        Ok(surah)
    }

    /// Validates a caller-supplied surah number against the 1-114 range
    pub fn validate_number(number: i64) -> Result<u16> {
        if !(1..=SURAH_COUNT as i64).contains(&number) {
            return Err(SharedError::BadRequest(
                "Surah number must be between 1 and 114".to_string(),
            ));
        }
        Ok(number as u16)
    }
}

impl SurahDetail {
    /// Checks the normalized invariant: ayah sequence numbers form a
    /// contiguous 1..=numberOfAyahs range.
    pub fn is_contiguous(&self) -> bool {
        self.ayahs.len() as u32 == self.surah.number_of_ayahs
            && self
                .ayahs
                .iter()
                .enumerate()
                .all(|(i, ayah)| ayah.number_in_surah == i as u32 + 1)
    }
}
