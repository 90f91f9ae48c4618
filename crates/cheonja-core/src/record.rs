//! Character records.

use crate::CharId;

/// One character of the dataset.
///
/// Records are immutable once loaded. The dataset stores the glyph under the
/// `character` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CharacterRecord {
    /// 1-based, globally unique identifier.
    pub id: CharId,
    /// The character itself (e.g. `天`).
    #[serde(rename = "character")]
    pub glyph: String,
    /// Pronunciation (음), e.g. `천`.
    pub sound: String,
    /// Meaning (훈), e.g. `하늘`.
    pub meaning: String,
}

impl CharacterRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        id: CharId,
        glyph: impl Into<String>,
        sound: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            glyph: glyph.into(),
            sound: sound.into(),
            meaning: meaning.into(),
        }
    }

    /// Returns `true` if glyph, sound and meaning are all non-blank.
    ///
    /// Records without a complete reading cannot be asked in the quiz.
    #[must_use]
    pub fn has_complete_reading(&self) -> bool {
        [&self.glyph, &self.sound, &self.meaning]
            .iter()
            .all(|s| !s.trim().is_empty())
    }

    /// Returns the reading shown as a quiz answer, `"sound / meaning"`.
    #[must_use]
    pub fn reading(&self) -> String {
        format!("{} / {}", self.sound, self.meaning)
    }
}
