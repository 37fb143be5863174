use serde::{Deserialize, Serialize};

/// One selectable sticker button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerEntry {
    /// 1-based position in the palette
    pub id: usize,
    pub glyph: String,
}

/// Glyphs offered as sticker tools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StickerPalette {
    entries: Vec<StickerEntry>,
}

impl StickerPalette {
    pub fn new<S: AsRef<str>>(glyphs: &[S]) -> Self {
        let mut palette = Self::default();
        for glyph in glyphs {
            palette.add_custom(glyph.as_ref());
        }
        palette
    }

    /// Append a glyph typed by the user.
    ///
    /// Input is trimmed; blank input adds nothing. Returns the new entry.
    pub fn add_custom(&mut self, input: &str) -> Option<&StickerEntry> {
        let glyph = input.trim();
        if glyph.is_empty() {
            log::debug!("Ignoring empty custom sticker");
            return None;
        }
        let id = self.entries.len() + 1;
        self.entries.push(StickerEntry {
            id,
            glyph: glyph.to_owned(),
        });
        self.entries.last()
    }

    pub fn entries(&self) -> &[StickerEntry] {
        &self.entries
    }

    pub fn get(&self, id: usize) -> Option<&StickerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
