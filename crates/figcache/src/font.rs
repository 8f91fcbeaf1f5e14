use std::collections::HashMap;

/// First printable code point stored in a font.
pub const FIRST_CHAR: char = ' ';
/// Last printable code point stored in a font.
pub const LAST_CHAR: char = '~';

/// Metadata from the `flf2a` header line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// Placeholder used inside glyph rows for blanks; rendered as a space.
    pub hard_blank: char,
    /// Rows per glyph, always greater than zero for parsed fonts.
    pub height: usize,
    pub baseline: i32,
    pub max_length: i32,
    pub old_layout: i32,
    pub comment_lines: usize,
}

/// A single character's art: exactly `height` rows of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    rows: Vec<String>,
}

impl Glyph {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Glyph used when neither the requested character nor a space is defined.
    pub fn blank(height: usize) -> Self {
        Self {
            rows: vec![" ".to_string(); height],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, counted in characters.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// A parsed FIGlet font.
///
/// Fonts are immutable once built and are shared between threads as
/// `Arc<Font>` by [`crate::FontCache`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    header: Header,
    comments: Vec<String>,
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            comments: Vec::new(),
            glyphs: HashMap::new(),
        }
    }

    pub(crate) fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Adds or replaces the glyph for `ch`.
    ///
    /// Glyphs whose row count differs from the header height are discarded.
    pub fn add_glyph(&mut self, ch: char, glyph: Glyph) -> bool {
        if glyph.height() != self.header.height {
            return false;
        }
        self.glyphs.insert(ch, glyph);
        true
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn height(&self) -> usize {
        self.header.height
    }

    /// Comment lines that followed the header in the source.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}
