//! Row-by-row composition of glyphs into a text block.
use crate::font::{Font, Glyph};
use std::borrow::Cow;

impl Font {
    /// Renders `text` as `height` lines joined with `\n`.
    ///
    /// Characters without a glyph fall back to the font's space glyph, or to a
    /// single-column blank cell when the font has no space either. Empty text
    /// renders as an empty string.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.render_lines(text).join("\n")
    }

    /// Renders `text` into one `String` per glyph row.
    ///
    /// Returns no lines for empty text.
    pub fn render_lines(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let height = self.height();
        let mut lines = vec![String::new(); height];
        for ch in text.chars() {
            let glyph = self.glyph_or_fallback(ch);
            for (line, row) in lines.iter_mut().zip(glyph.rows()) {
                line.push_str(row);
            }
        }
        lines
    }

    fn glyph_or_fallback(&self, ch: char) -> Cow<'_, Glyph> {
        match self.glyph(ch).or_else(|| self.glyph(' ')) {
            Some(g) => Cow::Borrowed(g),
            None => Cow::Owned(Glyph::blank(self.height())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::figlet::parse;

    #[test]
    fn missing_glyphs_use_space_glyph() {
        let font = parse("flf2a$ 1 1 2 0 0\n$$@@").unwrap();
        assert_eq!(font.render("Q!"), "    ");
    }

    #[test]
    fn font_without_glyphs_renders_blank_cells() {
        let font = parse("flf2a$ 3 1 2 0 0").unwrap();
        assert_eq!(font.glyph_count(), 0);
        assert_eq!(font.render("ab"), "  \n  \n  ");
    }

    #[test]
    fn empty_text_is_empty() {
        let font = parse("flf2a$ 2 1 2 0 0").unwrap();
        assert_eq!(font.render(""), "");
        assert!(font.render_lines("").is_empty());
    }
}
