//! Test support utilities for figcache.
//!
//! Small font sources used by the unit tests, integration tests and benches.
//! Not part of the stable API.

use crate::font::{Font, Glyph, Header};

/// Height-1 font with `$` as hard blank that only defines the space glyph.
pub const TINY_FONT: &str = "flf2a$ 1 1 2 0 0\n$@@\n";

/// Seven-row font with two comment lines, defining space and `!`.
pub const SAMPLE_FONT: &str = "flf2a$ 7 7 13 0 2 0 64 0
Font Author: Test
This is a test font
$  $@
$  $@
$  $@
$  $@
$  $@
$  $@
$  $@@
██ @
██ @
██ @
   @
██ @
   @
   @@";

/// Same glyphs as [`SAMPLE_FONT`] with different comments, so a different fingerprint.
pub const SAMPLE_FONT_2: &str = "flf2a$ 7 7 13 0 2 0 64 0
Font Author: Test2
Different font
$  $@
$  $@
$  $@
$  $@
$  $@
$  $@
$  $@@
██ @
██ @
██ @
   @
██ @
   @
   @@";

/// Builds a font from glyph rows without going through the parser.
pub fn font_with(height: usize, glyphs: &[(char, &[&str])]) -> Font {
    let mut font = Font::new(Header {
        hard_blank: '$',
        height,
        ..Header::default()
    });
    for (ch, rows) in glyphs {
        font.add_glyph(*ch, Glyph::new(rows.iter().map(|r| r.to_string()).collect()));
    }
    font
}

/// A complete font covering every printable ASCII character, each glyph
/// `height` rows of the character repeated `width` times. `$` and `@` are
/// reserved by the format and drawn with `#` instead.
pub fn full_font_source(height: usize, width: usize) -> String {
    let mut out = format!("flf2a$ {height} {height} {} 0 1\ngenerated\n", width + 2);
    for ch in ' '..='~' {
        let cell = match ch {
            ' ' => "$".repeat(width),
            '$' | '@' => "#".repeat(width),
            _ => ch.to_string().repeat(width),
        };
        for row in 0..height {
            out.push_str(&cell);
            out.push_str(if row + 1 == height { "@@\n" } else { "@\n" });
        }
    }
    out
}
