//! FIGlet (`flf2a`) font parsing and loading.
use crate::{
    error::{FontError, ParseError, Result},
    font::{Font, Glyph, Header, FIRST_CHAR, LAST_CHAR},
};
use std::{fs, path::Path};

/// Magic prefix of every FIGlet font header.
pub const SIGNATURE: &str = "flf2a";
/// Terminator appended to glyph rows (`@` per row, `@@` on the last row).
pub const END_MARKER: char = '@';
/// Upper bound on rows reserved up front for one glyph.
const MAX_PREALLOCATED_ROWS: usize = 64;

/// Parses the text of a FIGlet font definition.
///
/// Characters 32..=126 are read in order. A font that ends early simply lacks
/// the remaining characters.
pub fn parse(content: &str) -> std::result::Result<Font, ParseError> {
    let mut lines = content.lines();
    let header_line = lines.next().ok_or(ParseError::Empty)?;
    let header = parse_header(header_line)?;

    // Header counts are untrusted: grow with the input instead of preallocating.
    let mut comments = Vec::new();
    for _ in 0..header.comment_lines {
        let line = lines.next().ok_or(ParseError::UnexpectedEof)?;
        comments.push(line.to_string());
    }

    let hard_blank = header.hard_blank;
    let height = header.height;
    let mut font = Font::new(header).with_comments(comments);

    for ch in FIRST_CHAR..=LAST_CHAR {
        let Some(rows) = read_character(&mut lines, height, hard_blank) else {
            log::trace!("font ends before {ch:?}");
            break;
        };
        font.add_glyph(ch, Glyph::new(rows));
    }

    Ok(font)
}

/// Parses the `flf2a` header line.
///
/// Layout: `flf2a<hardblank> height baseline max_length old_layout [comment_lines ...]`.
pub fn parse_header(line: &str) -> std::result::Result<Header, ParseError> {
    let Some(rest) = line.strip_prefix(SIGNATURE) else {
        return Err(ParseError::InvalidHeader);
    };
    let hard_blank = rest.chars().next().ok_or(ParseError::HeaderTooShort)?;
    let fields: Vec<&str> = rest[hard_blank.len_utf8()..].split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ParseError::IncompleteHeader);
    }

    let height = match fields[0].parse::<usize>() {
        Ok(h) if h > 0 => h,
        _ => return Err(ParseError::InvalidHeight(fields[0].to_string())),
    };
    let baseline = fields[1]
        .parse()
        .map_err(|_| ParseError::InvalidBaseline(fields[1].to_string()))?;
    let max_length = fields[2]
        .parse()
        .map_err(|_| ParseError::InvalidMaxLength(fields[2].to_string()))?;
    let old_layout = fields[3]
        .parse()
        .map_err(|_| ParseError::InvalidOldLayout(fields[3].to_string()))?;
    let comment_lines = fields
        .get(4)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    Ok(Header {
        hard_blank,
        height,
        baseline,
        max_length,
        old_layout,
        comment_lines,
    })
}

/// Reads `height` rows for one character, or `None` if input runs out first.
fn read_character<'a, I>(lines: &mut I, height: usize, hard_blank: char) -> Option<Vec<String>>
where
    I: Iterator<Item = &'a str>,
{
    let mut rows = Vec::with_capacity(height.min(MAX_PREALLOCATED_ROWS));
    for _ in 0..height {
        let line = lines.next()?;
        let trimmed = line.trim_end_matches(END_MARKER);
        rows.push(trimmed.replace(hard_blank, " "));
    }
    Some(rows)
}

impl Font {
    /// Loads a font from disk, see [`Font::from_bytes`].
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Loads a font from raw bytes: a plain `.flf` or a ZIP archive holding one.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let content = Self::source_from_bytes(bytes)?;
        Ok(parse(&content)?)
    }

    /// Decodes the raw font source without parsing it.
    ///
    /// The cache is keyed by this text, so callers that read font files
    /// themselves go through here before [`crate::FontCache::get_or_parse`].
    pub fn source_from_bytes(bytes: &[u8]) -> Result<String> {
        // gzip streams would need a second decompression crate
        if bytes.starts_with(&[0x1F, 0x8B]) {
            return Err(FontError::Gzip);
        }
        if bytes.starts_with(b"PK\x03\x04") {
            return Self::read_zipped_flf(bytes);
        }
        Ok(std::str::from_utf8(bytes)?.to_string())
    }

    #[cfg(feature = "zip")]
    fn read_zipped_flf(bytes: &[u8]) -> Result<String> {
        use std::io::{Cursor, Read};
        use zip::ZipArchive;

        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| FontError::Zip(format!("zip open error: {e}")))?;
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| FontError::Zip(format!("zip entry error: {e}")))?;
            if file.name().ends_with(".flf") {
                let mut buf = String::new();
                file.read_to_string(&mut buf)?;
                return Ok(buf);
            }
        }
        Err(FontError::MissingFlf)
    }

    #[cfg(not(feature = "zip"))]
    fn read_zipped_flf(_bytes: &[u8]) -> Result<String> {
        Err(FontError::Zip("built without zip support".into()))
    }
}
