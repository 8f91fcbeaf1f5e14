use figcache::{CacheStats, Font};

/// Human readable summary of a font's header and glyph table.
pub fn describe_font(name: &str, font: &Font) -> String {
    let header = font.header();
    format!(
        "FIGlet font: {name}\n  Hard blank: {:?}\n  Height: {}\n  Baseline: {}\n  \
         Max length: {}\n  Old layout: {}\n  Comment lines: {}\n  Defined characters: {}\n",
        header.hard_blank,
        header.height,
        header.baseline,
        header.max_length,
        header.old_layout,
        font.comments().len(),
        font.glyph_count(),
    )
}

pub fn describe_stats(stats: &CacheStats) -> String {
    format!(
        "cache: {} hits, {} misses, {} evictions, {}/{} entries ({} bytes)",
        stats.hits, stats.misses, stats.evictions, stats.entries, stats.capacity, stats.bytes
    )
}
