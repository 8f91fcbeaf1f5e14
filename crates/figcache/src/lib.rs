//! figcache: FIGlet font parsing and rendering with an LRU cache of parsed fonts.
//!
//! ```
//! use figcache::FontCache;
//!
//! let cache = FontCache::new(4);
//! let source = "flf2a$ 1 1 2 0 0\n$@@\n!@@";
//! let font = cache.get_or_parse(source).unwrap();
//! assert_eq!(font.render("! !"), "! !");
//! ```

pub mod cache;
mod error;
pub mod figlet;
mod font;
mod render;
pub use cache::{
    cache_stats, clear_cache, default_cache, fingerprint, parse_font_cached, set_cache_capacity,
    CacheStats, FontCache, DEFAULT_CAPACITY,
};
pub use error::{FontError, ParseError, Result};
pub use figlet::parse;
pub use font::{Font, Glyph, Header};

// Test utilities
pub mod test_support;
