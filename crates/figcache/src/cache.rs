//! Bounded LRU cache of parsed fonts, keyed by a fingerprint of the raw source.
//!
//! Entries live in an index-stable arena. Recency is an intrusive doubly
//! linked list threaded through the arena slots (`prev`/`next` indices), and a
//! hash map resolves fingerprints to slots, so lookup, promotion, insertion and
//! eviction are all O(1).
//!
//! Two different sources with the same 64-bit fingerprint share one slot: the
//! later `set` replaces the earlier font. Callers that cannot accept that risk
//! should key their own cache on the full content.
use crate::{error::ParseError, figlet::parse, font::Font};
use log::{debug, trace};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Capacity used when none (or zero) is requested.
pub const DEFAULT_CAPACITY: usize = 10;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a hash of the font source, used as the cache key.
pub fn fingerprint(content: &str) -> u64 {
    content.bytes().fold(FNV_OFFSET_BASIS, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Snapshot of cache counters and occupancy.
///
/// `hits`, `misses` and `evictions` are cumulative over the lifetime of the
/// cache; [`FontCache::clear`] does not reset them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
    pub capacity: usize,
    /// Total length in bytes of the sources currently cached.
    pub bytes: usize,
}

/// Arena slot. A vacant slot has no font and sits on the free list.
struct Node {
    hash: u64,
    font: Option<Arc<Font>>,
    bytes: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

struct Lru {
    capacity: usize,
    nodes: Vec<Node>,
    free: Vec<usize>,
    index: FxHashMap<u64, usize>,
    /// Most recently used.
    head: Option<usize>,
    /// Least recently used.
    tail: Option<usize>,
    bytes: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Lru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: FxHashMap::default(),
            head: None,
            tail: None,
            bytes: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn promote(&mut self, idx: usize) {
        if self.head != Some(idx) {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    /// Looks up `hash`, counting a hit or miss and promoting on hit.
    fn lookup(&mut self, hash: u64) -> Option<Arc<Font>> {
        match self.index.get(&hash).copied() {
            Some(idx) => {
                self.hits += 1;
                self.promote(idx);
                trace!("font cache hit {hash:016x}");
                self.nodes[idx].font.clone()
            }
            None => {
                self.misses += 1;
                trace!("font cache miss {hash:016x}");
                None
            }
        }
    }

    fn store(&mut self, hash: u64, font: Arc<Font>, bytes: usize) {
        if let Some(idx) = self.index.get(&hash).copied() {
            // Size is unchanged, so no eviction check.
            let node = &mut self.nodes[idx];
            self.bytes = self.bytes - node.bytes + bytes;
            node.font = Some(font);
            node.bytes = bytes;
            self.promote(idx);
            debug!("font cache updated {hash:016x}");
            return;
        }

        let node = Node {
            hash,
            font: Some(font),
            bytes,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.index.insert(hash, idx);
        self.bytes += bytes;
        self.push_front(idx);
        debug!("font cache stored {hash:016x} ({bytes} bytes)");

        if self.len() > self.capacity {
            self.evict_lru();
        }
    }

    fn evict_lru(&mut self) -> bool {
        let Some(idx) = self.tail else {
            return false;
        };
        self.unlink(idx);
        let node = &mut self.nodes[idx];
        node.font = None;
        self.bytes -= node.bytes;
        node.bytes = 0;
        let hash = node.hash;
        self.index.remove(&hash);
        self.free.push(idx);
        self.evictions += 1;
        debug!("font cache evicted {hash:016x}");
        true
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.len() > self.capacity {
            if !self.evict_lru() {
                break;
            }
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.bytes = 0;
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            entries: self.len(),
            capacity: self.capacity,
            bytes: self.bytes,
        }
    }
}

/// Thread-safe LRU cache mapping font sources to parsed [`Font`]s.
///
/// Every operation runs under a single `RwLock`. Lookups take it exclusively
/// because a hit reorders the recency list; `stats`, `len` and `capacity` only
/// read.
pub struct FontCache {
    inner: RwLock<Lru>,
}

fn effective_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

impl FontCache {
    /// Creates a cache holding at most `capacity` fonts; `0` means
    /// [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Lru::new(effective_capacity(capacity))),
        }
    }

    /// Returns the cached font for `content`, promoting it to most recently
    /// used. Never parses.
    pub fn get(&self, content: &str) -> Option<Arc<Font>> {
        let hash = fingerprint(content);
        self.inner.write().lookup(hash)
    }

    /// Stores `font` for `content`. `None` leaves the cache untouched.
    pub fn set(&self, content: &str, font: Option<Arc<Font>>) {
        let Some(font) = font else {
            return;
        };
        self.insert(content, font);
    }

    /// Stores `font` for `content`, evicting the least recently used entry if
    /// a new entry pushes the cache over capacity.
    pub fn insert(&self, content: &str, font: Arc<Font>) {
        let hash = fingerprint(content);
        self.inner.write().store(hash, font, content.len());
    }

    /// Returns the cached font for `content`, parsing and caching it on a
    /// miss. Parse errors are returned as-is and never cached.
    ///
    /// Lookup, parse and insert happen under one write lock, so concurrent
    /// callers with the same source parse it once and share the result.
    pub fn get_or_parse(&self, content: &str) -> Result<Arc<Font>, ParseError> {
        let hash = fingerprint(content);
        let mut lru = self.inner.write();
        if let Some(font) = lru.lookup(hash) {
            return Ok(font);
        }
        let font = match parse(content) {
            Ok(font) => Arc::new(font),
            Err(e) => {
                debug!("font {hash:016x} failed to parse: {e}");
                return Err(e);
            }
        };
        lru.store(hash, Arc::clone(&font), content.len());
        Ok(font)
    }

    /// Drops every entry. Hit, miss and eviction counters are kept.
    pub fn clear(&self) {
        self.inner.write().clear();
        debug!("font cache cleared");
    }

    /// Changes the capacity (`0` means [`DEFAULT_CAPACITY`]), evicting least
    /// recently used entries until the cache fits.
    pub fn set_capacity(&self, capacity: usize) {
        let capacity = effective_capacity(capacity);
        self.inner.write().set_capacity(capacity);
        debug!("font cache capacity set to {capacity}");
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.read().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

static DEFAULT_CACHE: Lazy<FontCache> = Lazy::new(FontCache::default);

/// Process-wide cache, created with [`DEFAULT_CAPACITY`] on first use.
///
/// Applications should fetch it once at startup and pass the reference to
/// the code that renders.
pub fn default_cache() -> &'static FontCache {
    &DEFAULT_CACHE
}

/// [`FontCache::get_or_parse`] on the [`default_cache`].
pub fn parse_font_cached(content: &str) -> Result<Arc<Font>, ParseError> {
    default_cache().get_or_parse(content)
}

pub fn set_cache_capacity(capacity: usize) {
    default_cache().set_capacity(capacity);
}

pub fn clear_cache() {
    default_cache().clear();
}

pub fn cache_stats() -> CacheStats {
    default_cache().stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Header;

    fn font(height: usize) -> Arc<Font> {
        Arc::new(Font::new(Header {
            hard_blank: '$',
            height,
            ..Header::default()
        }))
    }

    #[test]
    fn fingerprint_is_fnv1a() {
        assert_eq!(fingerprint(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fingerprint("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fingerprint("test content"), fingerprint("test content"));
        assert_ne!(fingerprint("test content"), fingerprint("different content"));
    }

    #[test]
    fn zero_capacity_uses_default() {
        assert_eq!(FontCache::new(0).capacity(), DEFAULT_CAPACITY);
        assert_eq!(FontCache::new(5).capacity(), 5);
        let cache = FontCache::new(5);
        cache.set_capacity(0);
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn slots_are_reused_after_eviction() {
        let cache = FontCache::new(2);
        for i in 0..20 {
            cache.insert(&i.to_string(), font(1));
        }
        let lru = cache.inner.read();
        assert_eq!(lru.nodes.len(), 3);
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.evictions, 18);
    }

    #[test]
    fn update_keeps_size_and_promotes() {
        let cache = FontCache::new(2);
        cache.insert("a", font(1));
        cache.insert("b", font(1));
        let replacement = font(2);
        cache.insert("a", Arc::clone(&replacement));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 0);

        cache.insert("c", font(1));
        assert!(cache.get("b").is_none());
        let a = cache.get("a").unwrap();
        assert!(Arc::ptr_eq(&a, &replacement));
    }

    #[test]
    fn byte_total_tracks_entries() {
        let cache = FontCache::new(2);
        cache.insert("abc", font(1));
        cache.insert("de", font(1));
        assert_eq!(cache.stats().bytes, 5);
        cache.insert("fghi", font(1));
        assert_eq!(cache.stats().bytes, 6);
        cache.clear();
        assert_eq!(cache.stats().bytes, 0);
    }

    #[test]
    fn recency_list_stays_consistent() {
        let cache = FontCache::new(3);
        for key in ["1", "2", "3"] {
            cache.insert(key, font(1));
        }
        cache.get("1");
        cache.get("2");
        let lru = cache.inner.read();
        let mut order = Vec::new();
        let mut cur = lru.head;
        while let Some(idx) = cur {
            order.push(lru.nodes[idx].hash);
            cur = lru.nodes[idx].next;
        }
        assert_eq!(
            order,
            vec![fingerprint("2"), fingerprint("1"), fingerprint("3")]
        );
        assert_eq!(lru.tail.map(|t| lru.nodes[t].hash), Some(fingerprint("3")));
    }
}
