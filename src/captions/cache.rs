use std::collections::HashMap;
use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::captions::caption::{CaptionOptions, WordOverrun, captions_for_window};
use crate::captions::pages::{Page, create_pages};
use crate::props::model::WordTimestamp;

const XXH3_SEED: u64 = 0x5a1e_c0de_2b7f_9e31;

/// Stable fingerprint of the inputs that determine a page list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PagesKey {
    /// High 64 bits of the xxh3-128 digest.
    pub hi: u64,
    /// Low 64 bits of the xxh3-128 digest.
    pub lo: u64,
}

impl PagesKey {
    /// Fingerprint `(words, window, options)` by exact bit patterns.
    pub fn new(
        words: &[WordTimestamp],
        start_time_sec: f64,
        end_time_sec: f64,
        options: &CaptionOptions,
    ) -> Self {
        let mut h = Xxh3::with_seed(XXH3_SEED);
        h.update(&start_time_sec.to_bits().to_le_bytes());
        h.update(&end_time_sec.to_bits().to_le_bytes());
        h.update(&options.combine_within_ms.to_bits().to_le_bytes());
        h.update(&[match options.overrun {
            WordOverrun::Allow => 0u8,
            WordOverrun::Clamp => 1u8,
        }]);
        h.update(&(words.len() as u64).to_le_bytes());
        for w in words {
            h.update(&(w.word.len() as u64).to_le_bytes());
            h.update(w.word.as_bytes());
            h.update(&w.start.to_bits().to_le_bytes());
            h.update(&w.end.to_bits().to_le_bytes());
        }
        let v = h.digest128();
        Self {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

/// Filter, rebase and group words into pages in one call.
pub fn pages_for_window(
    words: &[WordTimestamp],
    start_time_sec: f64,
    end_time_sec: f64,
    options: &CaptionOptions,
) -> Vec<Page> {
    let captions = captions_for_window(words, start_time_sec, end_time_sec, options.overrun);
    create_pages(&captions, options.combine_within_ms)
}

/// Hit/miss counters for [`PageCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageCacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that recomputed pages.
    pub misses: u64,
}

/// Memoizes page lists keyed by [`PagesKey`].
///
/// Pages are frame invariant, so a reel computes them once and every frame shares the same
/// `Arc<[Page]>`. The cache is cleared when it reaches `max_entries`.
#[derive(Debug)]
pub struct PageCache {
    entries: HashMap<PagesKey, Arc<[Page]>>,
    max_entries: usize,
    stats: PageCacheStats,
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(32)
    }
}

impl PageCache {
    /// Create a cache holding at most `max_entries` page lists (minimum 1).
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            stats: PageCacheStats::default(),
        }
    }

    /// Return the pages for these inputs, computing them on a miss.
    pub fn get_or_compute(
        &mut self,
        words: &[WordTimestamp],
        start_time_sec: f64,
        end_time_sec: f64,
        options: &CaptionOptions,
    ) -> Arc<[Page]> {
        let key = PagesKey::new(words, start_time_sec, end_time_sec, options);
        if let Some(pages) = self.entries.get(&key) {
            self.stats.hits += 1;
            tracing::debug!(?key, "page cache hit");
            return Arc::clone(pages);
        }

        self.stats.misses += 1;
        tracing::debug!(?key, "page cache miss");
        let pages: Arc<[Page]> =
            pages_for_window(words, start_time_sec, end_time_sec, options).into();

        if self.entries.len() >= self.max_entries {
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&pages));
        pages
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> PageCacheStats {
        self.stats
    }

    /// Number of cached page lists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captions/cache.rs"]
mod tests;
