// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory cache of decoded assets.
//!
//! Sections reuse each other's images (a project card and a gallery
//! thumbnail may point at the same file), so decoded results are kept
//! keyed by their source string with LRU eviction and a byte budget.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default cache size in bytes (32 MB).
/// Allows ~4 full HD images (8 MB each) or ~16 smaller images.
pub const DEFAULT_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum cache size in bytes (8 MB).
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum cache size in bytes (128 MB).
pub const MAX_CACHE_BYTES: usize = 128 * 1024 * 1024;

/// Default maximum number of images to cache.
pub const DEFAULT_MAX_ENTRIES: usize = 32;

/// Minimum entries to cache.
pub const MIN_MAX_ENTRIES: usize = 4;

/// Maximum entries to cache.
pub const MAX_MAX_ENTRIES: usize = 64;

/// Configuration for the asset cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with limits clamped to sane bounds.
    #[must_use]
    pub fn new(max_bytes: usize, max_entries: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_BYTES, MAX_CACHE_BYTES),
            max_entries: max_entries.clamp(MIN_MAX_ENTRIES, MAX_MAX_ENTRIES),
        }
    }
}

/// Cache performance counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 * 100.0 / total as f64,
        }
    }
}

struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

/// LRU cache of decoded images keyed by their source string.
pub struct AssetCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl AssetCache {
    /// Creates a cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_ENTRIES` is zero, which would indicate a
    /// build configuration error.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_ENTRIES).expect("DEFAULT_MAX_ENTRIES must be non-zero"),
        );

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Inserts a decoded image.
    ///
    /// Returns `false` when the image alone would occupy more than half
    /// the byte budget, in which case it is not cached.
    pub fn insert(&mut self, source: String, image: ImageData) -> bool {
        let size_bytes = image.size_bytes();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        // Evict images until there is room
        while self.current_bytes + size_bytes > self.config.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }

        // Re-inserting an existing source replaces its entry
        if let Some(existing) = self.cache.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += size_bytes;
        self.cache.put(source, CacheEntry { image, size_bytes });

        true
    }

    /// Gets an image by source, updating LRU order on access.
    ///
    /// Returns a clone of the `ImageData` (the handle is
    /// reference-counted internally).
    pub fn get(&mut self, source: &str) -> Option<ImageData> {
        match self.cache.get(source) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry.image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for a source without updating LRU order.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.cache.contains(source)
    }

    /// Clears all cached images.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current total size of cached images in bytes.
    #[must_use]
    pub fn current_bytes(&self) -> usize {
        self.current_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> ImageData {
        let pixels = vec![0u8; (width * height * 4) as usize];
        ImageData::from_rgba(width, height, pixels)
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut cache = AssetCache::with_defaults();
        assert!(cache.insert("a.png".to_string(), test_image(8, 8)));

        let fetched = cache.get("a.png").expect("entry should be cached");
        assert_eq!(fetched.width, 8);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn miss_is_counted() {
        let mut cache = AssetCache::with_defaults();
        assert!(cache.get("missing.png").is_none());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn entry_count_limit_evicts_least_recent() {
        let config = CacheConfig::new(MIN_CACHE_BYTES, MIN_MAX_ENTRIES);
        let mut cache = AssetCache::new(config);

        for index in 0..=MIN_MAX_ENTRIES {
            cache.insert(format!("img-{index}.png"), test_image(2, 2));
        }

        assert_eq!(cache.len(), MIN_MAX_ENTRIES);
        assert!(!cache.contains("img-0.png"));
        assert!(cache.contains(&format!("img-{MIN_MAX_ENTRIES}.png")));
    }

    #[test]
    fn byte_budget_evicts_until_room() {
        // 8 MB budget; each 512x512 RGBA image is 1 MB
        let config = CacheConfig::new(MIN_CACHE_BYTES, MAX_MAX_ENTRIES);
        let mut cache = AssetCache::new(config);

        for index in 0..10 {
            cache.insert(format!("big-{index}.png"), test_image(512, 512));
        }

        assert!(cache.current_bytes() <= MIN_CACHE_BYTES);
        assert!(cache.stats().evictions > 0);
        assert!(!cache.contains("big-0.png"));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let config = CacheConfig::new(MIN_CACHE_BYTES, MIN_MAX_ENTRIES);
        let mut cache = AssetCache::new(config);

        // 1200x1200 RGBA is ~5.5 MB, more than half of the 8 MB budget
        assert!(!cache.insert("huge.png".to_string(), test_image(1200, 1200)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinsert_replaces_existing_entry() {
        let mut cache = AssetCache::with_defaults();
        cache.insert("a.png".to_string(), test_image(8, 8));
        cache.insert("a.png".to_string(), test_image(16, 16));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.current_bytes(), 16 * 16 * 4);
        let fetched = cache.get("a.png").expect("entry should be cached");
        assert_eq!(fetched.width, 16);
    }

    #[test]
    fn clear_resets_contents_and_bytes() {
        let mut cache = AssetCache::with_defaults();
        cache.insert("a.png".to_string(), test_image(8, 8));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.current_bytes(), 0);
    }

    #[test]
    fn config_clamps_out_of_range_limits() {
        let config = CacheConfig::new(0, 0);
        assert_eq!(config.max_bytes, MIN_CACHE_BYTES);
        assert_eq!(config.max_entries, MIN_MAX_ENTRIES);

        let config = CacheConfig::new(usize::MAX, usize::MAX);
        assert_eq!(config.max_bytes, MAX_CACHE_BYTES);
        assert_eq!(config.max_entries, MAX_MAX_ENTRIES);
    }
}
