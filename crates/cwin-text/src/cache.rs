#![forbid(unsafe_code)]

//! LRU cache for run widths with generation-based invalidation.
//!
//! Candidate pages repeat the same strings constantly (paging back and
//! forth, re-rendering on every keystroke). [`CachedMeasurer`] wraps any
//! [`TextMeasurer`] and memoizes `(text, font, size)` lookups.
//!
//! # Invalidation
//!
//! Each entry carries the generation it was stored under. When the host
//! swaps typefaces or changes density it calls
//! [`invalidate`](CachedMeasurer::invalidate); older entries then count as
//! misses and are replaced lazily on access.
//!
//! The cache uses interior mutability so it can sit behind the `&self`
//! measurer interface. It is not `Sync`; keep one per UI thread.

use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use cwin_style::FontId;
use lru::LruCache;
use rustc_hash::FxHasher;

use crate::measure::{FontMetrics, TextMeasurer};

/// Default number of cached widths.
pub const DEFAULT_CAPACITY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeasureKey {
    text_hash: u64,
    text_len: u32,
    font: FontId,
    size_bits: u32,
}

impl MeasureKey {
    fn new(text: &str, font: FontId, size: f32) -> Self {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        Self {
            text_hash: hasher.finish(),
            text_len: text.len() as u32,
            font,
            size_bits: size.to_bits(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedWidth {
    width: f32,
    generation: u64,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasureCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries found but stored under an older generation.
    pub stale: u64,
    pub size: usize,
    pub capacity: usize,
    pub generation: u64,
}

impl MeasureCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A [`TextMeasurer`] that memoizes another.
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<LruCache<MeasureKey, CachedWidth>>,
    generation: u64,
    stats: Cell<MeasureCacheStats>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    pub fn new(inner: M, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: RefCell::new(LruCache::new(cap)),
            generation: 0,
            stats: Cell::new(MeasureCacheStats {
                capacity: cap.get(),
                ..Default::default()
            }),
        }
    }

    pub fn with_default_capacity(inner: M) -> Self {
        Self::new(inner, DEFAULT_CAPACITY)
    }

    #[inline]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Bump the generation; every stored width becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        let mut stats = self.stats.get();
        stats.generation = self.generation;
        self.stats.set(stats);
        tracing::debug!(generation = self.generation, "measure cache invalidated");
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.cache.get_mut().clear();
        self.generation += 1;
        let capacity = self.stats.get().capacity;
        self.stats.set(MeasureCacheStats {
            capacity,
            generation: self.generation,
            ..Default::default()
        });
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> MeasureCacheStats {
        MeasureCacheStats {
            size: self.cache.borrow().len(),
            ..self.stats.get()
        }
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure_run(&self, text: &str, font: FontId, size: f32) -> f32 {
        let key = MeasureKey::new(text, font, size);
        let mut stats = self.stats.get();

        let cached = self.cache.borrow_mut().get(&key).copied();
        if let Some(entry) = cached {
            if entry.generation == self.generation {
                stats.hits += 1;
                self.stats.set(stats);
                return entry.width;
            }
            stats.stale += 1;
        }

        stats.misses += 1;
        self.stats.set(stats);
        let width = self.inner.measure_run(text, font, size);
        self.cache.borrow_mut().put(
            key,
            CachedWidth {
                width,
                generation: self.generation,
            },
        );
        width
    }

    fn metrics(&self, font: FontId, size: f32) -> FontMetrics {
        self.inner.metrics(font, size)
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for CachedMeasurer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedMeasurer")
            .field("inner", &self.inner)
            .field("generation", &self.generation)
            .field("stats", &self.stats.get())
            .finish()
    }
}
