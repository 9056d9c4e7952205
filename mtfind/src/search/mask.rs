use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::errors::{SearchError, SearchResult};
use crate::metrics::SearchMetrics;

/// Maximum mask length in characters
pub const MAX_MASK_LEN: usize = 1000;

static MASK_CACHE: Lazy<DashMap<String, CompiledMask>> = Lazy::new(DashMap::new);

/// One position of a compiled mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSymbol {
    /// Matches exactly this byte
    Literal(u8),
    /// Matches any single byte
    Wildcard,
}

/// An immutable compiled mask, cheap to clone and share across workers
#[derive(Debug, Clone)]
pub struct CompiledMask {
    symbols: Arc<[MaskSymbol]>,
}

impl CompiledMask {
    /// Compiles a mask string into its symbol sequence.
    ///
    /// `?` is always the wildcard; every other byte is a literal, including
    /// spaces and control characters. There is no escape syntax, so a literal
    /// `?` cannot be expressed. Fails if the mask is empty or longer than
    /// [`MAX_MASK_LEN`] characters.
    pub fn compile(mask: &str) -> SearchResult<Self> {
        Self::compile_with_metrics(mask, &SearchMetrics::new())
    }

    /// Compiles a mask, recording cache hits and misses on `metrics`
    pub fn compile_with_metrics(mask: &str, metrics: &SearchMetrics) -> SearchResult<Self> {
        if mask.is_empty() {
            return Err(SearchError::invalid_mask("mask must not be empty"));
        }
        if mask.chars().count() > MAX_MASK_LEN {
            return Err(SearchError::invalid_mask(format!(
                "mask exceeds {} characters",
                MAX_MASK_LEN
            )));
        }

        if let Some(entry) = MASK_CACHE.get(mask) {
            metrics.record_cache_operation(true);
            return Ok(entry.clone());
        }

        let symbols: Arc<[MaskSymbol]> = mask
            .bytes()
            .map(|b| {
                if b == b'?' {
                    MaskSymbol::Wildcard
                } else {
                    MaskSymbol::Literal(b)
                }
            })
            .collect();
        let compiled = Self { symbols };

        metrics.record_cache_operation(false);
        MASK_CACHE.insert(mask.to_string(), compiled.clone());
        Ok(compiled)
    }

    /// Number of bytes a match of this mask spans
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Tests whether the mask matches `line` at byte offset `start`.
    ///
    /// Callers must ensure `start + self.len() <= line.len()`.
    pub fn matches_at(&self, line: &[u8], start: usize) -> bool {
        debug_assert!(start + self.len() <= line.len());
        self.symbols
            .iter()
            .zip(&line[start..])
            .all(|(symbol, &byte)| match symbol {
                MaskSymbol::Wildcard => true,
                MaskSymbol::Literal(expected) => *expected == byte,
            })
    }

    /// The compiled symbol sequence
    pub fn symbols(&self) -> &[MaskSymbol] {
        &self.symbols
    }
}
