use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::trace;

use crate::document::{Document, DocumentId};
use crate::types::LanguageId;

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    document: DocumentId,
    version: String,
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
}

/// Memoizes which language registry a document version resolves to.
///
/// Entries are keyed by document id and content hash, so an edited document
/// never sees the language of an older version.
#[derive(Debug)]
pub struct LanguageCache {
    entries: LruCache<CacheKey, LanguageId>,
    stats: CacheStats,
}

impl Default for LanguageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl LanguageCache {
    /// A capacity of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Language recorded for this exact document version
    pub fn get(&mut self, document: &DocumentId, version: &str) -> Option<LanguageId> {
        let key = CacheKey {
            document: document.clone(),
            version: version.to_string(),
        };
        match self.entries.get(&key) {
            Some(language) => {
                self.stats.hits += 1;
                Some(*language)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Records `language` for a document version, dropping entries for any
    /// other version of the same document.
    pub fn insert(&mut self, document: &DocumentId, version: &str, language: LanguageId) {
        self.invalidate_stale(document, version);
        self.entries.put(
            CacheKey {
                document: document.clone(),
                version: version.to_string(),
            },
            language,
        );
    }

    /// Cached language of `document`, or the document's own language recorded
    /// on a miss
    pub fn resolve(&mut self, document: &Document) -> LanguageId {
        if let Some(language) = self.get(document.id(), document.version()) {
            return language;
        }
        trace!(
            "Language cache miss for {} ({})",
            document.id(),
            document.version()
        );
        let language = document.language();
        self.insert(document.id(), document.version(), language);
        language
    }

    /// Drops every entry of `document`
    pub fn remove(&mut self, document: &DocumentId) {
        self.invalidate_stale(document, "");
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn invalidate_stale(&mut self, document: &DocumentId, version: &str) {
        let stale: Vec<CacheKey> = self
            .entries
            .iter()
            .map(|(key, _)| key)
            .filter(|key| &key.document == document && key.version != version)
            .cloned()
            .collect();
        for key in stale {
            trace!("Invalidating {} ({})", key.document, key.version);
            self.entries.pop(&key);
            self.stats.invalidations += 1;
        }
    }
}
