use crate::{Encoding, Result, printable, truncate_long};
use lru::LruCache;
use std::{
    fmt::{self, Debug},
    num::NonZeroUsize,
    sync::{Arc, Mutex, PoisonError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of compiled forms kept.
    pub capacity: usize,
    /// Longer queries are compiled without being cached.
    pub max_statement_length: usize,
    /// Queries bound with more values are compiled without being cached.
    pub max_statement_params: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 128,
            max_statement_length: 4096,
            max_statement_params: 50,
        }
    }
}

/// Bounded LRU cache of compiled forms keyed by query text and encoding.
///
/// Shared between binders through an `Arc`, every binder executing the same
/// text then reads the same compiled form.
pub struct CompileCache<F> {
    config: CacheConfig,
    store: Mutex<LruCache<(Vec<u8>, Encoding), Arc<F>>>,
}

impl<F> CompileCache<F> {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(128) {
        Some(v) => v,
        None => unreachable!(),
    };

    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            config,
            store: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Whether a query of this size is eligible for caching.
    pub fn accepts(&self, query: &[u8], params_count: usize) -> bool {
        query.len() <= self.config.max_statement_length
            && params_count <= self.config.max_statement_params
    }

    /// Cached form of `query`, compiling and storing it when missing.
    ///
    /// Compilation failures are returned and never stored.
    pub fn get_or_compile(
        &self,
        query: &[u8],
        encoding: Encoding,
        params_count: usize,
        compile: impl FnOnce(&[u8], Encoding) -> Result<F>,
    ) -> Result<Arc<F>> {
        if !self.accepts(query, params_count) {
            log::debug!(
                "Compiling uncached query: {}",
                truncate_long!(printable(query))
            );
            return compile(query, encoding).map(Arc::new);
        }
        let key = (query.to_vec(), encoding);
        if let Some(form) = self.lock().get(&key) {
            log::debug!("Compiled query cache hit: {}", truncate_long!(printable(query)));
            return Ok(form.clone());
        }
        log::debug!("Compiling query: {}", truncate_long!(printable(query)));
        let form = Arc::new(compile(query, encoding)?);
        // Another binder may have compiled the same text meanwhile, keep the first one
        let mut store = self.lock();
        if let Some(existing) = store.get(&key) {
            return Ok(existing.clone());
        }
        store.put(key, form.clone());
        Ok(form)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<(Vec<u8>, Encoding), Arc<F>>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F> Default for CompileCache<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Debug for CompileCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileCache")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}
