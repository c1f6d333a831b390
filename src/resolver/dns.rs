//! Resolver implementations: system reverse DNS, literal passthrough,
//! and a bounded per-address memo wrapper.

use super::AddressResolver;
use crate::utils::config::DEFAULT_RESOLVER_CACHE_SIZE;
use log::debug;
use lru::LruCache;
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Reverse lookup through the system resolver (`getnameinfo`).
///
/// Single attempt per address, no retries. Blocks for as long as the
/// system resolver takes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }
}

impl AddressResolver for DnsResolver {
    fn resolve(&self, address: &str) -> String {
        let ip: IpAddr = match address.parse() {
            Ok(ip) => ip,
            Err(_) => {
                debug!("Not an IP address, skipping reverse lookup: {}", address);
                return address.to_string();
            }
        };

        match dns_lookup::lookup_addr(&ip) {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => address.to_string(),
            Err(e) => {
                debug!("Reverse lookup failed for {}: {}", address, e);
                address.to_string()
            }
        }
    }
}

/// Resolver that never queries anything (`--no-resolve`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralResolver;

impl AddressResolver for LiteralResolver {
    fn resolve(&self, address: &str) -> String {
        address.to_string()
    }
}

/// Memoises another resolver so each distinct address is looked up once.
///
/// Probe reports repeat the same router address for every attempt at a
/// hop and across runs, so this bounds the blocking cost to the number of
/// distinct addresses. The cache is LRU-bounded so a long-lived resolver
/// does not grow without limit.
pub struct CachedResolver<R> {
    inner: R,
    cache: Mutex<LruCache<String, String>>,
}

impl<R: AddressResolver> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_RESOLVER_CACHE_SIZE)
    }

    /// Cache at most `capacity` addresses (a zero capacity is treated as 1)
    pub fn with_capacity(inner: R, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of distinct addresses currently cached
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: AddressResolver> AddressResolver for CachedResolver<R> {
    fn resolve(&self, address: &str) -> String {
        {
            let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(address) {
                return hit.clone();
            }
        }

        // Lock is released during the lookup; a racing duplicate lookup is harmless.
        let name = self.inner.resolve(address);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .put(address.to_string(), name.clone());
        name
    }
}
