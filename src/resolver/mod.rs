//! Best-effort reverse name resolution for hop addresses.
//!
//! Resolution never fails from the caller's point of view: any lookup
//! problem degrades to the literal address string.

pub mod dns;

pub use dns::{CachedResolver, DnsResolver, LiteralResolver};

/// Turns a raw address scraped from a probe report into a display name.
///
/// Implementations must return the input unchanged when no name is found.
pub trait AddressResolver: Send + Sync {
    fn resolve(&self, address: &str) -> String;
}

impl<R: AddressResolver + ?Sized> AddressResolver for &R {
    fn resolve(&self, address: &str) -> String {
        (**self).resolve(address)
    }
}

impl<R: AddressResolver + ?Sized> AddressResolver for Box<R> {
    fn resolve(&self, address: &str) -> String {
        (**self).resolve(address)
    }
}
