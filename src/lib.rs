//! # sslcache
//!
//! A typed, polymorphic object cache for parsed TLS materials — certificate
//! chains, private keys, CRLs, and trusted CA bundles — used by a
//! TLS-terminating network server to avoid re-parsing the same file on
//! every connection while still picking up changes to it on disk.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use sslcache::{cache_init, identity::Kind, passphrase::Auxiliary, CacheConfig};
//!
//! let mut configs = cache_init(CacheConfig::default());
//! let handle = configs
//!     .config_fetch(None, Kind::Cert, "server.pem", &Auxiliary::none(), Path::new("/etc/tls"))
//!     .expect("failed to load server certificate");
//! drop(handle);
//! ```
//!
//! ## Architecture
//!
//! - `identity`: normalizes a `(kind, raw_spec)` pair into a canonical
//!   [`identity::Identity`] — resolving `data:`/`engine:` prefixes and
//!   relative paths.
//! - `kind`: the four material loaders (`kind::cert`, `kind::pkey`,
//!   `kind::crl`) plus the shared byte-source backend (`kind::source`) and
//!   PEM decoding (`kind::pemblocks`).
//! - `entry`/`index`/`recency`: the cache's data model — an ordered index
//!   keyed by `(hash, kind, identity)` and an intrusive recency list for
//!   least-recently-used eviction.
//! - `cache`: [`Cache`] itself, with [`Cache::config_fetch`] (unbounded,
//!   cross-generation inheritance) and [`Cache::connection_fetch`]
//!   (bounded, freshness-revalidating).
//! - `passphrase`: the zeroizing passphrase list threaded through PKEY
//!   fetches for encrypted private keys.
//! - `config`: [`CacheConfig`], the cache's sizing and inheritance knobs.
//! - `error`: the crate-wide [`error::CacheError`] type.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod entry;
pub mod error;
pub mod identity;
pub mod index;
pub mod kind;
pub mod passphrase;
pub mod recency;

pub use cache::{cache_init, Cache};
pub use config::CacheConfig;
pub use error::{CacheError, CacheResult};
pub use identity::{Identity, Kind};
pub use kind::Handle;

/// Crate version, exposed for embedders that log it at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, exposed for embedders that log it at startup.
pub const NAME: &str = env!("CARGO_PKG_NAME");
