//! Cache sizing and inheritance configuration, modeled as a
//! serde-serializable struct the way a typical top-level application
//! config struct is shaped.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for one [`crate::cache::Cache`] instance.
///
/// The configuration-time cache (fed by `config_fetch`) uses
/// `CacheConfig::default()`: unbounded, non-expiring, inheriting. A
/// connection-time cache (fed by `connection_fetch`) is constructed with
/// an explicit `max > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries; `0` means unbounded.
    pub max: usize,
    /// How long a connection-time entry may go without its source file
    /// being revalidated before the cache treats it as stale on next use.
    #[serde(with = "duration_secs")]
    pub valid: Duration,
    /// How long an entry may go unused before it becomes eligible for the
    /// inactivity sweep.
    #[serde(with = "duration_secs")]
    pub inactive: Duration,
    /// Whether a new generation's cache may inherit unexpired entries from
    /// the previous generation's configuration-time cache
    /// (`ssl_object_cache_inherit`).
    pub inherit: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            max: 0,
            valid: Duration::from_secs(60),
            inactive: Duration::from_secs(600),
            inherit: true,
        }
    }
}

impl CacheConfig {
    /// A typical connection-time configuration: bounded, with the same
    /// validity/inactivity windows as the default but `inherit` irrelevant
    /// (connection-time caches never inherit across generations).
    pub fn bounded(max: usize) -> Self {
        CacheConfig {
            max,
            inherit: false,
            ..Self::default()
        }
    }
}

mod duration_secs {
    use super::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_and_inheriting() {
        let cfg = CacheConfig::default();
        assert_eq!(cfg.max, 0);
        assert!(cfg.inherit);
    }

    #[test]
    fn bounded_overrides_max_and_inherit() {
        let cfg = CacheConfig::bounded(128);
        assert_eq!(cfg.max, 128);
        assert!(!cfg.inherit);
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = CacheConfig::bounded(64);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
