//! Byte-source backend: resolves an [`Identity`](crate::identity::Identity)
//! to raw bytes, the way the original opens a BIO over a file or a literal
//! buffer before handing it to `PEM_read_bio_*`.

use std::fs;
use std::path::Path;

use crate::error::CacheError;
use crate::identity::{Identity, IdentityTag};

/// Reads the bytes named by `identity`.
///
/// - PATH identities are read from disk.
/// - DATA identities have their `data:` prefix stripped and the remainder
///   returned as-is (already in memory, no I/O).
/// - ENGINE identities have no bytes to read; loading one is a hard error
///   since no engine backend is implemented, matching the original's
///   `#else` branch when built without engine support.
pub fn read(identity: &Identity) -> Result<Vec<u8>, CacheError> {
    match identity.tag {
        IdentityTag::Path => read_path(identity.as_path().expect("PATH identity without a path")),
        IdentityTag::Data => {
            let text = std::str::from_utf8(&identity.bytes)
                .map_err(|e| CacheError::SourceOpen(format!("invalid data: identity: {e}")))?;
            let rest = text
                .strip_prefix("data:")
                .ok_or_else(|| CacheError::SourceOpen("data: identity missing prefix".to_string()))?;
            Ok(rest.as_bytes().to_vec())
        }
        IdentityTag::Engine => Err(CacheError::Engine(format!(
            "loading \"{}\" certificate keys is not supported",
            identity.display()
        ))),
    }
}

fn read_path(path: &Path) -> Result<Vec<u8>, CacheError> {
    fs::read(path).map_err(|e| {
        CacheError::SourceOpen(format!(
            "BIO_new_file(\"{}\") failed ({})",
            path.display(),
            e
        ))
    })
}

/// Freshness metadata captured from the filesystem at load time, used by
/// the connection-time cache to detect whether a cached material's source
/// file has changed underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub mtime: i64,
    pub uniq: u64,
}

impl Freshness {
    /// Stats `path`; returns `None` for identities with no backing file
    /// (DATA, ENGINE), which are never considered stale.
    pub fn of(identity: &Identity) -> Result<Option<Self>, CacheError> {
        let Some(path) = identity.as_path() else {
            return Ok(None);
        };
        use std::os::unix::fs::MetadataExt;
        let meta = fs::metadata(path).map_err(|e| {
            CacheError::SourceOpen(format!("stat(\"{}\") failed ({})", path.display(), e))
        })?;
        Ok(Some(Freshness {
            mtime: meta.mtime(),
            uniq: meta.ino(),
        }))
    }
}
