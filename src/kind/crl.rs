//! CRL materials: a set of DER-encoded certificate revocation lists.

use std::sync::Arc;

use crate::error::CacheError;
use crate::identity::Identity;
use crate::kind::pemblocks;
use crate::kind::source;

/// One or more revocation lists loaded from the same source, stored as
/// opaque DER — no revocation semantics are implemented.
#[derive(Debug, PartialEq, Eq)]
pub struct CrlList {
    pub der_list: Vec<Vec<u8>>,
}

impl CrlList {
    /// Loads every `X509 CRL` block at `identity`.
    pub fn create(identity: &Identity) -> Result<Arc<Self>, CacheError> {
        let bytes = source::read(identity)?;
        let blocks = pemblocks::parse_all(&bytes)?;

        let der_list: Vec<Vec<u8>> = blocks
            .into_iter()
            .filter(|b| b.tag == "X509 CRL")
            .map(|b| b.der)
            .collect();

        if der_list.is_empty() {
            return Err(CacheError::Parse(format!(
                "PEM_read_bio_X509_CRL() failed (no CRL found in \"{}\")",
                identity.display()
            )));
        }

        Ok(Arc::new(CrlList { der_list }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Identity, Kind};
    use std::path::Path;

    const ONE_CRL: &str = "-----BEGIN X509 CRL-----\nMAA=\n-----END X509 CRL-----\n";

    #[test]
    fn loads_crl() {
        // `data:` is not recognized for CRL, so exercise the real
        // path-reading case via a temp file.
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("revoked.pem");
        std::fs::write(&file, ONE_CRL).unwrap();
        let id = Identity::normalize(Kind::Crl, file.to_str().unwrap(), Path::new("/unused")).unwrap();

        let crl = CrlList::create(&id).unwrap();
        assert_eq!(crl.der_list.len(), 1);
    }

    #[test]
    fn missing_crl_block_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.pem");
        std::fs::write(&file, "-----BEGIN CERTIFICATE-----\nMAA=\n-----END CERTIFICATE-----\n").unwrap();
        let id = Identity::normalize(Kind::Crl, file.to_str().unwrap(), Path::new("/unused")).unwrap();

        let err = CrlList::create(&id).unwrap_err();
        assert!(matches!(err, CacheError::Parse(_)));
    }
}
