//! CERT and CA materials: a chain of DER certificates loaded from one or
//! more `CERTIFICATE` PEM blocks. The original shares one free/ref pair
//! between `ngx_ssl_cache_cert_t` used for both CERT and CA; this crate
//! shares one type and one `create` function the same way.

use std::sync::Arc;

use crate::error::CacheError;
use crate::identity::Identity;
use crate::kind::pemblocks;
use crate::kind::source;

/// A leaf certificate plus any intermediates that followed it in the same
/// PEM file, each held as an opaque DER payload — no X.509 parsing is
/// performed.
#[derive(Debug, PartialEq, Eq)]
pub struct CertChain {
    pub der_chain: Vec<Vec<u8>>,
}

impl CertChain {
    /// Loads every `CERTIFICATE` block at `identity`, in file order.
    pub fn create(identity: &Identity) -> Result<Arc<Self>, CacheError> {
        let bytes = source::read(identity)?;
        let blocks = pemblocks::parse_all(&bytes)?;

        let der_chain: Vec<Vec<u8>> = blocks
            .into_iter()
            .filter(|b| b.tag == "CERTIFICATE")
            .map(|b| b.der)
            .collect();

        if der_chain.is_empty() {
            return Err(CacheError::Parse(format!(
                "PEM_read_bio_X509() failed (no certificate found in \"{}\")",
                identity.display()
            )));
        }

        Ok(Arc::new(CertChain { der_chain }))
    }
}
