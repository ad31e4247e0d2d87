//! Passphrase auxiliary data for PKEY fetches.
//!
//! The original threads a password callback through OpenSSL; this crate
//! instead threads an ordered list of candidate passphrases that `kind::pkey`
//! tries in turn against an encrypted key, stopping at the first one that
//! decrypts successfully. Passphrase bytes are zeroized on drop so a
//! `Cache`/`Auxiliary` going out of scope doesn't leave key material
//! lingering in freed memory.

use zeroize::Zeroize;

/// A single passphrase candidate. Implements `Zeroize`/`Drop` so its bytes
/// are wiped rather than left for the allocator to reuse verbatim.
#[derive(Clone)]
pub struct Passphrase(Vec<u8>);

impl Passphrase {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Passphrase(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Passphrase {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

/// Fetch-time auxiliary data. Most fetches (CERT, CRL, CA) carry none;
/// PKEY fetches for an encrypted key carry one or more passphrase
/// candidates to try in order.
#[derive(Debug, Clone, Default)]
pub struct Auxiliary {
    passphrases: Vec<Passphrase>,
}

impl Auxiliary {
    pub fn none() -> Self {
        Auxiliary::default()
    }

    pub fn with_passphrases(passphrases: Vec<Passphrase>) -> Self {
        Auxiliary { passphrases }
    }

    pub fn passphrases(&self) -> &[Passphrase] {
        &self.passphrases
    }
}
