//! The four-material kind table.
//!
//! Each kind owns its own loader (`cert`, `pkey`, `crl`); CERT and CA share
//! `cert::CertChain` and its loader, matching the original's shared
//! `ngx_ssl_cache_cert_t` free/ref pair. [`Handle`] is the tagged
//! replacement for the original's `void*` cache value — dispatch happens
//! once, at `create` time, rather than through a function-pointer table.

pub mod cert;
pub mod crl;
mod legacy_decrypt;
pub mod pemblocks;
pub mod pkey;
pub mod source;

#[cfg(test)]
pub mod mock;

use std::sync::Arc;

use crate::error::CacheError;
use crate::identity::{Identity, Kind};
use crate::passphrase::Auxiliary;

/// An opaque, refcounted handle to a loaded material.
///
/// Cloning a `Handle` is the "duplicate" operation: it bumps the
/// underlying `Arc`'s refcount rather than reloading or deep-copying.
/// Dropping the last clone runs the value's destructor, which is
/// "destroy" — for `CertChain`/`CrlList` this releases every DER blob in
/// the chain; for `PrivateKey` it additionally zeroizes the key bytes.
#[derive(Clone)]
pub enum Handle {
    Cert(Arc<cert::CertChain>),
    PKey(Arc<pkey::PrivateKey>),
    Crl(Arc<crl::CrlList>),
    #[cfg(test)]
    Mock(Arc<mock::MockValue>),
}

impl Handle {
    /// Explicit "destroy" for symmetry with `duplicate`/`create`; identical
    /// to an ordinary drop, provided so call sites documenting the
    /// lifecycle can say `handle.destroy()` instead of a bare `drop`.
    ///
    /// CA reuses `Handle::Cert`'s representation; which of CERT/CA a handle
    /// was created as is tracked by the owning `Entry`, not by `Handle`
    /// itself, so this type never needs to disambiguate the two.
    pub fn destroy(self) {
        drop(self)
    }
}

/// Loads the material named by `identity`, dispatching to the adapter for
/// `kind`. CA reuses the CERT loader, same as the original's shared
/// free/ref design, realized here as a shared `create`.
pub fn create(kind: Kind, identity: &Identity, aux: &Auxiliary) -> Result<Handle, CacheError> {
    match kind {
        Kind::Cert | Kind::Ca => cert::CertChain::create(identity).map(Handle::Cert),
        Kind::PKey => pkey::PrivateKey::create(identity, aux).map(Handle::PKey),
        Kind::Crl => crl::CrlList::create(identity).map(Handle::Crl),
    }
}
