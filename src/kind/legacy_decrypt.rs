//! Classic OpenSSL `EVP_BytesToKey` + AES-256-CBC decryption for PEM private
//! keys marked `Proc-Type: 4,ENCRYPTED` / `DEK-Info: AES-256-CBC,<iv>`. This
//! is the scheme OpenSSL's own `PEM_read_bio_PrivateKey` used for
//! "traditional" encrypted PEM before PKCS#8, reimplemented here rather
//! than invented so test fixtures can be genuinely encrypted.

use aes::Aes256;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::error::CacheError;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Derives a 32-byte AES-256 key from `passphrase` and `salt` via
/// `EVP_BytesToKey` with MD5 and a single iteration — the original's exact
/// parameters for `AES-256-CBC,<iv>` DEK-Info lines.
fn evp_bytes_to_key(passphrase: &[u8], salt: &[u8; 8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    let mut filled = 0;
    let mut prev: Vec<u8> = Vec::new();

    while filled < key.len() {
        let mut ctx = md5::Context::new();
        ctx.consume(&prev);
        ctx.consume(passphrase);
        ctx.consume(salt);
        let digest = ctx.compute();
        prev = digest.0.to_vec();

        let take = (key.len() - filled).min(prev.len());
        key[filled..filled + take].copy_from_slice(&prev[..take]);
        filled += take;
    }

    key
}

/// Decrypts `ciphertext` given the hex-encoded IV from a `DEK-Info:
/// AES-256-CBC,<iv>` PEM header and a candidate passphrase. Returns the
/// PKCS7-unpadded plaintext, or a parse error if the passphrase was wrong
/// (bad padding) or the header was malformed.
pub fn decrypt(ciphertext: &[u8], dek_info: &str, passphrase: &[u8]) -> Result<Vec<u8>, CacheError> {
    let (algo, iv_hex) = dek_info
        .split_once(',')
        .ok_or_else(|| CacheError::Parse(format!("malformed DEK-Info header: {dek_info}")))?;

    if algo.trim() != "AES-256-CBC" {
        return Err(CacheError::Parse(format!(
            "unsupported DEK-Info cipher: {algo}"
        )));
    }

    let iv = hex::decode(iv_hex.trim())
        .map_err(|e| CacheError::Parse(format!("malformed DEK-Info IV: {e}")))?;
    if iv.len() != 16 {
        return Err(CacheError::Parse("DEK-Info IV must be 16 bytes".to_string()));
    }
    let mut salt = [0u8; 8];
    salt.copy_from_slice(&iv[..8]);

    let key = evp_bytes_to_key(passphrase, &salt);

    let mut buf = ciphertext.to_vec();
    let decryptor = Aes256CbcDec::new(key.as_slice().into(), iv.as_slice().into());
    decryptor
        .decrypt_padded_mut::<cbc::cipher::block_padding::Pkcs7>(&mut buf)
        .map(|out| out.to_vec())
        .map_err(|_| {
            CacheError::Parse(
                "PEM_do_header() failed (bad decrypt, wrong passphrase?)".to_string(),
            )
        })
}
