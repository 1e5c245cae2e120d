//! # pgp-envelope
//!
//! Envelope encryption on top of the OpenPGP message format.
//!
//! Keys are read from armored `PGP PUBLIC KEY BLOCK` / `PGP PRIVATE KEY BLOCK`
//! data, private keys are unlocked with their passphrase, and plaintext is sealed
//! either to a recipient's public key (optionally signed by the sender) or to a
//! passphrase. Output is the binary packet stream or `PGP MESSAGE` armor.
//!
//! The packet and armor codec is [rPGP](https://docs.rs/pgp); this crate adds
//! typed key loading and explicit lock state for secret keys on top of it.
//!
//! ```no_run
//! use pgp_envelope::{asymmetric_encrypt_with_armor, load_public_key, Sender};
//!
//! # fn main() -> pgp_envelope::errors::Result<()> {
//! let recipient = load_public_key("publicKey.asc")?;
//! let armored = asymmetric_encrypt_with_armor(b"hola que tal estas?", &recipient, Sender::Anonymous)?;
//! println!("{armored}");
//! # Ok(())
//! # }
//! ```

use std::io::Read;
use std::path::Path;

pub mod armor;
pub mod errors;
pub mod key;
pub mod message;

pub use self::errors::{Error, ErrorKind, Result};
pub use self::key::{KeyEntity, KeyKind, PrivateKey, PublicKey};
pub use self::message::{EncryptionOptions, EncryptionOptionsBuilder, Encryptor, Sender};

/// Reads an armored public key from the file at `path`.
pub fn load_public_key(path: impl AsRef<Path>) -> Result<PublicKey> {
    PublicKey::load(path)
}

/// Reads an armored private key from the file at `path` and unlocks it with
/// `passphrase`. An empty passphrase leaves the key locked.
pub fn load_private_key(path: impl AsRef<Path>, passphrase: &[u8]) -> Result<PrivateKey> {
    PrivateKey::load(path, passphrase)
}

/// Reads an armored public key from `source`.
pub fn new_public_key(source: impl Read) -> Result<PublicKey> {
    PublicKey::from_armor(source)
}

/// Reads an armored private key from `source` and unlocks it with `passphrase`.
/// An empty passphrase leaves the key locked.
pub fn new_private_key(source: impl Read, passphrase: &[u8]) -> Result<PrivateKey> {
    PrivateKey::from_armor(source, passphrase)
}

/// Encrypts `plaintext` to `public_key` with the default [`EncryptionOptions`].
pub fn asymmetric_encrypt<'a>(
    plaintext: &[u8],
    public_key: &PublicKey,
    sender: impl Into<Sender<'a>>,
) -> Result<Vec<u8>> {
    Encryptor::default().encrypt_asymmetric(
        rand::thread_rng(),
        plaintext,
        public_key,
        sender.into(),
    )
}

/// Like [`asymmetric_encrypt`], returning `PGP MESSAGE` armor.
pub fn asymmetric_encrypt_with_armor<'a>(
    plaintext: &[u8],
    public_key: &PublicKey,
    sender: impl Into<Sender<'a>>,
) -> Result<String> {
    Encryptor::default().encrypt_asymmetric_armored(
        rand::thread_rng(),
        plaintext,
        public_key,
        sender.into(),
    )
}

/// Encrypts `plaintext` to `passphrase` with the default [`EncryptionOptions`].
pub fn symmetrically_encrypt(plaintext: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    Encryptor::default().encrypt_symmetric(rand::thread_rng(), plaintext, passphrase)
}

/// Like [`symmetrically_encrypt`], returning `PGP MESSAGE` armor.
pub fn symmetrically_encrypt_with_armor(plaintext: &[u8], passphrase: &[u8]) -> Result<String> {
    Encryptor::default().encrypt_symmetric_armored(rand::thread_rng(), plaintext, passphrase)
}
