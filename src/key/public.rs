use std::io::Read;
use std::path::Path;

use pgp::composed::SignedPublicKey;
use pgp::packet;
use pgp::types::{KeyId, PublicKeyTrait};

use crate::errors::Result;
use crate::key::loader;

/// A transferable public key, usable as an encryption recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key: SignedPublicKey,
}

/// The key material a message gets encrypted to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum EncryptionKey<'a> {
    Primary(&'a packet::PublicKey),
    Subkey(&'a packet::PublicSubkey),
}

impl PublicKey {
    pub fn new(key: SignedPublicKey) -> Self {
        PublicKey { key }
    }

    /// Parses an armored `PGP PUBLIC KEY BLOCK` from `source`.
    pub fn from_armor(source: impl Read) -> Result<Self> {
        loader::parse_public_key(source)
    }

    pub fn from_armor_str(input: &str) -> Result<Self> {
        Self::from_armor(input.as_bytes())
    }

    /// Reads an armored `PGP PUBLIC KEY BLOCK` from the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_armor(loader::open(path.as_ref())?)
    }

    pub fn key_id(&self) -> KeyId {
        self.key.primary_key.key_id()
    }

    pub fn inner(&self) -> &SignedPublicKey {
        &self.key
    }

    pub fn into_inner(self) -> SignedPublicKey {
        self.key
    }

    /// Picks the first subkey able to encrypt, falling back to the primary key.
    pub(crate) fn encryption_key(&self) -> Option<EncryptionKey<'_>> {
        self.key
            .public_subkeys
            .iter()
            .map(|subkey| &subkey.key)
            .find(|subkey| subkey.is_encryption_key())
            .map(EncryptionKey::Subkey)
            .or_else(|| {
                let primary = &self.key.primary_key;
                primary
                    .is_encryption_key()
                    .then_some(EncryptionKey::Primary(primary))
            })
    }
}

impl From<SignedPublicKey> for PublicKey {
    fn from(key: SignedPublicKey) -> Self {
        PublicKey::new(key)
    }
}

impl AsRef<SignedPublicKey> for PublicKey {
    fn as_ref(&self) -> &SignedPublicKey {
        &self.key
    }
}
