//! Key material: loading armored key blocks and unlocking secret keys.
//!
//! Keys enter the crate exclusively through [`PublicKey::from_armor`] /
//! [`PublicKey::load`] and [`PrivateKey::from_armor`] / [`PrivateKey::load`],
//! which fix the expected armor block type. [`parse_key`] and
//! [`load_key_from_path`] are the untyped forms underneath.

use std::fmt;

use pgp::armor::BlockType;

mod loader;
mod public;
mod secret;

pub use self::loader::{load_key_from_path, parse_key};
pub(crate) use self::public::EncryptionKey;
pub use self::public::PublicKey;
pub use self::secret::{unlock_private_key, PrivateKey};

/// The two kinds of key blocks this crate accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Public,
    Private,
}

impl KeyKind {
    /// The armor label a block of this kind must carry.
    pub fn block_type(self) -> BlockType {
        match self {
            KeyKind::Public => BlockType::PublicKey,
            KeyKind::Private => BlockType::PrivateKey,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Public => f.write_str("public key"),
            KeyKind::Private => f.write_str("private key"),
        }
    }
}

/// A parsed key, tagged with the kind it was loaded as.
#[derive(Debug)]
pub enum KeyEntity {
    Public(PublicKey),
    Private(PrivateKey),
}

impl KeyEntity {
    pub fn kind(&self) -> KeyKind {
        match self {
            KeyEntity::Public(_) => KeyKind::Public,
            KeyEntity::Private(_) => KeyKind::Private,
        }
    }

    pub fn into_public(self) -> Option<PublicKey> {
        match self {
            KeyEntity::Public(key) => Some(key),
            KeyEntity::Private(_) => None,
        }
    }

    pub fn into_private(self) -> Option<PrivateKey> {
        match self {
            KeyEntity::Public(_) => None,
            KeyEntity::Private(key) => Some(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_labels() {
        assert_eq!(
            KeyKind::Public.block_type().to_string(),
            "PGP PUBLIC KEY BLOCK"
        );
        assert_eq!(
            KeyKind::Private.block_type().to_string(),
            "PGP PRIVATE KEY BLOCK"
        );
    }
}
