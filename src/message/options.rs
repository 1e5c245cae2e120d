use derive_builder::Builder;
use pgp::crypto::hash::HashAlgorithm;
use pgp::crypto::sym::SymmetricKeyAlgorithm;
use pgp::types::CompressionAlgorithm;

use crate::armor::ArmorOptions;

/// Knobs for the encryption pipelines.
///
/// The defaults produce an uncompressed SEIPDv1 message encrypted with AES-128,
/// a literal packet without file name and checksummed armor.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct EncryptionOptions {
    /// Symmetric cipher for the encrypted data packet.
    cipher: SymmetricKeyAlgorithm,
    /// Compression applied inside the encryption layer.
    #[builder(setter(strip_option))]
    compression: Option<CompressionAlgorithm>,
    /// Hash used for the signature of an authenticated sender.
    hash: HashAlgorithm,
    /// File name recorded in the literal data packet.
    #[builder(setter(into))]
    file_name: String,
    armor: ArmorOptions,
}

impl Default for EncryptionOptions {
    fn default() -> Self {
        EncryptionOptions {
            cipher: SymmetricKeyAlgorithm::AES128,
            compression: None,
            hash: HashAlgorithm::default(),
            file_name: String::new(),
            armor: ArmorOptions::default(),
        }
    }
}

impl EncryptionOptions {
    pub fn cipher(&self) -> SymmetricKeyAlgorithm {
        self.cipher
    }

    pub fn compression(&self) -> Option<CompressionAlgorithm> {
        self.compression
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn armor(&self) -> &ArmorOptions {
        &self.armor
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn builder_falls_back_to_defaults() {
        let opts = EncryptionOptionsBuilder::default().build().unwrap();
        assert_eq!(opts, EncryptionOptions::default());
        assert_eq!(opts.cipher(), SymmetricKeyAlgorithm::AES128);
        assert_eq!(opts.compression(), None);
        assert!(opts.armor().include_checksum);
    }

    #[test]
    fn builder_overrides() {
        let opts = EncryptionOptionsBuilder::default()
            .cipher(SymmetricKeyAlgorithm::AES256)
            .compression(CompressionAlgorithm::ZLIB)
            .file_name("notes.txt")
            .build()
            .unwrap();

        assert_eq!(opts.cipher(), SymmetricKeyAlgorithm::AES256);
        assert_eq!(opts.compression(), Some(CompressionAlgorithm::ZLIB));
        assert_eq!(opts.file_name(), "notes.txt");
        assert_eq!(opts.hash(), HashAlgorithm::default());
    }
}
