use std::path::PathBuf;

use snafu::Snafu;

use crate::key::KeyKind;

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Error types
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to open key resource {}", path.display()))]
    ResourceOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("invalid armor: {source}"))]
    ArmorDecode { source: pgp::errors::Error },
    #[snafu(display("invalid armor body: {source}"))]
    ArmorBody { source: std::io::Error },
    #[snafu(display("key is not a {expected} (found \"{found}\")"))]
    KeyTypeMismatch { expected: KeyKind, found: String },
    #[snafu(display("failed to parse {kind}: {source}"))]
    EntityParse {
        kind: KeyKind,
        source: pgp::errors::Error,
    },
    #[snafu(display("failed to decrypt secret key material: {source}"))]
    Passphrase { source: pgp::errors::Error },
    #[snafu(display("passphrase is not valid UTF-8: {source}"))]
    PassphraseEncoding { source: std::str::Utf8Error },
    #[snafu(display("recipient has no key capable of encryption"))]
    NoEncryptionKey,
    #[snafu(display("signing key is locked, unlock it with its passphrase first"))]
    SignerLocked,
    #[snafu(display("failed to set up encryption: {source}"))]
    EncryptionSetup { source: pgp::errors::Error },
    #[snafu(display("failed to write encrypted message: {source}"))]
    Write { source: pgp::errors::Error },
}

/// The closed set of failure categories surfaced by this crate.
///
/// Several [`Error`] variants may share a kind; match on the kind to
/// handle a category without caring about its cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed armor framing.
    ArmorDecode,
    /// The armor block label does not match the requested key type.
    KeyTypeMismatch,
    /// Malformed packet data inside a correctly armored block.
    EntityParse,
    /// The named resource could not be opened for reading.
    ResourceOpen,
    /// Secret key material could not be decrypted.
    Passphrase,
    /// The encryption writer could not be constructed.
    EncryptionSetup,
    /// Streaming the plaintext or finalizing the output failed.
    Write,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ResourceOpen { .. } => ErrorKind::ResourceOpen,
            Error::ArmorDecode { .. } | Error::ArmorBody { .. } => ErrorKind::ArmorDecode,
            Error::KeyTypeMismatch { .. } => ErrorKind::KeyTypeMismatch,
            Error::EntityParse { .. } => ErrorKind::EntityParse,
            Error::Passphrase { .. } | Error::PassphraseEncoding { .. } => ErrorKind::Passphrase,
            Error::NoEncryptionKey | Error::SignerLocked | Error::EncryptionSetup { .. } => {
                ErrorKind::EncryptionSetup
            }
            Error::Write { .. } => ErrorKind::Write,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io;

    use super::*;

    #[test]
    fn kinds_collapse_setup_failures() {
        assert_eq!(Error::NoEncryptionKey.kind(), ErrorKind::EncryptionSetup);
        assert_eq!(Error::SignerLocked.kind(), ErrorKind::EncryptionSetup);
    }

    #[test]
    fn framing_and_encoding_kinds() {
        let err = Error::ArmorBody {
            source: io::Error::new(io::ErrorKind::Other, "invalid crc24 checksum"),
        };
        assert_eq!(err.kind(), ErrorKind::ArmorDecode);

        let bytes = vec![0xff, 0xfe];
        let source = std::str::from_utf8(&bytes).unwrap_err();
        let err = Error::PassphraseEncoding { source };
        assert_eq!(err.kind(), ErrorKind::Passphrase);
    }

    #[test]
    fn mismatch_display() {
        let err = Error::KeyTypeMismatch {
            expected: KeyKind::Private,
            found: "PGP PUBLIC KEY BLOCK".into(),
        };
        assert_eq!(
            err.to_string(),
            "key is not a private key (found \"PGP PUBLIC KEY BLOCK\")"
        );
    }

    #[test]
    fn resource_open_names_the_path() {
        let err = Error::ResourceOpen {
            path: PathBuf::from("/no/such/key.asc"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), ErrorKind::ResourceOpen);
        assert!(err.to_string().contains("/no/such/key.asc"));
    }
}
