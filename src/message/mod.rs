//! Encryption pipelines producing OpenPGP messages.
//!
//! An [`Encryptor`] seals plaintext either to a recipient's [`PublicKey`]
//! (optionally signed by an authenticated [`Sender`]) or to a passphrase. Each
//! pipeline has a binary form returning the raw packet stream and an armored
//! form returning `PGP MESSAGE` armor text.
//!
//! [`PublicKey`]: crate::key::PublicKey

use log::debug;
use pgp::composed::Message;
use snafu::ResultExt;

use crate::errors::{EncryptionSetupSnafu, Result};
use crate::key::PrivateKey;

mod asymmetric;
mod options;
mod sink;
mod symmetric;

pub use self::options::{EncryptionOptions, EncryptionOptionsBuilder, EncryptionOptionsBuilderError};

/// Who a public-key encrypted message comes from.
#[derive(Debug, Clone, Copy, Default)]
pub enum Sender<'a> {
    /// Encrypt to the recipient only, without a signature.
    #[default]
    Anonymous,
    /// Encrypt to the recipient and sign with this key, which must be unlocked.
    Authenticated(&'a PrivateKey),
}

impl<'a> From<Option<&'a PrivateKey>> for Sender<'a> {
    fn from(signer: Option<&'a PrivateKey>) -> Self {
        signer.map_or(Sender::Anonymous, Sender::Authenticated)
    }
}

impl<'a> From<&'a PrivateKey> for Sender<'a> {
    fn from(signer: &'a PrivateKey) -> Self {
        Sender::Authenticated(signer)
    }
}

/// Drives the encryption pipelines with a fixed set of [`EncryptionOptions`].
#[derive(Debug, Clone, Default)]
pub struct Encryptor {
    options: EncryptionOptions,
}

impl Encryptor {
    pub fn new(options: EncryptionOptions) -> Self {
        Encryptor { options }
    }

    pub fn options(&self) -> &EncryptionOptions {
        &self.options
    }

    fn literal(&self, plaintext: &[u8]) -> Message {
        debug!("literal data: {} bytes", plaintext.len());
        Message::new_literal_bytes(self.options.file_name(), plaintext)
    }

    fn compress(&self, message: Message) -> Result<Message> {
        match self.options.compression() {
            Some(alg) => {
                debug!("compressing with {:?}", alg);
                message.compress(alg).context(EncryptionSetupSnafu)
            }
            None => Ok(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_from_option() {
        assert!(matches!(Sender::from(None::<&PrivateKey>), Sender::Anonymous));
        assert!(matches!(Sender::default(), Sender::Anonymous));
    }
}
