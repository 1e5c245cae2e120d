use log::debug;
use pgp::composed::Message;
use pgp::types::StringToKey;
use rand::{CryptoRng, Rng};
use snafu::ResultExt;

use super::{sink, Encryptor};
use crate::errors::{EncryptionSetupSnafu, PassphraseEncodingSnafu, Result};

impl Encryptor {
    /// Encrypts `plaintext` to `passphrase` and returns the binary OpenPGP message.
    ///
    /// The passphrase is handed to the codec as is; an empty passphrase is not
    /// rejected here. A passphrase that is not valid UTF-8 is a passphrase error.
    pub fn encrypt_symmetric<R: CryptoRng + Rng>(
        &self,
        rng: R,
        plaintext: &[u8],
        passphrase: &[u8],
    ) -> Result<Vec<u8>> {
        let message = self.seal_with_passphrase(rng, plaintext, passphrase)?;
        sink::to_bytes(&message)
    }

    /// Same as [`Encryptor::encrypt_symmetric`], wrapped in `PGP MESSAGE` armor.
    pub fn encrypt_symmetric_armored<R: CryptoRng + Rng>(
        &self,
        rng: R,
        plaintext: &[u8],
        passphrase: &[u8],
    ) -> Result<String> {
        sink::to_armored(self.options.armor(), || {
            self.seal_with_passphrase(rng, plaintext, passphrase)
        })
    }

    fn seal_with_passphrase<R: CryptoRng + Rng>(
        &self,
        mut rng: R,
        plaintext: &[u8],
        passphrase: &[u8],
    ) -> Result<Message> {
        let passphrase = std::str::from_utf8(passphrase).context(PassphraseEncodingSnafu)?;
        let message = self.compress(self.literal(plaintext))?;

        let s2k = StringToKey::new_default(&mut rng);
        debug!("encrypting with passphrase, s2k {:?}", s2k);
        message
            .encrypt_with_password_seipdv1(
                &mut rng,
                s2k,
                self.options.cipher(),
                || passphrase.to_owned(),
            )
            .context(EncryptionSetupSnafu)
    }
}
