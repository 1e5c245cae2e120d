use log::debug;
use pgp::composed::Message;
use pgp::types::PublicKeyTrait;
use rand::{CryptoRng, Rng};
use snafu::{OptionExt, ResultExt};

use super::{sink, Encryptor, Sender};
use crate::errors::{EncryptionSetupSnafu, NoEncryptionKeySnafu, Result, SignerLockedSnafu};
use crate::key::{EncryptionKey, PublicKey};

impl Encryptor {
    /// Encrypts `plaintext` to `recipient`, signed by `sender` if authenticated.
    ///
    /// Returns the binary OpenPGP message.
    pub fn encrypt_asymmetric<R: CryptoRng + Rng>(
        &self,
        rng: R,
        plaintext: &[u8],
        recipient: &PublicKey,
        sender: Sender<'_>,
    ) -> Result<Vec<u8>> {
        let message = self.seal_to_key(rng, plaintext, recipient, sender)?;
        sink::to_bytes(&message)
    }

    /// Same as [`Encryptor::encrypt_asymmetric`], wrapped in `PGP MESSAGE` armor.
    pub fn encrypt_asymmetric_armored<R: CryptoRng + Rng>(
        &self,
        rng: R,
        plaintext: &[u8],
        recipient: &PublicKey,
        sender: Sender<'_>,
    ) -> Result<String> {
        sink::to_armored(self.options.armor(), || {
            self.seal_to_key(rng, plaintext, recipient, sender)
        })
    }

    fn seal_to_key<R: CryptoRng + Rng>(
        &self,
        mut rng: R,
        plaintext: &[u8],
        recipient: &PublicKey,
        sender: Sender<'_>,
    ) -> Result<Message> {
        let target = recipient.encryption_key().context(NoEncryptionKeySnafu)?;

        let mut message = self.literal(plaintext);
        if let Sender::Authenticated(signer) = sender {
            let password = signer.signing_password().context(SignerLockedSnafu)?;
            debug!("signing with {:?}", signer.key_id());
            message = message
                .sign(
                    &mut rng,
                    &signer.inner().primary_key,
                    || password.to_owned(),
                    self.options.hash(),
                )
                .context(EncryptionSetupSnafu)?;
        }
        let message = self.compress(message)?;

        let cipher = self.options.cipher();
        match target {
            EncryptionKey::Subkey(key) => {
                debug!("encrypting to subkey {:?}", key.key_id());
                message.encrypt_to_keys_seipdv1(&mut rng, cipher, &[key])
            }
            EncryptionKey::Primary(key) => {
                debug!("encrypting to primary key {:?}", key.key_id());
                message.encrypt_to_keys_seipdv1(&mut rng, cipher, &[key])
            }
        }
        .context(EncryptionSetupSnafu)
    }
}
