use std::fmt;
use std::io::Read;
use std::path::Path;

use log::debug;
use pgp::composed::SignedSecretKey;
use pgp::types::{KeyId, PublicKeyTrait, SecretKeyTrait};
use snafu::ResultExt;
use zeroize::Zeroizing;

use crate::errors::{PassphraseEncodingSnafu, PassphraseSnafu, Result};
use crate::key::loader;

/// A transferable secret key.
///
/// The secret material is either locked (protected by a passphrase and
/// unusable for signing) or unlocked. The only transition is
/// locked → unlocked, performed in place by [`PrivateKey::unlock`].
///
/// A key is not synchronized internally: callers sharing one across threads
/// must serialize `unlock` against its use as a signer.
#[derive(Debug)]
pub struct PrivateKey {
    key: SignedSecretKey,
    state: SecretState,
}

enum SecretState {
    Locked,
    /// Holds the verified passphrase, zeroized on drop.
    Unlocked(Zeroizing<String>),
}

impl fmt::Debug for SecretState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretState::Locked => f.write_str("Locked"),
            SecretState::Unlocked(_) => f.write_str("Unlocked"),
        }
    }
}

impl PrivateKey {
    /// Wraps a parsed secret key. Keys stored without protection start unlocked.
    pub fn new(key: SignedSecretKey) -> Self {
        let state = if is_protected(&key) {
            SecretState::Locked
        } else {
            SecretState::Unlocked(Zeroizing::new(String::new()))
        };

        PrivateKey { key, state }
    }

    /// Parses an armored `PGP PRIVATE KEY BLOCK` from `source`, then unlocks it with
    /// `passphrase` (see [`PrivateKey::unlock`]).
    pub fn from_armor(source: impl Read, passphrase: &[u8]) -> Result<Self> {
        let mut key = loader::parse_private_key(source)?;
        key.unlock(passphrase)?;
        Ok(key)
    }

    pub fn from_armor_str(input: &str, passphrase: &[u8]) -> Result<Self> {
        Self::from_armor(input.as_bytes(), passphrase)
    }

    /// Reads an armored `PGP PRIVATE KEY BLOCK` from the file at `path`, then unlocks it
    /// with `passphrase`.
    pub fn load(path: impl AsRef<Path>, passphrase: &[u8]) -> Result<Self> {
        Self::from_armor(loader::open(path.as_ref())?, passphrase)
    }

    /// Decrypts the secret material with `passphrase`, mutating this key in place.
    ///
    /// An empty passphrase leaves the key untouched, as does unlocking a key that
    /// is already unlocked. A passphrase that is not valid UTF-8 is rejected as a
    /// passphrase error. On failure the key stays locked.
    pub fn unlock(&mut self, passphrase: &[u8]) -> Result<()> {
        if passphrase.is_empty() || !self.is_locked() {
            return Ok(());
        }

        let passphrase = std::str::from_utf8(passphrase).context(PassphraseEncodingSnafu)?;
        let passphrase = Zeroizing::new(passphrase.to_owned());

        self.key
            .primary_key
            .unlock(|| passphrase.as_str().to_owned(), |_| Ok(()))
            .context(PassphraseSnafu)?;
        for subkey in &self.key.secret_subkeys {
            subkey
                .key
                .unlock(|| passphrase.as_str().to_owned(), |_| Ok(()))
                .context(PassphraseSnafu)?;
        }

        debug!("unlocked private key {:?}", self.key_id());
        self.state = SecretState::Unlocked(passphrase);
        Ok(())
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, SecretState::Locked)
    }

    pub fn key_id(&self) -> KeyId {
        self.key.primary_key.key_id()
    }

    pub fn inner(&self) -> &SignedSecretKey {
        &self.key
    }

    /// The passphrase that opens the secret material, `None` while locked.
    pub(crate) fn signing_password(&self) -> Option<&str> {
        match self.state {
            SecretState::Locked => None,
            SecretState::Unlocked(ref password) => Some(password.as_str()),
        }
    }
}

/// Unlocks `key` with `passphrase` and hands it back; see [`PrivateKey::unlock`].
pub fn unlock_private_key(mut key: PrivateKey, passphrase: &[u8]) -> Result<PrivateKey> {
    key.unlock(passphrase)?;
    Ok(key)
}

fn is_protected(key: &SignedSecretKey) -> bool {
    key.primary_key.secret_params().is_encrypted()
        || key
            .secret_subkeys
            .iter()
            .any(|subkey| subkey.key.secret_params().is_encrypted())
}
