use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, trace};
use pgp::composed::{Deserializable, SignedPublicKey, SignedSecretKey};
use snafu::{ensure, ResultExt};

use crate::armor;
use crate::errors::{
    ArmorBodySnafu, EntityParseSnafu, KeyTypeMismatchSnafu, ResourceOpenSnafu, Result,
};
use crate::key::{KeyEntity, KeyKind, PrivateKey, PublicKey};

/// Decodes the armor envelope of `source` and parses the key it contains.
///
/// Fails with a key type mismatch when the armor label is not the one `expected`
/// calls for; in that case the body is never parsed.
pub fn parse_key<R: Read>(source: R, expected: KeyKind) -> Result<KeyEntity> {
    match expected {
        KeyKind::Public => parse_public_key(source).map(KeyEntity::Public),
        KeyKind::Private => parse_private_key(source).map(KeyEntity::Private),
    }
}

/// Opens the file at `path` and parses the key it contains, see [`parse_key`].
pub fn load_key_from_path(path: impl AsRef<Path>, expected: KeyKind) -> Result<KeyEntity> {
    parse_key(open(path.as_ref())?, expected)
}

pub(crate) fn parse_public_key<R: Read>(source: R) -> Result<PublicKey> {
    let body = dearmor_key(source, KeyKind::Public)?;
    let key = SignedPublicKey::from_bytes(&body[..]).context(EntityParseSnafu {
        kind: KeyKind::Public,
    })?;

    let key = PublicKey::new(key);
    debug!("parsed public key {:?}", key.key_id());
    Ok(key)
}

pub(crate) fn parse_private_key<R: Read>(source: R) -> Result<PrivateKey> {
    let body = dearmor_key(source, KeyKind::Private)?;
    let key = SignedSecretKey::from_bytes(&body[..]).context(EntityParseSnafu {
        kind: KeyKind::Private,
    })?;

    let key = PrivateKey::new(key);
    debug!(
        "parsed private key {:?} (locked: {})",
        key.key_id(),
        key.is_locked()
    );
    Ok(key)
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).context(ResourceOpenSnafu { path })
}

/// Decodes the armored block in `source`, checking its label against `expected`.
///
/// The body is decoded in full before any packet parsing so that framing
/// failures (bad base64, footer or checksum) are reported as armor errors.
fn dearmor_key<R: Read>(source: R, expected: KeyKind) -> Result<Vec<u8>> {
    let mut dearmor = armor::dearmor(BufReader::new(source))?;

    let typ = dearmor.typ;
    ensure!(
        typ == Some(expected.block_type()),
        KeyTypeMismatchSnafu {
            expected,
            found: typ.map(|t| t.to_string()).unwrap_or_default(),
        }
    );

    let mut body = Vec::new();
    dearmor.read_to_end(&mut body).context(ArmorBodySnafu)?;
    trace!("dearmored {} bytes of {}", body.len(), expected);

    Ok(body)
}
