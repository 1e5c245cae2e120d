use log::trace;
use pgp::composed::Message;
use pgp::ser::Serialize;
use snafu::ResultExt;

use crate::armor::ArmorOptions;
use crate::errors::{Result, WriteSnafu};

/// Serializes `message` into a fresh buffer.
pub(crate) fn to_bytes(message: &Message) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    message.to_writer(&mut buffer).context(WriteSnafu)?;
    trace!("message written, {} bytes", buffer.len());
    Ok(buffer)
}

/// Builds a message and wraps it in `PGP MESSAGE` armor.
///
/// Nothing is framed until `build` succeeds, and the armor is always written
/// whole (header, body, checksum and footer) into a private buffer. On any
/// error the buffer is dropped and only the first error is returned.
pub(crate) fn to_armored<F>(opts: &ArmorOptions, build: F) -> Result<String>
where
    F: FnOnce() -> Result<Message>,
{
    let message = build()?;

    let mut buffer = Vec::new();
    message
        .to_armored_writer(&mut buffer, opts.to_codec())
        .context(WriteSnafu)?;
    trace!("armored message written, {} bytes", buffer.len());

    // armor output is 7-bit ascii
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Read;

    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::armor::{dearmor, BlockType};
    use crate::errors::{Error, ErrorKind};

    fn literal(data: &[u8]) -> Message {
        Message::new_literal_bytes("", data)
    }

    fn body_of(armored: &str) -> Vec<u8> {
        let mut dearmor = dearmor(armored.as_bytes()).unwrap();
        assert_eq!(dearmor.typ, Some(BlockType::Message));

        let mut body = Vec::new();
        dearmor.read_to_end(&mut body).unwrap();
        body
    }

    #[test]
    fn build_error_is_returned_untouched() {
        let mut called = false;
        let err = to_armored(&ArmorOptions::default(), || {
            called = true;
            Err(Error::SignerLocked)
        })
        .unwrap_err();

        assert!(called);
        assert!(matches!(err, Error::SignerLocked));
        assert_eq!(err.kind(), ErrorKind::EncryptionSetup);
    }

    #[test]
    fn armored_body_matches_binary_form() {
        let message = literal(b"hello world");
        let binary = to_bytes(&message).unwrap();

        let out = to_armored(&ArmorOptions::default(), || Ok(message)).unwrap();
        assert!(out.starts_with("-----BEGIN PGP MESSAGE-----\n\n"));
        assert!(out.ends_with("-----END PGP MESSAGE-----\n"));
        assert!(out.lines().any(|line| line.starts_with('=')));

        assert_eq!(body_of(&out), binary);
    }

    #[test]
    fn headers_without_checksum() {
        let opts = ArmorOptions {
            include_checksum: false,
            ..Default::default()
        }
        .header("Comment", "unit test")
        .header("Charset", "UTF-8");

        let out = to_armored(&opts, || Ok(literal(b"hello world"))).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("-----BEGIN PGP MESSAGE-----"));
        assert_eq!(lines.next(), Some("Charset: UTF-8"));
        assert_eq!(lines.next(), Some("Comment: unit test"));
        assert_eq!(lines.next(), Some(""));
        assert!(!out.lines().any(|line| line.starts_with('=')));
    }

    #[test]
    fn large_bodies_are_wrapped_and_intact() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for size in [1usize, 47, 48, 49, 1000, 64 * 1024] {
            let content: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
            let message = literal(&content);
            let binary = to_bytes(&message).unwrap();

            let out = to_armored(&ArmorOptions::default(), || Ok(message)).unwrap();
            for line in out.lines() {
                assert!(line.len() <= 64, "size {size}: {line}");
            }
            assert_eq!(body_of(&out), binary, "size {size}");
        }
    }
}
