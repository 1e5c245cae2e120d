//! # Armor module
//!
//! ASCII Armor as specified in RFC 4880 / RFC 9580.
//!
//! Both directions are delegated to the codec: [`dearmor`] wraps its streaming
//! [`Dearmor`](pgp::armor::Dearmor), and [`ArmorOptions`] configures the encoder
//! behind `Message::to_armored_writer`.

mod options;
mod reader;

pub use pgp::armor::{BlockType, Headers};

pub use self::options::*;
pub use self::reader::*;
