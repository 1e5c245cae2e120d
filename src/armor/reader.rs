use std::io::BufRead;

use log::trace;
use pgp::armor::Dearmor;
use snafu::ResultExt;

use crate::errors::{ArmorDecodeSnafu, Result};

/// Parses the armor header lines of `input`.
///
/// On success the returned [`Dearmor`] has its block type set and reads the
/// decoded body bytes.
pub fn dearmor<R: BufRead>(input: R) -> Result<Dearmor<R>> {
    let mut dearmor = Dearmor::new(input);
    dearmor.read_header().context(ArmorDecodeSnafu)?;
    trace!("armor block type: {:?}", dearmor.typ);

    Ok(dearmor)
}
