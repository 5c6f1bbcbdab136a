use std::io::Read;

use nom::{bytes::complete::tag, combinator::all_consuming, IResult};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

/// Consumes up to eight bytes from `reader` and reports whether they are the
/// PNG signature. A short read, or a failing reader, counts as a mismatch.
pub fn validate<R: Read>(reader: &mut R) -> bool {
    let mut buf = Vec::with_capacity(SIGNATURE.len());
    if let Err(e) = reader
        .by_ref()
        .take(SIGNATURE.len() as u64)
        .read_to_end(&mut buf)
    {
        log::trace!("signature read failed: {e}");
        return false;
    }
    let valid = parse_signature(&buf).is_ok();
    log::trace!("signature {:02x?} valid: {valid}", buf);
    valid
}

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    all_consuming(tag(SIGNATURE.as_slice()))(input)
}
