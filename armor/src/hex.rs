use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while_m_n},
    combinator::map_res,
    multi::many0,
    sequence::preceded,
};

use crate::error::Error;

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_ascii_whitespace() || c == ':').parse(input)
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

/// Decodes hex text such as `30 03 02 01 01` or `30:03:02:01:01`.
///
/// Digits come in pairs; whitespace and `:` may appear between pairs.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, Error> {
    let invalid = |rest: &str| Error::InvalidHex {
        position: text.len() - rest.len(),
    };

    let (rest, bytes) = many0(preceded(separator, hex_byte))
        .parse(text)
        .map_err(|_| invalid(text))?;
    let (rest, _) = separator(rest).map_err(|_| invalid(rest))?;
    if !rest.is_empty() {
        return Err(invalid(rest));
    }
    if bytes.is_empty() {
        return Err(Error::Empty);
    }
    Ok(bytes)
}
