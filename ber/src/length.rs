use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Lengths wider than this many octets are rejected.
pub const MAX_LENGTH_OCTETS: u8 = 3;

/// A length field as read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    Definite(usize),
    Indefinite,
}

/// Reads a length field.
///
/// Short form (high bit clear) is the length itself. Long form carries the
/// number of following big-endian length octets in its low 7 bits; zero
/// octets marks an indefinite length.
pub fn decode_length(cursor: &mut Cursor<'_>) -> Result<Length> {
    let position = cursor.position();
    let first = cursor.get_byte()?;
    if first & 0x80 == 0 {
        // short form: 0-127
        return Ok(Length::Definite(first as usize));
    }

    let octets = first & 0x7f;
    if octets == 0 {
        return Ok(Length::Indefinite);
    }
    if octets > MAX_LENGTH_OCTETS {
        return Err(Error::UnsupportedLength { position, octets });
    }

    let mut length = 0usize;
    for _ in 0..octets {
        length = (length << 8) | cursor.get_byte()? as usize;
    }
    Ok(Length::Definite(length))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_decode_length_short_form() {
        for b in 0u8..=0x7f {
            let data = [b, 0xff];
            let mut cursor = Cursor::new(&data);
            assert_eq!(decode_length(&mut cursor), Ok(Length::Definite(b as usize)));
            assert_eq!(cursor.position(), 1);
        }
    }

    #[rstest(input, expected, consumed,
        case(vec![0x27], Length::Definite(0x27), 1),
        case(vec![0x81, 0xc9], Length::Definite(0xc9), 2),
        case(vec![0x82, 0x02, 0x10], Length::Definite(256 * 0x02 + 0x10), 3),
        case(vec![0x82, 0xff, 0xff], Length::Definite(256 * 0xff + 0xff), 3),
        case(vec![0x83, 0x01, 0x00, 0x00], Length::Definite(256 * 256), 4),
        case(vec![0x83, 0xfe, 0xdc, 0xba], Length::Definite(0xfedcba), 4),
        case(vec![0x80], Length::Indefinite, 1),
        case(vec![0x80, 0x00, 0x00], Length::Indefinite, 1),
    )]
    fn test_decode_length(input: Vec<u8>, expected: Length, consumed: usize) {
        let mut cursor = Cursor::new(&input);
        let actual = decode_length(&mut cursor).unwrap();
        assert_eq!(expected, actual);
        assert_eq!(consumed, cursor.position());
    }

    #[rstest(input, octets,
        case(vec![0x84, 0x01, 0x00, 0x00, 0x00], 4),
        case(vec![0x84], 4),
        case(vec![0xff], 0x7f),
    )]
    fn test_decode_length_unsupported(input: Vec<u8>, octets: u8) {
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_length(&mut cursor),
            Err(Error::UnsupportedLength { position: 0, octets })
        );
    }

    #[rstest(input, position,
        case(vec![], 0),
        case(vec![0x81], 1),
        case(vec![0x83, 0x01, 0x02], 3),
    )]
    fn test_decode_length_truncated(input: Vec<u8>, position: usize) {
        let mut cursor = Cursor::new(&input);
        assert_eq!(
            decode_length(&mut cursor),
            Err(Error::OutOfBounds { position })
        );
    }
}
