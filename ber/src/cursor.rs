use crate::error::{Error, Result};

/// A read position over a borrowed byte slice.
///
/// The bytes are never copied or modified. Cloning a cursor (see
/// [`Cursor::duplicate`]) gives an independent position over the same
/// bytes, which is how the decoder peeks ahead without committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, position: 0 }
    }

    pub fn with_position(data: &'a [u8], position: usize) -> Self {
        Cursor { data, position }
    }

    /// Returns the byte under the cursor and advances by one.
    pub fn get_byte(&mut self) -> Result<u8> {
        let byte = *self.data.get(self.position).ok_or(Error::OutOfBounds {
            position: self.position,
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Same bytes, same position, independent from `self` afterwards.
    pub fn duplicate(&self) -> Cursor<'a> {
        *self
    }

    /// Advances by `n` bytes. The position is left untouched on failure.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        match self.position.checked_add(n) {
            Some(end) if end <= self.data.len() => {
                self.position = end;
                Ok(())
            }
            _ => Err(Error::OutOfBounds {
                position: self.data.len().max(self.position),
            }),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
