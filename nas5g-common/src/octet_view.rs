//! `OctetView` / `OctetViewMut` - bounds-checked cursors over caller-owned buffers.
//!
//! Every NAS IE codec reads and writes through one of these views. A view is
//! a window `[offset, offset + length)` over a byte slice plus a cursor
//! position inside that window. Accesses that would leave the window fail
//! with [`OctetError::OutOfBounds`] and leave the cursor where it was, so an
//! IE decoder can never over-read attacker-supplied input and an encoder can
//! never write past the capacity the message assembler granted it.

use crate::error::OctetError;

#[inline]
fn window_range(len: usize, offset: usize, length: usize) -> Result<(usize, usize), OctetError> {
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok((offset, end)),
        _ => Err(OctetError::OutOfBounds {
            needed: offset.saturating_add(length),
            remaining: len,
        }),
    }
}

/// A read-only, bounds-checked view over a byte slice for sequential parsing.
///
/// # Example
/// ```
/// use nas5g_common::OctetView;
///
/// let data = [0x7e, 0x00, 0x45, 0x09];
/// let mut view = OctetView::window(&data, 3, 1).unwrap();
///
/// assert_eq!(view.read().unwrap(), 0x09);
/// assert!(!view.has_next());
/// assert!(view.read().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct OctetView<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> OctetView<'a> {
    /// Creates a view over the whole slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Creates a view over `data[offset..offset + length]`.
    ///
    /// Fails if the window does not lie inside `data`.
    pub fn window(data: &'a [u8], offset: usize, length: usize) -> Result<Self, OctetError> {
        let (start, end) = window_range(data.len(), offset, length)?;
        Ok(Self::new(&data[start..end]))
    }

    /// Fails unless at least `count` octets remain.
    #[inline]
    pub fn require(&self, count: usize) -> Result<(), OctetError> {
        if self.remaining() < count {
            return Err(OctetError::OutOfBounds {
                needed: count,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Returns the current octet without advancing.
    #[inline]
    pub fn peek(&self) -> Result<u8, OctetError> {
        self.peek_at(0)
    }

    /// Returns the octet `offset` positions past the cursor without advancing.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Result<u8, OctetError> {
        self.require(offset.saturating_add(1))?;
        Ok(self.data[self.index + offset])
    }

    /// Reads one octet and advances.
    #[inline]
    pub fn read(&mut self) -> Result<u8, OctetError> {
        let octet = self.peek()?;
        self.index += 1;
        Ok(octet)
    }

    /// Reads a big-endian 16-bit value.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, OctetError> {
        let octets = self.read_slice(2)?;
        Ok(u16::from_be_bytes([octets[0], octets[1]]))
    }

    /// Borrows the next `count` octets and advances past them.
    pub fn read_slice(&mut self, count: usize) -> Result<&'a [u8], OctetError> {
        self.require(count)?;
        let data: &'a [u8] = self.data;
        let slice = &data[self.index..self.index + count];
        self.index += count;
        Ok(slice)
    }

    /// Advances by `count` octets.
    pub fn skip(&mut self, count: usize) -> Result<(), OctetError> {
        self.require(count)?;
        self.index += count;
        Ok(())
    }

    /// Octets consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Total window length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Octets left between the cursor and the end of the window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.index
    }

    /// Returns true if at least one octet remains.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index < self.data.len()
    }

    /// The unread part of the window.
    #[inline]
    pub fn remaining_data(&self) -> &'a [u8] {
        let data: &'a [u8] = self.data;
        &data[self.index..]
    }
}

impl<'a> From<&'a [u8]> for OctetView<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

/// A writable, bounds-checked view over a mutable byte slice.
///
/// # Example
/// ```
/// use nas5g_common::OctetViewMut;
///
/// let mut buf = [0xF0u8, 0x00];
/// let mut view = OctetViewMut::window(&mut buf, 0, 1).unwrap();
///
/// view.modify(|octet| octet | 0x07).unwrap();
/// assert_eq!(view.position(), 1);
/// assert!(view.write(0xFF).is_err());
/// assert_eq!(buf, [0xF7, 0x00]);
/// ```
#[derive(Debug)]
pub struct OctetViewMut<'a> {
    data: &'a mut [u8],
    index: usize,
}

impl<'a> OctetViewMut<'a> {
    /// Creates a view over the whole slice.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Creates a view over `data[offset..offset + capacity]`.
    ///
    /// Fails if the window does not lie inside `data`.
    pub fn window(data: &'a mut [u8], offset: usize, capacity: usize) -> Result<Self, OctetError> {
        let (start, end) = window_range(data.len(), offset, capacity)?;
        Ok(Self::new(&mut data[start..end]))
    }

    /// Fails unless at least `count` octets of capacity remain.
    #[inline]
    pub fn require(&self, count: usize) -> Result<(), OctetError> {
        if self.remaining() < count {
            return Err(OctetError::OutOfBounds {
                needed: count,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Returns the octet currently under the cursor without advancing.
    ///
    /// Used by encoders that share an octet with a neighbouring field.
    #[inline]
    pub fn peek(&self) -> Result<u8, OctetError> {
        self.require(1)?;
        Ok(self.data[self.index])
    }

    /// Writes one octet and advances.
    #[inline]
    pub fn write(&mut self, octet: u8) -> Result<(), OctetError> {
        self.require(1)?;
        self.data[self.index] = octet;
        self.index += 1;
        Ok(())
    }

    /// Writes a big-endian 16-bit value.
    #[inline]
    pub fn write_u16(&mut self, value: u16) -> Result<(), OctetError> {
        self.write_slice(&value.to_be_bytes())
    }

    /// Writes all of `octets` and advances past them.
    pub fn write_slice(&mut self, octets: &[u8]) -> Result<(), OctetError> {
        self.require(octets.len())?;
        self.data[self.index..self.index + octets.len()].copy_from_slice(octets);
        self.index += octets.len();
        Ok(())
    }

    /// Replaces the current octet with `f(current)` and advances.
    pub fn modify<F: FnOnce(u8) -> u8>(&mut self, f: F) -> Result<(), OctetError> {
        let current = self.peek()?;
        self.data[self.index] = f(current);
        self.index += 1;
        Ok(())
    }

    /// Octets written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Total window capacity.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the window has no capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity left between the cursor and the end of the window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.index
    }

    /// The octets written so far.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.data[..self.index]
    }
}
