//! NAS IE encoding/decoding contract
//!
//! This module defines the contract every Information Element codec follows
//! (3GPP TS 24.501 clause 9) and the entry points the message assembler and
//! parser call per IE.
//!
//! The caller owns the message buffer. For each IE it hands over a window
//! `[offset, offset + length)` and gets back the number of octets the IE
//! consumed or wrote, which is how it advances its own cursor. A codec never
//! reads or writes outside that window and never allocates.
//!
//! # Example
//!
//! ```rust
//! use nas5g_ie::codec::{decode_ie, encode_ie};
//! use nas5g_ie::ies::IeDeRegistrationType;
//!
//! let buffer = [0x7e, 0x00, 0x45, 0x0d];
//! let (dereg, consumed) = decode_ie::<IeDeRegistrationType>(&buffer, 3, 1).unwrap();
//! assert_eq!(consumed, 1);
//! assert_eq!(dereg.access_type, 0b01);
//!
//! let mut out = [0u8; 1];
//! let written = encode_ie(&dereg, &mut out, 0, 1).unwrap();
//! assert_eq!((written, out[0]), (1, 0x0d));
//! ```

use bytes::{Buf, BufMut};
use nas5g_common::logging::Direction;
use nas5g_common::{CodecConfig, OctetError, OctetView, OctetViewMut};
use thiserror::Error;

use crate::events::{decode_traced, encode_traced, ie_failed, ie_traced};
use crate::layout::{FieldValues, OctetLayout, OctetOwnership};

/// Largest IE [`encode_buf`] stages on the stack before copying it out
const SCRATCH_LEN: usize = 8;

/// Errors that can occur during NAS IE encoding/decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Remaining length or capacity is smaller than the IE needs
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Octets the IE needed
        expected: usize,
        /// Octets available
        actual: usize,
    },

    /// A sub-field carries a code point the protocol does not assign
    #[error("Malformed value 0x{value:X} for {ie}")]
    MalformedValue {
        /// IE name
        ie: &'static str,
        /// Offending raw value
        value: u8,
    },

    /// The IEI in front of the IE is not the one the caller expected
    #[error("Invalid IEI: expected 0x{expected:X}, got 0x{actual:X}")]
    InvalidIei {
        /// IEI the caller asked for
        expected: u8,
        /// IEI found in the buffer
        actual: u8,
    },

    /// The IE cannot be tagged with a half-octet IEI
    #[error("{0} occupies the high nibble and cannot carry a half-octet IEI")]
    IeiNotApplicable(&'static str),

    /// A half-octet IE was placed in the nibble its layout does not use
    #[error("{0} does not fit the nibble it was placed in")]
    NibbleMismatch(&'static str),
}

impl From<OctetError> for CodecError {
    fn from(err: OctetError) -> Self {
        match err {
            OctetError::OutOfBounds { needed, remaining } => CodecError::BufferTooShort {
                expected: needed,
                actual: remaining,
            },
        }
    }
}

/// Result type for NAS codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// A NAS Information Element with a wire codec.
pub trait InformationElement: Sized {
    /// IE name as used in TS 24.501
    const NAME: &'static str;

    /// Decode the IE from the view, advancing past the octets it occupies.
    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self>;

    /// Encode the IE into the view, advancing past the octets written.
    ///
    /// On failure the octets inside the window are unspecified.
    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()>;

    /// Number of octets [`encode`](Self::encode) writes.
    fn encoded_len(&self) -> usize;

    /// Check sub-field values against the code points the protocol assigns.
    ///
    /// Decoding alone accepts any bit pattern that fits the field widths.
    fn validate(&self) -> CodecResult<()> {
        Ok(())
    }
}

/// A Type 1 (half-octet) or single-octet IE described by an [`OctetLayout`].
pub trait InformationElement1: InformationElement {
    /// Wire layout of the octet
    const LAYOUT: OctetLayout;

    /// Build the IE from unpacked field values (layout order).
    fn from_fields(fields: &FieldValues) -> CodecResult<Self>;

    /// Field values in layout order.
    fn to_fields(&self) -> FieldValues;
}

/// Decode a layout-described IE from the current octet.
pub fn decode_ie1<T: InformationElement1>(view: &mut OctetView<'_>) -> CodecResult<T> {
    let fields = T::LAYOUT.read(view)?;
    T::from_fields(&fields)
}

/// Encode a layout-described IE into the current octet.
pub fn encode_ie1<T: InformationElement1>(ie: &T, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
    T::LAYOUT.write(view, ie.to_fields().as_slice())?;
    Ok(())
}

/// Decode one IE from `buffer[offset..offset + length]`.
///
/// Returns the IE and the number of octets it consumed.
pub fn decode_ie<T: InformationElement>(
    buffer: &[u8],
    offset: usize,
    length: usize,
) -> CodecResult<(T, usize)> {
    let fail = |e: CodecError| ie_failed(Direction::Decode, T::NAME, offset, e);
    let window = OctetView::window(buffer, offset, length)
        .map_err(CodecError::from)
        .map_err(fail)?;
    let mut view = window.clone();
    let ie = T::decode(&mut view).map_err(fail)?;
    let consumed = view.position();
    ie_traced(Direction::Decode, T::NAME, &window.remaining_data()[..consumed]);
    Ok((ie, consumed))
}

/// Decode one IE and, if `config` asks for it, validate its values.
pub fn decode_ie_with<T: InformationElement>(
    config: &CodecConfig,
    buffer: &[u8],
    offset: usize,
    length: usize,
) -> CodecResult<(T, usize)> {
    let (ie, consumed) = decode_ie::<T>(buffer, offset, length)?;
    if config.validates_values() {
        ie.validate()
            .map_err(|e| ie_failed(Direction::Decode, T::NAME, offset, e))?;
    }
    Ok((ie, consumed))
}

/// Encode one IE into `buffer[offset..offset + capacity]`.
///
/// Returns the number of octets written.
pub fn encode_ie<T: InformationElement>(
    ie: &T,
    buffer: &mut [u8],
    offset: usize,
    capacity: usize,
) -> CodecResult<usize> {
    let fail = |e: CodecError| ie_failed(Direction::Encode, T::NAME, offset, e);
    let mut view = OctetViewMut::window(buffer, offset, capacity)
        .map_err(CodecError::from)
        .map_err(fail)?;
    ie.encode(&mut view).map_err(fail)?;
    ie_traced(Direction::Encode, T::NAME, view.written());
    Ok(view.position())
}

fn carries_half_octet_iei(layout: &OctetLayout) -> bool {
    layout.ownership != OctetOwnership::HighNibble && layout.used_mask() & 0xF0 == 0
}

/// Decode a half-octet IE preceded by its IEI in the high nibble (format TV).
///
/// Nothing is consumed if the IEI does not match.
pub fn decode_tv1<T: InformationElement1>(view: &mut OctetView<'_>, iei: u8) -> CodecResult<T> {
    let offset = view.position();
    let fail = |e: CodecError| ie_failed(Direction::Decode, T::NAME, offset, e);
    if !carries_half_octet_iei(&T::LAYOUT) {
        return Err(fail(CodecError::IeiNotApplicable(T::NAME)));
    }
    let octet = view.peek().map_err(CodecError::from).map_err(fail)?;
    let actual = octet >> 4;
    if actual != iei & 0x0F {
        return Err(fail(CodecError::InvalidIei {
            expected: iei & 0x0F,
            actual,
        }));
    }
    let ie = T::from_fields(&T::LAYOUT.unpack(octet & 0x0F)).map_err(fail)?;
    view.read()?;
    ie_traced(Direction::Decode, T::NAME, &[octet]);
    Ok(ie)
}

/// Encode a half-octet IE with its IEI in the high nibble (format TV).
///
/// The octet is owned exclusively: IEI in bits 7-4, value in bits 3-0.
pub fn encode_tv1<T: InformationElement1>(
    iei: u8,
    ie: &T,
    view: &mut OctetViewMut<'_>,
) -> CodecResult<()> {
    let offset = view.position();
    let fail = |e: CodecError| ie_failed(Direction::Encode, T::NAME, offset, e);
    if !carries_half_octet_iei(&T::LAYOUT) {
        return Err(fail(CodecError::IeiNotApplicable(T::NAME)));
    }
    let value = T::LAYOUT.pack(ie.to_fields().as_slice());
    let octet = ((iei & 0x0F) << 4) | (value & 0x0F);
    view.write(octet).map_err(CodecError::from).map_err(fail)?;
    ie_traced(Direction::Encode, T::NAME, &[octet]);
    Ok(())
}

/// Checks that `H` only uses bits 7-4 and `L` only bits 3-0.
fn check_nibble_placement<H, L>(direction: Direction, offset: usize) -> CodecResult<()>
where
    H: InformationElement1,
    L: InformationElement1,
{
    if H::LAYOUT.used_mask() & 0x0F != 0 {
        return Err(ie_failed(
            direction,
            H::NAME,
            offset,
            CodecError::NibbleMismatch(H::NAME),
        ));
    }
    if L::LAYOUT.used_mask() & 0xF0 != 0 {
        return Err(ie_failed(
            direction,
            L::NAME,
            offset,
            CodecError::NibbleMismatch(L::NAME),
        ));
    }
    Ok(())
}

/// Decode two half-octet IEs that share one octet.
///
/// `H` must be laid out in the high nibble and `L` in the low nibble,
/// otherwise [`CodecError::NibbleMismatch`] is returned and nothing is
/// consumed. The octet is consumed once, so the caller advances by one
/// octet for the pair.
pub fn decode_half_octet_pair<H, L>(view: &mut OctetView<'_>) -> CodecResult<(H, L)>
where
    H: InformationElement1,
    L: InformationElement1,
{
    let offset = view.position();
    check_nibble_placement::<H, L>(Direction::Decode, offset)?;
    let octet = view
        .peek()
        .map_err(|e| ie_failed(Direction::Decode, H::NAME, offset, e.into()))?;
    let high = H::from_fields(&H::LAYOUT.unpack(octet))
        .map_err(|e| ie_failed(Direction::Decode, H::NAME, offset, e))?;
    let low = L::from_fields(&L::LAYOUT.unpack(octet))
        .map_err(|e| ie_failed(Direction::Decode, L::NAME, offset, e))?;
    view.read()?;
    ie_traced(Direction::Decode, H::NAME, &[octet]);
    ie_traced(Direction::Decode, L::NAME, &[octet]);
    Ok((high, low))
}

/// Encode two half-octet IEs into one octet.
///
/// The octet is written once with both nibbles, so an exclusive low layout
/// cannot wipe the high nibble. Misplaced IEs are rejected with
/// [`CodecError::NibbleMismatch`] before anything is written.
pub fn encode_half_octet_pair<H, L>(
    high: &H,
    low: &L,
    view: &mut OctetViewMut<'_>,
) -> CodecResult<()>
where
    H: InformationElement1,
    L: InformationElement1,
{
    let offset = view.position();
    check_nibble_placement::<H, L>(Direction::Encode, offset)?;
    let low_bits = L::LAYOUT.pack(low.to_fields().as_slice()) & 0x0F;
    let high_bits = H::LAYOUT.pack(high.to_fields().as_slice()) & 0xF0;
    let octet = high_bits | low_bits;
    view.write(octet)
        .map_err(|e| ie_failed(Direction::Encode, H::NAME, offset, e.into()))?;
    ie_traced(Direction::Encode, H::NAME, &[octet]);
    ie_traced(Direction::Encode, L::NAME, &[octet]);
    Ok(())
}

/// Decode an IE from a `bytes` buffer, advancing it by the octets consumed.
///
/// Only the first contiguous chunk of `buf` is visible to the decoder.
pub fn decode_buf<B: Buf, T: InformationElement>(buf: &mut B) -> CodecResult<T> {
    let (ie, consumed) = {
        let mut view = OctetView::new(buf.chunk());
        let ie = decode_traced::<T>(&mut view)?;
        (ie, view.position())
    };
    buf.advance(consumed);
    Ok(ie)
}

/// Encode an IE onto the end of a `bytes` buffer.
///
/// The IE is encoded into zeroed stack scratch space first, so shared-nibble
/// IEs see an empty neighbour nibble.
pub fn encode_buf<B: BufMut, T: InformationElement>(ie: &T, buf: &mut B) -> CodecResult<()> {
    let len = ie.encoded_len();
    if buf.remaining_mut() < len {
        return Err(ie_failed(
            Direction::Encode,
            T::NAME,
            0,
            CodecError::BufferTooShort {
                expected: len,
                actual: buf.remaining_mut(),
            },
        ));
    }
    if len > SCRATCH_LEN {
        return Err(ie_failed(
            Direction::Encode,
            T::NAME,
            0,
            CodecError::BufferTooShort {
                expected: len,
                actual: SCRATCH_LEN,
            },
        ));
    }
    let mut scratch = [0u8; SCRATCH_LEN];
    let written = {
        let mut view = OctetViewMut::new(&mut scratch[..len]);
        encode_traced(ie, &mut view)?;
        view.position()
    };
    buf.put_slice(&scratch[..written]);
    Ok(())
}
