//! Declarative octet layouts for sub-octet IEs
//!
//! Each single-octet IE describes its wire layout as a table of
//! [`BitField`]s plus an [`OctetOwnership`] rule, and all packing and
//! unpacking goes through [`OctetLayout`]. The tables mirror the bit
//! diagrams of 3GPP TS 24.501 clause 9, bit 0 being the least significant
//! bit of the octet (bit 1 in the 3GPP numbering).

use std::ops::Index;

use nas5g_common::{OctetError, OctetView, OctetViewMut};

/// Maximum number of fields an octet can hold (eight 1-bit flags).
pub const MAX_FIELDS: usize = 8;

/// One named sub-field of an octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Field name, as used in the protocol diagram
    pub name: &'static str,
    /// Position of the field's least significant bit (0 = LSB of the octet)
    pub offset: u8,
    /// Width in bits (1-8)
    pub width: u8,
}

impl BitField {
    /// Declare a field.
    pub const fn new(name: &'static str, offset: u8, width: u8) -> Self {
        Self { name, offset, width }
    }

    /// Mask of the field value before shifting, e.g. `0b11` for a 2-bit field.
    #[inline]
    pub const fn value_mask(&self) -> u8 {
        if self.width >= 8 {
            0xFF
        } else {
            (1u8 << self.width) - 1
        }
    }

    /// Mask of the bits this field occupies in the octet.
    ///
    /// Bits that would land above bit 7 are dropped.
    #[inline]
    pub const fn mask(&self) -> u8 {
        if self.offset >= 8 {
            0
        } else {
            self.value_mask() << self.offset
        }
    }

    /// Largest value the field can carry.
    #[inline]
    pub const fn max_value(&self) -> u8 {
        self.value_mask()
    }

    /// Extract this field from an octet.
    #[inline]
    pub const fn extract(&self, octet: u8) -> u8 {
        if self.offset >= 8 {
            0
        } else {
            (octet >> self.offset) & self.value_mask()
        }
    }

    /// Place `value` at this field's position. Bits above the width are dropped.
    #[inline]
    pub const fn insert(&self, value: u8) -> u8 {
        if self.offset >= 8 {
            0
        } else {
            (value & self.value_mask()) << self.offset
        }
    }

    const fn fits_in_octet(&self) -> bool {
        self.width >= 1 && self.width <= 8 && self.offset as u16 + self.width as u16 <= 8
    }
}

/// Which part of the octet an IE encoder owns.
///
/// Half-octet IEs usually share their octet with a neighbour (another
/// half-octet IE, a spare half octet, or an IEI). An encoder for such an IE
/// rewrites only its own nibble and keeps whatever the message assembler
/// already placed in the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctetOwnership {
    /// The IE owns the whole octet. Bits not covered by a field are written as zero.
    Exclusive,
    /// The IE owns bits 3-0. Bits 7-4 are preserved on encode.
    LowNibble,
    /// The IE owns bits 7-4. Bits 3-0 are preserved on encode.
    HighNibble,
}

impl OctetOwnership {
    /// Mask of the bits the IE may write.
    #[inline]
    pub const fn owned_mask(self) -> u8 {
        match self {
            OctetOwnership::Exclusive => 0xFF,
            OctetOwnership::LowNibble => 0x0F,
            OctetOwnership::HighNibble => 0xF0,
        }
    }
}

/// Field values of one octet, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldValues {
    values: [u8; MAX_FIELDS],
    len: usize,
}

impl FieldValues {
    /// Collect up to [`MAX_FIELDS`] values.
    pub fn from_slice(values: &[u8]) -> Self {
        let mut out = Self::default();
        for (slot, value) in out.values.iter_mut().zip(values) {
            *slot = *value;
            out.len += 1;
        }
        out
    }

    /// Values as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len]
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no values are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Index<usize> for FieldValues {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.as_slice()[index]
    }
}

/// Layout of a single-octet IE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctetLayout {
    /// Fields, most significant first
    pub fields: &'static [BitField],
    /// Which bits the IE owns when encoding
    pub ownership: OctetOwnership,
}

impl OctetLayout {
    /// Declare a layout.
    ///
    /// # Panics
    ///
    /// Panics if the layout is not [well formed](Self::is_well_formed). In a
    /// `const` item this is a compile-time error.
    pub const fn new(ownership: OctetOwnership, fields: &'static [BitField]) -> Self {
        let layout = Self { fields, ownership };
        assert!(
            layout.is_well_formed(),
            "bit fields must fit the octet, not overlap and stay inside the owned bits"
        );
        layout
    }

    /// Bits covered by at least one field.
    pub const fn used_mask(&self) -> u8 {
        let mut used = 0u8;
        let mut i = 0;
        while i < self.fields.len() {
            used |= self.fields[i].mask();
            i += 1;
        }
        used
    }

    /// Look a field up by name.
    pub fn field(&self, name: &str) -> Option<&BitField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Checks that every field fits in the octet, that no two fields overlap,
    /// and that all fields lie inside the owned bits.
    pub const fn is_well_formed(&self) -> bool {
        if self.fields.is_empty() || self.fields.len() > MAX_FIELDS {
            return false;
        }
        let mut seen = 0u8;
        let mut i = 0;
        while i < self.fields.len() {
            let field = &self.fields[i];
            if !field.fits_in_octet() || seen & field.mask() != 0 {
                return false;
            }
            seen |= field.mask();
            i += 1;
        }
        seen & !self.ownership.owned_mask() == 0
    }

    /// Split an octet into field values. Bits outside the fields are ignored.
    pub fn unpack(&self, octet: u8) -> FieldValues {
        let mut out = FieldValues::default();
        for (slot, field) in out.values.iter_mut().zip(self.fields) {
            *slot = field.extract(octet);
            out.len += 1;
        }
        out
    }

    /// Compose the IE's bits from field values, each masked to its width.
    /// Bits outside the fields are zero.
    pub fn pack(&self, values: &[u8]) -> u8 {
        debug_assert_eq!(values.len(), self.fields.len());
        self.fields
            .iter()
            .zip(values)
            .fold(0, |acc, (field, value)| acc | field.insert(*value))
    }

    /// Read one octet from the view and unpack it.
    pub fn read(&self, view: &mut OctetView<'_>) -> Result<FieldValues, OctetError> {
        let octet = view.read()?;
        Ok(self.unpack(octet))
    }

    /// Pack `values` and write them into the current octet, honouring ownership.
    ///
    /// An exclusive layout overwrites the octet. A shared layout keeps the
    /// bits outside its nibble as they are in the buffer.
    pub fn write(&self, view: &mut OctetViewMut<'_>, values: &[u8]) -> Result<(), OctetError> {
        let packed = self.pack(values);
        match self.ownership {
            OctetOwnership::Exclusive => view.write(packed),
            shared => {
                let owned = shared.owned_mask();
                view.modify(|octet| (octet & !owned) | (packed & owned))
            }
        }
    }
}
