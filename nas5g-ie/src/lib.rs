//! 5G NAS Information Element codec
//!
//! Implements encoding/decoding of the sub-octet Information Elements of
//! 5G mobility management messages (3GPP TS 24.501 clause 9.11).
//!
//! # Overview
//!
//! The crate does not own message buffers. A message assembler or parser
//! hands each IE a window of its own buffer and receives the number of
//! octets consumed or written. Every read and write is bounds-checked
//! against that window through [`nas5g_common::OctetView`].
//!
//! ## Modules
//!
//! - [`codec`]: the [`InformationElement`] contract, [`CodecError`] and
//!   the per-IE entry points
//! - [`layout`]: declarative bit layouts with explicit octet ownership
//! - [`ies`]: the Type 1 IEs and the tagged [`Ie`] variant
//!
//! # Example
//!
//! ```rust
//! use nas5g_ie::{decode_ie, encode_ie, IePayloadContainerType, PayloadContainerType};
//!
//! // High nibble already carries a neighbouring field
//! let mut buffer = [0xF0u8];
//! let ie = IePayloadContainerType::from_kind(PayloadContainerType::LocationServicesMessageContainer);
//! assert_eq!(encode_ie(&ie, &mut buffer, 0, 1).unwrap(), 1);
//! assert_eq!(buffer, [0xF7]);
//!
//! let (decoded, consumed) = decode_ie::<IePayloadContainerType>(&buffer, 0, 1).unwrap();
//! assert_eq!((decoded.type_code, consumed), (0x7, 1));
//! ```

pub mod codec;
mod events;
pub mod ies;
pub mod layout;


pub use codec::{
    decode_buf, decode_half_octet_pair, decode_ie, decode_ie_with, decode_tv1, encode_buf,
    encode_half_octet_pair, encode_ie, encode_tv1, CodecError, CodecResult, InformationElement,
    InformationElement1,
};
pub use ies::{
    // Type 1 IE enums
    AccessType, DeRegistrationAccessType, FollowOnRequest, IdentityType, PayloadContainerType,
    RegistrationType, TypeOfSecurityContext,
    // Type 1 IE structs
    Ie5gsIdentityType, Ie5gsRegistrationType, IeAccessType, IeDeRegistrationType,
    IeNasKeySetIdentifier, IePayloadContainerType,
    // Tagged variant
    Ie, IeKind,
};
pub use layout::{BitField, FieldValues, OctetLayout, OctetOwnership};
