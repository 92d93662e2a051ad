//! Tagged variant over the IE types this crate implements
//!
//! A message parser that walks an IE list picks the expected [`IeKind`] per
//! position and gets back an [`Ie`], without a generic parameter per slot.

use std::fmt;

use nas5g_common::{OctetView, OctetViewMut};

use crate::codec::{CodecResult, InformationElement, InformationElement1};
use crate::events::{decode_traced, encode_traced};
use crate::layout::OctetLayout;

use super::ie1::{
    Ie5gsIdentityType, Ie5gsRegistrationType, IeAccessType, IeDeRegistrationType,
    IeNasKeySetIdentifier, IePayloadContainerType,
};

/// Discriminant of an [`Ie`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IeKind {
    /// Payload container type
    PayloadContainerType,
    /// De-registration type
    DeRegistrationType,
    /// NAS key set identifier
    NasKeySetIdentifier,
    /// 5GS registration type
    RegistrationType5gs,
    /// Access type
    AccessType,
    /// 5GS identity type
    IdentityType5gs,
}

impl IeKind {
    /// Every kind, in declaration order
    pub const ALL: [IeKind; 6] = [
        IeKind::PayloadContainerType,
        IeKind::DeRegistrationType,
        IeKind::NasKeySetIdentifier,
        IeKind::RegistrationType5gs,
        IeKind::AccessType,
        IeKind::IdentityType5gs,
    ];

    /// IE name as used in TS 24.501
    pub fn name(self) -> &'static str {
        match self {
            IeKind::PayloadContainerType => IePayloadContainerType::NAME,
            IeKind::DeRegistrationType => IeDeRegistrationType::NAME,
            IeKind::NasKeySetIdentifier => IeNasKeySetIdentifier::NAME,
            IeKind::RegistrationType5gs => Ie5gsRegistrationType::NAME,
            IeKind::AccessType => IeAccessType::NAME,
            IeKind::IdentityType5gs => Ie5gsIdentityType::NAME,
        }
    }

    /// Bit layout of the octet this kind occupies
    pub fn layout(self) -> OctetLayout {
        match self {
            IeKind::PayloadContainerType => IePayloadContainerType::LAYOUT,
            IeKind::DeRegistrationType => IeDeRegistrationType::LAYOUT,
            IeKind::NasKeySetIdentifier => IeNasKeySetIdentifier::LAYOUT,
            IeKind::RegistrationType5gs => Ie5gsRegistrationType::LAYOUT,
            IeKind::AccessType => IeAccessType::LAYOUT,
            IeKind::IdentityType5gs => Ie5gsIdentityType::LAYOUT,
        }
    }
}

impl fmt::Display for IeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded information element of any supported kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ie {
    /// Payload container type
    PayloadContainerType(IePayloadContainerType),
    /// De-registration type
    DeRegistrationType(IeDeRegistrationType),
    /// NAS key set identifier
    NasKeySetIdentifier(IeNasKeySetIdentifier),
    /// 5GS registration type
    RegistrationType5gs(Ie5gsRegistrationType),
    /// Access type
    AccessType(IeAccessType),
    /// 5GS identity type
    IdentityType5gs(Ie5gsIdentityType),
}

impl Ie {
    /// Decode an IE of the given kind from the view.
    pub fn decode(kind: IeKind, view: &mut OctetView<'_>) -> CodecResult<Self> {
        Ok(match kind {
            IeKind::PayloadContainerType => Ie::PayloadContainerType(decode_traced(view)?),
            IeKind::DeRegistrationType => Ie::DeRegistrationType(decode_traced(view)?),
            IeKind::NasKeySetIdentifier => Ie::NasKeySetIdentifier(decode_traced(view)?),
            IeKind::RegistrationType5gs => Ie::RegistrationType5gs(decode_traced(view)?),
            IeKind::AccessType => Ie::AccessType(decode_traced(view)?),
            IeKind::IdentityType5gs => Ie::IdentityType5gs(decode_traced(view)?),
        })
    }

    /// Encode the IE into the view.
    pub fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        match self {
            Ie::PayloadContainerType(ie) => encode_traced(ie, view),
            Ie::DeRegistrationType(ie) => encode_traced(ie, view),
            Ie::NasKeySetIdentifier(ie) => encode_traced(ie, view),
            Ie::RegistrationType5gs(ie) => encode_traced(ie, view),
            Ie::AccessType(ie) => encode_traced(ie, view),
            Ie::IdentityType5gs(ie) => encode_traced(ie, view),
        }
    }

    /// Kind of this IE
    pub fn kind(&self) -> IeKind {
        match self {
            Ie::PayloadContainerType(_) => IeKind::PayloadContainerType,
            Ie::DeRegistrationType(_) => IeKind::DeRegistrationType,
            Ie::NasKeySetIdentifier(_) => IeKind::NasKeySetIdentifier,
            Ie::RegistrationType5gs(_) => IeKind::RegistrationType5gs,
            Ie::AccessType(_) => IeKind::AccessType,
            Ie::IdentityType5gs(_) => IeKind::IdentityType5gs,
        }
    }

    /// Number of octets [`encode`](Self::encode) writes
    pub fn encoded_len(&self) -> usize {
        match self {
            Ie::PayloadContainerType(ie) => ie.encoded_len(),
            Ie::DeRegistrationType(ie) => ie.encoded_len(),
            Ie::NasKeySetIdentifier(ie) => ie.encoded_len(),
            Ie::RegistrationType5gs(ie) => ie.encoded_len(),
            Ie::AccessType(ie) => ie.encoded_len(),
            Ie::IdentityType5gs(ie) => ie.encoded_len(),
        }
    }

    /// Check sub-field values against the assigned code points.
    pub fn validate(&self) -> CodecResult<()> {
        match self {
            Ie::PayloadContainerType(ie) => ie.validate(),
            Ie::DeRegistrationType(ie) => ie.validate(),
            Ie::NasKeySetIdentifier(ie) => ie.validate(),
            Ie::RegistrationType5gs(ie) => ie.validate(),
            Ie::AccessType(ie) => ie.validate(),
            Ie::IdentityType5gs(ie) => ie.validate(),
        }
    }
}

impl From<IePayloadContainerType> for Ie {
    fn from(ie: IePayloadContainerType) -> Self {
        Ie::PayloadContainerType(ie)
    }
}

impl From<IeDeRegistrationType> for Ie {
    fn from(ie: IeDeRegistrationType) -> Self {
        Ie::DeRegistrationType(ie)
    }
}

impl From<IeNasKeySetIdentifier> for Ie {
    fn from(ie: IeNasKeySetIdentifier) -> Self {
        Ie::NasKeySetIdentifier(ie)
    }
}

impl From<Ie5gsRegistrationType> for Ie {
    fn from(ie: Ie5gsRegistrationType) -> Self {
        Ie::RegistrationType5gs(ie)
    }
}

impl From<IeAccessType> for Ie {
    fn from(ie: IeAccessType) -> Self {
        Ie::AccessType(ie)
    }
}

impl From<Ie5gsIdentityType> for Ie {
    fn from(ie: Ie5gsIdentityType) -> Self {
        Ie::IdentityType5gs(ie)
    }
}
