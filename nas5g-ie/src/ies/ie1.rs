//! Type 1 and single-octet Information Elements
//!
//! These IEs pack a few small sub-fields into one octet, often only half of
//! it. Each one declares its bit layout as an [`OctetLayout`] table and
//! keeps its sub-fields as raw integers, so decoding accepts every bit
//! pattern that fits the field widths. Typed views of the assigned code
//! points are available through accessor methods, and
//! [`InformationElement::validate`] rejects the unassigned ones.
//!
//! Based on 3GPP TS 24.501.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use nas5g_common::{OctetView, OctetViewMut};

use crate::codec::{
    decode_ie1, encode_ie1, CodecError, CodecResult, InformationElement, InformationElement1,
};
use crate::layout::{BitField, FieldValues, OctetLayout, OctetOwnership};

// ============================================================================
// Enumerations for Type 1 IEs
// ============================================================================

/// Payload container type (3GPP TS 24.501 Section 9.11.3.40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PayloadContainerType {
    /// N1 SM information
    #[default]
    N1SmInformation = 0b0001,
    /// SMS
    Sms = 0b0010,
    /// LTE Positioning Protocol (LPP) message container
    LppMessage = 0b0011,
    /// SOR transparent container
    SorTransparentContainer = 0b0100,
    /// UE policy container
    UePolicyContainer = 0b0101,
    /// UE parameters update transparent container
    UeParametersUpdateTransparentContainer = 0b0110,
    /// Location services message container
    LocationServicesMessageContainer = 0b0111,
    /// CIoT user data container
    CiotUserDataContainer = 0b1000,
    /// Service-level-AA container
    ServiceLevelAaContainer = 0b1001,
    /// Event notification
    EventNotification = 0b1010,
    /// Multiple payloads
    MultiplePayloads = 0b1111,
}

/// De-registration access type (3GPP TS 24.501 Section 9.11.3.20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum DeRegistrationAccessType {
    /// 3GPP access
    #[default]
    ThreeGppAccess = 0b01,
    /// Non-3GPP access
    NonThreeGppAccess = 0b10,
    /// 3GPP access and non-3GPP access
    ThreeGppAndNonThreeGppAccess = 0b11,
}

/// Type of security context (3GPP TS 24.501 Section 9.11.3.32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum TypeOfSecurityContext {
    /// Native security context
    #[default]
    NativeSecurityContext = 0b0,
    /// Mapped security context
    MappedSecurityContext = 0b1,
}

/// Follow-on Request indicator (3GPP TS 24.501 Section 9.11.3.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum FollowOnRequest {
    /// No follow-on request pending
    #[default]
    NoPending = 0b0,
    /// Follow-on request pending
    Pending = 0b1,
}

/// 5GS Registration Type (3GPP TS 24.501 Section 9.11.3.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum RegistrationType {
    /// Initial registration
    #[default]
    InitialRegistration = 0b001,
    /// Mobility registration updating
    MobilityRegistrationUpdating = 0b010,
    /// Periodic registration updating
    PeriodicRegistrationUpdating = 0b011,
    /// Emergency registration
    EmergencyRegistration = 0b100,
}

/// Access Type (3GPP TS 24.501 Section 9.11.2.1A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum AccessType {
    /// 3GPP access
    #[default]
    ThreeGppAccess = 0b01,
    /// Non-3GPP access
    NonThreeGppAccess = 0b10,
}

/// 5GS Identity Type (3GPP TS 24.501 Section 9.11.3.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum IdentityType {
    /// No identity
    #[default]
    NoIdentity = 0b000,
    /// SUCI (Subscription Concealed Identifier)
    Suci = 0b001,
    /// 5G-GUTI (5G Globally Unique Temporary Identifier)
    Guti = 0b010,
    /// IMEI (International Mobile Equipment Identity)
    Imei = 0b011,
    /// 5G-S-TMSI (5G S-Temporary Mobile Subscriber Identity)
    Tmsi = 0b100,
    /// IMEISV (IMEI Software Version)
    ImeiSv = 0b101,
}

// ============================================================================
// Octet layouts
// ============================================================================

const PAYLOAD_CONTAINER_TYPE_FIELDS: [BitField; 1] =
    [BitField::new("payload container type", 0, 4)];

const DEREGISTRATION_TYPE_FIELDS: [BitField; 3] = [
    BitField::new("switch off", 3, 1),
    BitField::new("re-registration required", 2, 1),
    BitField::new("access type", 0, 2),
];

// ngKSI sits in the high nibble of every 5GMM message carrying it next to another Type 1 IE
const NAS_KEY_SET_IDENTIFIER_FIELDS: [BitField; 2] = [
    BitField::new("TSC", 7, 1),
    BitField::new("NAS key set identifier", 4, 3),
];

const REGISTRATION_TYPE_FIELDS: [BitField; 2] = [
    BitField::new("FOR", 3, 1),
    BitField::new("5GS registration type value", 0, 3),
];

const ACCESS_TYPE_FIELDS: [BitField; 1] = [BitField::new("access type", 0, 2)];

const IDENTITY_TYPE_FIELDS: [BitField; 1] = [BitField::new("type of identity", 0, 3)];

fn malformed(ie: &'static str, value: u8) -> CodecError {
    CodecError::MalformedValue { ie, value }
}

// ============================================================================
// Type 1 IE Structures
// ============================================================================

/// Payload Container Type IE (3GPP TS 24.501 Section 9.11.3.40)
///
/// Occupies bits 3-0. Bits 7-4 hold a spare half octet or a neighbouring
/// IE written by the caller; encoding leaves them untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IePayloadContainerType {
    /// Raw 4-bit container type code
    pub type_code: u8,
}

impl IePayloadContainerType {
    /// Create a new Payload Container Type IE from a raw code
    pub fn new(type_code: u8) -> Self {
        Self { type_code }
    }

    /// Create a new Payload Container Type IE from a known container type
    pub fn from_kind(kind: PayloadContainerType) -> Self {
        Self {
            type_code: kind.into(),
        }
    }

    /// The container type, if the code is assigned
    pub fn kind(&self) -> Option<PayloadContainerType> {
        PayloadContainerType::try_from(self.type_code & 0x0F).ok()
    }
}

impl InformationElement for IePayloadContainerType {
    const NAME: &'static str = "Payload container type";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }

    fn validate(&self) -> CodecResult<()> {
        self.kind()
            .map(|_| ())
            .ok_or_else(|| malformed(Self::NAME, self.type_code))
    }
}

impl InformationElement1 for IePayloadContainerType {
    const LAYOUT: OctetLayout =
        OctetLayout::new(OctetOwnership::LowNibble, &PAYLOAD_CONTAINER_TYPE_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        Ok(Self {
            type_code: fields[0],
        })
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[self.type_code])
    }
}

/// De-registration Type IE (3GPP TS 24.501 Section 9.11.3.20)
///
/// Owns its whole octet: bits 7-4 are written as zero. A message assembler
/// that places ngKSI next to it encodes this IE first and merges ngKSI
/// into the high nibble afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IeDeRegistrationType {
    /// Switch off indicator
    pub switch_off: bool,
    /// Re-registration required (spare in UE to Network direction)
    pub re_registration_required: bool,
    /// Raw 2-bit access type
    pub access_type: u8,
}

impl IeDeRegistrationType {
    /// Create a new De-registration Type IE
    pub fn new(
        access_type: DeRegistrationAccessType,
        re_registration_required: bool,
        switch_off: bool,
    ) -> Self {
        Self {
            switch_off,
            re_registration_required,
            access_type: access_type.into(),
        }
    }

    /// Create a De-registration Type IE from raw sub-field values
    pub fn from_raw(switch_off: u8, re_registration_required: u8, access_type: u8) -> Self {
        Self {
            switch_off: switch_off & 0x01 != 0,
            re_registration_required: re_registration_required & 0x01 != 0,
            access_type,
        }
    }

    /// The access type, if the code is assigned
    pub fn access(&self) -> Option<DeRegistrationAccessType> {
        DeRegistrationAccessType::try_from(self.access_type & 0x03).ok()
    }
}

impl InformationElement for IeDeRegistrationType {
    const NAME: &'static str = "De-registration type";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }

    fn validate(&self) -> CodecResult<()> {
        self.access()
            .map(|_| ())
            .ok_or_else(|| malformed(Self::NAME, self.access_type))
    }
}

impl InformationElement1 for IeDeRegistrationType {
    const LAYOUT: OctetLayout =
        OctetLayout::new(OctetOwnership::Exclusive, &DEREGISTRATION_TYPE_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        Ok(Self::from_raw(fields[0], fields[1], fields[2]))
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[
            self.switch_off as u8,
            self.re_registration_required as u8,
            self.access_type,
        ])
    }
}

/// NAS Key Set Identifier IE, ngKSI (3GPP TS 24.501 Section 9.11.3.32)
///
/// Laid out in the high nibble, as in the De-registration Request and
/// Registration Request messages. Bits 3-0 are preserved on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IeNasKeySetIdentifier {
    /// Type of security context
    pub tsc: TypeOfSecurityContext,
    /// Key set identifier (0-6, 7 = not available or reserved)
    pub ksi: u8,
}

impl IeNasKeySetIdentifier {
    /// Value indicating NAS key set identifier is not available or reserved
    pub const NOT_AVAILABLE_OR_RESERVED: u8 = 0b111;

    /// Create a new NAS Key Set Identifier IE
    pub fn new(tsc: TypeOfSecurityContext, ksi: u8) -> Self {
        Self { tsc, ksi: ksi & 0x07 }
    }

    /// Create a NAS Key Set Identifier indicating not available
    pub fn not_available() -> Self {
        Self {
            tsc: TypeOfSecurityContext::NativeSecurityContext,
            ksi: Self::NOT_AVAILABLE_OR_RESERVED,
        }
    }

    /// Check if the key set identifier is available
    pub fn is_available(&self) -> bool {
        self.ksi & 0x07 != Self::NOT_AVAILABLE_OR_RESERVED
    }
}

impl Default for IeNasKeySetIdentifier {
    fn default() -> Self {
        Self::not_available()
    }
}

impl InformationElement for IeNasKeySetIdentifier {
    const NAME: &'static str = "NAS key set identifier";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl InformationElement1 for IeNasKeySetIdentifier {
    const LAYOUT: OctetLayout =
        OctetLayout::new(OctetOwnership::HighNibble, &NAS_KEY_SET_IDENTIFIER_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        let tsc = TypeOfSecurityContext::try_from(fields[0])
            .map_err(|_| malformed(Self::NAME, fields[0]))?;
        Ok(Self {
            tsc,
            ksi: fields[1],
        })
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[self.tsc.into(), self.ksi])
    }
}

/// 5GS Registration Type IE (3GPP TS 24.501 Section 9.11.3.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ie5gsRegistrationType {
    /// Follow-on request pending indicator
    pub follow_on_request_pending: FollowOnRequest,
    /// Raw 3-bit registration type value
    pub registration_type: u8,
}

impl Ie5gsRegistrationType {
    /// Create a new 5GS Registration Type IE
    pub fn new(
        follow_on_request_pending: FollowOnRequest,
        registration_type: RegistrationType,
    ) -> Self {
        Self {
            follow_on_request_pending,
            registration_type: registration_type.into(),
        }
    }

    /// The registration type, if the code is assigned
    pub fn registration(&self) -> Option<RegistrationType> {
        RegistrationType::try_from(self.registration_type & 0x07).ok()
    }
}

impl InformationElement for Ie5gsRegistrationType {
    const NAME: &'static str = "5GS registration type";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }

    fn validate(&self) -> CodecResult<()> {
        self.registration()
            .map(|_| ())
            .ok_or_else(|| malformed(Self::NAME, self.registration_type))
    }
}

impl InformationElement1 for Ie5gsRegistrationType {
    const LAYOUT: OctetLayout =
        OctetLayout::new(OctetOwnership::LowNibble, &REGISTRATION_TYPE_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        let follow_on_request_pending = FollowOnRequest::try_from(fields[0])
            .map_err(|_| malformed(Self::NAME, fields[0]))?;
        Ok(Self {
            follow_on_request_pending,
            registration_type: fields[1],
        })
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[self.follow_on_request_pending.into(), self.registration_type])
    }
}

/// Access Type IE (3GPP TS 24.501 Section 9.11.2.1A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IeAccessType {
    /// Raw 2-bit access type
    pub access_type: u8,
}

impl IeAccessType {
    /// Create a new Access Type IE
    pub fn new(value: AccessType) -> Self {
        Self {
            access_type: value.into(),
        }
    }

    /// The access type, if the code is assigned
    pub fn access(&self) -> Option<AccessType> {
        AccessType::try_from(self.access_type & 0x03).ok()
    }
}

impl InformationElement for IeAccessType {
    const NAME: &'static str = "Access type";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }

    fn validate(&self) -> CodecResult<()> {
        self.access()
            .map(|_| ())
            .ok_or_else(|| malformed(Self::NAME, self.access_type))
    }
}

impl InformationElement1 for IeAccessType {
    const LAYOUT: OctetLayout = OctetLayout::new(OctetOwnership::LowNibble, &ACCESS_TYPE_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        Ok(Self {
            access_type: fields[0],
        })
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[self.access_type])
    }
}

/// 5GS Identity Type IE (3GPP TS 24.501 Section 9.11.3.3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ie5gsIdentityType {
    /// Raw 3-bit type of identity
    pub identity_type: u8,
}

impl Ie5gsIdentityType {
    /// Create a new 5GS Identity Type IE
    pub fn new(value: IdentityType) -> Self {
        Self {
            identity_type: value.into(),
        }
    }

    /// The identity type, if the code is assigned
    pub fn identity(&self) -> Option<IdentityType> {
        IdentityType::try_from(self.identity_type & 0x07).ok()
    }
}

impl InformationElement for Ie5gsIdentityType {
    const NAME: &'static str = "5GS identity type";

    fn decode(view: &mut OctetView<'_>) -> CodecResult<Self> {
        decode_ie1(view)
    }

    fn encode(&self, view: &mut OctetViewMut<'_>) -> CodecResult<()> {
        encode_ie1(self, view)
    }

    fn encoded_len(&self) -> usize {
        1
    }

    fn validate(&self) -> CodecResult<()> {
        self.identity()
            .map(|_| ())
            .ok_or_else(|| malformed(Self::NAME, self.identity_type))
    }
}

impl InformationElement1 for Ie5gsIdentityType {
    const LAYOUT: OctetLayout =
        OctetLayout::new(OctetOwnership::LowNibble, &IDENTITY_TYPE_FIELDS);

    fn from_fields(fields: &FieldValues) -> CodecResult<Self> {
        Ok(Self {
            identity_type: fields[0],
        })
    }

    fn to_fields(&self) -> FieldValues {
        FieldValues::from_slice(&[self.identity_type])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
