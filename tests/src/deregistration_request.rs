//! De-registration Request integration tests
//!
//! Walks the octet that carries ngKSI in bits 7-4 and the de-registration
//! type in bits 3-0, as assembled and parsed around the IE codec.

use std::io::Write;

use integration_tests::{
    init_test_logging, MessageReader, MessageWriter, TestResult,
    DEREGISTRATION_REQUEST_UE_ORIGINATING, DEREGISTRATION_REQUEST_UE_TERMINATED, HEADER_LEN,
};
use nas5g_common::{CodecConfig, LogLevel, OctetView};
use nas5g_ie::{
    decode_half_octet_pair, CodecError, DeRegistrationAccessType, IeDeRegistrationType,
    IeNasKeySetIdentifier, InformationElement, TypeOfSecurityContext,
};

// 5GS mobile identity (5G-S-TMSI) as an opaque LV-E value
const MOBILE_IDENTITY: [u8; 9] = [0x00, 0x07, 0xF4, 0x00, 0x41, 0x01, 0x02, 0x03, 0x04];

fn ue_originating_request() -> (IeNasKeySetIdentifier, IeDeRegistrationType) {
    (
        IeNasKeySetIdentifier::new(TypeOfSecurityContext::NativeSecurityContext, 2),
        IeDeRegistrationType::new(DeRegistrationAccessType::ThreeGppAccess, false, true),
    )
}

/// Exclusive low half first, then ngKSI merged into the high nibble
#[test]
fn test_assemble_deregistration_request() -> TestResult {
    init_test_logging();

    let (ngksi, dereg) = ue_originating_request();
    let mut writer =
        MessageWriter::new(DEREGISTRATION_REQUEST_UE_ORIGINATING, 1 + MOBILE_IDENTITY.len());
    writer.put_half(&dereg)?;
    assert_eq!(writer.put(&ngksi)?, 1);
    writer.put_slice(&MOBILE_IDENTITY)?;
    let message = writer.finish();

    assert_eq!(&message[..4], &[0x7E, 0x00, 0x45, 0x29]);
    assert_eq!(&message[4..], &MOBILE_IDENTITY);
    Ok(())
}

/// Writing the exclusive IE last wipes the neighbour in the high nibble
#[test]
fn test_exclusive_ie_written_last_clears_ngksi() -> TestResult {
    init_test_logging();

    let (ngksi, dereg) = ue_originating_request();
    let mut writer = MessageWriter::new(DEREGISTRATION_REQUEST_UE_ORIGINATING, 1);
    writer.put_half(&ngksi)?;
    writer.put(&dereg)?;
    let message = writer.finish();

    assert_eq!(message[HEADER_LEN], 0x09);
    Ok(())
}

#[test]
fn test_parse_deregistration_request() -> TestResult {
    init_test_logging();

    let mut message = vec![0x7E, 0x00, 0x45, 0x29];
    message.extend_from_slice(&MOBILE_IDENTITY);

    let mut reader = MessageReader::new(&message)?;
    assert_eq!(reader.message_type(), DEREGISTRATION_REQUEST_UE_ORIGINATING);

    let ngksi: IeNasKeySetIdentifier = reader.peek()?;
    let dereg: IeDeRegistrationType = reader.take()?;
    assert_eq!(reader.position(), HEADER_LEN + 1);

    assert_eq!(ngksi.tsc, TypeOfSecurityContext::NativeSecurityContext);
    assert_eq!(ngksi.ksi, 2);
    assert!(dereg.switch_off);
    assert!(!dereg.re_registration_required);
    assert_eq!(dereg.access(), Some(DeRegistrationAccessType::ThreeGppAccess));

    assert_eq!(reader.take_lv_e()?, &MOBILE_IDENTITY[2..]);
    assert!(reader.is_done());
    Ok(())
}

#[test]
fn test_parse_shared_octet_as_pair() -> TestResult {
    init_test_logging();

    let message = [0x7E, 0x00, 0x45, 0x79];
    let mut view = OctetView::new(&message[HEADER_LEN..]);
    let (ngksi, dereg) =
        decode_half_octet_pair::<IeNasKeySetIdentifier, IeDeRegistrationType>(&mut view)?;

    assert_eq!(view.position(), 1);
    assert!(!ngksi.is_available());
    assert_eq!(dereg, IeDeRegistrationType::from_raw(1, 0, 0b01));
    Ok(())
}

#[test]
fn test_truncated_message_aborts_at_deregistration_type() -> TestResult {
    init_test_logging();

    let message = [0x7E, 0x00, 0x45];
    let mut reader = MessageReader::new(&message)?;

    let result = reader.take::<IeDeRegistrationType>();
    assert_eq!(
        result,
        Err(CodecError::BufferTooShort {
            expected: 1,
            actual: 0
        })
    );
    assert_eq!(reader.position(), HEADER_LEN);
    Ok(())
}

#[test]
fn test_ue_terminated_request_spare_half_octet() -> TestResult {
    init_test_logging();

    let dereg = IeDeRegistrationType::new(DeRegistrationAccessType::NonThreeGppAccess, true, false);
    let mut writer = MessageWriter::new(DEREGISTRATION_REQUEST_UE_TERMINATED, 1);
    writer.put(&dereg)?;
    let message = writer.finish();
    assert_eq!(message, vec![0x7E, 0x00, 0x47, 0x06]);

    let mut reader = MessageReader::new(&message)?;
    let decoded: IeDeRegistrationType = reader.take()?;
    assert!(decoded.re_registration_required);
    assert!(reader.is_done());
    Ok(())
}

#[test]
fn test_semantic_config_from_yaml_rejects_unassigned_access_type() -> TestResult {
    init_test_logging();

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "value_check: semantic")?;
    writeln!(file, "log_level: debug")?;
    let config = CodecConfig::from_yaml_file(file.path())?;
    assert_eq!(config.log_level, LogLevel::Debug);
    // no-op once the test subscriber is installed
    config.init_logging();

    // access type 00 is not assigned
    let message = [0x7E, 0x00, 0x45, 0x7C];

    let mut lenient = MessageReader::new(&message)?;
    let dereg: IeDeRegistrationType = lenient.take()?;
    assert_eq!(dereg.access_type, 0);
    assert_eq!(dereg.access(), None);

    let mut strict = MessageReader::new(&message)?.with_config(config);
    let result = strict.take::<IeDeRegistrationType>();
    assert_eq!(
        result,
        Err(CodecError::MalformedValue {
            ie: IeDeRegistrationType::NAME,
            value: 0
        })
    );
    assert_eq!(strict.position(), HEADER_LEN);
    Ok(())
}
