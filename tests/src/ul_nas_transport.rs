//! UL NAS Transport integration tests
//!
//! The payload container type sits in bits 3-0 of the first IE octet with a
//! spare half octet above it, followed by the payload container (LV-E).

use integration_tests::{
    init_test_logging, MessageReader, MessageWriter, TestResult, HEADER_LEN, UL_NAS_TRANSPORT,
};
use nas5g_common::{CodecConfig, OctetView};
use nas5g_ie::{
    decode_ie, encode_ie, CodecError, Ie, IeKind, IePayloadContainerType, InformationElement,
    PayloadContainerType,
};

// 5GSM PDU session establishment request, shortened
const N1_SM_PAYLOAD: [u8; 6] = [0x00, 0x04, 0x2E, 0x01, 0x01, 0xC1];

#[test]
fn test_assemble_ul_nas_transport() -> TestResult {
    init_test_logging();

    let pct = IePayloadContainerType::from_kind(PayloadContainerType::N1SmInformation);
    let mut writer = MessageWriter::new(UL_NAS_TRANSPORT, 1 + N1_SM_PAYLOAD.len());
    assert_eq!(writer.put(&pct)?, 1);
    writer.put_slice(&N1_SM_PAYLOAD)?;
    let message = writer.finish();

    assert_eq!(&message[..4], &[0x7E, 0x00, 0x67, 0x01]);
    assert_eq!(&message[4..], &N1_SM_PAYLOAD);
    Ok(())
}

#[test]
fn test_parse_ul_nas_transport() -> TestResult {
    init_test_logging();

    let mut message = vec![0x7E, 0x00, 0x67, 0x01];
    message.extend_from_slice(&N1_SM_PAYLOAD);

    let mut reader = MessageReader::new(&message)?;
    assert_eq!(reader.message_type(), UL_NAS_TRANSPORT);

    let pct: IePayloadContainerType = reader.take()?;
    assert_eq!(pct.kind(), Some(PayloadContainerType::N1SmInformation));
    assert_eq!(reader.position(), HEADER_LEN + 1);

    let payload = reader.take_lv_e()?;
    assert_eq!(payload, &N1_SM_PAYLOAD[2..]);
    assert!(reader.is_done());
    Ok(())
}

/// The assembler's high nibble survives the payload container type encoder
#[test]
fn test_high_nibble_preserved_in_message_buffer() -> TestResult {
    init_test_logging();

    let mut message = [0x7E, 0x00, 0x67, 0xF0];
    let pct =
        IePayloadContainerType::from_kind(PayloadContainerType::LocationServicesMessageContainer);
    let written = encode_ie(&pct, &mut message, HEADER_LEN, 1)?;
    assert_eq!(written, 1);
    assert_eq!(message, [0x7E, 0x00, 0x67, 0xF7]);

    let (decoded, consumed) = decode_ie::<IePayloadContainerType>(&message, HEADER_LEN, 1)?;
    assert_eq!(consumed, 1);
    assert_eq!(decoded.type_code, 0x7);
    Ok(())
}

#[test]
fn test_no_room_for_payload_container_type() -> TestResult {
    init_test_logging();

    let mut writer = MessageWriter::new(UL_NAS_TRANSPORT, 0);
    let result = writer.put(&IePayloadContainerType::new(0x1));
    assert_eq!(
        result,
        Err(CodecError::BufferTooShort {
            expected: 1,
            actual: 0
        })
    );
    assert_eq!(writer.finish(), vec![0x7E, 0x00, 0x67]);
    Ok(())
}

#[test]
fn test_walk_with_tagged_variant() -> TestResult {
    init_test_logging();

    let message = [0x7E, 0x00, 0x67, 0x0F];
    let mut view = OctetView::new(&message[HEADER_LEN..]);

    let ie = Ie::decode(IeKind::PayloadContainerType, &mut view)?;
    assert_eq!(ie.kind(), IeKind::PayloadContainerType);
    assert_eq!(view.position(), ie.encoded_len());
    match ie {
        Ie::PayloadContainerType(pct) => {
            assert_eq!(pct.kind(), Some(PayloadContainerType::MultiplePayloads));
        }
        other => panic!("unexpected IE {other:?}"),
    }
    assert!(!view.has_next());
    Ok(())
}

#[test]
fn test_unassigned_container_type_rejected_when_semantic() -> TestResult {
    init_test_logging();

    let message = [0x7E, 0x00, 0x67, 0x0B];

    let mut lenient = MessageReader::new(&message)?;
    let pct: IePayloadContainerType = lenient.take()?;
    assert_eq!(pct.type_code, 0xB);
    assert_eq!(pct.kind(), None);

    let mut strict = MessageReader::new(&message)?.with_config(CodecConfig::semantic());
    assert_eq!(
        strict.take::<IePayloadContainerType>(),
        Err(CodecError::MalformedValue {
            ie: IePayloadContainerType::NAME,
            value: 0xB
        })
    );
    assert_eq!(strict.position(), HEADER_LEN);
    Ok(())
}
