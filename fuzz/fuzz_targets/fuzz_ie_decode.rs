//! NAS IE Fuzzer
//!
//! Feeds arbitrary octets through every IE decoder and re-encodes whatever
//! decodes, looking for panics or writes outside the caller's window.
//!
//! Run with: cargo +nightly fuzz run fuzz_ie_decode

#![no_main]

use libfuzzer_sys::fuzz_target;

use nas5g_common::{OctetView, OctetViewMut};
use nas5g_ie::{decode_ie, Ie, IeDeRegistrationType, IeKind, IePayloadContainerType};

fuzz_target!(|data: &[u8]| {
    // First two octets pick the window, the rest is the message buffer
    if data.len() < 2 {
        return;
    }
    let offset = data[0] as usize;
    let length = data[1] as usize;
    let buffer = &data[2..];

    let _ = decode_ie::<IeDeRegistrationType>(buffer, offset, length);
    let _ = decode_ie::<IePayloadContainerType>(buffer, offset, length);

    for kind in IeKind::ALL {
        let mut view = OctetView::new(buffer);
        let Ok(ie) = Ie::decode(kind, &mut view) else {
            assert!(buffer.is_empty());
            continue;
        };
        assert_eq!(view.position(), 1);

        let mut out = buffer.to_vec();
        let mut writer = OctetViewMut::new(&mut out);
        if ie.encode(&mut writer).is_ok() {
            assert_eq!(writer.position(), ie.encoded_len());
            assert_eq!(&out[1..], &buffer[1..]);
            let used = kind.layout().used_mask();
            assert_eq!(out[0] & used, buffer[0] & used);
        }
    }
});
