//! Minimal 5GMM message writer and reader
//!
//! Just enough of a message assembler/parser to drive the IE codec over a
//! real buffer: a plain 5GMM header followed by IEs placed one after another.
//! The writer and reader own the cursor; the codec only ever sees a window.

use nas5g_common::{CodecConfig, OctetView, OctetViewMut};
use nas5g_ie::{decode_ie, decode_ie_with, encode_ie, CodecResult, InformationElement};
use tracing::debug;

/// Extended protocol discriminator for 5GS mobility management
pub const EPD_5GMM: u8 = 0x7E;
/// Security header type "plain NAS message" with spare half octet
pub const PLAIN_NAS_MESSAGE: u8 = 0x00;
/// De-registration request (UE originating de-registration)
pub const DEREGISTRATION_REQUEST_UE_ORIGINATING: u8 = 0x45;
/// De-registration request (UE terminated de-registration)
pub const DEREGISTRATION_REQUEST_UE_TERMINATED: u8 = 0x47;
/// UL NAS transport
pub const UL_NAS_TRANSPORT: u8 = 0x67;
/// Length of the plain 5GMM header
pub const HEADER_LEN: usize = 3;

/// Writes a plain 5GMM message into a fixed-size buffer.
#[derive(Debug)]
pub struct MessageWriter {
    buffer: Vec<u8>,
    cursor: usize,
}

impl MessageWriter {
    /// Start a message with room for `capacity` octets of IEs after the header.
    pub fn new(message_type: u8, capacity: usize) -> Self {
        let mut buffer = vec![0u8; HEADER_LEN + capacity];
        buffer[0] = EPD_5GMM;
        buffer[1] = PLAIN_NAS_MESSAGE;
        buffer[2] = message_type;
        Self {
            buffer,
            cursor: HEADER_LEN,
        }
    }

    fn capacity(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Encode an IE at the cursor and advance past it.
    pub fn put<T: InformationElement>(&mut self, ie: &T) -> CodecResult<usize> {
        let capacity = self.capacity();
        let written = encode_ie(ie, &mut self.buffer, self.cursor, capacity)?;
        self.cursor += written;
        Ok(written)
    }

    /// Encode the first IE of a shared octet without advancing.
    pub fn put_half<T: InformationElement>(&mut self, ie: &T) -> CodecResult<()> {
        let capacity = self.capacity();
        encode_ie(ie, &mut self.buffer, self.cursor, capacity)?;
        Ok(())
    }

    /// Append raw octets, e.g. an LV-E value the codec does not cover.
    pub fn put_slice(&mut self, octets: &[u8]) -> CodecResult<()> {
        let capacity = self.capacity();
        let mut view = OctetViewMut::window(&mut self.buffer, self.cursor, capacity)?;
        view.write_slice(octets)?;
        self.cursor += view.position();
        Ok(())
    }

    /// Octets written so far, header included.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The message as written so far.
    pub fn finish(mut self) -> Vec<u8> {
        self.buffer.truncate(self.cursor);
        self.buffer
    }
}

/// Walks a plain 5GMM message IE by IE.
#[derive(Debug)]
pub struct MessageReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    config: CodecConfig,
}

impl<'a> MessageReader<'a> {
    /// Check the header and position the cursor on the first IE.
    pub fn new(buffer: &'a [u8]) -> CodecResult<Self> {
        let mut header = OctetView::new(buffer);
        header.skip(HEADER_LEN)?;
        Ok(Self {
            buffer,
            cursor: HEADER_LEN,
            config: CodecConfig::default(),
        })
    }

    /// Use `config` for every subsequent decode.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Message type octet of the header
    pub fn message_type(&self) -> u8 {
        self.buffer[2]
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Decode an IE at the cursor and advance by the octets it consumed.
    ///
    /// The cursor stays put on failure; the caller is expected to abort.
    pub fn take<T: InformationElement>(&mut self) -> CodecResult<T> {
        let remaining = self.remaining();
        let (ie, consumed) = decode_ie_with::<T>(&self.config, self.buffer, self.cursor, remaining)
            .map_err(|e| {
                debug!(ie = T::NAME, position = self.cursor, error = %e, "Aborting message parse");
                e
            })?;
        self.cursor += consumed;
        Ok(ie)
    }

    /// Decode the first IE of a shared octet without advancing.
    pub fn peek<T: InformationElement>(&self) -> CodecResult<T> {
        let (ie, _) = decode_ie::<T>(self.buffer, self.cursor, self.remaining())?;
        Ok(ie)
    }

    /// Take an LV-E value: 2-octet length followed by the contents.
    pub fn take_lv_e(&mut self) -> CodecResult<&'a [u8]> {
        let mut view = OctetView::window(self.buffer, self.cursor, self.remaining())?;
        let length = view.read_u16()? as usize;
        let contents = view.read_slice(length)?;
        self.cursor += view.position();
        Ok(contents)
    }

    /// Current cursor position within the message
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns true if every octet of the message has been consumed
    pub fn is_done(&self) -> bool {
        self.cursor == self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nas5g_ie::{CodecError, IePayloadContainerType};

    #[test]
    fn test_writer_header() {
        let writer = MessageWriter::new(UL_NAS_TRANSPORT, 0);
        assert_eq!(writer.position(), HEADER_LEN);
        assert_eq!(writer.finish(), vec![EPD_5GMM, PLAIN_NAS_MESSAGE, UL_NAS_TRANSPORT]);
    }

    #[test]
    fn test_reader_rejects_short_header() {
        let result = MessageReader::new(&[EPD_5GMM, PLAIN_NAS_MESSAGE]);
        assert!(matches!(result, Err(CodecError::BufferTooShort { .. })));
    }

    #[test]
    fn test_lv_e_roundtrip() {
        let mut writer = MessageWriter::new(UL_NAS_TRANSPORT, 5);
        writer.put(&IePayloadContainerType::new(0x1)).unwrap();
        writer.put_slice(&[0x00, 0x02, 0xAB, 0xCD]).unwrap();
        let message = writer.finish();

        let mut reader = MessageReader::new(&message).unwrap();
        let pct: IePayloadContainerType = reader.take().unwrap();
        assert_eq!(pct.type_code, 0x1);
        assert_eq!(reader.take_lv_e().unwrap(), &[0xAB, 0xCD]);
        assert!(reader.is_done());
    }

    #[test]
    fn test_lv_e_truncated() {
        let message = [EPD_5GMM, PLAIN_NAS_MESSAGE, UL_NAS_TRANSPORT, 0x00, 0x05, 0x01];
        let mut reader = MessageReader::new(&message).unwrap();
        assert!(reader.take_lv_e().is_err());
        assert_eq!(reader.position(), HEADER_LEN);
    }
}
