//! IE trace and failure events
//!
//! Every codec entry point reports through here, so events carry a
//! `nas5g_ie` target and a filter such as `nas5g_ie=trace` selects them.

use nas5g_common::logging::{Direction, HexDump};
use nas5g_common::{OctetView, OctetViewMut};

use crate::codec::{CodecError, CodecResult, InformationElement};

/// Trace one IE and the octets it occupies.
pub(crate) fn ie_traced(direction: Direction, ie: &str, octets: &[u8]) {
    tracing::trace!(
        %direction,
        ie,
        len = octets.len(),
        octets = %HexDump(octets),
        "NAS IE"
    );
}

/// Report a failure for one IE and hand the error back.
pub(crate) fn ie_failed(
    direction: Direction,
    ie: &str,
    offset: usize,
    error: CodecError,
) -> CodecError {
    tracing::debug!(%direction, ie, offset, %error, "NAS IE {direction} failed");
    error
}

/// `T::decode` with its trace or failure event.
pub(crate) fn decode_traced<T: InformationElement>(view: &mut OctetView<'_>) -> CodecResult<T> {
    let start = view.clone();
    let offset = view.position();
    let ie = T::decode(view).map_err(|e| ie_failed(Direction::Decode, T::NAME, offset, e))?;
    let consumed = view.position() - offset;
    ie_traced(Direction::Decode, T::NAME, &start.remaining_data()[..consumed]);
    Ok(ie)
}

/// `ie.encode` with its trace or failure event.
pub(crate) fn encode_traced<T: InformationElement>(
    ie: &T,
    view: &mut OctetViewMut<'_>,
) -> CodecResult<()> {
    let offset = view.position();
    ie.encode(view)
        .map_err(|e| ie_failed(Direction::Encode, T::NAME, offset, e))?;
    ie_traced(Direction::Encode, T::NAME, &view.written()[offset..]);
    Ok(())
}
