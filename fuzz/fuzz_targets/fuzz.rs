#![no_main]

use libfuzzer_sys::fuzz_target;
use packbits::{Decoder, MarkerPolicy, decompress, decompress_into};

/// Verifies that the decoder safely handles arbitrary, potentially malformed input.
///
/// # Invariant
/// The decoder must never panic, never produce more than `capacity` bytes, and
/// never report consuming more input than it was given.
fn verify_bounds(stream: &[u8], capacity: usize) {
    for marker in [MarkerPolicy::Skip, MarkerPolicy::EndOfData] {
        let mut output = Vec::new();
        let report = Decoder::new()
            .with_marker(marker)
            .decode_into(stream, &mut output, capacity);

        assert!(output.len() <= capacity, "Output overflowed capacity");
        assert_eq!(report.produced, output.len());
        assert!(report.consumed <= stream.len(), "Read past end of input");
        assert_eq!(report.is_complete(), output.len() == capacity);
    }
}

/// Verifies that the argument-checked entry point agrees with the appending one.
///
/// # Panics
/// Panics if the two entry points disagree, or if a valid length is rejected.
fn verify_entry_points_agree(stream: &[u8], capacity: usize) {
    let checked = match decompress(stream, stream.len(), capacity) {
        Ok(out) => out,
        Err(e) => panic!("Valid input length rejected: {e:?}"),
    };

    let mut appended = Vec::new();
    decompress_into(stream, &mut appended, capacity);
    assert_eq!(checked, appended);

    // A declared length one past the buffer is always rejected.
    assert!(decompress(stream, stream.len() + 1, capacity).is_err());
}

fuzz_target!(|data: &[u8]| {
    // The first two bytes choose the output capacity; the rest is the stream.
    if data.len() < 2 {
        return;
    }
    let capacity = u16::from_le_bytes([data[0], data[1]]) as usize;
    let stream = &data[2..];

    verify_bounds(stream, capacity);
    verify_entry_points_agree(stream, capacity);
});
