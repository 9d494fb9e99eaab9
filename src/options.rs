/// The control byte 0x80 (-128), which has no run length of its own.
pub const MARKER_BYTE: u8 = 0x80;

/// How the decoder treats the [`MARKER_BYTE`] control byte.
///
/// Apple PackBits and TIFF never emit 0x80 and readers skip it. The PDF and
/// PostScript `RunLengthDecode` filters use the same byte as an end-of-data
/// marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerPolicy {
    /// Consume the byte and produce no output.
    #[default]
    Skip,

    /// Stop decoding at the byte.
    EndOfData,
}

impl MarkerPolicy {
    /// Returns `true` if the marker byte terminates the stream.
    #[must_use]
    pub const fn ends_stream(self) -> bool {
        matches!(self, Self::EndOfData)
    }
}
