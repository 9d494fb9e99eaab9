use crate::error::DecompressionError;
use crate::options::{MARKER_BYTE, MarkerPolicy};
use alloc::vec::Vec;
use tracing::{debug, trace};

type Result<T> = core::result::Result<T, DecompressionError>;

// --- Constants ---

/// Largest control byte that introduces a literal run of `control + 1` bytes.
const LITERAL_MAX: u8 = 0x7F;

/// A repeat control byte (0x81..=0xFF) encodes a run of `REPEAT_BASE - control` bytes.
const REPEAT_BASE: usize = 257;

/// Upper bound on decoded bytes per input byte.
/// The densest unit is a 2-byte repeat run expanding to 128 bytes.
const MAX_EXPANSION: usize = 64;

/// Why a decode call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The requested number of bytes was produced.
    Filled,

    /// The input ended on a control-unit boundary before the output was filled.
    InputExhausted,

    /// The input ended inside a literal run. The available bytes were copied.
    TruncatedLiteral,

    /// A repeat control byte was the last byte of the input.
    MissingRepeatByte,

    /// A 0x80 byte was read under [`MarkerPolicy::EndOfData`].
    EndMarker,
}

impl Termination {
    /// Returns `true` if the stream ended in the middle of a control unit.
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        matches!(self, Self::TruncatedLiteral | Self::MissingRepeatByte)
    }
}

/// Outcome of a single decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeReport {
    /// Output capacity the caller asked for.
    pub requested: usize,
    /// Input bytes read, control bytes included.
    pub consumed: usize,
    /// Bytes appended to the output.
    pub produced: usize,
    /// A run was cut short because it would have overflowed the capacity.
    pub clamped: bool,
    pub termination: Termination,
}

impl DecodeReport {
    /// Returns `true` if exactly [`requested`](Self::requested) bytes were produced.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.termination, Termination::Filled)
    }

    /// Converts the report into a strict result.
    ///
    /// A run clipped at capacity still counts as complete; only a short
    /// output is an error.
    pub fn check(&self) -> Result<()> {
        match self.termination {
            Termination::Filled => Ok(()),
            Termination::TruncatedLiteral => Err(DecompressionError::TruncatedLiteral),
            Termination::MissingRepeatByte => Err(DecompressionError::MissingRepeatByte),
            Termination::InputExhausted | Termination::EndMarker => {
                Err(DecompressionError::OutputTooShort {
                    expected: self.requested,
                    produced: self.produced,
                })
            }
        }
    }
}

/// A configured PackBits decoder.
///
/// The decoder holds no per-call state and can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    marker: MarkerPolicy,
}

impl Decoder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: MarkerPolicy::Skip,
        }
    }

    /// Sets how the 0x80 control byte is handled.
    #[must_use]
    pub const fn with_marker(mut self, marker: MarkerPolicy) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub const fn marker(&self) -> MarkerPolicy {
        self.marker
    }

    /// Decodes the first `input_len` bytes of `input` into at most `capacity` bytes.
    ///
    /// Malformed or truncated streams are not an error: the returned vector is
    /// simply shorter than `capacity`. The only error is a declared input
    /// length larger than the buffer, which is rejected before decoding.
    pub fn decode(&self, input: &[u8], input_len: usize, capacity: usize) -> Result<Vec<u8>> {
        if input_len > input.len() {
            trace!(
                declared = input_len,
                actual = input.len(),
                "rejecting PackBits input length"
            );
            return Err(DecompressionError::InputLengthOutOfBounds {
                declared: input_len,
                actual: input.len(),
            });
        }

        let mut output = Vec::new();
        self.decode_into(&input[..input_len], &mut output, capacity);
        Ok(output)
    }

    /// Decodes `input` and fails unless exactly `capacity` bytes were produced.
    pub fn decode_exact(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_into(input, &mut output, capacity).check()?;
        Ok(output)
    }

    /// Decodes `input`, appending at most `capacity` bytes to `output`.
    ///
    /// This is a single forward pass. Every read is bounded by `input.len()`
    /// and every write by `capacity`; a run that crosses either bound is
    /// clipped and decoding stops there.
    pub fn decode_into(&self, input: &[u8], output: &mut Vec<u8>, capacity: usize) -> DecodeReport {
        // The declared capacity may be hostile; never reserve more than the input can expand to.
        output.reserve(capacity.min(input.len().saturating_mul(MAX_EXPANSION)));

        let start_out_len = output.len();
        let end = input.len();
        let mut in_pos = 0;
        let mut clamped = false;

        let termination = loop {
            let remaining = capacity - (output.len() - start_out_len);
            if remaining == 0 {
                break Termination::Filled;
            }
            if in_pos >= end {
                break Termination::InputExhausted;
            }

            let control = input[in_pos];
            in_pos += 1;

            match control {
                0..=LITERAL_MAX => {
                    let run = control as usize + 1;
                    let take = run.min(end - in_pos).min(remaining);
                    output.extend_from_slice(&input[in_pos..in_pos + take]);
                    in_pos += take;

                    if take < run {
                        if take == remaining {
                            // Output is full; the next iteration reports `Filled`.
                            clamped = true;
                        } else {
                            break Termination::TruncatedLiteral;
                        }
                    }
                }
                MARKER_BYTE => {
                    if self.marker.ends_stream() {
                        break Termination::EndMarker;
                    }
                }
                _ => {
                    let Some(&value) = input.get(in_pos) else {
                        break Termination::MissingRepeatByte;
                    };
                    in_pos += 1;

                    let run = REPEAT_BASE - control as usize;
                    let take = run.min(remaining);
                    output.resize(output.len() + take, value);
                    clamped |= take < run;
                }
            }
        };

        let report = DecodeReport {
            requested: capacity,
            consumed: in_pos,
            produced: output.len() - start_out_len,
            clamped,
            termination,
        };

        if clamped || !report.is_complete() {
            debug!(
                consumed = report.consumed,
                produced = report.produced,
                capacity,
                clamped,
                termination = ?termination,
                "PackBits stream does not match requested size"
            );
        }

        report
    }
}

/// Decodes the first `input_len` bytes of `input` into at most `capacity` bytes.
///
/// This is the argument-checked entry point for callers that hand over a raw
/// buffer with separately declared lengths. See [`Decoder::decode`].
pub fn decompress(input: &[u8], input_len: usize, capacity: usize) -> Result<Vec<u8>> {
    Decoder::new().decode(input, input_len, capacity)
}

/// Appends at most `capacity` decoded bytes to `output`. See [`Decoder::decode_into`].
pub fn decompress_into(input: &[u8], output: &mut Vec<u8>, capacity: usize) -> DecodeReport {
    Decoder::new().decode_into(input, output, capacity)
}

/// Decodes `input` and fails unless exactly `capacity` bytes were produced.
pub fn decompress_exact(input: &[u8], capacity: usize) -> Result<Vec<u8>> {
    Decoder::new().decode_exact(input, capacity)
}
