//! Binary codec for the inbound sample stream.
//!
//! The device pushes each acquisition batch as one binary frame: a packed
//! sequence of little-endian `u16` raw ADC samples, no header. A single text
//! message ([`HELLO`]) opens the stream when the connection establishes.

use crate::error::ScopeError;

/// Opening control message sent once per established connection.
pub const HELLO: &str = "hello";

/// Decode one binary sample frame into raw samples.
///
/// Frames whose byte length is not a multiple of 2 are rejected; the caller
/// drops them and keeps the connection open.
///
/// ```
/// # use adcscope::wire::decode_sample_frame;
/// assert_eq!(decode_sample_frame(&[0x34, 0x12, 0xff, 0x0f]).unwrap(), vec![0x1234, 0x0fff]);
/// assert!(decode_sample_frame(&[0x34, 0x12, 0xff]).is_err());
/// ```
pub fn decode_sample_frame(bytes: &[u8]) -> Result<Vec<u16>, ScopeError> {
    if bytes.len() % 2 != 0 {
        return Err(ScopeError::TruncatedFrame { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Encode raw samples into the same frame layout the device sends.
pub fn encode_sample_frame(samples: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_little_endian_pairs() {
        let frame = [0x00, 0x00, 0x01, 0x00, 0x00, 0x10];
        assert_eq!(decode_sample_frame(&frame).unwrap(), vec![0, 1, 4096]);
    }

    #[test]
    fn decode_rejects_odd_length_frames() {
        let err = decode_sample_frame(&[1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("3 bytes"));
    }

    #[test]
    fn empty_frame_is_an_empty_batch() {
        assert_eq!(decode_sample_frame(&[]).unwrap(), Vec::<u16>::new());
    }

    #[test]
    fn encode_matches_the_device_layout() {
        let samples = [0u16, 1, 513, 4095];
        let frame = encode_sample_frame(&samples);
        assert_eq!(frame.len(), 8);
        assert_eq!(decode_sample_frame(&frame).unwrap(), samples);
    }
}
