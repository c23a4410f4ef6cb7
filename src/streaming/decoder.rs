//! Incremental UTF-8 decoding for chunked byte streams.

use std::char::REPLACEMENT_CHARACTER;

/// Decodes UTF-8 across chunk boundaries.
///
/// A multi-byte sequence split between two chunks is held back until the
/// rest arrives. Invalid sequences become U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    /// Create a decoder with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk`, prefixed by any incomplete sequence left over from the
    /// previous call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut rest: &[u8] = &bytes;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));

                    match e.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            self.pending = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Whether an incomplete sequence is waiting for more bytes.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"{\"a\":1}"), "{\"a\":1}");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_split_multibyte_sequence() {
        let bytes = "café".as_bytes();
        let (head, tail) = bytes.split_at(bytes.len() - 1);

        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(head), "caf");
        assert!(decoder.has_pending());
        assert_eq!(decoder.decode(tail), "é");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn test_four_byte_sequence_split_every_byte() {
        let bytes = "🎬".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        let mut out = String::new();
        for byte in bytes {
            out.push_str(&decoder.decode(std::slice::from_ref(byte)));
        }
        assert_eq!(out, "🎬");
    }

    #[test]
    fn test_invalid_bytes_replaced() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"a\xffb"), "a\u{FFFD}b");
    }
}
