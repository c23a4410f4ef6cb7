//! Brace-depth scan over the accumulated stream buffer.

use std::ops::Range;

/// Spans found by one pass over the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPass {
    /// Byte ranges of balanced top-level `{...}` spans, in order.
    pub spans: Vec<Range<usize>>,
    /// Index just past the closing brace of the last span, or 0 if none closed.
    pub consumed: usize,
}

/// Scan `buffer` from the start for balanced top-level `{...}` spans.
///
/// Depth starts at zero on every call. Only `{` and `}` are examined: quotes
/// and escapes are ignored, and a `}` at depth zero is skipped. Both brace
/// bytes are ASCII, so every range lies on char boundaries.
pub fn scan_pass(buffer: &str) -> ScanPass {
    let mut brace_count: usize = 0;
    let mut json_start: Option<usize> = None;
    let mut pass = ScanPass::default();

    for (i, byte) in buffer.bytes().enumerate() {
        match byte {
            b'{' => {
                if brace_count == 0 {
                    json_start = Some(i);
                }
                brace_count += 1;
            }
            b'}' => {
                if brace_count > 0 {
                    brace_count -= 1;
                }
                if brace_count == 0 {
                    if let Some(start) = json_start.take() {
                        pass.spans.push(start..i + 1);
                        pass.consumed = i + 1;
                    }
                }
            }
            _ => {}
        }
    }

    pass
}
