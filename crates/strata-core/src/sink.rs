//! Diagnostic output sink.
//!
//! [`DiagSink`] pairs an out stream (pass confirmations) with an err
//! stream (failure tables and warnings). Production drivers hand in
//! stdout/stderr; tests hand in `Vec<u8>` buffers and assert on the
//! captured text.

use std::io::Write;

/// Out/err stream pair for human-readable diagnostic text.
///
/// Pass confirmations go to the out stream; failure headers, data rows,
/// and warnings go to the err stream, mirroring the stdout/stderr split
/// of the original diagnostics.
pub struct DiagSink<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> DiagSink<'a> {
    /// Pair an out stream with an err stream.
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// The stream for pass confirmations.
    pub fn out(&mut self) -> &mut (dyn Write + 'a) {
        self.out
    }

    /// The stream for failure tables and warnings.
    pub fn err(&mut self) -> &mut (dyn Write + 'a) {
        self.err
    }
}
