// crates/eol-core/src/normalize.rs
//
// Stream normalizer: single-pass byte copy that rewrites every recognized
// line terminator (CR, LF, CRLF, LFCR, NUL) as one copy of the compiled
// output sequence.
//
// A lone CR or LF is held pending so the opposite byte can complete a
// CRLF/LFCR pair; runs of the same byte flush one terminator each. NUL is
// never held: every NUL is a complete, non-combinable terminator.

use std::io::{Read, Write};

use crate::error::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    None,
    Cr,
    Lf,
}

/// Push-style normalizer over any byte sink.
///
/// Feed input bytes with [`push`](Self::push), then call
/// [`finish`](Self::finish) so a terminator ending at end-of-stream is not
/// lost.
pub struct Normalizer<W: Write> {
    out: W,
    eol: Vec<u8>,
    pending: Pending,
}

impl<W: Write> Normalizer<W> {
    pub fn new(out: W, eol: Vec<u8>) -> Self {
        Self {
            out,
            eol,
            pending: Pending::None,
        }
    }

    // One full copy of the output terminator, flushed eagerly so progress
    // stays visible even if the process dies mid-stream.
    fn write_eol(&mut self) -> std::io::Result<()> {
        self.out.write_all(&self.eol)?;
        self.out.flush()
    }

    fn flush_pending(&mut self) -> std::io::Result<()> {
        if self.pending != Pending::None {
            self.pending = Pending::None;
            self.write_eol()?;
        }
        Ok(())
    }

    pub fn push(&mut self, byte: u8) -> std::io::Result<()> {
        match byte {
            // NUL terminates on its own and never pairs with CR/LF.
            0x00 => {
                self.flush_pending()?;
                self.write_eol()
            }
            b'\r' => match self.pending {
                Pending::None => {
                    self.pending = Pending::Cr;
                    Ok(())
                }
                // CR CR: flush for the first, keep holding so a later LF
                // can still pair with the newest CR.
                Pending::Cr => self.write_eol(),
                // LF CR pair complete.
                Pending::Lf => {
                    self.pending = Pending::None;
                    self.write_eol()
                }
            },
            b'\n' => match self.pending {
                Pending::None => {
                    self.pending = Pending::Lf;
                    Ok(())
                }
                Pending::Lf => self.write_eol(),
                // CR LF pair complete.
                Pending::Cr => {
                    self.pending = Pending::None;
                    self.write_eol()
                }
            },
            other => {
                self.flush_pending()?;
                self.out.write_all(&[other])
            }
        }
    }

    /// Flushes a terminator still pending at end of input and returns the
    /// writer.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.flush_pending()?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Copies `input` to `output`, rewriting line terminators as `eol`.
///
/// Reads one byte at a time; a read failure (not end-of-stream) or any
/// write failure aborts the copy.
pub fn normalize<R: Read, W: Write>(input: R, output: W, eol: &[u8]) -> Result<()> {
    let mut norm = Normalizer::new(output, eol.to_vec());
    for byte in input.bytes() {
        norm.push(byte?)?;
    }
    norm.finish()?;
    Ok(())
}

/// In-memory convenience over [`normalize`].
pub fn normalize_bytes(input: &[u8], eol: &[u8]) -> Vec<u8> {
    let mut norm = Normalizer::new(Vec::with_capacity(input.len()), eol.to_vec());
    for &byte in input {
        // Vec<u8> writes cannot fail.
        norm.push(byte).expect("write to Vec");
    }
    norm.finish().expect("write to Vec")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_collapses_to_one() {
        assert_eq!(normalize_bytes(b"A\r\nB", b"\n"), b"A\nB");
    }

    #[test]
    fn lfcr_collapses_to_one() {
        assert_eq!(normalize_bytes(b"A\n\rB", b"\n"), b"A\nB");
    }

    #[test]
    fn trailing_cr_flushes_at_end() {
        assert_eq!(normalize_bytes(b"A\r", b"\n"), b"A\n");
    }
}
