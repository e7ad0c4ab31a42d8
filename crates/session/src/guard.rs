//! Output wrapper that always writes the closing line.

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Line written when the guard is dropped
pub const SESSION_ENDED: &str = "Session ended";

/// Owns the terminal output and writes [`SESSION_ENDED`] exactly once when
/// dropped, whichever way the session finished.
pub struct ClosingGuard<W: Write> {
    out: W,
}

impl<W: Write> ClosingGuard<W> {
    /// Take ownership of the terminal output
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Deref for ClosingGuard<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DerefMut for ClosingGuard<W> {
    fn deref_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for ClosingGuard<W> {
    fn drop(&mut self) {
        // Nowhere left to report a failed write
        let _ = writeln!(self.out, "{}", SESSION_ENDED);
        let _ = self.out.flush();
    }
}

/// Write a full line and flush it.
pub(crate) fn say<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_closing_line_on_drop() {
        let mut buf = Vec::new();
        {
            let mut guard = ClosingGuard::new(&mut buf);
            say(&mut *guard, "Thank you for using the ATM").unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Thank you for using the ATM\nSession ended\n"
        );
    }

    #[test]
    fn test_writes_closing_line_on_early_return() {
        fn fails(out: &mut Vec<u8>) -> io::Result<()> {
            let _guard = ClosingGuard::new(out);
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"))
        }

        let mut buf = Vec::new();
        assert!(fails(&mut buf).is_err());
        assert_eq!(String::from_utf8(buf).unwrap(), "Session ended\n");
    }
}
