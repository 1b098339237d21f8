//! I/O utilities shared across CLI commands.
//!
//! Interactive commands read user input through [`read_stdin_line`] and
//! render through a [`SharedWriter`], a cloneable handle over one output
//! stream. The play command needs that: the table observer, the human seat's
//! prompt, and the session loop all write to the same terminal, and each
//! holds its own handle.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Used by interactive commands. Trims whitespace and returns `None` on EOF
/// or read errors.
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Cloneable handle over a single output stream. Every clone writes through
/// the same lock, so interleaved writers produce whole lines.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Box<dyn Write + Send>>>);

impl SharedWriter {
    pub fn new(inner: Box<dyn Write + Send>) -> Self {
        Self(Arc::new(Mutex::new(inner)))
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut w) => w.write(buf),
            Err(_) => Err(io::Error::other("output stream poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut w) => w.flush(),
            Err(_) => Err(io::Error::other("output stream poisoned")),
        }
    }
}

/// In-memory [`SharedWriter`] counterpart for capturing output in tests.
#[derive(Clone, Default)]
pub struct MemWriter(Arc<Mutex<Vec<u8>>>);

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.0
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut b) => {
                b.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(io::Error::other("buffer poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_trims_and_detects_eof() {
        let mut input = Cursor::new(b"  raise 50  \n".to_vec());
        assert_eq!(read_stdin_line(&mut input), Some("raise 50".to_string()));
        assert_eq!(read_stdin_line(&mut input), None);
    }

    #[test]
    fn clones_share_one_buffer() {
        let mut a = MemWriter::new();
        let mut b = a.clone();
        writeln!(a, "first").unwrap();
        writeln!(b, "second").unwrap();
        assert_eq!(a.contents(), "first\nsecond\n");
    }
}
