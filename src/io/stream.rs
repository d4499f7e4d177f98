//! Stream trait definition.

use std::fmt::Debug;
use std::io;

/// Trait for a shareable standard-stream endpoint.
///
/// Every method takes `&self` so one stream can be shared through
/// `Arc<dyn StdioStream>` between the process-wide slot, the proxy and the
/// caller that owns it. Implementors use interior mutability.
pub trait StdioStream: Send + Sync + Debug {
    /// Returns an identifier for this stream.
    ///
    /// This is used for error messages and logging.
    fn id(&self) -> String;

    /// Read bytes into `buf`, returning how many were read (0 at EOF).
    fn read(&self, buf: &mut [u8]) -> io::Result<usize>;

    /// Read one line, including the trailing `\n`, appending it to `buf`.
    ///
    /// The default reads one byte at a time so nothing is buffered past the
    /// newline.
    fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        let mut bytes = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    bytes.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        let line = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        buf.push_str(&line);
        Ok(line.len())
    }

    /// Write bytes from `buf`, returning how many were written.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;

    /// Write the whole of `buf`.
    fn write_all(&self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    ));
                }
                Ok(n) => buf = &buf[n..],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Flush buffered output.
    fn flush(&self) -> io::Result<()>;

    /// Close the stream. Later reads and writes fail.
    fn close(&self) -> io::Result<()>;

    /// Whether `close` has been called.
    fn is_closed(&self) -> bool;

    /// Whether the stream is attached to a terminal.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Whether the stream supports `read`.
    fn readable(&self) -> bool;

    /// Whether the stream supports `write`.
    fn writable(&self) -> bool;
}
