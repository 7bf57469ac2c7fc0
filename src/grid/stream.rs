//! Byte stream with single-byte pushback
//!
//! The tokenizer reads greedily and hands back the byte that ended a token,
//! so the accumulator still sees the newline that terminates a row.

use std::io::{self, BufRead, ErrorKind};

/// Byte-at-a-time reader over any `BufRead` with room for one unread byte
#[derive(Debug)]
pub struct CharStream<R> {
    inner: R,
    pushed: Option<u8>,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed: None,
        }
    }

    /// Next byte, or `None` at end of input
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pushed.take() {
            return Ok(Some(b));
        }

        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let Some(&b) = buf.first() else {
                return Ok(None);
            };
            self.inner.consume(1);
            return Ok(Some(b));
        }
    }

    /// Push a byte back so the next `next_byte` returns it
    ///
    /// Only one byte of pushback is available.
    pub fn unread(&mut self, b: u8) {
        debug_assert!(self.pushed.is_none(), "pushback slot already occupied");
        self.pushed = Some(b);
    }

    /// Look at the next byte without consuming it
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        let next = self.next_byte()?;
        if let Some(b) = next {
            self.unread(b);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_bytes_in_order() {
        let mut stream = CharStream::new("ab".as_bytes());
        assert_eq!(stream.next_byte().unwrap(), Some(b'a'));
        assert_eq!(stream.next_byte().unwrap(), Some(b'b'));
        assert_eq!(stream.next_byte().unwrap(), None);
    }

    #[test]
    fn test_unread_returns_same_byte() {
        let mut stream = CharStream::new("xy".as_bytes());
        let b = stream.next_byte().unwrap().unwrap();
        stream.unread(b);
        assert_eq!(stream.next_byte().unwrap(), Some(b'x'));
        assert_eq!(stream.next_byte().unwrap(), Some(b'y'));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut stream = CharStream::new("7".as_bytes());
        assert_eq!(stream.peek().unwrap(), Some(b'7'));
        assert_eq!(stream.peek().unwrap(), Some(b'7'));
        assert_eq!(stream.next_byte().unwrap(), Some(b'7'));
        assert_eq!(stream.peek().unwrap(), None);
    }
}
