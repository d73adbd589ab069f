#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use log::{debug, trace};

use crate::{
    constants::{SNMP_HEADER_LEN, SNMP_MAX_SIZE, SNMP_PREAMBLE_1, SNMP_PREAMBLE_2},
    error::ParserError,
    snmp::{MessageHeader, MessageRef},
};

/// This trait represents an underlying buffer used for the Parser. We provide
/// implementations for `Vec<u8>` and for `FixedLinearBuffer`, if you want to
/// use your own struct as an underlying buffer you can implement this trait.
///
/// Look at the `flb_*` unit tests for ideas of unit tests you can run against
/// your own implementations.
pub trait UnderlyingBuffer:
    core::ops::Index<core::ops::Range<usize>, Output = [u8]> + core::ops::Index<usize, Output = u8>
{
    /// Removes all elements from the buffer.
    fn clear(&mut self);

    /// Returns the number of elements currently stored in the buffer.
    fn len(&self) -> usize;

    /// Returns the maximum number of bytes the buffer can hold. `Vec` reports
    /// `usize::MAX` and panics on a failed allocation instead.
    fn max_capacity(&self) -> usize;

    /// Appends as much of `other` as fits, returning the number of bytes that
    /// were not copied.
    fn extend_from_slice(&mut self, other: &[u8]) -> usize;

    /// Removes the first `count` elements from the buffer. Cannot fail.
    fn drain(&mut self, count: usize);

    /// Locates the given u8 value within the buffer, returning the index (if it is found).
    fn find(&self, value: u8) -> Option<usize> {
        (0..self.len()).find(|&i| self[i] == value)
    }

    /// Returns whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether no more bytes can be appended.
    fn is_full(&self) -> bool {
        self.len() >= self.max_capacity()
    }
}

#[cfg(feature = "alloc")]
impl UnderlyingBuffer for Vec<u8> {
    fn clear(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn max_capacity(&self) -> usize {
        usize::MAX
    }

    fn extend_from_slice(&mut self, other: &[u8]) -> usize {
        self.extend_from_slice(other);
        0
    }

    fn drain(&mut self, count: usize) {
        self.drain(0..count.min(self.len()));
    }

    fn find(&self, value: u8) -> Option<usize> {
        self.iter().position(|elem| *elem == value)
    }
}

/// Buffer over caller supplied storage, for targets without an allocator
pub struct FixedLinearBuffer<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> FixedLinearBuffer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buffer: buf,
            len: 0,
        }
    }
}

impl core::ops::Index<core::ops::Range<usize>> for FixedLinearBuffer<'_> {
    type Output = [u8];

    fn index(&self, index: core::ops::Range<usize>) -> &Self::Output {
        if index.end > self.len {
            panic!("Index {} is outside of our length {}", index.end, self.len);
        }
        &self.buffer[index]
    }
}

impl core::ops::Index<usize> for FixedLinearBuffer<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.buffer[..self.len][index]
    }
}

impl UnderlyingBuffer for FixedLinearBuffer<'_> {
    fn clear(&mut self) {
        self.len = 0;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn max_capacity(&self) -> usize {
        self.buffer.len()
    }

    fn extend_from_slice(&mut self, other: &[u8]) -> usize {
        let to_copy = core::cmp::min(other.len(), self.buffer.len() - self.len);
        self.buffer[self.len..self.len + to_copy].copy_from_slice(&other[..to_copy]);
        self.len += to_copy;
        other.len() - to_copy
    }

    fn drain(&mut self, count: usize) {
        if count >= self.len {
            self.len = 0;
            return;
        }
        self.buffer.copy_within(count..self.len, 0);
        self.len -= count;
    }

    fn find(&self, value: u8) -> Option<usize> {
        self.buffer[..self.len].iter().position(|b| *b == value)
    }
}

/// Streaming parser for SNMP messages with buffer. The default constructor
/// will build a parser containing a Vec, but you can pass your own underlying
/// buffer by passing it to Parser::new().
///
/// A fixed buffer must hold at least one whole message to make progress, an
/// empty `Get` is 12 bytes and no message exceeds 2048 bytes.
pub struct Parser<T>
where
    T: UnderlyingBuffer,
{
    buf: T,
}

#[cfg(feature = "alloc")]
impl core::default::Default for Parser<Vec<u8>> {
    fn default() -> Self {
        Self { buf: Vec::new() }
    }
}

impl<T: UnderlyingBuffer> Parser<T> {
    pub fn new(underlying: T) -> Self {
        Self { buf: underlying }
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    /// Feeds `new_data` to the parser, returning an iterator over the
    /// messages that are complete so far. Bytes the iterator does not get to
    /// are kept for the next call.
    pub fn consume<'a>(&'a mut self, new_data: &'a [u8]) -> ParserIter<'a, T> {
        ParserIter {
            buf: &mut self.buf,
            new_data,
            pending: 0,
        }
    }
}

/// Iterator over data stored in `Parser` buffer
pub struct ParserIter<'a, T: UnderlyingBuffer> {
    buf: &'a mut T,
    new_data: &'a [u8],
    /// Length of the message handed out by the last call to `next`
    pending: usize,
}

impl<T: UnderlyingBuffer> ParserIter<'_, T> {
    /// Moves as much new data into the buffer as it can hold
    fn refill(&mut self) {
        if self.new_data.is_empty() || self.buf.is_full() {
            return;
        }
        let left = self.buf.extend_from_slice(self.new_data);
        self.new_data = &self.new_data[self.new_data.len() - left..];
    }

    /// Drops the preamble at the start of the buffer so the search resumes
    /// right after it
    fn skip_preamble(&mut self) {
        self.buf.drain(1);
    }

    #[allow(clippy::should_implement_trait)]
    /// Analog of `core::iter::Iterator::next`, the returned message borrows
    /// the parser buffer until the next call.
    pub fn next(&mut self) -> Option<Result<MessageRef<'_>, ParserError>> {
        self.buf.drain(core::mem::take(&mut self.pending));
        loop {
            self.refill();

            let pos = match self.buf.find(SNMP_PREAMBLE_1) {
                Some(x) => x,
                None => {
                    self.buf.clear();
                    if self.new_data.is_empty() {
                        return None;
                    }
                    continue;
                },
            };
            if pos > 0 {
                trace!("parser: skipping {} bytes before preamble", pos);
                self.buf.drain(pos);
                self.refill();
            }

            if self.buf.len() < SNMP_HEADER_LEN && self.buf.is_full() {
                self.skip_preamble();
                return Some(Err(ParserError::OutOfMemory {
                    required_size: SNMP_HEADER_LEN,
                }));
            }
            if self.buf.len() < 2 {
                return None;
            }
            if self.buf[1] != SNMP_PREAMBLE_2 {
                self.skip_preamble();
                continue;
            }
            if self.buf.len() < SNMP_HEADER_LEN {
                return None;
            }

            let header = MessageHeader::read(&self.buf[0..SNMP_HEADER_LEN]);
            let total = header.message_len();
            if total > SNMP_MAX_SIZE {
                debug!("parser: declared size {} exceeds the maximum", total);
                self.skip_preamble();
                return Some(Err(ParserError::InvalidLength {
                    length: usize::from(header.length),
                }));
            }
            if total > self.buf.max_capacity() {
                debug!("parser: message of {} bytes does not fit the buffer", total);
                self.skip_preamble();
                return Some(Err(ParserError::OutOfMemory {
                    required_size: total,
                }));
            }
            if self.buf.len() < total {
                // refill() left nothing behind, wait for the next chunk
                return None;
            }

            let checked = MessageRef::parse(&self.buf[0..total]).map(|_| ());
            if let Err(e) = checked {
                debug!("parser: dropping invalid message: {}", e);
                self.skip_preamble();
                return Some(Err(e));
            }
            self.pending = total;
            return Some(MessageRef::parse(&self.buf[0..total]));
        }
    }
}

impl<T: UnderlyingBuffer> Drop for ParserIter<'_, T> {
    fn drop(&mut self) {
        self.buf.drain(self.pending);
        let lost = self.buf.extend_from_slice(self.new_data);
        if lost > 0 {
            debug!("parser: buffer full, {} bytes lost", lost);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Set request, request id 1, one binding {4,3,1,5} holding 10
    const SET_MESSAGE: [u8; 24] = [
        b'$', b'&', 1, 0x5b, 16, 0, 2, 0, b'S', 1, 0, 0, 4, 3, 1, 5, 0, 0, 0, 0, 0, 0, 0, 0x0a,
    ];
    const EMPTY_GET: [u8; 12] = [b'$', b'&', 1, 0x40, 4, 0, 2, 0, b'G', 7, 0, 0];

    #[test]
    fn test_set_message_is_valid() {
        assert!(MessageRef::parse(&SET_MESSAGE).is_ok());
        assert!(MessageRef::parse(&EMPTY_GET).is_ok());
    }

    #[test]
    fn flb_clear() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(buf.len(), 7);
        buf.clear();
        assert_eq!(buf.len(), 0);
    }

    #[test]
    #[should_panic]
    fn flb_index_outside_range() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let _ = buf[5..10];
    }

    #[test]
    #[should_panic]
    fn flb_single_index_outside_length() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        buf.extend_from_slice(&[1, 2, 3]);
        let _ = buf[3];
    }

    #[test]
    fn flb_extend_outside_range() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        assert_eq!(buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]), 0);
        assert_eq!(buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]), 0);
        assert_eq!(buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]), 5);
        assert_eq!(buf.len(), 16);
        assert!(buf.is_full());
    }

    #[test]
    fn flb_drain() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);

        buf.drain(3);
        assert_eq!(buf.len(), 4);
        assert_eq!(&buf[0..buf.len()], &[4, 5, 6, 7]);

        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(buf.len(), 11);
        assert_eq!(&buf[0..buf.len()], &[4, 5, 6, 7, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn flb_drain_all() {
        let mut buf = [0; 16];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        buf.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);

        buf.drain(9);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn flb_find() {
        let mut buf = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut buf = FixedLinearBuffer::new(&mut buf);
        assert_eq!(buf.find(5), None);
        buf.extend_from_slice(&[1, 2, 3, 4]);
        assert_eq!(buf.find(5), None);
        buf.extend_from_slice(&[5, 6, 7, 8]);
        assert_eq!(buf.find(5), Some(4));
    }

    #[test]
    fn parser_single_message() {
        let mut buffer = [0; 64];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
        {
            let mut it = parser.consume(&SET_MESSAGE);
            let message = it.next().unwrap().unwrap();
            assert_eq!(message.as_bytes(), &SET_MESSAGE);
            assert_eq!(message.var_bindings().next().unwrap().value, &[0, 0, 0, 0x0a]);
            assert!(it.next().is_none());
        }
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_handle_garbage_first_byte() {
        let mut buffer = [0; 24];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));

        let mut bytes = [0u8; 26];
        bytes[0] = b'$';
        bytes[1] = 0x55;
        bytes[2..].copy_from_slice(&SET_MESSAGE);

        let mut it = parser.consume(&bytes);
        assert!(matches!(it.next(), Some(Ok(m)) if m.len() == 24));
        assert!(it.next().is_none());
    }

    #[test]
    fn parser_processes_messages_through_small_buffer() {
        let mut bytes = [0u8; 24 * 5];
        for chunk in bytes.chunks_mut(24) {
            chunk.copy_from_slice(&SET_MESSAGE);
        }

        let mut buffer = [0; 24];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
        let mut it = parser.consume(&bytes);
        for _ in 0..5 {
            assert!(matches!(it.next(), Some(Ok(_))));
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn parser_waits_for_split_message() {
        let mut buffer = [0; 64];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
        {
            let mut it = parser.consume(&SET_MESSAGE[..5]);
            assert!(it.next().is_none());
        }
        {
            let mut it = parser.consume(&SET_MESSAGE[5..17]);
            assert!(it.next().is_none());
        }
        assert_eq!(parser.buffer_len(), 17);
        let mut it = parser.consume(&SET_MESSAGE[17..]);
        assert!(matches!(it.next(), Some(Ok(m)) if m.pdu_header().request_id == 1));
        assert!(it.next().is_none());
    }

    #[test]
    fn parser_oom_skips_message() {
        let mut buffer = [0; 16];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));

        let mut bytes = [0u8; 36];
        bytes[..24].copy_from_slice(&SET_MESSAGE);
        bytes[24..].copy_from_slice(&EMPTY_GET);

        let mut it = parser.consume(&bytes);
        assert_eq!(
            it.next().map(|r| r.map(|m| m.len())),
            Some(Err(ParserError::OutOfMemory { required_size: 24 }))
        );
        assert!(matches!(it.next(), Some(Ok(m)) if m.len() == 12));
        assert!(it.next().is_none());
    }

    #[test]
    fn parser_bad_checksum_then_recovers() {
        let mut bad = SET_MESSAGE;
        bad[3] ^= 0xff;

        let mut bytes = [0u8; 36];
        bytes[..24].copy_from_slice(&bad);
        bytes[24..].copy_from_slice(&EMPTY_GET);

        let mut buffer = [0; 64];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
        let mut it = parser.consume(&bytes);
        assert_eq!(
            it.next().map(|r| r.map(|m| m.len())),
            Some(Err(ParserError::InvalidChecksum {
                expect: 0x5b ^ 0xff,
                got: 0x5b
            }))
        );
        assert!(matches!(it.next(), Some(Ok(m)) if m.len() == 12));
        assert!(it.next().is_none());
    }

    #[test]
    fn parser_rejects_oversized_length() {
        let bytes = [b'$', b'&', 1, 0, 0xff, 0xff, 0, 0];
        let mut buffer = [0; 64];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
        let mut it = parser.consume(&bytes);
        assert_eq!(
            it.next().map(|r| r.map(|m| m.len())),
            Some(Err(ParserError::InvalidLength { length: 0xffff }))
        );
        assert!(it.next().is_none());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn parser_vec_underlying_byte_by_byte() {
        let mut parser = Parser::default();
        let mut seen = 0;
        for b in SET_MESSAGE.iter().chain(EMPTY_GET.iter()) {
            let mut it = parser.consume(core::slice::from_ref(b));
            while let Some(res) = it.next() {
                assert!(res.is_ok());
                seen += 1;
            }
        }
        assert_eq!(seen, 2);
        assert!(parser.is_buffer_empty());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn parser_keeps_unread_data() {
        let mut bytes = alloc::vec::Vec::new();
        bytes.extend_from_slice(&EMPTY_GET);
        bytes.extend_from_slice(&SET_MESSAGE);

        let mut parser = Parser::default();
        {
            let mut it = parser.consume(&bytes);
            assert!(matches!(it.next(), Some(Ok(m)) if m.len() == 12));
        }
        assert_eq!(parser.buffer_len(), 24);
        let mut it = parser.consume(&[]);
        assert!(matches!(it.next(), Some(Ok(m)) if m.len() == 24));
        assert!(it.next().is_none());
    }
}
