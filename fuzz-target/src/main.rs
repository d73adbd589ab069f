#[macro_use]
extern crate afl;
extern crate ppsdk;

use ppsdk::{FixedLinearBuffer, Parser, UnderlyingBuffer};

// Get request, auth=viewer, request id 7, no bindings
const EMPTY_GET: [u8; 12] = [b'$', b'&', 1, 0x40, 4, 0, 2, 0, b'G', 7, 0, 0];

// Enough sentinels to push any message started by the garbage past its
// largest possible size
const MAX_SENTINELS: usize = 2 * ppsdk::constants::SNMP_MAX_SIZE / EMPTY_GET.len() + 2;

/// Feeds one sentinel, returns whether it came out as a message
fn sentinel_found<T: UnderlyingBuffer>(parser: &mut Parser<T>) -> bool {
    let mut found = false;
    let mut it = parser.consume(&EMPTY_GET);
    while let Some(res) = it.next() {
        if let Ok(message) = res {
            found |= message.as_bytes() == EMPTY_GET;
        }
    }
    found
}

fn parse(bufsize: usize, chunksize: usize, data: &[u8]) {
    let mut buf = vec![0; bufsize];
    let buf = FixedLinearBuffer::new(&mut buf[..]);
    let mut parser = Parser::new(buf);
    for chunk in data.chunks(chunksize) {
        let mut it = parser.consume(chunk);
        while let Some(res) = it.next() {
            if let Ok(message) = res {
                // Whatever made it through must hold up on its own
                let bytes = message.as_bytes();
                assert_eq!(ppsdk::MessageRef::parse(bytes).map(|m| m.len()), Ok(bytes.len()));
                assert!(message.var_bindings().count() <= bytes.len() / 8);
            }
        }
    }

    // Garbage may leave a message waiting for more data, the sentinels
    // eventually flush it out
    assert!((0..MAX_SENTINELS).any(|_| sentinel_found(&mut parser)));
    assert!(sentinel_found(&mut parser));
    assert!(parser.is_buffer_empty());
}

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() > 2 {
            // From an empty Get up to the largest message
            let bufsize = 12 + data[0] as usize * 8;
            let chunksize = data[1] as usize;
            if chunksize != 0 {
                parse(bufsize, chunksize, &data[2..]);
            }
        }
    });
}
