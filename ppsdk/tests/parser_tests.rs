#![cfg(feature = "alloc")]

use ppsdk::{
    snmp::{AuthLevel, MessageBuilder, Oid, PduType},
    FixedLinearBuffer, Parser, ParserError, ParserIter,
};

macro_rules! my_vec {
        ($($x:expr),*) => {{
            let v: Vec<Result<u8, ParserError>> =  vec![$($x),*];
            v
        }}
    }

/// Request ids of the messages the iterator yields
fn extract_request_ids<T: ppsdk::UnderlyingBuffer>(
    mut it: ParserIter<T>,
) -> Vec<Result<u8, ParserError>> {
    let mut ret = vec![];
    while let Some(message) = it.next() {
        ret.push(message.map(|m| m.pdu_header().request_id));
    }
    ret
}

fn set_message(request_id: u8, value: i32) -> Vec<u8> {
    MessageBuilder::new(AuthLevel::Viewer, PduType::Set, request_id)
        .int32(3, 1, 5, value)
        .into_message_bytes()
        .unwrap()
}

#[test]
fn test_parse_empty_buffer() {
    let mut parser = Parser::default();
    assert!(parser.is_buffer_empty());
    assert_eq!(my_vec![], extract_request_ids(parser.consume(&[])));
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_set_byte_by_byte() {
    let full = set_message(1, 10);
    let mut parser = Parser::default();
    for b in full.iter().take(full.len() - 1) {
        assert_eq!(my_vec![], extract_request_ids(parser.consume(&[*b])));
        assert!(!parser.is_buffer_empty());
    }
    let last_byte = full[full.len() - 1];
    assert_eq!(
        my_vec![Ok(1)],
        extract_request_ids(parser.consume(&[last_byte]))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_set_in_one_go() {
    let mut parser = Parser::default();
    assert_eq!(
        my_vec![Ok(1)],
        extract_request_ids(parser.consume(&set_message(1, 10)))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_with_garbage_between() {
    let mut data = vec![0x00, 0x24, 0x01, 0x26, b'$'];
    data.extend_from_slice(&set_message(1, 10));
    data.extend_from_slice(b"$$garbage");
    data.extend_from_slice(&set_message(2, 20));
    data.extend_from_slice(&[0xff, 0xfe]);

    let mut parser = Parser::default();
    assert_eq!(
        my_vec![Ok(1), Ok(2)],
        extract_request_ids(parser.consume(&data))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_bad_checksum_then_valid() {
    let mut bad = set_message(1, 10);
    bad[3] ^= 0x01;
    let good = set_message(2, 20);

    let mut parser = Parser::default();
    let mut data = bad.clone();
    data.extend_from_slice(&good);
    let expect = bad[3];
    assert_eq!(
        my_vec![
            Err(ParserError::InvalidChecksum {
                expect,
                got: expect ^ 0x01
            }),
            Ok(2)
        ],
        extract_request_ids(parser.consume(&data))
    );
}

#[test]
fn test_parse_bad_pdu_type() {
    let mut data = set_message(1, 10);
    data[8] = b'X';
    data[3] = ppsdk::snmp::xor_checksum(&data[8..]);
    let mut parser = Parser::default();
    assert_eq!(
        my_vec![Err(ParserError::InvalidPduType(b'X'))],
        extract_request_ids(parser.consume(&data))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_split_across_chunks() {
    let mut data = set_message(1, 10);
    data.extend_from_slice(&set_message(2, 20));
    data.extend_from_slice(&set_message(3, 30));

    for split in 1..data.len() {
        let mut parser = Parser::default();
        let mut ids = extract_request_ids(parser.consume(&data[..split]));
        ids.extend(extract_request_ids(parser.consume(&data[split..])));
        assert_eq!(my_vec![Ok(1), Ok(2), Ok(3)], ids, "split at {}", split);
        assert!(parser.is_buffer_empty());
    }
}

#[test]
fn test_parse_values_through_iterator() {
    let mut parser = Parser::default();
    let data = MessageBuilder::new(AuthLevel::User, PduType::Response, 4)
        .int32(3, 1, 5, -7)
        .var_binding(Oid::new(2, 1, 1, 1).with_table(4, 0, 1), &[0xca, 0xfe])
        .into_message_bytes()
        .unwrap();

    let mut it = parser.consume(&data);
    let message = it.next().unwrap().unwrap();
    assert_eq!(message.header().auth_level(), Some(AuthLevel::User));
    let bindings: Vec<_> = message.var_bindings().collect();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].value_i32(), Some(-7));
    assert_eq!(bindings[1].oid.arg_table_entry, 4);
    assert_eq!(bindings[1].value, &[0xca, 0xfe]);
}

#[test]
fn test_fixed_buffer_out_of_memory_then_recovers() {
    let big = MessageBuilder::new(AuthLevel::User, PduType::Set, 1)
        .var_binding(Oid::new(64, 1, 1, 1), &[0x11; 64])
        .into_message_bytes()
        .unwrap();
    let small = set_message(2, 20);

    let mut buffer = [0; 32];
    let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
    {
        let it = parser.consume(&big[..16]);
        assert_eq!(
            my_vec![Err(ParserError::OutOfMemory {
                required_size: big.len()
            })],
            extract_request_ids(it)
        );
    }
    {
        let mut rest = big[16..].to_vec();
        rest.extend_from_slice(&small);
        assert_eq!(my_vec![Ok(2)], extract_request_ids(parser.consume(&rest)));
    }
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_fixed_buffer_holds_largest_message() {
    let mut builder = MessageBuilder::new(AuthLevel::User, PduType::Set, 9);
    for _ in 0..7 {
        builder = builder.var_binding(Oid::new(255, 1, 1, 1), &[0x5a; 255]);
    }
    builder = builder.var_binding(Oid::new(187, 1, 1, 2), &[0xa5; 187]);
    let data = builder.into_message_bytes().unwrap();
    assert_eq!(data.len(), 2048);

    let mut buffer = [0; 2048];
    let mut parser = Parser::new(FixedLinearBuffer::new(&mut buffer));
    for chunk in data.chunks(100) {
        let ids = extract_request_ids(parser.consume(chunk));
        if !ids.is_empty() {
            assert_eq!(my_vec![Ok(9)], ids);
        }
    }
    assert!(parser.is_buffer_empty());
}
