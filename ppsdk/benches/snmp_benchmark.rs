use criterion::{criterion_group, criterion_main, Criterion};
use ppsdk::{
    snmp::{self, AuthLevel, MessageBuilder, Oid, PduType},
    *,
};

/// A capture of `count` Set requests, each carrying a few int32 bindings
fn capture(count: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for i in 0..count {
        let bytes = MessageBuilder::new(AuthLevel::User, PduType::Set, i as u8)
            .int32(3, 1, 5, i as i32)
            .int32(3, 1, 6, -(i as i32))
            .var_binding(Oid::new(16, 2, 1, 1).with_table(1, 0, 2), &[0x42; 16])
            .into_message_bytes()
            .unwrap();
        data.extend_from_slice(&bytes);
    }
    data
}

fn parse_all<T: UnderlyingBuffer>(mut parser: Parser<T>, data: &[u8], chunk_size: usize) -> usize {
    let mut count = 0;
    for chunk in data.chunks(chunk_size) {
        let mut it = parser.consume(chunk);
        loop {
            match it.next() {
                Some(Ok(_message)) => {
                    count += 1;
                },
                Some(Err(e)) => {
                    panic!("No errors allowed! got: {:?}", e);
                },
                None => {
                    // We've eaten all the messages we have
                    break;
                },
            }
        }
    }
    count
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = capture(1000);
    for chunk in &[99, 100, 101, 256, 512, 1000, 1024] {
        c.bench_function(&format!("vec_parse_{}", chunk), |b| {
            b.iter(|| {
                let parser = Parser::default();
                assert_eq!(parse_all(parser, &data, *chunk), 1000);
            })
        });
    }
    for (buf_size, chunk) in &[(256, 100), (256, 256), (256, 512), (256, 1024)] {
        let mut underlying = vec![0; *buf_size];
        c.bench_function(&format!("array_parse_{}_{}", buf_size, chunk), |b| {
            b.iter(|| {
                let underlying = FixedLinearBuffer::new(&mut underlying);
                let parser = Parser::new(underlying);
                assert_eq!(parse_all(parser, &data, *chunk), 1000);
            })
        });
    }
    c.bench_function("encode_set_request", |b| {
        let mut buf = [0u8; 128];
        b.iter(|| {
            let mut len = snmp::init_message_header(AuthLevel::User, &mut buf).unwrap();
            len += snmp::add_pdu_header(PduType::Set, 1, &mut buf).unwrap();
            for command in 0..8 {
                len += snmp::add_var_binding(&Oid::int32(3, 1, command), &[0, 0, 0, 1], &mut buf)
                    .unwrap();
            }
            len
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
