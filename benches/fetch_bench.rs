//! Benchmarks for kvfetch exchanges and decoding

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use criterion::{criterion_group, criterion_main, Criterion};
use kvfetch::{Decoder, Endpoint, JsonDecoder, LineCommandClient, Response};

/// Serves every connection: read up to NUL, reply, close
fn spawn_server(reply: Vec<u8>) -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut request = Vec::new();
            let mut reader = BufReader::new(&stream);
            if reader.read_until(0, &mut request).is_err() {
                continue;
            }
            let _ = stream.write_all(&reply);
        }
    });

    Endpoint::from(addr)
}

fn fetch_benchmarks(c: &mut Criterion) {
    let small = br#"{"hello": "world"}"#.to_vec();
    let large = serde_json::to_vec(
        &(0..10_000)
            .map(|i| (format!("key{}", i), i))
            .collect::<std::collections::BTreeMap<_, _>>(),
    )
    .unwrap();

    let client = LineCommandClient::new();
    let command = b"GET hello \"world\"\0";

    let endpoint = spawn_server(small.clone());
    c.bench_function("execute_small_reply", |b| {
        b.iter(|| client.execute(&endpoint, command).unwrap())
    });

    let endpoint = spawn_server(large.clone());
    c.bench_function("execute_large_reply", |b| {
        b.iter(|| client.execute(&endpoint, command).unwrap())
    });

    let decoder = JsonDecoder::<serde_json::Value>::new();
    let response = Response::from(large);
    c.bench_function("decode_large_reply", |b| {
        b.iter(|| decoder.decode(&response).unwrap())
    });
}

criterion_group!(benches, fetch_benchmarks);
criterion_main!(benches);
