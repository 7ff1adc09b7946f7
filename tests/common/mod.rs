//! Test peers
//!
//! Single-connection TCP servers on ephemeral ports.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use kvfetch::Endpoint;

/// Accepts one connection, reads `request_len` bytes, writes each chunk in
/// turn, then closes. The join handle yields the request bytes it received.
pub fn serve_once(request_len: usize, chunks: Vec<Vec<u8>>) -> (Endpoint, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.set_nodelay(true).unwrap();

        let mut request = vec![0u8; request_len];
        stream.read_exact(&mut request).unwrap();

        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                // Give the client a chance to observe separate reads
                thread::sleep(Duration::from_millis(20));
            }
            stream.write_all(chunk).unwrap();
            stream.flush().unwrap();
        }

        request
    });

    (Endpoint::from(addr), handle)
}

/// Accepts one connection and keeps it open, silent, until the returned
/// sender is signalled or dropped
pub fn serve_silent() -> (Endpoint, mpsc::Sender<()>, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        let (_stream, _) = listener.accept().unwrap();
        let _ = release_rx.recv();
    });

    (Endpoint::from(addr), release_tx, handle)
}

/// Accepts one connection and reads nothing until the returned sender is
/// signalled, then reads to EOF. The join handle yields the bytes drained.
pub fn serve_unread() -> (Endpoint, mpsc::Sender<()>, JoinHandle<usize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let _ = release_rx.recv();

        let mut drained = Vec::new();
        stream.read_to_end(&mut drained).unwrap();
        drained.len()
    });

    (Endpoint::from(addr), release_tx, handle)
}

/// An endpoint nothing is listening on
pub fn closed_endpoint() -> Endpoint {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    Endpoint::from(addr)
}
