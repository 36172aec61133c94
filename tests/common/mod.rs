//! Minimal HTTP/1.1 server answering canned responses, one per connection.
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

pub struct Stub {
    pub url: String,
    requests: Receiver<String>,
    handle: JoinHandle<()>,
}

impl Stub {
    /// Wait for the server to answer every response, and return the received requests (lowercased).
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap();
        self.requests.into_iter().collect()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        206 => "Partial Content",
        404 => "Not Found",
        416 => "Range Not Satisfiable",
        _ => "Unknown",
    }
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).to_lowercase()
}

/// Serve `responses` in order, one connection each.
pub fn serve(responses: Vec<(u16, Vec<u8>)>) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let (tx, requests) = mpsc::channel();

    let handle = thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            tx.send(read_head(&mut stream)).unwrap();

            let head = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                reason(status),
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            // the client may hang up early, that's fine
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    Stub {
        url,
        requests,
        handle,
    }
}

/// Url of a local port nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
