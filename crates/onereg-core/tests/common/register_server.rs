//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a static index body on GET and records registration POSTs in
//! arrival order. Can be told to drop the connection for selected bodies to
//! simulate a mid-request network failure.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct RegisterServerOptions {
    /// Status line sent for recorded POSTs.
    pub post_status: &'static str,
    /// Close the connection without responding when the POST body contains
    /// this marker (the client sees an empty reply).
    pub drop_marker: Option<&'static str>,
}

impl Default for RegisterServerOptions {
    fn default() -> Self {
        Self {
            post_status: "201 Created",
            drop_marker: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub auth_token: Option<String>,
    pub body: String,
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345") and the shared list of recorded POSTs.
/// The server runs until the process exits.
pub fn start(
    index_body: &str,
    opts: RegisterServerOptions,
) -> (String, Arc<Mutex<Vec<RecordedRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let index_body = index_body.to_string();
    let recorded_srv = Arc::clone(&recorded);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let index_body = index_body.clone();
            let recorded = Arc::clone(&recorded_srv);
            thread::spawn(move || handle(stream, &index_body, &recorded, opts));
        }
    });
    (format!("http://127.0.0.1:{}", port), recorded)
}

fn handle(
    stream: TcpStream,
    index_body: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
    opts: RegisterServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut write_half = match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    match reader.read_line(&mut request_line) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut content_length = 0usize;
    let mut auth_token = None;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            if name.eq_ignore_ascii_case("x-auth-token") {
                auth_token = Some(value.to_string());
            }
        }
    }

    if method.eq_ignore_ascii_case("GET") {
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            index_body.len()
        );
        let _ = write_half.write_all(response.as_bytes());
        let _ = write_half.write_all(index_body.as_bytes());
        return;
    }

    if method.eq_ignore_ascii_case("POST") {
        let mut body = vec![0u8; content_length];
        if reader.read_exact(&mut body).is_err() {
            return;
        }
        let body = String::from_utf8_lossy(&body).into_owned();
        if let Some(marker) = opts.drop_marker {
            if body.contains(marker) {
                let _ = write_half.shutdown(std::net::Shutdown::Both);
                return;
            }
        }
        recorded.lock().unwrap().push(RecordedRequest {
            path,
            auth_token,
            body,
        });
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            opts.post_status
        );
        let _ = write_half.write_all(response.as_bytes());
        return;
    }

    let _ = write_half.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
}
