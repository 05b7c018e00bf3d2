//! Test support utilities for generator integration tests.
//!
//! Provides a loopback HTTP server that serves fixed bodies by path and a
//! helper that lays out a template and output location in a temp directory.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// A minimal HTTP/1.1 server answering `GET` requests from a fixed table.
///
/// Unknown paths get `404`; paths registered with a status get that
/// status and an empty body; stalled paths never answer. The accept loop
/// runs on a detached thread for the lifetime of the test process.
pub struct StaticServer {
    base_url: String,
}

/// What the server answers for one path.
#[derive(Clone)]
pub enum Reply {
    /// `200 OK` with the given body.
    Body(Vec<u8>),
    /// The given status with an empty body.
    Status(u16),
    /// Hold the connection open without answering.
    Stall,
}

/// How long a stalled connection is held before it is dropped.
const STALL_FOR: Duration = Duration::from_secs(10);

impl StaticServer {
    /// Start serving `routes`, keyed by absolute request path.
    pub fn start(routes: HashMap<String, Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let routes = Arc::new(routes);
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                std::thread::spawn(move || serve(stream, &routes));
            }
        });
        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// `http://127.0.0.1:<port>` without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn serve(stream: TcpStream, routes: &HashMap<String, Reply>) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }
    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = match routes.get(path) {
        Some(Reply::Body(body)) => (200, body.clone()),
        Some(Reply::Status(code)) => (*code, Vec::new()),
        Some(Reply::Stall) => {
            std::thread::sleep(STALL_FOR);
            return;
        }
        None => (404, Vec::new()),
    };
    let mut stream = reader.into_inner();
    let head = format!(
        "HTTP/1.1 {status} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        reason(status),
        body.len()
    );
    if respond(&mut stream, head.as_bytes(), &body).is_err() {
        // The client went away; nothing to clean up.
    }
}

fn respond(stream: &mut TcpStream, head: &[u8], body: &[u8]) -> std::io::Result<()> {
    stream.write_all(head)?;
    stream.write_all(body)?;
    stream.flush()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// A temp directory holding a template and the output manifest path.
pub struct Workspace {
    /// Keeps the directory alive.
    pub dir: TempDir,
    /// Template file path.
    pub template: PathBuf,
    /// Output manifest path (not created).
    pub output: PathBuf,
}

impl Workspace {
    /// Write `template_source` into a fresh temp directory.
    pub fn with_template(template_source: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let template = dir.path().join("module.yml.hbs");
        std::fs::write(&template, template_source).expect("write template");
        let output = dir.path().join("module.yml");
        Self {
            dir,
            template,
            output,
        }
    }
}

/// Path of a template shipped with the crate.
pub fn shipped_template(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("templates")
        .join(name)
}
