#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

/// One canned response: requests whose path starts with `prefix` get
/// `status` and `body`.
pub struct Route {
    pub prefix: &'static str,
    pub status: u16,
    pub body: String,
}

pub fn ok(prefix: &'static str, body: &str) -> Route {
    Route {
        prefix,
        status: 200,
        body: body.to_string(),
    }
}

/// Minimal HTTP/1.1 responder on 127.0.0.1. Records the request line and
/// the Authorization header of every request it serves.
pub struct FakeTodoist {
    pub base: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakeTodoist {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base = format!("http://{}/api/v1", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve(stream, &routes, &log);
            }
        });
        FakeTodoist { base, requests }
    }

    /// Accepts connections but never answers, so clients run into their
    /// timeout.
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let base = format!("http://{}/api/v1", listener.local_addr().unwrap());
        thread::spawn(move || {
            let mut held = Vec::new();
            for stream in listener.incoming().flatten() {
                held.push(stream);
            }
        });
        FakeTodoist {
            base,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(mut stream: TcpStream, routes: &[Route], log: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&buf).into_owned();
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let auth = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("authorization").then(|| value.trim().to_string())
        })
        .unwrap_or_default();
    log.lock().unwrap().push(format!("{} [{}]", target, auth));

    let path = target.trim_start_matches("/api/v1/");
    let (status, body) = routes
        .iter()
        .find(|r| path.starts_with(r.prefix))
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, "{}".to_string()));
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Write an executable stand-in for gopass into `dir`.
pub fn fake_gopass(dir: &Path, body: &str) -> String {
    let path = dir.join("gopass");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

pub const PROJECTS: &str = r#"{"results": [
    {"id": "p0", "name": "Inbox"},
    {"id": "p1", "name": "Einkaufsliste"}
]}"#;

pub const SECTIONS: &str = r#"{"results": [
    {"id": "s1", "name": "Produce"},
    {"id": "s2", "name": "Bakery"}
]}"#;

pub const TASKS: &str = r#"{"results": [
    {"id": "1", "content": "Apples", "section_id": "s1", "checked": false},
    {"id": "2", "content": "Milk", "section_id": null, "checked": false},
    {"id": "3", "content": "Bread", "section_id": "s2", "checked": false},
    {"id": "4", "content": "Butter", "section_id": null, "checked": true},
    {"id": "5", "content": "Bananas", "section_id": "s1", "checked": false}
]}"#;
