//! Minimal HTTP front-end for the calculator. One thread, one connection at a
//! time: every endpoint is a pure function over small JSON payloads, so the
//! simplest possible server loop is plenty.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

const MAX_REQUEST_BYTES: usize = 64 * 1024;

#[derive(Debug, PartialEq, Eq)]
struct ParsedRequest {
    method: String,
    path: String,
    body: String,
}

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("warcalc server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream) -> std::io::Result<()> {
    let raw = read_request(stream)?;
    let Some(request) = parse_request(&raw) else {
        return Ok(());
    };

    let response =
        routes::route_request(&request.method, &request.path, &request.body).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()
}

/// Read until the header block is complete plus as many body bytes as
/// Content-Length announces, capped at [MAX_REQUEST_BYTES].
fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
    let mut raw = Vec::new();
    let mut chunk = [0_u8; 4096];

    loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..bytes_read]);
        if raw.len() >= MAX_REQUEST_BYTES {
            break;
        }

        let text = String::from_utf8_lossy(&raw);
        let Some(header_end) = text.find("\r\n\r\n").map(|at| at + 4) else {
            continue;
        };
        let expected_body = content_length(&text);
        if text.len() - header_end >= expected_body {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn content_length(request: &str) -> usize {
    request
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn parse_request(raw: &str) -> Option<ParsedRequest> {
    let request_line = raw.lines().next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;

    let body = raw
        .split("\r\n\r\n")
        .nth(1)
        .or_else(|| raw.split("\n\n").nth(1))
        .unwrap_or("");

    Some(ParsedRequest {
        method: method.to_string(),
        path: path.to_string(),
        body: body.to_string(),
    })
}
