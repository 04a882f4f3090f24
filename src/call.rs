//! The request/response driver. One connection, one call.

use std::io::{Read, Write};

use crate::error::Error;
use crate::method::Method;
use crate::recv::read_to_close;
use crate::res::HttpResponse;
use crate::transport::Transport;
use crate::uri::Uri;

/// Perform a single blocking http/1.1 request.
///
/// Connects (with tls when the scheme is `https`), writes the request
/// line and fixed headers, reads until the server closes the
/// connection, and parses what came back. The call blocks through all
/// of that with no timeout at any stage.
///
/// Any failure is reported through [`HttpResponse::success`] and
/// [`HttpResponse::error`], never as a panic or a `Result`. Check the
/// flag before trusting the other fields.
pub fn request(method: Method, uri: &Uri) -> HttpResponse {
    match attempt(method, uri) {
        Ok(res) => res,
        Err(e) => HttpResponse::fail(e.to_string()),
    }
}

fn attempt(method: Method, uri: &Uri) -> Result<HttpResponse, Error> {
    let transport = Transport::dial(uri)?;
    debug!("connected to {}", uri.host);
    run(method, uri, transport)
}

/// Send, receive and parse on an already connected stream.
///
/// Takes the stream by value: it is dropped (and thereby closed) on
/// every path out of here, success or not.
fn run<S: Read + Write>(method: Method, uri: &Uri, mut stream: S) -> Result<HttpResponse, Error> {
    let head = request_head(method, uri);

    // Best effort. A failed or partial write is logged and we go on to
    // read whatever the server produced before the failure.
    if let Err(e) = stream.write_all(head.as_bytes()) {
        warn!("request write failed: {}", e);
    }

    let raw = read_to_close(&mut stream)?;
    debug!("read {} bytes", raw.len());

    Ok(HttpResponse::parse(&String::from_utf8_lossy(&raw)))
}

/// The full request: request line, fixed headers, blank line, no body.
fn request_head(method: Method, uri: &Uri) -> String {
    format!(
        "{} /{}{}{} HTTP/1.1\r\nHost: {}\r\nAccept: */*\r\nConnection: close\r\n\r\n",
        method.as_str(),
        uri.address,
        if uri.querystring.is_empty() { "" } else { "?" },
        uri.querystring,
        uri.host,
    )
}
