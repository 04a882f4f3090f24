//! Connected byte stream, plain or wrapped in tls.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use crate::error::Error;
use crate::uri::Uri;

const DEFAULT_PORT_HTTP: u16 = 80;
const DEFAULT_PORT_HTTPS: u16 = 443;

const SCHEME_SECURE: &str = "https";

/// One connected stream. The variant is picked by the uri scheme at
/// connect time, and both variants expose the same read/write
/// contract. Dropping the transport closes the session and socket.
#[derive(Debug)]
pub(crate) enum Transport {
    Plain(TcpStream),
    Secure(Box<StreamOwned<ClientConnection, TcpStream>>),
}

impl Transport {
    /// Resolve, connect and (for https) negotiate a tls session.
    pub(crate) fn dial(uri: &Uri) -> Result<Transport, Error> {
        let port = effective_port(uri)?;
        let tcp = connect(&uri.host, port)?;

        if uri.protocol == SCHEME_SECURE {
            secure(tcp, &uri.host)
        } else {
            Ok(Transport::Plain(tcp))
        }
    }
}

/// The explicit port if the uri carries one, otherwise the scheme
/// default. A port that is present but not a number never resolves,
/// so it is rejected here.
fn effective_port(uri: &Uri) -> Result<u16, Error> {
    if uri.port.is_empty() {
        if uri.protocol == SCHEME_SECURE {
            Ok(DEFAULT_PORT_HTTPS)
        } else {
            Ok(DEFAULT_PORT_HTTP)
        }
    } else {
        uri.port
            .parse()
            .map_err(|_| Error::Connect(format!("bad port: {}", uri.port)))
    }
}

/// Try every resolved address in order until one connects.
fn connect(host: &str, port: u16) -> Result<TcpStream, Error> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| Error::Connect(e.to_string()))?;

    let mut last_error = None;

    for addr in addrs {
        match TcpStream::connect(addr) {
            Ok(tcp) => return Ok(tcp),
            Err(e) => last_error = Some(e),
        }
    }

    Err(Error::Connect(match last_error {
        Some(e) => e.to_string(),
        None => format!("no addresses for {}:{}", host, port),
    }))
}

fn secure(mut tcp: TcpStream, host: &str) -> Result<Transport, Error> {
    let roots = RootCertStore {
        roots: webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect(),
    };

    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();

    let name = ServerName::try_from(host.to_string())
        .map_err(|e| Error::SecureSession(e.to_string()))?;

    let mut conn = ClientConnection::new(Arc::new(config), name)
        .map_err(|e| Error::SecureSession(e.to_string()))?;

    // Drive the handshake to completion here. A session that cannot be
    // negotiated is a connect-stage failure, not something to discover
    // on the first read.
    while conn.is_handshaking() {
        conn.complete_io(&mut tcp)
            .map_err(|e| Error::SecureSession(e.to_string()))?;
    }

    Ok(Transport::Secure(Box::new(StreamOwned::new(conn, tcp))))
}

impl Read for Transport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Transport::Plain(tcp) => tcp.read(buf),
            Transport::Secure(tls) => tls.read(buf),
        }
    }
}

impl Write for Transport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Transport::Plain(tcp) => tcp.write(buf),
            Transport::Secure(tls) => tls.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Transport::Plain(tcp) => tcp.flush(),
            Transport::Secure(tls) => tls.flush(),
        }
    }
}
