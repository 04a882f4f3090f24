//! Drain a stream into memory until the peer closes.

use std::io::{self, Read};

const CHUNK_SIZE: usize = 8192;
const INITIAL_CHUNKS: usize = 4;

/// Read until a zero-byte read signals the remote closed the
/// connection. There is no length framing and no size cap, so a peer
/// that never closes blocks forever and a peer that never stops
/// sending grows the buffer without bound.
///
/// Growth policy: start at four chunks; whenever free space drops
/// below one chunk, add one chunk. The buffer is trimmed to the bytes
/// actually read before returning.
pub(crate) fn read_to_close(stream: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0; INITIAL_CHUNKS * CHUNK_SIZE];
    let mut len = 0;

    loop {
        let n = match stream.read(&mut buffer[len..]) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            // A tls peer tearing down without close_notify surfaces as
            // an unexpected eof. What arrived is the full response.
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => 0,
            Err(e) => return Err(e),
        };

        if n == 0 {
            break;
        }

        len += n;

        if buffer.len() - len < CHUNK_SIZE {
            buffer.resize(buffer.len() + CHUNK_SIZE, 0);
        }
    }

    buffer.truncate(len);
    Ok(buffer)
}
