use std::io;

use thiserror::Error;

/// Errors for a single request attempt.
///
/// A malformed response is deliberately not represented here. Response
/// parsing degrades to empty fields instead of failing, mirroring the
/// no-error policy of the tokenizer it is built on.
#[derive(Debug, Error)]
pub enum Error {
    /// Name resolution failed or no resolved address accepted a
    /// tcp connection.
    #[error("could not open tcp socket: {0}")]
    Connect(String),

    /// Tls configuration, server name or handshake failure.
    #[error("tls session failed: {0}")]
    SecureSession(String),

    /// Reading from the established stream failed.
    #[error("transport: {0}")]
    Transport(#[from] io::Error),
}
