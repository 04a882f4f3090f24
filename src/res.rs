//! Response model and the tokenizing parse behind it.

use std::collections::HashMap;

use crate::tokenizer::Tokenizer;

/// The outcome of one request.
///
/// Inspect `success` first: on failure only `error` is meaningful, on
/// success `error` is empty and the other fields are populated. There
/// is no partial result in between. Header keys keep the case the
/// server sent; a repeated header name keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub success: bool,
    pub protocol: String,
    pub status: String,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub error: String,
}

impl HttpResponse {
    pub(crate) fn fail(error: impl Into<String>) -> HttpResponse {
        HttpResponse {
            success: false,
            error: error.into(),
            ..Default::default()
        }
    }

    /// Tokenize a raw response buffer.
    ///
    /// This never fails. Input missing the expected delimiters comes
    /// out as empty fields. In particular a response without a blank
    /// line after the status line yields no headers, and everything
    /// following the status line lands in the body.
    pub(crate) fn parse(raw: &str) -> HttpResponse {
        let mut t = Tokenizer::new(raw);

        let protocol = t.next(" ", false);
        let status = t.next(" ", false);
        let status_text = t.next("\r\n", false);

        let header_block = t.next("\r\n\r\n", false);
        let body = t.tail();

        let mut headers = HashMap::new();
        let mut ht = Tokenizer::new(header_block);
        loop {
            let key = ht.next(": ", false);
            if key.is_empty() {
                break;
            }
            let value = ht.next("\r\n", true);
            headers.insert(key.into(), value.into());
        }

        HttpResponse {
            success: true,
            protocol: protocol.into(),
            status: status.into(),
            status_text: status_text.into(),
            headers,
            body: body.into(),
            error: String::new(),
        }
    }
}
