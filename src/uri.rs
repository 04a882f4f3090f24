//! Uri splitting without a grammar.
//!
//! A `Uri` is produced by a fixed sequence of [`Tokenizer`] calls. The
//! parser never fails and never validates: an empty host or port is
//! the caller's problem.

use std::collections::HashMap;

use crate::tokenizer::Tokenizer;

/// Parsed form of `scheme://host:port/path?query#fragment`.
///
/// All fields are as-extracted. Notably the `address` carries no
/// leading slash (the slash is re-added when a request line is
/// formatted) and parameter values are not percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uri {
    pub protocol: String,
    pub host: String,
    pub port: String,
    pub address: String,
    pub querystring: String,
    pub hash: String,
    pub parameters: HashMap<String, String>,
}

impl Uri {
    /// Split `input` into its components. With `parse_parameters`, the
    /// querystring is additionally decoded into key/value pairs
    /// (unique keys, last write wins).
    pub fn parse(input: &str, parse_parameters: bool) -> Uri {
        let mut t = Tokenizer::new(input);

        let protocol = t.next("://", false);
        let host_port = t.next("/", true);

        // Ipv6 literals contain colons, so a bracketed host switches
        // the host/port delimiter to "]:" and loses its brackets.
        let mut hp = Tokenizer::new(host_port);
        let bracketed = host_port.starts_with('[');
        let separator = if bracketed { "]:" } else { ":" };

        let mut host = hp.next(separator, true);
        if bracketed {
            host = host.strip_prefix('[').unwrap_or(host);
            host = host.strip_suffix(']').unwrap_or(host);
        }

        let port = hp.tail();

        let address = t.next("?", true);
        let querystring = t.next("#", true);
        let hash = t.tail();

        let mut uri = Uri {
            protocol: protocol.into(),
            host: host.into(),
            port: port.into(),
            address: address.into(),
            querystring: querystring.into(),
            hash: hash.into(),
            parameters: HashMap::new(),
        };

        if parse_parameters {
            uri.parse_parameters();
        }

        uri
    }

    fn parse_parameters(&mut self) {
        let mut qt = Tokenizer::new(&self.querystring);
        loop {
            let key = qt.next("=", false);
            if key.is_empty() {
                break;
            }
            let value = qt.next("&", true);
            self.parameters.insert(key.into(), value.into());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_uri() {
        let uri = Uri::parse("http://example.org/path?x=1&y=2#frag", true);
        assert_eq!(uri.protocol, "http");
        assert_eq!(uri.host, "example.org");
        assert_eq!(uri.port, "");
        assert_eq!(uri.address, "path");
        assert_eq!(uri.querystring, "x=1&y=2");
        assert_eq!(uri.hash, "frag");
        assert_eq!(uri.parameters.len(), 2);
        assert_eq!(uri.parameters["x"], "1");
        assert_eq!(uri.parameters["y"], "2");
    }

    #[test]
    fn explicit_port() {
        let uri = Uri::parse("https://example.org:8443/x/y", false);
        assert_eq!(uri.protocol, "https");
        assert_eq!(uri.host, "example.org");
        assert_eq!(uri.port, "8443");
        assert_eq!(uri.address, "x/y");
    }

    #[test]
    fn ipv6_literal_with_port() {
        let uri = Uri::parse("http://[::1]:8080/", false);
        assert_eq!(uri.host, "::1");
        assert_eq!(uri.port, "8080");
        assert_eq!(uri.address, "");
    }

    #[test]
    fn ipv6_literal_without_port() {
        let uri = Uri::parse("http://[::1]/x", false);
        assert_eq!(uri.host, "::1");
        assert_eq!(uri.port, "");
        assert_eq!(uri.address, "x");
    }

    #[test]
    fn closing_bracket_kept_on_unbracketed_host() {
        let uri = Uri::parse("http://ab]/", false);
        assert_eq!(uri.host, "ab]");
        assert_eq!(uri.port, "");
    }

    #[test]
    fn no_path_at_all() {
        let uri = Uri::parse("http://example.org", false);
        assert_eq!(uri.host, "example.org");
        assert_eq!(uri.port, "");
        assert_eq!(uri.address, "");
        assert_eq!(uri.querystring, "");
        assert_eq!(uri.hash, "");
    }

    #[test]
    fn querystring_without_parse_flag() {
        let uri = Uri::parse("http://h/p?a=b", false);
        assert_eq!(uri.querystring, "a=b");
        assert!(uri.parameters.is_empty());
    }

    #[test]
    fn duplicate_parameter_last_write_wins() {
        let uri = Uri::parse("http://h/p?a=1&a=2", true);
        assert_eq!(uri.parameters.len(), 1);
        assert_eq!(uri.parameters["a"], "2");
    }

    #[test]
    fn parameter_values_are_not_decoded() {
        let uri = Uri::parse("http://h/p?a=%20b", true);
        assert_eq!(uri.parameters["a"], "%20b");
    }

    #[test]
    fn dangling_parameter_key_is_dropped() {
        // "c" has no "=", so the key extraction comes up empty and the
        // loop ends there.
        let uri = Uri::parse("http://h/p?a=1&c", true);
        assert_eq!(uri.parameters.len(), 1);
        assert_eq!(uri.parameters["a"], "1");
    }

    #[test]
    fn empty_host_is_legal() {
        let uri = Uri::parse("http:///x", false);
        assert_eq!(uri.host, "");
        assert_eq!(uri.address, "x");
    }
}
