//! Minimal blocking http 1.1 client.
//!
//! One request per connection: connect (plain tcp or tls, picked by
//! the uri scheme), write the request line plus fixed headers, read
//! the response until the server closes the connection, and hand back
//! the parsed result. Response length is inferred solely from the
//! remote close. That means no keep-alive, no chunked
//! transfer-encoding, no redirects, no request bodies and no timeouts.
//!
//! ```no_run
//! use owlet::{request, Method, Uri};
//!
//! let uri = Uri::parse("http://example.org/index.html", false);
//! let res = request(Method::Get, &uri);
//!
//! if res.success {
//!     println!("{} {}", res.status, res.status_text);
//!     println!("{}", res.body);
//! } else {
//!     eprintln!("request failed: {}", res.error);
//! }
//! ```

#[macro_use]
extern crate log;

mod tokenizer;
pub use tokenizer::Tokenizer;

mod uri;
pub use uri::Uri;

mod method;
pub use method::Method;

mod error;
pub use error::Error;

mod transport;

mod recv;

mod res;
pub use res::HttpResponse;

mod call;
pub use call::request;
