//! Cursor based splitting of delimited text.

/// Stateful cursor over a borrowed string.
///
/// Extracts delimiter-bounded substrings front to back. The cursor
/// only ever moves forward.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer { src, pos: 0 }
    }

    /// Extract the substring up to the next occurrence of `delimiter`.
    ///
    /// When found, the returned span is strictly between the cursor and
    /// the delimiter, and the cursor moves past the delimiter.
    ///
    /// When not found and `tail_on_miss` is set, this is `tail()`.
    /// When not found without `tail_on_miss`, returns `""` and the
    /// cursor stays where it is. Callers relying on a later `tail()`
    /// depend on the cursor not moving here.
    pub fn next(&mut self, delimiter: &str, tail_on_miss: bool) -> &'a str {
        let hit = match self.src[self.pos..].find(delimiter) {
            Some(n) => self.pos + n,
            None => {
                if tail_on_miss {
                    return self.tail();
                } else {
                    return "";
                }
            }
        };

        let token = &self.src[self.pos..hit];
        self.pos = hit + delimiter.len();
        token
    }

    /// Everything from the cursor to the end. The cursor jumps to the
    /// end unconditionally.
    pub fn tail(&mut self) -> &'a str {
        let token = &self.src[self.pos..];
        self.pos = self.src.len();
        token
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_on_delimiter() {
        let mut t = Tokenizer::new("a,b,c");
        assert_eq!(t.next(",", false), "a");
        assert_eq!(t.next(",", false), "b");
        assert_eq!(t.next(",", false), "");
        assert_eq!(t.tail(), "c");
    }

    #[test]
    fn miss_without_tail_keeps_cursor() {
        // The miss must not consume anything. A subsequent call with a
        // delimiter that does exist still sees the full remainder.
        let mut t = Tokenizer::new("abc:def");
        assert_eq!(t.next("!", false), "");
        assert_eq!(t.next(":", false), "abc");
        assert_eq!(t.tail(), "def");
    }

    #[test]
    fn miss_with_tail_consumes_rest() {
        let mut t = Tokenizer::new("abc");
        assert_eq!(t.next("!", true), "abc");
        assert_eq!(t.tail(), "");
        assert_eq!(t.next("!", true), "");
    }

    #[test]
    fn multi_char_delimiter() {
        let mut t = Tokenizer::new("http://host/x");
        assert_eq!(t.next("://", false), "http");
        assert_eq!(t.next("/", false), "host");
        assert_eq!(t.tail(), "x");
    }

    #[test]
    fn empty_leading_token() {
        let mut t = Tokenizer::new(",x");
        assert_eq!(t.next(",", false), "");
        assert_eq!(t.tail(), "x");
    }

    #[test]
    fn reconstructs_source() {
        let src = "GET / HTTP/1.1\r\nHost: x\r\n";
        let mut t = Tokenizer::new(src);
        let mut rebuilt = String::new();
        loop {
            let token = t.next(" ", false);
            if token.is_empty() && !src[rebuilt.len()..].starts_with(' ') {
                break;
            }
            rebuilt.push_str(token);
            rebuilt.push(' ');
        }
        rebuilt.push_str(t.tail());
        assert_eq!(rebuilt, src);
    }
}
