//! Line/token scanner over raw model text.
//!
//! Input is ASCII/Latin-1 bytes; tokens are whitespace-delimited slices of a
//! single line and never cross a line boundary. The 1-based line counter
//! exists only for diagnostics.

pub struct Tokenizer<'a> {
    buf: &'a [u8],
    pos: usize,  // start of the next unread line
    cur: usize,  // cursor within the current line
    end: usize,  // exclusive end of the current line, newline excluded
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            cur: 0,
            end: 0,
            line: 0,
        }
    }

    /// 1-based number of the line tokens are currently drawn from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Advance to the next input line and return its first token. `None`
    /// means end of input; an empty token means a blank line.
    pub fn next_line_first_token(&mut self) -> Option<&'a [u8]> {
        let buf = self.buf;
        if self.pos >= buf.len() {
            return None;
        }
        let start = self.pos;
        let mut end = start;
        while end < buf.len() && buf[end] != b'\n' {
            end += 1;
        }
        self.pos = (end + 1).min(buf.len());
        if end > start && buf[end - 1] == b'\r' {
            end -= 1;
        }
        self.cur = start;
        self.end = end;
        self.line += 1;
        Some(self.next_token().unwrap_or(&buf[start..start]))
    }

    /// Next whitespace-delimited token on the current line, if any remains.
    pub fn next_token(&mut self) -> Option<&'a [u8]> {
        let buf = self.buf;
        while self.cur < self.end && buf[self.cur].is_ascii_whitespace() {
            self.cur += 1;
        }
        if self.cur >= self.end {
            return None;
        }
        let start = self.cur;
        while self.cur < self.end && !buf[self.cur].is_ascii_whitespace() {
            self.cur += 1;
        }
        Some(&buf[start..self.cur])
    }

    /// Discard the remainder of the current line.
    pub fn skip_rest_of_line(&mut self) {
        self.cur = self.end;
    }

    fn parse_float(&mut self) -> Option<f32> {
        let token = self.next_token()?;
        std::str::from_utf8(token).ok()?.parse::<f32>().ok()
    }

    /// Three floats from the current line, in order.
    pub fn parse_vec3(&mut self) -> Option<[f32; 3]> {
        Some([self.parse_float()?, self.parse_float()?, self.parse_float()?])
    }

    /// Two floats from the current line, in order.
    pub fn parse_vec2(&mut self) -> Option<[f32; 2]> {
        Some([self.parse_float()?, self.parse_float()?])
    }
}

/// Decode a raw token as Latin-1 (every byte maps to the same code point).
pub fn latin1_token(token: &[u8]) -> String {
    token.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_within_a_line() {
        let mut tk = Tokenizer::new(b"alpha beta\tgamma\nsecond");
        assert_eq!(tk.next_line_first_token(), Some(&b"alpha"[..]));
        assert_eq!(tk.line(), 1);
        assert_eq!(tk.next_token(), Some(&b"beta"[..]));
        assert_eq!(tk.next_token(), Some(&b"gamma"[..]));
        assert_eq!(tk.next_token(), None);
        assert_eq!(tk.next_line_first_token(), Some(&b"second"[..]));
        assert_eq!(tk.line(), 2);
        assert_eq!(tk.next_line_first_token(), None);
    }

    #[test]
    fn blank_lines_count_but_yield_empty_tokens() {
        let mut tk = Tokenizer::new(b"\n\nthird\n");
        assert_eq!(tk.next_line_first_token(), Some(&b""[..]));
        assert_eq!(tk.next_line_first_token(), Some(&b""[..]));
        assert_eq!(tk.next_line_first_token(), Some(&b"third"[..]));
        assert_eq!(tk.line(), 3);
    }

    #[test]
    fn crlf_lines_do_not_leak_carriage_returns() {
        let mut tk = Tokenizer::new(b"one two\r\nthree\r\n");
        assert_eq!(tk.next_line_first_token(), Some(&b"one"[..]));
        assert_eq!(tk.next_token(), Some(&b"two"[..]));
        assert_eq!(tk.next_token(), None);
        assert_eq!(tk.next_line_first_token(), Some(&b"three"[..]));
    }

    #[test]
    fn vectors_accept_decimal_and_scientific_floats() {
        let mut tk = Tokenizer::new(b"v 1 2.5 -3e2 0.25 1e-3");
        assert_eq!(tk.next_line_first_token(), Some(&b"v"[..]));
        assert_eq!(tk.parse_vec3(), Some([1.0, 2.5, -300.0]));
        assert_eq!(tk.parse_vec2(), Some([0.25, 0.001]));
    }

    #[test]
    fn vector_parse_fails_on_bad_token_or_short_line() {
        let mut tk = Tokenizer::new(b"1 2 x\n1 2");
        tk.next_line_first_token();
        // "1" was consumed as the first token; "2 x" cannot fill a vec3.
        assert_eq!(tk.parse_vec3(), None);

        tk.next_line_first_token();
        // Tokens never cross lines, so a vec2 cannot borrow from line 2.
        assert_eq!(tk.parse_vec2(), None);
    }

    #[test]
    fn skip_rest_of_line_drops_trailing_tokens() {
        let mut tk = Tokenizer::new(b"keep drop drop\nnext");
        assert_eq!(tk.next_line_first_token(), Some(&b"keep"[..]));
        tk.skip_rest_of_line();
        assert_eq!(tk.next_token(), None);
        assert_eq!(tk.next_line_first_token(), Some(&b"next"[..]));
    }

    #[test]
    fn latin1_material_names_decode_byte_for_byte() {
        assert_eq!(latin1_token(b"m\xE9tal"), "m\u{e9}tal");
        assert_eq!(latin1_token(b"plain"), "plain");
    }

    #[test]
    fn final_line_without_newline_is_read() {
        let mut tk = Tokenizer::new(b"only");
        assert_eq!(tk.next_line_first_token(), Some(&b"only"[..]));
        assert_eq!(tk.next_line_first_token(), None);
    }
}
