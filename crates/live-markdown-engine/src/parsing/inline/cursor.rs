/// A cursor for character-by-character inline scanning.
///
/// Positions are byte indices into `s`. Steps whole characters so they stay
/// on UTF-8 boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes; `n` must land on a character boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Length of the run of `c` starting at the cursor.
    pub fn run_of(&self, c: char) -> usize {
        self.s
            .get(self.i..)
            .map_or(0, |rest| rest.chars().take_while(|&x| x == c).count() * c.len_utf8())
    }
}
