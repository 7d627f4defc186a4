//! A small forward-only cursor over a single line of text.
//!
//! Searches report where a needle starts as `Some(offset)` into the whole
//! line, or `None` when it is absent. A failed search leaves the cursor where
//! it was.

#[derive(Debug, Clone, Copy)]
pub struct LineCursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// byte offset of the cursor within the line
    pub fn position(&self) -> usize {
        self.pos
    }

    /// the unconsumed remainder of the line
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Moves to the start of the next occurrence of `needle`.
    pub fn find(&mut self, needle: &str) -> Option<usize> {
        let offset = self.rest().find(needle)?;
        self.pos += offset;

        Some(self.pos)
    }

    /// Steps over `prefix` if the remainder starts with it.
    pub fn skip(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// The text between the cursor and `end`, an offset returned by [`Self::find`].
    pub fn slice_to(&self, end: usize) -> &'a str {
        &self.line[self.pos..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_reports_offsets_from_line_start() {
        let mut cursor = LineCursor::new("GLAPI void APIENTRY glHint (GLenum target);");

        assert_eq!(cursor.find("APIENTRY"), Some(11));
        assert_eq!(cursor.position(), 11);

        // searching again from the match itself finds the same place
        assert_eq!(cursor.find("APIENTRY"), Some(11));
        assert_eq!(cursor.find("("), Some(27));
    }

    #[test]
    fn missed_search_keeps_position() {
        let mut cursor = LineCursor::new("uniform mat4 vProj;");
        assert!(cursor.skip("uniform "));

        assert_eq!(cursor.find("//"), None);
        assert_eq!(cursor.position(), 8);
        assert_eq!(cursor.rest(), "mat4 vProj;");
    }

    #[test]
    fn skip_requires_matching_prefix() {
        let mut cursor = LineCursor::new("APIENTRY glClear");

        assert!(!cursor.skip("gl"));
        assert!(cursor.skip("APIENTRY "));

        let paren = cursor.find("(");
        assert_eq!(paren, None);
        assert_eq!(cursor.rest(), "glClear");
    }

    #[test]
    fn slice_to_spans_cursor_and_match() {
        let mut cursor = LineCursor::new("void main ()");
        assert!(cursor.skip("void "));
        let name_start = cursor;

        let paren = cursor.find("(").unwrap();

        assert_eq!(name_start.position(), 5);
        assert_eq!(name_start.slice_to(paren), "main ");
        assert_eq!(cursor.rest(), "()");
    }
}
