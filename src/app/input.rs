//! Draft field editing.
//!
//! The draft is a single line of text stored in the session state; the
//! cursor (a char index) lives on [`App`]. All edits go through these
//! methods so the cursor never leaves a char boundary.

use super::App;

impl App {
    /// Byte offset of the cursor within the draft.
    fn cursor_byte(&self) -> usize {
        self.session
            .draft
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.session.draft.len())
    }

    fn draft_chars(&self) -> usize {
        self.session.draft.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte();
        self.session.draft.insert(at, c);
        self.cursor += 1;
        self.mark_dirty();
    }

    /// Insert pasted text. The draft is single-line: newlines and other
    /// control characters are dropped.
    pub fn insert_paste(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            let at = self.cursor_byte();
            self.session.draft.insert(at, c);
            self.cursor += 1;
        }
        self.mark_dirty();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.cursor_byte();
        self.session.draft.remove(at);
        self.mark_dirty();
    }

    /// Delete the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor >= self.draft_chars() {
            return;
        }
        let at = self.cursor_byte();
        self.session.draft.remove(at);
        self.mark_dirty();
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.mark_dirty();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.draft_chars() {
            self.cursor += 1;
            self.mark_dirty();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
        self.mark_dirty();
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.draft_chars();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;

    #[test]
    fn test_insert_and_backspace() {
        let mut app = App::for_tests();
        for c in "abc".chars() {
            app.insert_char(c);
        }
        assert_eq!(app.session.draft, "abc");
        assert_eq!(app.cursor, 3);

        app.backspace();
        assert_eq!(app.session.draft, "ab");
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_insert_mid_draft() {
        let mut app = App::for_tests();
        app.insert_paste("acd");
        app.move_cursor_home();
        app.move_cursor_right();
        app.insert_char('b');
        assert_eq!(app.session.draft, "abcd");
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut app = App::for_tests();
        app.insert_paste("abc");
        app.move_cursor_home();
        app.delete_char();
        assert_eq!(app.session.draft, "bc");
        assert_eq!(app.cursor, 0);

        app.move_cursor_end();
        app.delete_char();
        assert_eq!(app.session.draft, "bc");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut app = App::for_tests();
        app.insert_paste("https://a.example\n/path\r\n");
        assert_eq!(app.session.draft, "https://a.example/path");
    }

    #[test]
    fn test_cursor_respects_wide_chars() {
        let mut app = App::for_tests();
        app.insert_paste("日本語");
        assert_eq!(app.cursor, 3);
        app.move_cursor_left();
        app.backspace();
        assert_eq!(app.session.draft, "日語");
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut app = App::for_tests();
        app.insert_char('x');
        app.move_cursor_home();
        app.backspace();
        assert_eq!(app.session.draft, "x");
        assert_eq!(app.cursor, 0);
    }
}
