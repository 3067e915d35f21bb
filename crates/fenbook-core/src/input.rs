//! Cursor-addressed line editing for the FEN, caption, and title fields.

pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn push_line(&mut self) {
        self.buffer.push('\n');
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_read_back() {
        let mut input = InputState::new();
        for c in "8/8/8".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "8/8/8");
        assert_eq!(input.cursor_pos(), 5);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::new();
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut input = InputState::new();
        input.set("wb".to_string());
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.as_str(), "wxb");
    }

    #[test]
    fn test_set_moves_cursor_to_end() {
        let mut input = InputState::new();
        input.set("KQkq".to_string());
        assert_eq!(input.cursor_pos(), 4);
    }

    #[test]
    fn test_multibyte_cursor_movement() {
        let mut input = InputState::new();
        input.insert_char('\u{00e9}');
        input.insert_char('4');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_pos(), 0);
        input.move_right();
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_push_line_appends_newline() {
        let mut input = InputState::new();
        input.set("8/8/8/8/8/8/8/8 w - - 0 1".to_string());
        input.push_line();
        assert!(input.as_str().ends_with('\n'));
        assert_eq!(input.cursor_pos(), input.as_str().len());
    }
}
