//! Multi-line text buffer for the live editor

/// A simple line-based editor. Cursor columns are character indices.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    row: usize,
    col: usize,
    /// First visible line (updated on render)
    pub scroll_offset: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self { lines: vec![String::new()], row: 0, col: 0, scroll_offset: 0 }
    }
}

impl Editor {
    /// Replace the whole buffer and put the cursor at the start
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.row = 0;
        self.col = 0;
        self.scroll_offset = 0;
    }

    /// The buffer joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices().nth(col).map(|(i, _)| i).unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.newline();
            return;
        }
        let idx = self.byte_index(self.row, self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        s.chars().for_each(|c| self.insert_char(c));
    }

    /// Split the current line at the cursor
    pub fn newline(&mut self) {
        let idx = self.byte_index(self.row, self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = self.byte_index(self.row, self.col);
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    /// Delete the character at the cursor, joining with the next line at EOL
    pub fn delete(&mut self) {
        if self.col < self.line_len(self.row) {
            let idx = self.byte_index(self.row, self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    /// Keep the cursor row inside a viewport of `height` lines
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if self.row < self.scroll_offset {
            self.scroll_offset = self.row;
        } else if height > 0 && self.row >= self.scroll_offset + height {
            self.scroll_offset = self.row + 1 - height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_round_trips() {
        let mut editor = Editor::default();
        editor.set_text("let x = 1\n\nprintfn \"%d\" x");
        assert_eq!(editor.lines().len(), 3);
        assert_eq!(editor.text(), "let x = 1\n\nprintfn \"%d\" x");
        assert_eq!(editor.cursor(), (0, 0));
    }

    #[test]
    fn insert_and_newline() {
        let mut editor = Editor::default();
        editor.insert_str("let a\nb");
        assert_eq!(editor.text(), "let a\nb");
        assert_eq!(editor.cursor(), (1, 1));
    }

    #[test]
    fn newline_splits_line() {
        let mut editor = Editor::default();
        editor.set_text("abcd");
        editor.move_right();
        editor.move_right();
        editor.newline();
        assert_eq!(editor.lines(), &["ab".to_string(), "cd".to_string()]);
    }

    #[test]
    fn backspace_joins_lines() {
        let mut editor = Editor::default();
        editor.set_text("ab\ncd");
        editor.move_down();
        editor.backspace();
        assert_eq!(editor.text(), "abcd");
        assert_eq!(editor.cursor(), (0, 2));
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut editor = Editor::default();
        editor.backspace();
        assert!(editor.is_empty());
    }

    #[test]
    fn delete_at_end_of_line_joins_next() {
        let mut editor = Editor::default();
        editor.set_text("ab\ncd");
        editor.move_end();
        editor.delete();
        assert_eq!(editor.text(), "abcd");
    }

    #[test]
    fn multibyte_characters() {
        let mut editor = Editor::default();
        editor.set_text("María");
        editor.move_end();
        editor.backspace();
        editor.insert_char('o');
        assert_eq!(editor.text(), "Marío");
    }

    #[test]
    fn vertical_move_clamps_column() {
        let mut editor = Editor::default();
        editor.set_text("long line\nab");
        editor.move_end();
        editor.move_down();
        assert_eq!(editor.cursor(), (1, 2));
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut editor = Editor::default();
        editor.set_text("1\n2\n3\n4\n5");
        for _ in 0..4 {
            editor.move_down();
        }
        editor.ensure_cursor_visible(2);
        assert_eq!(editor.scroll_offset, 3);
    }
}
