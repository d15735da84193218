use super::Buffer;

/// Caret position within one tab's buffer. Each tab keeps its own cursor so
/// switching tabs returns to where editing left off.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Right motion stops at the end of the line rather than wrapping.
    pub fn move_right(&mut self, buffer: &Buffer) {
        if self.col < buffer.line_len(self.line) {
            self.col += 1;
        }
    }

    pub fn move_up(&mut self, buffer: &Buffer) {
        self.line = self.line.saturating_sub(1);
        self.snap_to_line(buffer);
    }

    pub fn move_down(&mut self, buffer: &Buffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
        }
        self.snap_to_line(buffer);
    }

    // A vertical move can land on a shorter line; pull the column back in.
    fn snap_to_line(&mut self, buffer: &Buffer) {
        self.col = self.col.min(buffer.line_len(self.line));
    }
}
