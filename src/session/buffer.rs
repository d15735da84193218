use ropey::Rope;
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

pub struct Buffer {
    text: Rope,
    filepath: Option<PathBuf>,
    dirty: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            text: Rope::new(),
            filepath: None,
            dirty: false,
        }
    }

    /// Load a buffer from disk. The caller decides what to do with the
    /// buffer; nothing is created on failure.
    pub fn from_file(path: PathBuf) -> io::Result<Self> {
        let text = Rope::from_reader(File::open(&path)?)?;
        Ok(Self {
            text,
            filepath: Some(path),
            dirty: false,
        })
    }

    /// Create a buffer from a string (useful for testing)
    #[cfg(test)]
    pub fn from_text(s: &str) -> Self {
        Self {
            text: Rope::from_str(s),
            filepath: None,
            dirty: false,
        }
    }

    /// Write the entire content to `path`, truncating whatever is there.
    /// Not atomic: a crash mid-write can leave a partial file.
    pub fn write_to(&mut self, path: PathBuf) -> io::Result<()> {
        let mut file = File::create(&path)?;
        self.text.write_to(&mut file)?;
        self.filepath = Some(path);
        self.dirty = false;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.filepath.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The whole buffer as a string (for save prompts and script runs).
    pub fn content(&self) -> String {
        self.text.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    pub fn line(&self, idx: usize) -> ropey::RopeSlice {
        self.text.line(idx)
    }

    pub fn line_len(&self, idx: usize) -> usize {
        // Length excluding newline character
        let line = self.text.line(idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn line_col_to_char(&self, line: usize, col: usize) -> usize {
        self.text.line_to_char(line) + col
    }

    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) {
        let idx = self.line_col_to_char(line, col);
        self.text.insert_char(idx, ch);
        self.dirty = true;
    }

    pub fn insert_str(&mut self, line: usize, col: usize, s: &str) {
        let idx = self.line_col_to_char(line, col);
        self.text.insert(idx, s);
        self.dirty = true;
    }

    pub fn insert_newline(&mut self, line: usize, col: usize) {
        self.insert_char(line, col, '\n');
    }

    /// Delete the character before (line, col). Joins with the previous
    /// line when at column zero. Returns false at the start of the buffer.
    pub fn delete_char_backward(&mut self, line: usize, col: usize) -> bool {
        let idx = self.line_col_to_char(line, col);
        if idx > 0 {
            self.text.remove(idx - 1..idx);
            self.dirty = true;
            true
        } else {
            false
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
