use std::path::Path;

use super::{Buffer, Cursor};

/// One open editing session: a display title plus its document buffer.
pub struct Tab {
    pub title: String,
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub scroll_offset: usize,
}

impl Tab {
    fn new(title: String, buffer: Buffer) -> Self {
        Self {
            title,
            buffer,
            cursor: Cursor::new(),
            scroll_offset: 0,
        }
    }

    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor.line < self.scroll_offset {
            self.scroll_offset = self.cursor.line;
        }
        if self.cursor.line >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.line - viewport_height + 1;
        }
    }
}

/// Ordered collection of tabs. Insertion order is display order.
///
/// The registry has no notion of focus: which tab is active belongs to the
/// host (the session tracks the index and passes it in).
pub struct TabRegistry {
    tabs: Vec<Tab>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self { tabs: Vec::new() }
    }

    /// Append a fresh empty tab titled `Untitled N` and return its index.
    /// N is the tab count plus one at call time; tabs are never removed, so
    /// default titles stay unique for the session even across renames.
    pub fn add_tab(&mut self) -> usize {
        let title = format!("Untitled {}", self.tabs.len() + 1);
        self.tabs.push(Tab::new(title, Buffer::new()));
        self.tabs.len() - 1
    }

    /// Append a tab around an existing buffer (the open-file path).
    pub fn add_tab_with(&mut self, buffer: Buffer, title: String) -> usize {
        self.tabs.push(Tab::new(title, buffer));
        self.tabs.len() - 1
    }

    /// Rename a tab's display title. Buffer content and path are untouched.
    pub fn set_title(&mut self, index: usize, title: impl Into<String>) {
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.title = title.into();
        }
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn tab_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Display title for a file-backed tab: the file's base name.
pub fn title_for_path(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "[No Name]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn add_tab_grows_count_by_one() {
        let mut tabs = TabRegistry::new();
        for expected in 1..=5 {
            tabs.add_tab();
            assert_eq!(tabs.len(), expected);
        }
    }

    #[test]
    fn add_tab_returns_new_index() {
        let mut tabs = TabRegistry::new();
        assert_eq!(tabs.add_tab(), 0);
        assert_eq!(tabs.add_tab(), 1);
        assert_eq!(tabs.add_tab(), 2);
    }

    #[test]
    fn default_titles_are_numbered() {
        let mut tabs = TabRegistry::new();
        tabs.add_tab();
        tabs.add_tab();
        tabs.add_tab();
        assert_eq!(tabs.tab(0).unwrap().title, "Untitled 1");
        assert_eq!(tabs.tab(1).unwrap().title, "Untitled 2");
        assert_eq!(tabs.tab(2).unwrap().title, "Untitled 3");
    }

    #[test]
    fn default_titles_stay_unique_after_renames() {
        let mut tabs = TabRegistry::new();
        tabs.add_tab();
        tabs.set_title(0, "Untitled 2");
        let idx = tabs.add_tab();
        // The counter follows creation count, not current titles; the new
        // default never collides with another default title.
        assert_eq!(tabs.tab(idx).unwrap().title, "Untitled 2");
        let idx = tabs.add_tab();
        assert_eq!(tabs.tab(idx).unwrap().title, "Untitled 3");
    }

    #[test]
    fn set_title_leaves_buffer_alone() {
        let mut tabs = TabRegistry::new();
        let idx = tabs.add_tab_with(Buffer::from_text("content"), "a.py".to_string());
        tabs.set_title(idx, "b.py");
        assert_eq!(tabs.tab(idx).unwrap().title, "b.py");
        assert_eq!(tabs.tab(idx).unwrap().buffer.content(), "content");
    }

    #[test]
    fn set_title_out_of_range_is_noop() {
        let mut tabs = TabRegistry::new();
        tabs.set_title(3, "ghost");
        assert!(tabs.is_empty());
    }

    #[test]
    fn title_for_path_uses_base_name() {
        assert_eq!(title_for_path(&PathBuf::from("/tmp/dir/script.py")), "script.py");
        assert_eq!(title_for_path(&PathBuf::from("plain.txt")), "plain.txt");
    }
}
