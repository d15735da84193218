use std::io::{self, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    execute, queue,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::session::{Mode, Session};

const GUTTER_WIDTH: u16 = 4;

/// Draws the session to the terminal. Reads model state only; every change
/// goes through the session's operations.
pub struct Renderer {
    pub width: u16,
    pub height: u16,
}

impl Renderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    pub fn setup() -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All)
        )?;
        Ok(())
    }

    pub fn teardown() -> io::Result<()> {
        execute!(
            stdout(),
            SetCursorStyle::DefaultUserShape,
            Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Rows left for buffer text once the tab bar and bottom line are
    /// taken out.
    pub fn text_height(&self) -> usize {
        self.height.saturating_sub(2) as usize
    }

    pub fn render(&mut self, session: &Session) -> io::Result<()> {
        // Pick up terminal resizes
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;

        let mut out = stdout();

        // Hide cursor during redraw to prevent flicker
        queue!(out, Hide)?;

        self.draw_tab_bar(&mut out, session)?;
        self.draw_text_area(&mut out, session)?;
        self.draw_bottom_line(&mut out, session)?;
        self.place_cursor(&mut out, session)?;

        out.flush()
    }

    fn draw_tab_bar(&self, out: &mut impl Write, session: &Session) -> io::Result<()> {
        let theme = &session.theme;
        queue!(out, MoveTo(0, 0))?;

        let mut used = 0u16;
        for (i, tab) in session.tabs.iter().enumerate() {
            let label = if i == session.active {
                queue!(
                    out,
                    SetBackgroundColor(theme.tab_active_bg.to_crossterm()),
                    SetForegroundColor(theme.tab_active_fg.to_crossterm())
                )?;
                format!(" [{}] ", tab.title)
            } else {
                queue!(
                    out,
                    SetBackgroundColor(theme.tab_bar_bg.to_crossterm()),
                    SetForegroundColor(theme.tab_bar_fg.to_crossterm())
                )?;
                format!("  {}  ", tab.title)
            };

            let label_width = label.chars().count() as u16;
            if used + label_width > self.width {
                break;
            }
            queue!(out, Print(&label))?;
            used += label_width;
        }

        // Fill the rest of the bar
        queue!(
            out,
            SetBackgroundColor(theme.tab_bar_bg.to_crossterm()),
            Print(" ".repeat(self.width.saturating_sub(used) as usize))
        )?;
        Ok(())
    }

    fn draw_text_area(&self, out: &mut impl Write, session: &Session) -> io::Result<()> {
        let theme = &session.theme;
        let tab = session.active_tab();
        let gutter = if session.settings.show_line_numbers {
            GUTTER_WIDTH
        } else {
            0
        };
        let text_width = self.width.saturating_sub(gutter) as usize;

        queue!(out, SetBackgroundColor(theme.background.to_crossterm()))?;

        for row in 0..self.text_height() {
            let line_idx = tab.scroll_offset + row;
            queue!(out, MoveTo(0, row as u16 + 1))?;

            if line_idx >= tab.buffer.line_count() {
                queue!(out, Print(" ".repeat(self.width as usize)))?;
                continue;
            }

            if gutter > 0 {
                let number_color = if line_idx == tab.cursor.line {
                    theme.line_number_active
                } else {
                    theme.line_number
                };
                queue!(
                    out,
                    SetForegroundColor(number_color.to_crossterm()),
                    Print(format!("{:>3} ", line_idx + 1))
                )?;
            }

            let mut text: String = tab
                .buffer
                .line(line_idx)
                .chars()
                .filter(|&ch| ch != '\n')
                .take(text_width)
                .collect();
            let shown = text.chars().count();
            text.push_str(&" ".repeat(text_width - shown));

            queue!(
                out,
                SetForegroundColor(theme.foreground.to_crossterm()),
                Print(&text)
            )?;
        }

        Ok(())
    }

    // Bottom line precedence: an open prompt, then a pending message, then
    // the ordinary status bar.
    fn draw_bottom_line(&self, out: &mut impl Write, session: &Session) -> io::Result<()> {
        let theme = &session.theme;
        queue!(out, MoveTo(0, self.height.saturating_sub(1)))?;

        if let Mode::Prompt(kind) = session.mode {
            queue!(
                out,
                SetBackgroundColor(theme.background.to_crossterm()),
                SetForegroundColor(theme.foreground.to_crossterm()),
                Clear(ClearType::CurrentLine),
                Print(format!("{}{}", kind.label(), session.prompt_input))
            )?;
            return Ok(());
        }

        if let Some(msg) = &session.message {
            queue!(
                out,
                SetBackgroundColor(theme.background.to_crossterm()),
                SetForegroundColor(theme.warning.to_crossterm()),
                Clear(ClearType::CurrentLine),
                Print(msg)
            )?;
            return Ok(());
        }

        let tab = session.active_tab();
        let marker = if tab.buffer.is_dirty() { " [+]" } else { "" };
        let left = format!(" {} | {}{} ", session.mode.display(), tab.title, marker);
        let right = format!(" {}:{} ", tab.cursor.line + 1, tab.cursor.col + 1);

        let gap = (self.width as usize).saturating_sub(left.len() + right.len());
        let bar: String = format!("{}{}{}", left, " ".repeat(gap), right)
            .chars()
            .take(self.width as usize)
            .collect();

        queue!(
            out,
            SetBackgroundColor(theme.status_bar_bg.to_crossterm()),
            SetForegroundColor(theme.status_bar_fg.to_crossterm()),
            Print(bar),
            SetBackgroundColor(theme.background.to_crossterm())
        )?;
        Ok(())
    }

    fn place_cursor(&self, out: &mut impl Write, session: &Session) -> io::Result<()> {
        let (col, row) = match session.mode {
            Mode::Prompt(kind) => {
                let col = (kind.label().len() + session.prompt_input.len()) as u16;
                (
                    col.min(self.width.saturating_sub(1)),
                    self.height.saturating_sub(1),
                )
            }
            Mode::Edit => {
                let tab = session.active_tab();
                let gutter = if session.settings.show_line_numbers {
                    GUTTER_WIDTH
                } else {
                    0
                };
                (
                    gutter + tab.cursor.col as u16,
                    1 + (tab.cursor.line - tab.scroll_offset) as u16,
                )
            }
        };

        queue!(out, MoveTo(col, row), SetCursorStyle::BlinkingBar, Show)?;
        Ok(())
    }
}
