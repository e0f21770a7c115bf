use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::input::InputBuffer;
use crate::layout::{ChromeMetrics, KeyboardEvent, LayoutSizer};
use crate::store::SetlistStore;

/// Rows occupied by the shortcut panel that appears while the input field
/// has focus. This panel is the on-screen keyboard of the terminal world:
/// its show/hide transitions are the external signal the layout sizer
/// reacts to.
const KEY_PANEL_HEIGHT: u16 = 6;

/// Which region currently receives keystrokes. Keeping this explicit makes
/// it easy to reason about what each key should do and when the key panel
/// is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Lists,
    Input,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI: the two song lists, the
/// text being typed, the layout sizer, and the transient presentation bits
/// (focus, selection, footer status).
pub struct App {
    store: SetlistStore,
    input: InputBuffer,
    sizer: LayoutSizer,
    metrics: ChromeMetrics,
    focus: Focus,
    selected: usize,
    status: Option<StatusMessage>,
}

impl App {
    /// Build the initial state for a terminal of the given height. Both
    /// lists start empty; everything else follows from that.
    pub fn new(screen_height: u16) -> Self {
        let metrics = ChromeMetrics::terminal_rows();
        Self {
            store: SetlistStore::new(),
            input: InputBuffer::new(),
            sizer: LayoutSizer::new(screen_height, metrics),
            metrics,
            focus: Focus::Lists,
            selected: 0,
            status: None,
        }
    }

    /// The list store, exposed read-only for rendering and tests.
    pub fn store(&self) -> &SetlistStore {
        &self.store
    }

    /// The text currently being typed.
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// The layout sizer, exposed read-only so tests can observe the
    /// keyboard-driven height without a terminal.
    pub fn sizer(&self) -> &LayoutSizer {
        &self.sizer
    }

    /// Dispatch a key press. Returns `Ok(true)` when the user asked to
    /// quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match self.focus {
            Focus::Lists => self.handle_lists_key(code),
            Focus::Input => self.handle_input_key(code),
        }
    }

    /// Advance the lists-region height one easing step. Called by the event
    /// loop every tick so transitions settle while the app idles.
    pub fn tick(&mut self) {
        self.sizer.step(self.store.reset_available());
    }

    /// Terminal was resized; snap the layout to the new height.
    pub fn handle_resize(&mut self, rows: u16) {
        self.sizer
            .set_screen_height(rows, self.store.reset_available());
    }

    fn handle_lists_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => {
                self.selected = self.store.set_list().len().saturating_sub(1);
            }
            KeyCode::Enter => self.mark_selected_used(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.perform_reset(),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Tab => {
                self.focus_input();
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_input_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Esc | KeyCode::Tab => self.focus_lists(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char(ch) => {
                self.input.push_char(ch);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Move focus to the text field and announce the key panel to the sizer
    /// as a keyboard-shown event.
    fn focus_input(&mut self) {
        self.clear_status();
        self.focus = Focus::Input;
        self.sizer.handle_keyboard(KeyboardEvent::Shown {
            height: KEY_PANEL_HEIGHT,
        });
    }

    /// Return focus to the lists; the key panel goes away with it.
    fn focus_lists(&mut self) {
        self.focus = Focus::Lists;
        self.sizer.handle_keyboard(KeyboardEvent::Hidden);
    }

    fn submit_input(&mut self) {
        if self.input.submit(&mut self.store) {
            let added = self.store.set_list().last().map(|song| song.title.clone());
            if let Some(title) = added {
                self.set_status(format!("Added '{title}'."), StatusKind::Info);
            }
            self.ensure_in_bounds();
        }
        // A blank submission is a silent no-op; the buffer keeps whatever
        // whitespace was typed.
    }

    fn mark_selected_used(&mut self) {
        if self.store.set_list().is_empty() {
            self.set_status("No song selected.", StatusKind::Error);
            return;
        }
        let title = self.store.set_list()[self.selected].title.clone();
        match self.store.move_to_used(self.selected) {
            Ok(()) => {
                self.set_status(format!("Marked '{title}' as used."), StatusKind::Info);
            }
            Err(err) => {
                self.set_status(err.to_string(), StatusKind::Error);
            }
        }
        self.ensure_in_bounds();
    }

    fn perform_reset(&mut self) {
        if !self.store.reset_available() {
            self.set_status("Nothing to reset yet.", StatusKind::Info);
            return;
        }
        let moved = self.store.reset();
        let noun = if moved == 1 { "song" } else { "songs" };
        self.set_status(
            format!("Returned {moved} {noun} to the set list."),
            StatusKind::Info,
        );
        self.selected = 0;
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.store.set_list().len();
        if len == 0 {
            return;
        }
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len as isize {
            new = len as isize - 1;
        }
        self.selected = new as usize;
    }

    fn ensure_in_bounds(&mut self) {
        let len = self.store.set_list().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Render the whole screen: title bar, the two list panels at the
    /// sizer's current animated height, the reset control when available,
    /// the input line, the key panel while typing, and the status footer.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = self.metrics.padding.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let reset_visible = self.store.reset_available();
        let keyboard_height = self.sizer.keyboard_height();

        let mut constraints = vec![
            Constraint::Length(self.metrics.title),
            Constraint::Length(self.sizer.current_height()),
        ];
        if reset_visible {
            constraints.push(Constraint::Length(self.metrics.reset));
        }
        constraints.push(Constraint::Length(self.metrics.input));
        if keyboard_height > 0 {
            constraints.push(Constraint::Length(keyboard_height));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(content_area);

        let mut idx = 0;
        self.draw_title(frame, chunks[idx]);
        idx += 1;
        self.draw_lists(frame, chunks[idx]);
        idx += 1;
        if reset_visible {
            self.draw_reset_control(frame, chunks[idx]);
            idx += 1;
        }
        self.draw_input(frame, chunks[idx]);
        idx += 1;
        if keyboard_height > 0 {
            self.draw_key_panel(frame, chunks[idx]);
        }

        self.draw_footer(frame, footer_area);
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Setlist Manager",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn draw_lists(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_set_list(frame, panels[0]);
        self.draw_used_list(frame, panels[1]);
    }

    fn draw_set_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Set List").borders(Borders::ALL);

        if self.store.set_list().is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                "No unused songs",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = self
            .store
            .set_list()
            .iter()
            .map(|song| ListItem::new(song.title.clone()))
            .collect();

        let highlight = if self.focus == Focus::Lists {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_used_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Used Songs").borders(Borders::ALL);

        if self.store.used().is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                "No used songs",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let items: Vec<ListItem> = self
            .store
            .used()
            .iter()
            .map(|song| {
                ListItem::new(Span::styled(
                    song.title.clone(),
                    Style::default().fg(Color::Gray),
                ))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn draw_reset_control(&self, frame: &mut Frame, area: Rect) {
        let control = Paragraph::new(Line::from(Span::styled(
            "Reset Used Songs to Set List  (press r)",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(control, area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Input;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title("Enter song")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);

        let content = if self.input.value().is_empty() && !focused {
            Span::styled("press a to add a song", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.input.value().to_string())
        };
        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

        if focused {
            frame.set_cursor_position((inner.x + self.input.len_chars() as u16, inner.y));
        }
    }

    /// The on-screen keyboard stand-in: a shortcut reference that occupies
    /// the bottom of the screen exactly while the input field is focused.
    fn draw_key_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Keys").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from("Type a song title and press Enter to add it."),
            Line::from("Blank titles are ignored."),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: add • Backspace: delete • Esc/Tab: done typing",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let help = match self.focus {
            Focus::Lists => "a: add song • Enter: mark used • r: reset • q: quit",
            Focus::Input => "Enter: add • Esc/Tab: back to lists",
        };

        let lines = vec![
            status_line,
            Line::from(Span::styled(help, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
