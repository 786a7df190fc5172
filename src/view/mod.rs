//! TUI rendering and terminal management (impure shell)

pub mod table_view;

use crate::config::keybindings::KeyBindings;
use crate::document::Document;
use crate::model::{Direction, KeyAction};
use crate::registrar::TableRegistrar;
use crate::sort::Activation;
use crate::state::{detect_header_click, AppState, HeaderLayout};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    document: Document,
    registrar: TableRegistrar,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Header geometry from the last draw (for mouse click detection)
    last_header_layout: HeaderLayout,
    /// Height of the table area on the last draw (for paging)
    last_table_height: u16,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        document: Document,
        registrar: TableRegistrar,
        show_row_numbers: bool,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            document,
            registrar,
            show_row_numbers,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(_, _) => {}
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        document: Document,
        registrar: TableRegistrar,
        show_row_numbers: bool,
    ) -> Self {
        let app_state = AppState::new(registrar.registered_ids(), show_row_numbers);
        Self {
            terminal,
            document,
            registrar,
            app_state,
            key_bindings: KeyBindings::default(),
            last_header_layout: HeaderLayout::default(),
            last_table_height: 0,
        }
    }

    /// Document in its current row order.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Handle a key event. Returns `true` when the user quits.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        match action {
            KeyAction::Quit => return true,
            KeyAction::SortColumn(column) => {
                self.activate(Activation::Cell(column));
            }
            other => {
                let (max_scroll, page) = self.scroll_bounds();
                self.app_state.navigate(other, max_scroll, page);
            }
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let click = detect_header_click(mouse.column, mouse.row, &self.last_header_layout);
                if let Some(activation) = click.activation() {
                    self.activate(activation);
                }
            }
            MouseEventKind::ScrollDown => {
                let (max_scroll, page) = self.scroll_bounds();
                self.app_state.navigate(KeyAction::ScrollDown, max_scroll, page);
            }
            MouseEventKind::ScrollUp => {
                let (max_scroll, page) = self.scroll_bounds();
                self.app_state.navigate(KeyAction::ScrollUp, max_scroll, page);
            }
            _ => {}
        }
    }

    /// Route a header activation to the selected table's controller.
    fn activate(&mut self, activation: Activation) -> Option<Direction> {
        let id = self.app_state.selected_table()?;
        let direction = self.registrar.activate(&mut self.document, id, activation);
        debug!(table = %id, ?activation, ?direction, "header activation");
        direction
    }

    /// Largest scroll offset and page size for the selected table.
    fn scroll_bounds(&self) -> (usize, usize) {
        let page = table_view::visible_rows(self.last_table_height);
        let rows = self
            .app_state
            .selected_table()
            .and_then(|id| self.document.table(id))
            .map_or(0, |t| t.data_rows().len());
        (rows.saturating_sub(page), page)
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let document = &self.document;
        let app_state = &self.app_state;
        let marker = self.registrar.opt_in_marker();
        let mut header_layout = HeaderLayout::default();
        let mut table_height = 0;

        self.terminal.draw(|frame| {
            let [table_area, help_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());
            table_height = table_area.height;

            match app_state.selected_table().and_then(|id| document.table(id)) {
                Some(table) => {
                    header_layout = table_view::render_table(frame, table_area, table, app_state);
                }
                None => table_view::render_empty(frame, table_area, marker),
            }
            frame.render_widget(Paragraph::new(table_view::help_line()), help_area);
        })?;

        self.last_header_layout = header_layout;
        self.last_table_height = table_height;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        document: Document,
        registrar: TableRegistrar,
        show_row_numbers: bool,
    ) -> Self {
        Self::with_terminal(terminal, document, registrar, show_row_numbers)
    }
}

/// Run the interactive viewer over `document`.
///
/// Terminal state is restored even when the event loop fails.
pub fn run_viewer(
    document: Document,
    registrar: TableRegistrar,
    show_row_numbers: bool,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(document, registrar, show_row_numbers)?;

    let result = app.run();

    restore_terminal()?;

    result
}

fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
