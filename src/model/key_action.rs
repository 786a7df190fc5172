//! Domain-level keyboard actions independent of key bindings.

/// What a key press asks the viewer to do.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the viewer. Default: q/Esc
    Quit,
    /// Scroll data rows up one line. Default: k/↑
    ScrollUp,
    /// Scroll data rows down one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page. Default: PageUp/Ctrl+u
    PageUp,
    /// Scroll down by one page. Default: PageDown/Ctrl+d
    PageDown,
    /// Jump to the first data row. Default: g/Home
    ScrollToTop,
    /// Next sortable table. Default: Tab/]
    NextTable,
    /// Previous sortable table. Default: Shift+Tab/[
    PrevTable,
    /// Activate the header cell at this 0-based column. Default: 1-9
    SortColumn(usize),
}
