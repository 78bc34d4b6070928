//! UI area positioning for mouse event handling
//!
//! Drawing and mouse hit-testing both derive row positions from this module,
//! so a click always lands on the row that was drawn there.

/// Height of the header bar (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of a bordered single-line input or button
pub const BOX_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// UI area for calculating mouse Y offset
///
/// # Layout
///
/// ```text
/// Row 0-2:  Header bar (3 rows with borders)
/// Row 3+:   Main content area
///           - Listing: bordered list of forms
///           - Designer: form title box, then the bordered field list (left)
///                       and the field properties panel (right)
///           - Runtime: bordered stack of inputs (left) and responses (right)
/// Bottom:   Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Header bar itself (rows 0-2)
    Header,
    /// Main content (starts after header)
    Content,
    /// Rows of the forms list (starts after header + border)
    ListContent,
    /// Rows of the designer field list (after header + title box + border)
    DesignerFields,
    /// Input boxes of the runtime page (after header + border)
    RuntimeInputs,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::Content => HEADER_HEIGHT,
            UiArea::ListContent => HEADER_HEIGHT + 1, // +1 for border
            UiArea::DesignerFields => HEADER_HEIGHT + BOX_HEIGHT + 1, // +1 for border
            UiArea::RuntimeInputs => HEADER_HEIGHT + 1, // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse row is within this UI area (at or after start)
    #[inline]
    pub fn contains_row(self, mouse_row: u16) -> bool {
        mouse_row >= self.start_y()
    }

    /// Rows available to this area on a terminal of `terminal_height` rows,
    /// excluding the closing border and the status bar
    #[inline]
    pub fn visible_rows(self, terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(self.start_y() + 1 + STATUS_BAR_HEIGHT)
    }
}

/// Width of the left column in two-column views
pub fn left_column_width(terminal_width: u16) -> u16 {
    terminal_width.saturating_mul(3) / 5
}

/// First visible item of a list of `len` items shown `capacity` at a time,
/// scrolled just far enough to keep `focus` in view
pub fn visible_window(len: usize, capacity: usize, focus: Option<usize>) -> usize {
    if capacity == 0 || len <= capacity {
        return 0;
    }
    match focus {
        Some(focus) if focus >= capacity => (focus + 1 - capacity).min(len - capacity),
        _ => 0,
    }
}

/// Clickable rows of the designer's field properties panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTarget {
    FieldTitle,
    FieldPlaceholder,
    AddToggle,
    MenuItem(usize),
}

/// Properties panel element under `mouse_row`.
///
/// The panel stacks, inside its border: the field title input, the field
/// placeholder input, the "Add Field" button, then one row per menu item.
pub fn designer_panel_target(mouse_row: u16, menu_len: usize) -> Option<PanelTarget> {
    let row = mouse_row.checked_sub(UiArea::Content.start_y() + 1)?;
    match row / BOX_HEIGHT {
        0 => Some(PanelTarget::FieldTitle),
        1 => Some(PanelTarget::FieldPlaceholder),
        2 => Some(PanelTarget::AddToggle),
        _ => {
            let item = (row - 3 * BOX_HEIGHT) as usize;
            (item < menu_len).then_some(PanelTarget::MenuItem(item))
        }
    }
}
