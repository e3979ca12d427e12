//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Below this width the form and the list are stacked instead of side by side
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Height of the title line plus the logo
pub const HEADER_HEIGHT: u16 = 6;

/// Header height when the logo is dropped to make room
const TITLE_ONLY_HEIGHT: u16 = 1;

/// Rows the stacked supplier panel always keeps: borders, both filter
/// inputs and enough of the results box to show the placeholder
pub const LIST_MIN_HEIGHT: u16 = 12;

/// Heights the registration form can be drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormHeights {
    /// Bordered inputs and buttons
    pub full: u16,
    /// One row per input and button
    pub compact: u16,
}

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
    /// The form has to be drawn with one-row inputs
    pub compact_form: bool,
}

fn is_side_by_side(area: Rect) -> bool {
    area.width >= SIDE_BY_SIDE_MIN_WIDTH
}

/// Width the form gets at this terminal size
pub fn form_width(area: Rect) -> u16 {
    if is_side_by_side(area) {
        area.width / 2
    } else {
        area.width
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
///
/// The logo is dropped first when space runs out, then the form switches to
/// one-row inputs. Stacked, the supplier panel never gets less than
/// `LIST_MIN_HEIGHT` rows.
pub fn calculate_main_layout(area: Rect, has_status: bool, form: FormHeights) -> MainLayout {
    let side_by_side = is_side_by_side(area);
    let bars = if has_status { 2 } else { 1 };
    let available = area.height.saturating_sub(bars);
    let list_min = if side_by_side { 0 } else { LIST_MIN_HEIGHT };
    let needed = form.full + list_min;

    let (header_height, compact_form) = if available >= HEADER_HEIGHT + needed {
        (HEADER_HEIGHT, false)
    } else if available >= TITLE_ONLY_HEIGHT + needed {
        (TITLE_ONLY_HEIGHT, false)
    } else {
        (TITLE_ONLY_HEIGHT, true)
    };

    // Header + content + (optional status) + help bar
    let mut constraints = vec![Constraint::Length(header_height), Constraint::Min(0)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let content = main_chunks[1];

    let (form_area, list) = if side_by_side {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content);
        (chunks[0], chunks[1])
    } else {
        let form_rows = if compact_form {
            form.compact.min(content.height.saturating_sub(LIST_MIN_HEIGHT))
        } else {
            form.full
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_rows), Constraint::Min(0)])
            .split(content);
        (chunks[0], chunks[1])
    };

    let (status, help) = if has_status {
        (Some(main_chunks[2]), main_chunks[3])
    } else {
        (None, main_chunks[2])
    };

    MainLayout {
        header: main_chunks[0],
        form: form_area,
        list,
        status,
        help,
        compact_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: FormHeights = FormHeights {
        full: 20,
        compact: 8,
    };

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(small, 40, 10);
        assert_eq!(popup, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_wide_terminal_is_side_by_side() {
        let layout = calculate_main_layout(Rect::new(0, 0, 120, 40), false, HEIGHTS);
        assert_eq!(layout.form.y, layout.list.y);
        assert!(layout.list.x > layout.form.x);
        assert!(layout.status.is_none());
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_narrow_terminal_is_stacked() {
        let layout = calculate_main_layout(Rect::new(0, 0, 60, 60), true, HEIGHTS);
        assert_eq!(layout.form.x, layout.list.x);
        assert_eq!(layout.form.height, 20);
        assert!(layout.list.y > layout.form.y);
        assert_eq!(layout.status.map(|r| r.y), Some(58));
    }

    #[test]
    fn test_full_layout_keeps_logo() {
        let layout = calculate_main_layout(Rect::new(0, 0, 60, 60), false, HEIGHTS);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert!(!layout.compact_form);
    }

    #[test]
    fn test_short_terminal_drops_logo_before_shrinking_form() {
        // 100x24 side by side: 23 rows minus the logo is too few for 20
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 24), false, HEIGHTS);
        assert_eq!(layout.header.height, 1);
        assert!(!layout.compact_form);
        assert_eq!(layout.form.height, 22);
        assert_eq!(layout.list.height, 22);
    }

    #[test]
    fn test_stacked_short_terminal_keeps_list_visible() {
        let heights = FormHeights {
            full: 17,
            compact: 7,
        };
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), false, heights);
        assert_eq!(layout.header.height, 1);
        assert!(layout.compact_form);
        assert_eq!(layout.form.height, 7);
        assert_eq!(layout.list.height, 15);
    }

    #[test]
    fn test_stacked_list_minimum_wins_over_compact_form() {
        let heights = FormHeights {
            full: 30,
            compact: 20,
        };
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 24), true, heights);
        // 24 rows - status - help bar - title = 21 rows of content
        assert_eq!(layout.form.height, 21 - LIST_MIN_HEIGHT);
        assert_eq!(layout.list.height, LIST_MIN_HEIGHT);
    }

    #[test]
    fn test_form_width_halves_when_side_by_side() {
        assert_eq!(form_width(Rect::new(0, 0, 120, 40)), 60);
        assert_eq!(form_width(Rect::new(0, 0, 80, 24)), 80);
    }
}
