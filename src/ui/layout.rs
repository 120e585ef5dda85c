use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Screen regions: a one-line header, the grid box, the result box (only
/// after a finished test) and a hint footer.
pub struct AppLayout {
    pub header: Rect,
    pub grid: Rect,
    pub result: Option<Rect>,
    pub footer: Rect,
}

pub const RESULT_HEIGHT: u16 = 8;

impl AppLayout {
    /// `grid_width` and `grid_rows` are the cell dimensions of the grid;
    /// borders are added here.
    pub fn new(area: Rect, grid_width: usize, grid_rows: usize, show_result: bool) -> Self {
        let box_width = clamp_u16(grid_width + 2).min(area.width);
        let grid_height = clamp_u16(grid_rows + 2);
        let result_height = if show_result { RESULT_HEIGHT } else { 0 };

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [column] = Layout::horizontal([Constraint::Length(box_width)])
            .flex(Flex::Center)
            .areas(body);

        let [grid, result] = Layout::vertical([
            Constraint::Length(grid_height),
            Constraint::Length(result_height),
        ])
        .flex(Flex::Center)
        .areas(column);

        Self {
            header,
            grid,
            result: show_result.then_some(result),
            footer,
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Joins hints with two spaces, dropping whole hints that would not fit.
pub fn hint_line(hints: &[&str], width: usize) -> String {
    let mut line = String::new();
    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let extra = if line.is_empty() { 0 } else { 2 };
        if line.chars().count() + extra + hint.chars().count() > width {
            break;
        }
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(hint);
    }
    line
}
