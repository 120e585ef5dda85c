use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::grid::{Cell, Grid};
use crate::ui::theme::Theme;

/// Draws the grid row by row, one styled span per cell.
pub struct TypingGrid<'a> {
    grid: &'a Grid,
    theme: &'a Theme,
}

impl<'a> TypingGrid<'a> {
    pub fn new(grid: &'a Grid, theme: &'a Theme) -> Self {
        Self { grid, theme }
    }

    fn cell_span(&self, cell: &Cell) -> Span<'static> {
        Span::styled(
            cell.display_char().to_string(),
            self.theme.cell_style(cell.status),
        )
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        self.grid
            .rows()
            .iter()
            .map(|row| Line::from(row.iter().map(|c| self.cell_span(c)).collect::<Vec<_>>()))
            .collect()
    }
}

impl Widget for TypingGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
