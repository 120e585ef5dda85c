use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::result::TestResult;
use crate::ui::theme::Theme;

pub const NEXT_PROMPT: &str = "[ENTER] next or [ESC] to quit";

pub struct ResultPanel<'a> {
    result: &'a TestResult,
    theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a TestResult, theme: &'a Theme) -> Self {
        Self { result, theme }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = self
            .result
            .to_string()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), self.theme.accent)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(NEXT_PROMPT, self.theme.hint)));
        lines
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Result ")
            .border_style(self.theme.border);
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
