use ratatui::style::{Color, Modifier, Style};

use crate::session::grid::Status;

/// Cell styles looked up by status, in `Status` discriminant order.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub status: [Style; Status::COUNT],
    pub border: Style,
    pub accent: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let mut status = [Style::default(); Status::COUNT];
        status[Status::Queued.index()] = Style::default();
        status[Status::Failed.index()] = Style::default().fg(Color::Indexed(197));
        status[Status::Passed.index()] = Style::default().add_modifier(Modifier::DIM);
        status[Status::Active.index()] = Style::default().add_modifier(Modifier::REVERSED);

        Self {
            status,
            border: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    pub fn cell_style(&self, status: Status) -> Style {
        self.status[status.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_style() {
        let theme = Theme::default();
        assert_eq!(theme.cell_style(Status::Queued), Style::default());
        assert!(
            theme
                .cell_style(Status::Active)
                .add_modifier
                .contains(Modifier::REVERSED)
        );
        assert!(
            theme
                .cell_style(Status::Passed)
                .add_modifier
                .contains(Modifier::DIM)
        );
        assert_eq!(theme.cell_style(Status::Failed).fg, Some(Color::Indexed(197)));
    }

    #[test]
    fn test_status_indices_are_dense() {
        for (i, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
        }
    }
}
