use std::fmt;
use std::time::Duration;

use crate::session::grid::Grid;

/// Score of a finished test. Speed is keystroke-based: every key pressed
/// counts, including ones later undone with backspace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestResult {
    pub duration: Duration,
    pub total_keys: usize,
    pub correct_keys: usize,
    /// `(total_keys / 5) / minutes`, truncated.
    pub wpm: u32,
    /// Correct keys over total keys, as a truncated percentage.
    pub accuracy: u32,
    /// Truncated WPM scaled by the accuracy fraction, truncated again.
    pub adjusted_wpm: u32,
}

impl TestResult {
    pub fn calculate(duration: Duration, grid: &Grid) -> Self {
        let total_keys: usize = grid.cells().map(|c| c.inputs.len()).sum();
        let correct_keys: usize = grid.cells().map(|c| c.correct_inputs()).sum();

        let minutes = duration.as_secs_f64() / 60.0;
        let wpm = if minutes > 0.0 {
            (total_keys / 5) as f64 / minutes
        } else {
            0.0
        };
        let accuracy = if total_keys > 0 {
            correct_keys as f64 / total_keys as f64
        } else {
            0.0
        };

        let wpm = wpm as u32;
        Self {
            duration,
            total_keys,
            correct_keys,
            wpm,
            accuracy: (accuracy * 100.0) as u32,
            adjusted_wpm: (f64::from(wpm) * accuracy) as u32,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:.2?}", self.duration)?;
        writeln!(f, "WPM  {:4}", self.wpm)?;
        writeln!(f, "ACC  {:3}%", self.accuracy)?;
        write!(f, "AWPM {:4}", self.adjusted_wpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::grid::Position;

    fn grid_with_inputs(text: &str, inputs: &[&str]) -> Grid {
        let words: Vec<String> = text.split(' ').map(str::to_string).collect();
        let mut grid = Grid::build(&words, text.chars().count());
        let mut col = 0;
        for typed in inputs {
            let cell = grid.cell_mut(Position::new(0, col)).unwrap();
            cell.inputs = typed.chars().collect();
            col += 1;
        }
        grid
    }

    #[test]
    fn test_ten_correct_keys_in_a_minute() {
        let inputs = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let grid = grid_with_inputs("abcdefghij", &inputs);
        let result = TestResult::calculate(Duration::from_secs(60), &grid);

        assert_eq!(result.total_keys, 10);
        assert_eq!(result.correct_keys, 10);
        assert_eq!(result.wpm, 2);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.adjusted_wpm, 2);
    }

    #[test]
    fn test_retries_count_every_keystroke() {
        // 'a' typed wrong then right, 'b' typed right twice.
        let grid = grid_with_inputs("ab", &["xa", "bb"]);
        let result = TestResult::calculate(Duration::from_secs(6), &grid);

        assert_eq!(result.total_keys, 4);
        assert_eq!(result.correct_keys, 3);
        assert_eq!(result.accuracy, 75);
        // 4 / 5 truncates to zero words.
        assert_eq!(result.wpm, 0);
    }

    #[test]
    fn test_adjusted_wpm_uses_accuracy_fraction() {
        let inputs: Vec<&str> = std::iter::repeat_n("a", 8).chain(["x", "x"]).collect();
        let grid = grid_with_inputs("aaaaaaaaaa", &inputs);
        let result = TestResult::calculate(Duration::from_secs(30), &grid);

        assert_eq!(result.wpm, 4);
        assert_eq!(result.accuracy, 80);
        assert_eq!(result.adjusted_wpm, 3);
    }

    #[test]
    fn test_adjusted_wpm_scales_truncated_wpm() {
        // 10 keys in 25s is 4.8 raw WPM, shown as 4; 4 * 0.9 truncates to 3.
        let inputs: Vec<&str> = std::iter::repeat_n("a", 9).chain(["x"]).collect();
        let grid = grid_with_inputs("aaaaaaaaaa", &inputs);
        let result = TestResult::calculate(Duration::from_secs(25), &grid);

        assert_eq!(result.wpm, 4);
        assert_eq!(result.accuracy, 90);
        assert_eq!(result.adjusted_wpm, 3);
    }

    #[test]
    fn test_no_keystrokes_scores_zero() {
        let grid = grid_with_inputs("abc", &[]);
        let result = TestResult::calculate(Duration::from_secs(10), &grid);
        assert_eq!(result.total_keys, 0);
        assert_eq!(result.wpm, 0);
        assert_eq!(result.accuracy, 0);
        assert_eq!(result.adjusted_wpm, 0);
    }

    #[test]
    fn test_zero_duration_scores_zero_speed() {
        let grid = grid_with_inputs("abcde", &["a", "b", "c", "d", "e"]);
        let result = TestResult::calculate(Duration::ZERO, &grid);
        assert_eq!(result.wpm, 0);
        assert_eq!(result.accuracy, 100);
    }

    #[test]
    fn test_display() {
        let grid = grid_with_inputs("abcdefghij", &["a"; 10]);
        let text = TestResult::calculate(Duration::from_secs(60), &grid).to_string();
        assert!(text.contains("WPM     2"));
        assert!(text.contains("ACC   10%"));
        assert!(text.contains("AWPM    0"));
    }
}
