/// A laid-out line: the words that share one row of the grid.
pub type Line = Vec<String>;

/// Greedy word wrap measured in code points.
///
/// Every word is followed by one separator, so a word only joins the current
/// line while `length + word_len <= width`. A word longer than `width` gets a
/// line of its own and is not split.
pub fn wrap_words(words: &[String], width: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line: Line = Vec::new();
    let mut length = 0usize;

    for word in words {
        let word_len = word.chars().count();
        if !line.is_empty() && length + word_len > width {
            lines.push(std::mem::take(&mut line));
            length = 0;
        }

        line.push(word.clone());
        length += word_len + 1;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Code points a line occupies, counting separators between its words.
pub fn line_len(line: &[String]) -> usize {
    let chars: usize = line.iter().map(|w| w.chars().count()).sum();
    chars + line.len().saturating_sub(1)
}
