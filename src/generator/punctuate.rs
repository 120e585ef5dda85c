use rand::rngs::SmallRng;

use crate::config::Distribution;
use crate::generator::weighted::{DistributionError, WeightedSampler};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    None,
    Period,
    Comma,
    Quotation,
    Question,
    Exclamation,
    Brackets,
    Braces,
    Parenthesis,
    Colon,
    Semicolon,
}

impl Punctuation {
    pub fn apply(self, word: &str) -> String {
        match self {
            Punctuation::None => word.to_string(),
            Punctuation::Period => format!("{word}."),
            Punctuation::Comma => format!("{word},"),
            Punctuation::Quotation => format!("\"{word}\""),
            Punctuation::Question => format!("{word}?"),
            Punctuation::Exclamation => format!("{word}!"),
            Punctuation::Brackets => format!("[{word}]"),
            Punctuation::Braces => format!("{{{word}}}"),
            Punctuation::Parenthesis => format!("({word})"),
            Punctuation::Colon => format!("{word}:"),
            Punctuation::Semicolon => format!("{word};"),
        }
    }

    pub fn ends_sentence(self) -> bool {
        matches!(
            self,
            Punctuation::Period | Punctuation::Question | Punctuation::Exclamation
        )
    }
}

/// Marks that may close the last word of a test.
fn sentence_end_weights(dist: &Distribution) -> [(Punctuation, i64); 3] {
    [
        (Punctuation::Period, dist.period),
        (Punctuation::Question, dist.question),
        (Punctuation::Exclamation, dist.exclamation),
    ]
}

/// Marks for words in the middle of a test. The plain-word weight doubles as
/// the weight of leaving a word untouched.
fn interior_weights(dist: &Distribution) -> [(Punctuation, i64); 11] {
    [
        (Punctuation::None, dist.word),
        (Punctuation::Period, dist.period),
        (Punctuation::Comma, dist.comma),
        (Punctuation::Quotation, dist.quotation),
        (Punctuation::Question, dist.question),
        (Punctuation::Exclamation, dist.exclamation),
        (Punctuation::Brackets, dist.brackets),
        (Punctuation::Braces, dist.braces),
        (Punctuation::Parenthesis, dist.parenthesis),
        (Punctuation::Colon, dist.colon),
        (Punctuation::Semicolon, dist.semicolon),
    ]
}

/// Upper-cases the first code point of `word`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Post-processing pass that turns a word list into punctuated sentences.
///
/// The first word is capitalized and the last one always closes a sentence.
/// Interior words get a weighted mark each; a sentence-ending mark
/// capitalizes the following word.
pub fn apply_punctuation(
    words: &[String],
    dist: &Distribution,
    rng: &mut SmallRng,
) -> Result<Vec<String>, DistributionError> {
    let mut result = words.to_vec();
    let Some(last) = result.len().checked_sub(1) else {
        return Ok(result);
    };

    let endings = WeightedSampler::new(sentence_end_weights(dist))?;
    result[0] = capitalize(&result[0]);
    result[last] = endings.draw(rng).apply(&result[last]);

    if last < 2 {
        return Ok(result);
    }

    let interior = WeightedSampler::new(interior_weights(dist))?;
    for i in 1..last {
        let mark = interior.draw(rng);
        result[i] = mark.apply(&result[i]);
        if mark.ends_sentence() {
            result[i + 1] = capitalize(&result[i + 1]);
        }
    }

    Ok(result)
}
