//! Locale-free step descriptions
//!
//! A [`Narration`] holds the facts a description is built from. Text is
//! produced on demand from the `narration.*` keys in `locales/`, so a trace
//! can be rendered in any supported language without regenerating it.

use serde::{Deserialize, Serialize};

use crate::i18n::{current_language, Language};

use super::types::Value;

/// What a step says about itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Narration {
    Start,
    Split { low: usize, high: usize, mid: usize },
    MergeRange { low: usize, high: usize },
    Compare { left: Value, right: Value },
    TakeLeft { value: Value },
    TakeRight { value: Value },
    DrainLeft { value: Value },
    DrainRight { value: Value },
    RangeSorted { low: usize, high: usize },
    Finished,
}

impl Narration {
    /// Render in the current locale
    pub fn describe(&self) -> String {
        self.describe_in(current_language())
    }

    /// Render in `lang`
    pub fn describe_in(&self, lang: Language) -> String {
        use rust_i18n::t;

        let locale = lang.code();
        let text = match *self {
            Narration::Start => t!("narration.start", locale = locale),
            Narration::Split { low, high, mid } => t!(
                "narration.split",
                locale = locale,
                low = low,
                high = high,
                mid = mid
            ),
            Narration::MergeRange { low, high } => {
                t!("narration.merge_range", locale = locale, low = low, high = high)
            }
            Narration::Compare { left, right } => {
                t!("narration.compare", locale = locale, left = left, right = right)
            }
            Narration::TakeLeft { value } => {
                t!("narration.take_left", locale = locale, value = value)
            }
            Narration::TakeRight { value } => {
                t!("narration.take_right", locale = locale, value = value)
            }
            Narration::DrainLeft { value } => {
                t!("narration.drain_left", locale = locale, value = value)
            }
            Narration::DrainRight { value } => {
                t!("narration.drain_right", locale = locale, value = value)
            }
            Narration::RangeSorted { low, high } => {
                t!("narration.range_sorted", locale = locale, low = low, high = high)
            }
            Narration::Finished => t!("narration.finished", locale = locale),
        };
        text.into_owned()
    }

    /// Value written to the array by this step, if any
    pub fn placed_value(&self) -> Option<Value> {
        match *self {
            Narration::TakeLeft { value }
            | Narration::TakeRight { value }
            | Narration::DrainLeft { value }
            | Narration::DrainRight { value } => Some(value),
            _ => None,
        }
    }

    /// Whether the placed value came from the left half
    pub fn placed_from_left(&self) -> Option<bool> {
        match self {
            Narration::TakeLeft { .. } | Narration::DrainLeft { .. } => Some(true),
            Narration::TakeRight { .. } | Narration::DrainRight { .. } => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_interpolation() {
        let text = Narration::Split {
            low: 0,
            high: 11,
            mid: 5,
        }
        .describe_in(Language::English);
        assert!(text.contains("[0 - 11]"));
        assert!(text.contains('5'));
    }

    #[test]
    fn test_japanese_interpolation() {
        let text = Narration::Compare { left: 42, right: 17 }.describe_in(Language::Japanese);
        assert_eq!(text, "42 と 17 を比較。");
    }

    #[test]
    fn test_languages_differ() {
        let n = Narration::Finished;
        assert_ne!(n.describe_in(Language::English), n.describe_in(Language::Japanese));
    }

    #[test]
    fn test_placed_value() {
        assert_eq!(Narration::DrainRight { value: 9 }.placed_value(), Some(9));
        assert_eq!(Narration::TakeLeft { value: 3 }.placed_from_left(), Some(true));
        assert_eq!(Narration::Compare { left: 1, right: 2 }.placed_value(), None);
        assert_eq!(Narration::Start.placed_from_left(), None);
    }
}
