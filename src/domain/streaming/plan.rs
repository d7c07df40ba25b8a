//! Pure chunk schedule for the typewriter effect.
//!
//! A [`StreamPlan`] turns a response string into an ordered list of growing
//! word-prefix chunks, each tagged with the pause that should follow it. No
//! timers live here; the async streamer (or a test) decides what to do with
//! the computed delays, so a zero base delay makes the whole schedule
//! instant and deterministic.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::time::Duration;

/// Function words that stream faster than the base rate.
static QUICK_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    ]
    .into_iter()
    .collect()
});

/// One scheduled chunk: the cumulative prefix text plus the pause before the
/// next chunk. `delay_after` is `None` on the final chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChunk {
    pub text: String,
    pub is_final: bool,
    pub delay_after: Option<Duration>,
}

/// Word-by-word emission schedule for one response.
#[derive(Debug, Clone)]
pub struct StreamPlan {
    words: Vec<String>,
    base_delay: Duration,
    next_index: usize,
}

impl StreamPlan {
    /// Builds a schedule for the given text.
    ///
    /// Whitespace-only text still produces exactly one (empty) final chunk so
    /// consumers always observe a completion event.
    pub fn new(text: &str, base_delay: Duration) -> Self {
        let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            words.push(String::new());
        }
        Self {
            words,
            base_delay,
            next_index: 0,
        }
    }

    /// Number of words (and therefore chunks) in the schedule.
    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}

impl Iterator for StreamPlan {
    type Item = PlannedChunk;

    fn next(&mut self) -> Option<PlannedChunk> {
        if self.next_index >= self.words.len() {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        let text = self.words[..=index].join(" ");
        let is_final = index == self.words.len() - 1;
        let delay_after = if is_final {
            None
        } else {
            Some(word_delay(
                self.base_delay,
                index,
                self.words.len(),
                &self.words[index],
            ))
        };

        Some(PlannedChunk {
            text,
            is_final,
            delay_after,
        })
    }
}

/// Pause after emitting the word at `index`. Exactly one rule applies, in
/// priority order: sentence-ending punctuation, quick function words, the
/// final 20% of the text, then the base rate.
pub fn word_delay(base: Duration, index: usize, total_words: usize, word: &str) -> Duration {
    if word.ends_with('.') || word.ends_with('!') || word.ends_with('?') {
        return base.mul_f64(1.5);
    }
    if QUICK_WORDS.contains(word.to_lowercase().as_str()) {
        return base.mul_f64(0.5);
    }
    if index as f64 > total_words as f64 * 0.8 {
        return base.mul_f64(0.7);
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: Duration = Duration::from_millis(50);

    mod schedule {
        use super::*;

        #[test]
        fn chunks_grow_one_word_at_a_time() {
            let chunks: Vec<PlannedChunk> = StreamPlan::new("plan the best party", BASE).collect();
            let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
            assert_eq!(
                texts,
                vec!["plan", "plan the", "plan the best", "plan the best party"]
            );
        }

        #[test]
        fn only_last_chunk_is_final_and_has_no_delay() {
            let chunks: Vec<PlannedChunk> = StreamPlan::new("one two three", BASE).collect();
            assert_eq!(chunks.iter().filter(|c| c.is_final).count(), 1);
            let last = chunks.last().unwrap();
            assert!(last.is_final);
            assert!(last.delay_after.is_none());
            assert!(chunks[..chunks.len() - 1]
                .iter()
                .all(|c| c.delay_after.is_some()));
        }

        #[test]
        fn empty_text_yields_single_empty_final_chunk() {
            let chunks: Vec<PlannedChunk> = StreamPlan::new("   ", BASE).collect();
            assert_eq!(chunks.len(), 1);
            assert!(chunks[0].is_final);
            assert_eq!(chunks[0].text, "");
        }

        #[test]
        fn multiple_spaces_collapse_to_single_separators() {
            let chunks: Vec<PlannedChunk> = StreamPlan::new("hello   there", BASE).collect();
            assert_eq!(chunks.last().unwrap().text, "hello there");
        }
    }

    mod delays {
        use super::*;

        #[test]
        fn sentence_punctuation_slows_down() {
            assert_eq!(word_delay(BASE, 0, 10, "fun."), BASE.mul_f64(1.5));
            assert_eq!(word_delay(BASE, 0, 10, "wow!"), BASE.mul_f64(1.5));
            assert_eq!(word_delay(BASE, 0, 10, "right?"), BASE.mul_f64(1.5));
        }

        #[test]
        fn quick_words_speed_up() {
            assert_eq!(word_delay(BASE, 0, 10, "the"), BASE.mul_f64(0.5));
            assert_eq!(word_delay(BASE, 0, 10, "With"), BASE.mul_f64(0.5));
        }

        #[test]
        fn tail_of_text_runs_slightly_faster() {
            assert_eq!(word_delay(BASE, 9, 10, "party"), BASE.mul_f64(0.7));
        }

        #[test]
        fn ordinary_word_uses_base_delay() {
            assert_eq!(word_delay(BASE, 2, 10, "celebration"), BASE);
        }

        #[test]
        fn punctuation_rule_wins_over_tail_rule() {
            assert_eq!(word_delay(BASE, 9, 10, "done."), BASE.mul_f64(1.5));
        }

        #[test]
        fn quick_word_rule_wins_over_tail_rule() {
            assert_eq!(word_delay(BASE, 9, 10, "the"), BASE.mul_f64(0.5));
        }
    }

    proptest! {
        #[test]
        fn chunk_lengths_never_decrease(text in "[ -~]{0,200}") {
            let chunks: Vec<PlannedChunk> = StreamPlan::new(&text, BASE).collect();
            for pair in chunks.windows(2) {
                prop_assert!(pair[1].text.len() >= pair[0].text.len());
            }
        }

        #[test]
        fn exactly_one_final_chunk_and_it_is_last(text in "[ -~]{0,200}") {
            let chunks: Vec<PlannedChunk> = StreamPlan::new(&text, BASE).collect();
            prop_assert_eq!(chunks.iter().filter(|c| c.is_final).count(), 1);
            prop_assert!(chunks.last().unwrap().is_final);
        }

        #[test]
        fn last_chunk_reconstructs_the_words(text in "[ -~]{1,200}") {
            let chunks: Vec<PlannedChunk> = StreamPlan::new(&text, BASE).collect();
            let expected = text.split_whitespace().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(chunks.last().unwrap().text.clone(), expected);
        }
    }
}
