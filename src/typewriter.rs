#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub pause_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_ms: 40,
            delete_ms: 20,
            pause_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Pausing,
    Deleting,
}

/// Endless type / pause / delete loop over a list of words.
///
/// Driven by [`Typewriter::advance`] with the time since the last call, so any
/// ticker can run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    words: &'static [&'static str],
    timing: Timing,
    word: usize,
    chars: usize,
    phase: Phase,
    pending_ms: u64,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], timing: Timing) -> Self {
        Self {
            words,
            timing,
            word: 0,
            chars: 0,
            phase: Phase::Typing,
            pending_ms: 0,
        }
    }

    pub fn text(&self) -> &'static str {
        let Some(word) = self.words.get(self.word) else {
            return "";
        };
        match word.char_indices().nth(self.chars) {
            Some((i, _)) => &word[..i],
            None => word,
        }
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.words.is_empty() {
            return;
        }
        self.pending_ms += elapsed_ms;
        loop {
            let cost = self.step_cost().max(1);
            if self.pending_ms < cost {
                break;
            }
            self.pending_ms -= cost;
            self.step();
        }
    }

    fn step_cost(&self) -> u64 {
        match self.phase {
            Phase::Typing => self.timing.type_ms,
            Phase::Pausing => self.timing.pause_ms,
            Phase::Deleting => self.timing.delete_ms,
        }
    }

    fn word_len(&self) -> usize {
        self.words[self.word].chars().count()
    }

    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                self.chars = (self.chars + 1).min(self.word_len());
                if self.chars == self.word_len() {
                    self.phase = Phase::Pausing;
                }
            }
            Phase::Pausing => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORDS: [&str; 2] = ["ab", "c"];

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new(&WORDS, Timing::default());
        assert_eq!(tw.text(), "");
        tw.advance(40);
        assert_eq!(tw.text(), "a");
        tw.advance(40);
        assert_eq!(tw.text(), "ab");

        // holds the finished word
        tw.advance(1999);
        assert_eq!(tw.text(), "ab");
        tw.advance(1);
        assert_eq!(tw.text(), "ab");

        tw.advance(20);
        assert_eq!(tw.text(), "a");
        tw.advance(20);
        assert_eq!(tw.word_index(), 1);
        assert_eq!(tw.text(), "");

        tw.advance(40);
        assert_eq!(tw.text(), "c");
        tw.advance(2000 + 20);
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_large_step_catches_up() {
        let mut a = Typewriter::new(&WORDS, Timing::default());
        let mut b = a.clone();
        for _ in 0..50 {
            a.advance(20);
        }
        b.advance(1000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_ticks_accumulate() {
        let mut tw = Typewriter::new(&WORDS, Timing::default());
        tw.advance(25);
        assert_eq!(tw.text(), "");
        tw.advance(15);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_empty_word_list() {
        static NONE: [&str; 0] = [];
        let mut tw = Typewriter::new(&NONE, Timing::default());
        tw.advance(10_000);
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_zero_timing_does_not_spin() {
        let timing = Timing {
            type_ms: 0,
            delete_ms: 0,
            pause_ms: 0,
        };
        let mut tw = Typewriter::new(&WORDS, timing);
        tw.advance(3);
        assert_eq!(tw.text(), "ab");
    }
}
