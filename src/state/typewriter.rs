//! Rotating hero tagline: types a phrase, holds it, erases it, moves on.

pub const HERO_PHRASES: [&str; 5] = [
    "Full-stack Developer",
    "UI/UX Designer",
    "Web Developer",
    "Mobile Developer",
    "Tech Enthusiast",
];

const TYPE_SPEED_MS: u32 = 100;
const BACK_SPEED_MS: u32 = 60;
const BACK_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Typing,
    Erasing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    visible_chars: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase: 0,
            visible_chars: 0,
            mode: Mode::Typing,
        }
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|phrase| phrase.chars().take(self.visible_chars).collect())
            .unwrap_or_default()
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map_or(0, |phrase| phrase.chars().count())
    }

    /// Applies one keystroke and returns the delay before the next one.
    /// `None` means there is nothing to animate.
    pub fn tick(&mut self) -> Option<u32> {
        if self.phrases.is_empty() {
            return None;
        }

        match self.mode {
            Mode::Typing => {
                self.visible_chars = (self.visible_chars + 1).min(self.phrase_len());
                if self.visible_chars == self.phrase_len() {
                    self.mode = Mode::Erasing;
                    Some(BACK_DELAY_MS)
                } else {
                    Some(TYPE_SPEED_MS)
                }
            }
            Mode::Erasing => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    Some(TYPE_SPEED_MS)
                } else {
                    Some(BACK_SPEED_MS)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_then_erases() {
        let mut typewriter = Typewriter::new(["abc", "de"]);

        assert_eq!(typewriter.tick(), Some(TYPE_SPEED_MS));
        assert_eq!(typewriter.text(), "a");
        assert_eq!(typewriter.tick(), Some(TYPE_SPEED_MS));
        assert_eq!(typewriter.tick(), Some(BACK_DELAY_MS));
        assert_eq!(typewriter.text(), "abc");

        assert_eq!(typewriter.tick(), Some(BACK_SPEED_MS));
        assert_eq!(typewriter.text(), "ab");
        typewriter.tick();
        assert_eq!(typewriter.tick(), Some(TYPE_SPEED_MS));
        assert_eq!(typewriter.text(), "");

        typewriter.tick();
        assert_eq!(typewriter.text(), "d");
    }

    #[test]
    fn loops_back_to_first_phrase() {
        let mut typewriter = Typewriter::new(["ab", "c"]);
        // "ab": 2 typed + 2 erased, "c": 1 typed + 1 erased
        for _ in 0..6 {
            typewriter.tick();
        }
        typewriter.tick();
        assert_eq!(typewriter.text(), "a");
    }

    #[test]
    fn no_phrases_means_no_animation() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        assert_eq!(typewriter.tick(), None);
        assert_eq!(typewriter.text(), "");
    }

    #[test]
    fn hero_phrases_are_typed_by_character() {
        let mut typewriter = Typewriter::new(HERO_PHRASES);
        let len = HERO_PHRASES[1].chars().count();
        for _ in 0..HERO_PHRASES[0].chars().count() * 2 {
            typewriter.tick();
        }
        for _ in 0..len {
            typewriter.tick();
        }
        assert_eq!(typewriter.text(), "UI/UX Designer");
    }
}
