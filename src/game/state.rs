use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::entity::{Burst, FallingWord, FIELD_HEIGHT, FIELD_WIDTH};

/// Per-tick spawn chance, in percent, while fewer than [`MAX_WORDS`] are live.
const SPAWN_CHANCE_PERCENT: u32 = 3;

/// Concurrent falling-word cap.
pub const MAX_WORDS: usize = 3;

/// Points per matched word.
pub const SCORE_PER_MATCH: i32 = 10;

/// Difficulty ramp interval, expressed in 30 ms ticks (10 seconds).
pub const SPEED_UP_TICKS: u32 = 10_000 / 30;

/// Full day/night cycle length in milliseconds.
const DAY_CYCLE_MS: u64 = 60_000;

/// Night-sky star count.
const STAR_COUNT: usize = 50;

/// Horizontal star drift in field units per tick, per unit of background speed.
const STAR_DRIFT: f64 = 0.1;

/// All mutable state for one round. Owned exclusively by the engine loop;
/// ticks and keystrokes arrive on the same task, so nothing here is shared.
pub struct GameState {
    pub score: i32,
    pub high_score: i32,
    /// Live words, ordered by spawn time. `words[0]` is the only match target.
    pub words: Vec<FallingWord>,
    /// The in-progress keystroke buffer.
    pub typed: String,
    /// Lingering match effects, decoupled from the live word list.
    pub bursts: Vec<Burst>,
    pub fall_speed: f64,
    pub background_speed: f64,
    /// Day/night cycle fraction in [0, 1); < 0.5 is daytime.
    pub cycle: f64,
    /// Star field positions (top half of the field), drifted each tick.
    pub stars: Vec<(f64, f64)>,
    /// Terminal state: a word reached the bottom edge.
    pub over: bool,
    ticks_since_speed_up: u32,
    ticks_since_background_up: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(high_score: i32) -> Self {
        Self::with_rng(high_score, StdRng::from_os_rng())
    }

    fn with_rng(high_score: i32, mut rng: StdRng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| {
                (
                    rng.random_range(0.0..FIELD_WIDTH),
                    rng.random_range(0.0..FIELD_HEIGHT / 2.0),
                )
            })
            .collect();
        Self {
            score: 0,
            high_score,
            words: Vec::new(),
            typed: String::new(),
            bursts: Vec::new(),
            fall_speed: 2.0,
            background_speed: 1.0,
            cycle: day_cycle_fraction(),
            stars,
            over: false,
            ticks_since_speed_up: 0,
            ticks_since_background_up: 0,
            rng,
        }
    }

    /// Advance the round by one tick: maybe spawn, move everything, check the
    /// bottom edge, ramp difficulty, age effects and refresh the backdrop.
    pub fn tick(&mut self) {
        if self.over {
            return;
        }

        if self.words.len() < MAX_WORDS && self.rng.random_range(0..100) < SPAWN_CHANCE_PERCENT {
            self.words.push(FallingWord::spawn(&mut self.rng));
        }

        for word in &mut self.words {
            word.fall(self.fall_speed);
        }
        if self.words.iter().any(FallingWord::past_bottom) {
            self.over = true;
            return;
        }

        // The two ramps run on the same interval but stay independent.
        self.ticks_since_speed_up += 1;
        if self.ticks_since_speed_up >= SPEED_UP_TICKS {
            self.fall_speed += 1.0;
            self.ticks_since_speed_up = 0;
        }
        self.ticks_since_background_up += 1;
        if self.ticks_since_background_up >= SPEED_UP_TICKS {
            self.background_speed += 1.0;
            self.ticks_since_background_up = 0;
        }

        self.bursts.retain_mut(Burst::age);

        self.cycle = day_cycle_fraction();
        let drift = self.background_speed * STAR_DRIFT;
        for (x, _) in &mut self.stars {
            *x = (*x + drift) % FIELD_WIDTH;
        }
    }

    /// Remove the last buffered character; a no-op when the buffer is empty.
    pub fn backspace(&mut self) {
        self.typed.pop();
        self.try_match();
    }

    /// Append an alphanumeric character to the buffer; anything else is ignored.
    pub fn push_char(&mut self, c: char) {
        if c.is_alphanumeric() {
            self.typed.push(c);
        }
        self.try_match();
    }

    /// Length of the target prefix the buffer has typed correctly so far.
    /// A plain integer; the renderer decides how to highlight it.
    pub fn typed_prefix_len(&self) -> usize {
        match self.words.first() {
            Some(target) => target
                .word
                .chars()
                .zip(self.typed.chars())
                .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
                .count(),
            None => 0,
        }
    }

    /// Compare the buffer against the earliest-spawned word only. A full,
    /// case-insensitive match removes the word, leaves a burst behind,
    /// scores and clears the buffer.
    fn try_match(&mut self) {
        let Some(target) = self.words.first() else {
            return;
        };
        if !target.word.eq_ignore_ascii_case(&self.typed) {
            return;
        }
        let word = self.words.remove(0);
        debug!(word = word.word, score = self.score + SCORE_PER_MATCH, "word matched");
        self.bursts.push(Burst::at(word.x, word.y, &mut self.rng));
        self.score += SCORE_PER_MATCH;
        self.typed.clear();
    }
}

fn day_cycle_fraction() -> f64 {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    (ms % DAY_CYCLE_MS) as f64 / DAY_CYCLE_MS as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::{BURST_TICKS, WORD_DIAMETER};
    use ratatui::style::Color;

    fn state() -> GameState {
        GameState::with_rng(0, StdRng::seed_from_u64(42))
    }

    fn word(text: &'static str) -> FallingWord {
        FallingWord {
            x: 20.0,
            y: 10.0,
            word: text,
            color: Color::Red,
        }
    }

    fn type_str(state: &mut GameState, s: &str) {
        for c in s.chars() {
            state.push_char(c);
        }
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_noop() {
        let mut st = state();
        for _ in 0..5 {
            st.backspace();
        }
        assert!(st.typed.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut st = state();
        st.words.push(word("RUST"));
        type_str(&mut st, "rust");
        assert_eq!(st.score, SCORE_PER_MATCH);
        assert!(st.words.is_empty());
        assert!(st.typed.is_empty());
        assert_eq!(st.bursts.len(), 1);
    }

    #[test]
    fn only_the_earliest_word_is_a_match_target() {
        let mut st = state();
        st.words.push(word("HELLO"));
        st.words.push(word("CODE"));
        type_str(&mut st, "code");
        assert_eq!(st.score, 0);
        assert_eq!(st.words.len(), 2);
        assert_eq!(st.typed, "code");
    }

    #[test]
    fn score_moves_in_fixed_increments() {
        let mut st = state();
        st.words.push(word("GAME"));
        type_str(&mut st, "game");
        st.words.push(word("WORLD"));
        type_str(&mut st, "WORLD");
        assert_eq!(st.score, 2 * SCORE_PER_MATCH);
    }

    #[test]
    fn backspace_recovers_from_a_typo() {
        let mut st = state();
        st.words.push(word("RUST"));
        type_str(&mut st, "rux");
        st.backspace();
        type_str(&mut st, "st");
        assert_eq!(st.score, SCORE_PER_MATCH);
        assert!(st.words.is_empty());
    }

    #[test]
    fn non_alphanumeric_input_is_ignored() {
        let mut st = state();
        st.words.push(word("CODE"));
        type_str(&mut st, "co");
        st.push_char('!');
        st.push_char(' ');
        type_str(&mut st, "de");
        assert_eq!(st.score, SCORE_PER_MATCH);
    }

    #[test]
    fn never_more_than_three_words() {
        let mut st = state();
        st.fall_speed = 0.0;
        for _ in 0..300 {
            st.tick();
            assert!(st.words.len() <= MAX_WORDS);
        }
        assert!(!st.over);
    }

    #[test]
    fn word_past_the_bottom_ends_the_round() {
        let mut st = state();
        let mut w = word("HELLO");
        w.y = FIELD_HEIGHT - WORD_DIAMETER;
        st.words.push(w);
        st.tick();
        assert!(st.over);
    }

    #[test]
    fn ticks_are_inert_after_game_over() {
        let mut st = state();
        let mut w = word("HELLO");
        w.y = FIELD_HEIGHT;
        st.words.push(w);
        st.tick();
        assert!(st.over);
        let words_after = st.words.len();
        st.tick();
        assert_eq!(st.words.len(), words_after);
    }

    #[test]
    fn fall_speed_ramps_every_interval() {
        let mut st = state();
        st.fall_speed = 0.0;
        for _ in 0..SPEED_UP_TICKS {
            st.tick();
        }
        assert_eq!(st.fall_speed, 1.0);
        assert_eq!(st.background_speed, 2.0);
    }

    #[test]
    fn bursts_expire_after_their_lifetime() {
        let mut st = state();
        st.fall_speed = 0.0;
        st.words.push(word("RUST"));
        type_str(&mut st, "rust");
        assert_eq!(st.bursts.len(), 1);
        for _ in 0..BURST_TICKS {
            st.tick();
        }
        assert!(st.bursts.is_empty());
    }

    #[test]
    fn typed_prefix_len_tracks_correct_characters_only() {
        let mut st = state();
        st.words.push(word("WORLD"));
        type_str(&mut st, "wOr");
        assert_eq!(st.typed_prefix_len(), 3);
        st.push_char('x');
        assert_eq!(st.typed_prefix_len(), 3);
        let empty = state();
        assert_eq!(empty.typed_prefix_len(), 0);
    }

    #[test]
    fn typing_the_first_spawned_word_scores_and_clears() {
        let mut st = state();
        st.fall_speed = 0.0;
        for _ in 0..1000 {
            if !st.words.is_empty() {
                break;
            }
            st.tick();
        }
        let target = st.words[0].word;
        type_str(&mut st, target);
        assert_eq!(st.score, SCORE_PER_MATCH);
        assert!(st.typed.is_empty());
        assert_eq!(st.bursts.len(), 1);
    }

    #[test]
    fn stars_drift_with_the_background_speed() {
        let mut st = state();
        st.fall_speed = 0.0;
        st.background_speed = 2.0;
        let before = st.stars[0].0;
        st.tick();
        let expected = (before + 2.0 * STAR_DRIFT) % FIELD_WIDTH;
        assert!((st.stars[0].0 - expected).abs() < 1e-9);
    }
}
