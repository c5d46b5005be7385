use rand::Rng;
use ratatui::style::Color;

/// Logical play-field bounds; the renderer maps these onto the terminal
/// canvas. y grows downward, 0 at the top edge.
pub const FIELD_WIDTH: f64 = 120.0;
pub const FIELD_HEIGHT: f64 = 90.0;

/// Diameter of a word disc in field units.
pub const WORD_DIAMETER: f64 = 10.0;

/// Particles generated per burst.
pub const BURST_PARTICLES: usize = 8;

/// Burst lifetime in ticks (~800 ms at the 30 ms tick).
pub const BURST_TICKS: u32 = 27;

const WORDS: [&str; 5] = ["RUST", "CODE", "GAME", "HELLO", "WORLD"];

const COLORS: [Color; 5] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
];

/// A word dropping toward the bottom edge. Removed when matched (replaced by
/// a [`Burst`]) or when it falls past the field, which ends the round.
#[derive(Debug, Clone)]
pub struct FallingWord {
    pub x: f64,
    pub y: f64,
    pub word: &'static str,
    pub color: Color,
}

impl FallingWord {
    /// Spawn at the top edge with a random x, word and color.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..FIELD_WIDTH - WORD_DIAMETER),
            y: 0.0,
            word: WORDS[rng.random_range(0..WORDS.len())],
            color: COLORS[rng.random_range(0..COLORS.len())],
        }
    }

    /// Advance by the shared fall speed. No per-word acceleration.
    pub fn fall(&mut self, speed: f64) {
        self.y += speed;
    }

    /// True once the bottom edge of the disc has left the field.
    pub fn past_bottom(&self) -> bool {
        self.y + WORD_DIAMETER > FIELD_HEIGHT
    }
}

/// One cosmetic fragment of a burst.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
}

/// Scatter effect shown where a word was matched. Purely visual; lives in
/// its own collection with a tick-counted lifetime.
#[derive(Debug, Clone)]
pub struct Burst {
    pub particles: Vec<Particle>,
    ticks_left: u32,
}

impl Burst {
    /// Build a burst around a matched word's last position.
    pub fn at<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        let particles = (0..BURST_PARTICLES)
            .map(|_| Particle {
                x: x + rng.random_range(-5.0..5.0),
                y: y + rng.random_range(-5.0..5.0),
                size: rng.random_range(1.0..4.0),
                color: Color::Rgb(rng.random(), rng.random(), rng.random()),
            })
            .collect();
        Self {
            particles,
            ticks_left: BURST_TICKS,
        }
    }

    /// Age by one tick; returns false once expired.
    pub fn age(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }
}
