/// High-score persistence: a single 4-byte big-endian signed integer.
///
/// Load and save are both best-effort. A missing, short or unreadable file
/// loads as 0; a failed save is logged and swallowed. Neither surfaces an
/// error to the game.
use std::fs;
use std::path::Path;

use tracing::warn;

pub const HIGH_SCORE_FILE: &str = "highscore.dat";

/// Read the saved high score, or 0 if the file is absent or unreadable.
pub fn load_high_score<P: AsRef<Path>>(path: P) -> i32 {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return 0,
    };
    // First four bytes only; trailing bytes are ignored.
    match bytes.get(..4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
        Some(raw) => i32::from_be_bytes(raw),
        None => 0,
    }
}

/// Write the high score. Failures are logged, never propagated.
pub fn save_high_score<P: AsRef<Path>>(path: P, score: i32) {
    if let Err(err) = fs::write(path.as_ref(), score.to_be_bytes()) {
        warn!(path = %path.as_ref().display(), %err, "failed to save high score");
    }
}
