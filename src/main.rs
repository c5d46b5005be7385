use anyhow::Result;
use ratatui::DefaultTerminal;

use wordfall::core::engine::Engine;
use wordfall::core::menu::{self, MenuChoice, MenuScreen};
use wordfall::persistence;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let high_score = persistence::load_high_score(persistence::HIGH_SCORE_FILE);
    let mut terminal = ratatui::init();

    let result = run(&mut terminal, high_score).await;

    ratatui::restore();
    result
}

/// Menu -> Playing -> GameOver -> Menu, until the player quits.
async fn run(terminal: &mut DefaultTerminal, mut high_score: i32) -> Result<()> {
    let mut menu = MenuScreen::new();
    loop {
        match menu.run(terminal)? {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Start => {}
        }

        let outcome = Engine::new(high_score).run(terminal).await?;
        if outcome.aborted {
            continue;
        }

        let new_high_score = outcome.score > high_score;
        if new_high_score {
            high_score = outcome.score;
            persistence::save_high_score(persistence::HIGH_SCORE_FILE, high_score);
        }
        menu::game_over(terminal, outcome.score, new_high_score)?;
    }
}

// The terminal owns stdout, so logs go to a file next to the binary.
fn init_logging() -> Result<()> {
    let file = std::fs::File::create("wordfall.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
