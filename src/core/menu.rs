use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const ENTRIES: [&str; 2] = ["Start Game", "Quit"];

pub enum MenuChoice {
    Start,
    Quit,
}

/// Start/Quit menu shown between rounds.
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<MenuChoice> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Up => self.selected = self.selected.saturating_sub(1),
                        KeyCode::Down => {
                            self.selected = (self.selected + 1).min(ENTRIES.len() - 1)
                        }
                        KeyCode::Enter => {
                            return Ok(if self.selected == 0 {
                                MenuChoice::Start
                            } else {
                                MenuChoice::Quit
                            });
                        }
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(MenuChoice::Quit),
                        _ => {}
                    }
                }
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" WORDFALL ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = ENTRIES
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {}", entry)).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" MENU ").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Select  [Q] Quit")
                .alignment(Alignment::Center),
            chunks[2],
        );
    }
}

/// Game-over dialog: final score, optional new-high-score callout, dismissed
/// by any key.
pub fn game_over(
    terminal: &mut ratatui::DefaultTerminal,
    score: i32,
    new_high_score: bool,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(f.area());

            let mut text = format!("Game Over!\n\nYour score: {}", score);
            if new_high_score {
                text.push_str(&format!("\n\nNew High Score: {}", score));
            }
            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().title(" GAME OVER ").borders(Borders::ALL))
                    .alignment(Alignment::Center),
                chunks[0],
            );
            f.render_widget(
                Paragraph::new("Press any key to continue").alignment(Alignment::Center),
                chunks[1],
            );
        })?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
