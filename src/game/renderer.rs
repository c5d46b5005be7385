use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::game::entity::{FIELD_HEIGHT, FIELD_WIDTH, WORD_DIAMETER};
use crate::game::state::GameState;

const DAY_SKY: (f64, f64, f64) = (135.0, 206.0, 235.0);
const NIGHT_SKY: (f64, f64, f64) = (25.0, 25.0, 112.0);
const SUN: Color = Color::Rgb(255, 223, 0);
const MOON: Color = Color::Rgb(173, 216, 230);

/// Draw one frame: score bar, target-word line, then the play field.
/// Pure function of the state; all styling decisions live here.
pub fn draw(frame: &mut Frame, state: &GameState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    frame.render_widget(Paragraph::new(format!("Score: {}", state.score)), cols[0]);
    frame.render_widget(
        Paragraph::new(format!("High Score: {}", state.high_score))
            .alignment(Alignment::Right),
        cols[1],
    );

    frame.render_widget(
        Paragraph::new(target_line(state)).alignment(Alignment::Center),
        rows[1],
    );

    draw_play_field(frame, rows[2], state);
}

/// The word to type, with the correctly-typed prefix highlighted. The split
/// point comes from the controller as a plain length.
fn target_line(state: &GameState) -> Line<'_> {
    let Some(target) = state.words.first() else {
        return Line::from("Type this word: ");
    };
    let done = state.typed_prefix_len();
    // Target words are ASCII, so the byte index equals the char index.
    Line::from(vec![
        Span::styled(
            &target.word[..done],
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(&target.word[done..], Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn draw_play_field(frame: &mut Frame, area: ratatui::layout::Rect, state: &GameState) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .background_color(sky_color(state.cycle))
        .x_bounds([0.0, FIELD_WIDTH])
        .y_bounds([0.0, FIELD_HEIGHT])
        .paint(|ctx| {
            draw_sky(ctx, state);
            for word in &state.words {
                let cx = word.x + WORD_DIAMETER / 2.0;
                let cy = FIELD_HEIGHT - (word.y + WORD_DIAMETER / 2.0);
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: WORD_DIAMETER / 2.0,
                    color: word.color,
                });
                ctx.print(cx, cy, Line::styled(word.word, Style::default().fg(word.color)));
            }
            for burst in &state.bursts {
                for p in &burst.particles {
                    ctx.draw(&Circle {
                        x: p.x,
                        y: FIELD_HEIGHT - p.y,
                        radius: p.size / 2.0,
                        color: p.color,
                    });
                }
            }
        });
    frame.render_widget(canvas, area);
}

/// Sun or moon on a circular arc, plus stars during the night half.
fn draw_sky(ctx: &mut ratatui::widgets::canvas::Context, state: &GameState) {
    let angle = std::f64::consts::TAU * state.cycle;
    let orbit_x = FIELD_WIDTH / 2.0 - 15.0;
    let orbit_y = FIELD_HEIGHT / 2.0 - 10.0;
    ctx.draw(&Circle {
        x: FIELD_WIDTH / 2.0 + angle.cos() * orbit_x,
        y: FIELD_HEIGHT / 2.0 + angle.sin() * orbit_y,
        radius: 5.0,
        color: if state.cycle < 0.5 { SUN } else { MOON },
    });
    if state.cycle >= 0.5 {
        let stars: Vec<(f64, f64)> = state
            .stars
            .iter()
            .map(|&(x, y)| (x, FIELD_HEIGHT - y))
            .collect();
        ctx.draw(&Points {
            coords: &stars,
            color: Color::Gray,
        });
    }
}

/// Linear day-to-night interpolation over the cycle fraction.
fn sky_color(cycle: f64) -> Color {
    let lerp = |day: f64, night: f64| ((1.0 - cycle) * day + cycle * night) as u8;
    Color::Rgb(
        lerp(DAY_SKY.0, NIGHT_SKY.0),
        lerp(DAY_SKY.1, NIGHT_SKY.1),
        lerp(DAY_SKY.2, NIGHT_SKY.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_is_day_blue_at_cycle_start() {
        assert_eq!(sky_color(0.0), Color::Rgb(135, 206, 235));
    }

    #[test]
    fn sky_is_midway_at_the_day_night_boundary() {
        assert_eq!(sky_color(0.5), Color::Rgb(80, 115, 173));
    }

    #[test]
    fn sky_approaches_midnight_blue_late_in_the_cycle() {
        let Color::Rgb(r, g, b) = sky_color(0.99) else {
            panic!("expected an rgb color");
        };
        assert!(r.abs_diff(25) <= 2);
        assert!(g.abs_diff(25) <= 2);
        assert!(b.abs_diff(112) <= 2);
    }
}
