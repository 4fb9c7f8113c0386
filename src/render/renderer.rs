use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{CollisionType, GameEnding, GameState, Position};
use crate::metrics::GameMetrics;

const SNAKE_BODY: Color = Color::Rgb(0xcd, 0xdc, 0x39);
const SNAKE_HEAD: Color = Color::Rgb(0xe5, 0x8d, 0x51);
const FRUIT: Color = Color::Rgb(0xe0, 0x51, 0x70);
const FIELD: Color = Color::Rgb(0x37, 0x47, 0x4f);
const FIELD_LINE: Color = Color::Rgb(0x3a, 0x4c, 0x54);
const MESSAGE_TEXT: Color = Color::White;
const MESSAGE_BACKGROUND: Color = Color::Black;

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_WIDTH: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let board = Self::board_area(chunks[1], state);
        frame.render_widget(self.render_grid(state), board);

        if !state.is_running() {
            let band = Self::overlay_band(board);
            frame.render_widget(Clear, band);
            frame.render_widget(self.render_message(state, band.height), band);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Where the bordered grid lands inside `area`, centered
    pub fn board_area(area: Rect, state: &GameState) -> Rect {
        let width = to_u16(state.grid_width)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2);
        let height = to_u16(state.grid_height).saturating_add(2);
        centered(area, width, height)
    }

    /// The middle third of the board, where the halted message goes
    fn overlay_band(board: Rect) -> Rect {
        let inner = board.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let height = (inner.height / 3).max(3).min(inner.height);
        let y = inner.y + (inner.height - height) / 2;
        Rect::new(inner.x, y, inner.width, height)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let mut lines = Vec::with_capacity(state.grid_height);

        for y in 0..state.grid_height {
            let spans: Vec<Span> = (0..state.grid_width)
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);

                    if pos == head {
                        Span::styled("  ", Style::default().bg(SNAKE_HEAD))
                    } else if state.snake.occupies(pos) {
                        Span::styled("  ", Style::default().bg(SNAKE_BODY))
                    } else if state.food == Some(pos) {
                        Span::styled(
                            "()",
                            Style::default()
                                .fg(FRUIT)
                                .bg(field_color(pos))
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled("  ", Style::default().bg(field_color(pos)))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(FIELD_LINE))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("Length: ", label),
            Span::styled(state.snake.len().to_string(), value),
            Span::raw("   "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_message(&self, state: &GameState, height: u16) -> Paragraph<'_> {
        let text_style = Style::default()
            .fg(MESSAGE_TEXT)
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::new();
        match state.ending {
            Some(GameEnding::Collision(kind)) => {
                let cause = match kind {
                    CollisionType::Wall => "hit the wall",
                    CollisionType::SelfCollision => "bit itself",
                };
                lines.push(Line::from(Span::styled(
                    format!("Game over: {cause}"),
                    Style::default().fg(FRUIT).add_modifier(Modifier::BOLD),
                )));
            }
            Some(GameEnding::BoardCleared) => {
                lines.push(Line::from(Span::styled(
                    "Board cleared!",
                    Style::default().fg(SNAKE_BODY).add_modifier(Modifier::BOLD),
                )));
            }
            None => {}
        }
        lines.push(Line::from(Span::styled("Press any key to start", text_style)));

        let padding = usize::from(height).saturating_sub(lines.len()) / 2;
        let mut padded = vec![Line::from(""); padding];
        padded.append(&mut lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .style(Style::default().bg(MESSAGE_BACKGROUND))
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Alternate shades so the grid lines show without drawing them
fn field_color(pos: Position) -> Color {
    if (pos.x + pos.y) % 2 == 0 {
        FIELD
    } else {
        FIELD_LINE
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
