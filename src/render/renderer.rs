use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};

const HEAD: &str = "■ ";
const BODY: &str = "□ ";
const FOOD: &str = "O ";
const EMPTY: &str = ". ";

/// Paints a [`GameState`] onto a ratatui frame. Holds no game state itself.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_header(state), chunks[0]);

        let grid = Paragraph::new(self.grid_lines(state))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center);
        frame.render_widget(grid, chunks[1]);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// One line per board row, two characters per cell.
    pub fn grid_lines(&self, state: &GameState) -> Vec<Line<'static>> {
        let head = state.snake().head();

        (0..i32::from(state.height()))
            .map(|y| {
                let spans: Vec<Span<'static>> = (0..i32::from(state.width()))
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == head {
                            Span::styled(
                                HEAD,
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if state.is_occupied_by_snake(pos) {
                            Span::styled(BODY, Style::default().fg(Color::Green))
                        } else if pos == state.food() {
                            Span::styled(
                                FOOD,
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(EMPTY, Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_header(&self, state: &GameState) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("Board: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}x{}", state.width(), state.height()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake().len().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
