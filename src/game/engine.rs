use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    state::{CollisionType, GameState, Position},
};
use rand::{Rng, rngs::ThreadRng};
use tracing::{debug, info, trace};

/// Samples drawn by [`FoodPlacement::FullBoard`] before it settles for a cell
/// under the snake.
const MAX_FOOD_ATTEMPTS: usize = 64;

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell, keeping its length
    Moved,
    /// The snake ate the food and grew by one segment
    Ate,
    /// The snake crashed and the game started over
    Reset(CollisionType),
}

/// The game engine that handles all game logic
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(config.width, config.height);
        Self { config, state, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Reset the game to its initial state
    pub fn reset(&mut self) {
        self.state.reset();
        debug!(
            head = ?self.state.snake().head(),
            food = ?self.state.food(),
            "game reset"
        );
    }

    /// Request a new heading. Reversals of a snake longer than one segment
    /// are silently dropped.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.state.set_direction(direction) {
            trace!(?direction, "ignored reversal");
        }
    }

    /// Advance the game by one cell
    pub fn tick(&mut self) -> TickOutcome {
        let new_head = self
            .state
            .snake()
            .head()
            .moved_in_direction(self.state.direction());

        if let Some(collision) = self.check_collision(new_head) {
            info!(
                ?collision,
                length = self.state.snake().len(),
                "snake crashed"
            );
            self.reset();
            return TickOutcome::Reset(collision);
        }

        let ate_food = new_head == self.state.food();
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.food = self.spawn_food();
            debug!(
                length = self.state.snake().len(),
                food = ?self.state.food(),
                "food eaten"
            );
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Check if the new head position causes a collision.
    ///
    /// Every current segment counts, including the tail that would move out
    /// of the way on this tick.
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn spawn_food(&mut self) -> Position {
        let width = i32::from(self.config.width);
        let height = i32::from(self.config.height);

        match self.config.food_placement {
            FoodPlacement::Classic => {
                // Exclusive bounds of width - 1 and height - 1: the last
                // column and row are never chosen. Clamped so a side of 1
                // still yields cell 0.
                let x = self.rng.gen_range(0..(width - 1).max(1));
                let y = self.rng.gen_range(0..(height - 1).max(1));
                Position::new(x, y)
            }
            FoodPlacement::FullBoard => {
                let mut pos = Position::new(0, 0);
                for _ in 0..MAX_FOOD_ATTEMPTS {
                    pos = Position::new(
                        self.rng.gen_range(0..width.max(1)),
                        self.rng.gen_range(0..height.max(1)),
                    );
                    if !self.state.is_occupied_by_snake(pos) {
                        break;
                    }
                }
                pos
            }
        }
    }
}
