use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
    /// Current direction of movement (the velocity)
    pub direction: Direction,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    /// Lay `length - 1` extra segments out behind the head
    #[cfg(test)]
    pub(crate) fn with_length(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.reversed().delta();
        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(dx, dy));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Exact match against every segment, head and tail included.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, dropping the tail unless the snake grows.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state, as read by renderers
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    width: u16,
    height: u16,
    pub(crate) snake: Snake,
    pub(crate) food: Position,
}

impl GameState {
    /// Create the initial state for a board. Dimensions are not checked.
    pub fn new(width: u16, height: u16) -> Self {
        let (snake, food) = Self::initial_layout(width, height);
        Self {
            width,
            height,
            snake,
            food,
        }
    }

    /// Food at a quarter of the width, a one-segment snake at three quarters,
    /// both on the middle row, heading left.
    fn initial_layout(width: u16, height: u16) -> (Snake, Position) {
        let (w, h) = (i32::from(width), i32::from(height));
        let food = Position::new(w / 4, h / 2);
        let snake = Snake::new(Position::new(3 * w / 4, h / 2), Direction::Left);
        (snake, food)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(width: u16, height: u16, snake: Snake, food: Position) -> Self {
        Self {
            width,
            height,
            snake,
            food,
        }
    }

    /// Restore the initial snake, food and direction. The board is kept.
    pub fn reset(&mut self) {
        let (snake, food) = Self::initial_layout(self.width, self.height);
        self.snake = snake;
        self.food = food;
    }

    /// Change the heading. A reversal is ignored while the snake has a body
    /// behind its head.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        // Compared with the current velocity, not the neck segment: two turns
        // before one tick can still steer the head into the neck.
        if self.snake.len() > 1 && self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.snake.direction = direction;
        true
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Current velocity as `(dx, dy)`
    pub fn velocity(&self) -> (i32, i32) {
        self.snake.direction.delta()
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < i32::from(self.width) && pos.y >= 0 && pos.y < i32::from(self.height)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.segments()[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_snake_from_segments() {
        assert!(Snake::from_segments(Vec::new(), Direction::Left).is_none());

        let snake = Snake::from_segments(
            vec![Position::new(1, 1), Position::new(2, 1)],
            Direction::Left,
        )
        .unwrap();
        assert_eq!(snake.head(), Position::new(1, 1));
        assert_eq!(snake.tail(), Position::new(2, 1));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.tail(), Position::new(4, 5));

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(4, 5));
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake = Snake::with_length(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(10, 10);
        assert_eq!(state.food(), Position::new(2, 5));
        assert_eq!(state.snake().segments(), &[Position::new(7, 5)]);
        assert_eq!(state.velocity(), (-1, 0));

        let state = GameState::new(5, 5);
        assert_eq!(state.food(), Position::new(1, 2));
        assert_eq!(state.snake().segments(), &[Position::new(3, 2)]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::new(7, 9);
        let fresh = state.clone();

        state.snake = Snake::with_length(Position::new(4, 4), Direction::Down, 3);
        state.food = Position::new(0, 0);
        state.reset();
        let first = state.clone();
        state.reset();

        assert_eq!(first, fresh);
        assert_eq!(state, first);
    }

    #[test]
    fn test_degenerate_board_reset() {
        let state = GameState::new(1, 1);
        assert_eq!(state.food(), Position::new(0, 0));
        assert_eq!(state.snake().head(), Position::new(0, 0));
    }

    #[test]
    fn test_reverse_blocked_only_with_body() {
        let mut state = GameState::new(10, 10);
        assert!(state.set_direction(Direction::Right));
        assert_eq!(state.direction(), Direction::Right);

        state.snake = Snake::with_length(Position::new(5, 5), Direction::Left, 3);
        assert!(!state.set_direction(Direction::Right));
        assert_eq!(state.velocity(), (-1, 0));
        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.velocity(), (0, -1));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(20, 20);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }
}
