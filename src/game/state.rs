use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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

    /// Check if the position lies within a `width` x `height` grid
    pub fn is_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.x < width as i32 && self.y >= 0 && self.y < height as i32
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

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self {
            body,
            direction,
            grow_pending: false,
        }
    }

    /// Build a snake from explicit segments, head first. `None` if empty.
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self {
            body,
            direction,
            grow_pending: false,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the next move keeps the tail
    pub fn is_growing(&self) -> bool {
        self.grow_pending
    }

    /// Turn onto the other axis. Requests parallel to the current
    /// heading are ignored; returns whether the turn was taken.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_parallel(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Make the next move keep the tail
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Move one cell in the current direction on a `width` x `height` grid.
    ///
    /// The new body is built first and checked afterwards, so stepping into
    /// the cell the tail leaves is legal. On collision nothing changes.
    pub fn advance(&mut self, width: usize, height: usize) -> Result<(), CollisionType> {
        let new_head = self.head().moved_in_direction(self.direction);

        let kept = if self.grow_pending {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        if self.body[..kept].contains(&new_head) {
            return Err(CollisionType::SelfCollision);
        }
        if !new_head.is_within(width, height) {
            return Err(CollisionType::Wall);
        }

        self.body.truncate(kept);
        self.body.insert(0, new_head);
        self.grow_pending = false;
        Ok(())
    }

    /// Check if position is part of the snake, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the snake is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Halted,
    Running,
}

/// Why the last game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Collision(CollisionType),
    /// The snake filled every cell, there is nowhere left for food
    BoardCleared,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only once the board is full
    pub food: Option<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub status: GameStatus,
    pub ending: Option<GameEnding>,
    pub score: u32,
    pub steps: u32,
}

impl GameState {
    /// Create a new, halted game state
    pub fn new(snake: Snake, food: Option<Position>, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            status: GameStatus::Halted,
            ending: None,
            score: 0,
            steps: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// A halted game that has already ended needs a fresh board
    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_within(self.grid_width, self.grid_height)
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}
