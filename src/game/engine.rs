use super::{
    action::{Action, Direction},
    config::GameConfig,
    food::place_food,
    state::{CollisionType, GameEnding, GameState, GameStatus, Position, Snake},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake actually moved this step
    pub moved: bool,
    /// Whether the game is halted after this step
    pub halted: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            moved: false,
            halted: true,
            info: StepInfo {
                ate_food: false,
                collision_type: None,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose fruit placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh, halted board.
    ///
    /// The head starts one cell left of center heading left, with the body
    /// trailing to the right.
    pub fn reset(&mut self) -> GameState {
        let head_x = (self.config.grid_width / 2) as i32 - 1;
        let head_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(head_x, head_y),
            Direction::Left,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Let a fresh board start moving. Returns false if the board has
    /// already ended and needs a [`reset`](Self::reset) first.
    pub fn start(&self, state: &mut GameState) -> bool {
        if state.is_over() {
            return false;
        }
        state.status = GameStatus::Running;
        true
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult::idle();
        }

        if let Action::Move(direction) = action {
            state.snake.set_direction(direction);
        }

        if let Err(collision) = state.snake.advance(state.grid_width, state.grid_height) {
            self.halt(state, GameEnding::Collision(collision));
            tracing::info!(
                ?collision,
                score = state.score,
                length = state.snake.len(),
                "snake crashed"
            );

            return StepResult {
                moved: false,
                halted: true,
                info: StepInfo {
                    ate_food: false,
                    collision_type: Some(collision),
                },
            };
        }

        state.steps += 1;

        // Growth shows on the next move, when the tail stays put
        let ate_food = state.food == Some(state.snake.head());
        if ate_food {
            state.score += 1;
            state.snake.grow();
            state.food = self.spawn_food(&state.snake);
            tracing::debug!(score = state.score, food = ?state.food, "fruit eaten");

            if state.food.is_none() {
                self.halt(state, GameEnding::BoardCleared);
                tracing::info!(score = state.score, "board cleared");
            }
        }

        StepResult {
            moved: true,
            halted: !state.is_running(),
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    fn halt(&self, state: &mut GameState, ending: GameEnding) {
        state.status = GameStatus::Halted;
        state.ending = Some(ending);
    }

    fn spawn_food(&mut self, snake: &Snake) -> Option<Position> {
        place_food(
            &mut self.rng,
            &snake.body,
            self.config.grid_width,
            self.config.grid_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(engine: &GameEngine, mut state: GameState) -> GameState {
        assert!(engine.start(&mut state));
        state
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
        let state = engine.reset();

        assert_eq!(state.status, GameStatus::Halted);
        assert_eq!(state.ending, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(
            state.snake.body,
            vec![Position::new(6, 7), Position::new(7, 7), Position::new(8, 7)]
        );
        assert_eq!(state.snake.direction(), Direction::Left);

        let food = state.food.expect("board has room");
        assert!(!state.is_occupied_by_snake(food));
        assert!(state.is_in_bounds(food));
    }

    #[test]
    fn test_halted_game_does_not_move() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);
        let mut state = engine.reset();
        let before = state.clone();

        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(!result.moved);
        assert!(result.halted);
        assert_eq!(state, before);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);
        let state = engine.reset();
        let mut state = running(&engine, state);
        state.food = Some(Position::new(0, 0));
        let initial_head = state.snake.head();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.moved);
        assert!(!result.halted);
        assert!(!result.info.ate_food);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), initial_head.moved_in_direction(Direction::Left));
    }

    #[test]
    fn test_food_consumption_grows_next_move() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);
        let state = engine.reset();
        let mut state = running(&engine, state);

        let head = state.snake.head();
        state.food = Some(head.moved_in_direction(state.snake.direction()));
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert_eq!(state.score, 1);
        assert!(state.snake.is_growing());
        assert_eq!(state.snake.len(), initial_length);
        let food = state.food.expect("board has room");
        assert!(!state.is_occupied_by_snake(food));

        state.food = Some(Position::new(9, 0));
        engine.step(&mut state, Action::Continue);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert!(!state.snake.is_growing());
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);
        let state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Some(Position::new(5, 5)),
            10,
            10,
        );
        let mut state = running(&engine, state);
        let body_before = state.snake.body.clone();

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.halted);
        assert!(!result.moved);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(state.status, GameStatus::Halted);
        assert_eq!(state.ending, Some(GameEnding::Collision(CollisionType::Wall)));
        assert_eq!(state.snake.body, body_before);
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);

        // Body: (5,5), (4,5), (3,5), (2,5), (1,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 5);
        let state = GameState::new(snake, Some(Position::new(8, 8)), 10, 10);
        let mut state = running(&engine, state);

        engine.step(&mut state, Action::Move(Direction::Down));
        engine.step(&mut state, Action::Move(Direction::Left));
        let body_before = state.snake.body.clone();
        // Up from (4,6) lands on (4,5), still part of the body
        let result = engine.step(&mut state, Action::Move(Direction::Up));

        assert!(result.halted);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
        assert_eq!(state.snake.body, body_before);
    }

    #[test]
    fn test_prevent_parallel_turn() {
        let mut engine = GameEngine::with_seed(GameConfig::small(), 1);
        let state = engine.reset();
        let mut state = running(&engine, state);
        state.food = Some(Position::new(0, 0));

        engine.step(&mut state, Action::Move(Direction::Right));

        assert_eq!(state.snake.direction(), Direction::Left);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn test_start_refused_after_game_over() {
        let engine = GameEngine::with_seed(GameConfig::small(), 1);
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            None,
            10,
            10,
        );
        state.ending = Some(GameEnding::Collision(CollisionType::Wall));

        assert!(!engine.start(&mut state));
        assert_eq!(state.status, GameStatus::Halted);
    }

    #[test]
    fn test_eating_last_free_cell_clears_board() {
        let config = GameConfig {
            initial_snake_length: 2,
            ..GameConfig::new(3, 1)
        };
        let mut engine = GameEngine::with_seed(config, 1);
        // | * | 1 | 2 |  growing from the last fruit, one cell left
        let mut snake = Snake::new(Position::new(1, 0), Direction::Left, 2);
        snake.grow();
        let state = GameState::new(snake, Some(Position::new(0, 0)), 3, 1);
        let mut state = running(&engine, state);

        let result = engine.step(&mut state, Action::Continue);

        assert!(result.info.ate_food);
        assert!(result.halted);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.food, None);
        assert_eq!(state.ending, Some(GameEnding::BoardCleared));
        assert!(!engine.start(&mut state));
    }
}
