//! Per-frame simulation step
//!
//! One call to [`tick`] is one animation frame: apply input, move the paddle,
//! move the ball and resolve its collisions, then check for a win. Velocities
//! are in pixels per frame, so there is no timestep parameter.

use super::collision::{ball_missed, brick_collision, paddle_collision, wall_collision};
use super::state::{GameEvent, GamePhase, GameState, Terminal};

/// Horizontal steering requested by the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Steer {
    #[default]
    Idle,
    Left,
    Right,
}

impl Steer {
    /// Direction of travel as a velocity multiplier
    pub fn sign(self) -> f32 {
        match self {
            Steer::Idle => 0.0,
            Steer::Left => -1.0,
            Steer::Right => 1.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub steer: Steer,
    /// Launch the ball if it is resting on the paddle
    pub launch: bool,
}

/// Advance the session by one frame.
///
/// Terminal sessions are frozen: the call is a no-op until
/// [`GameState::reset`].
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_terminal() {
        return events;
    }

    state.frame += 1;

    state.paddle.dx = input.steer.sign() * state.paddle.speed;
    if input.launch && state.ball.launch() {
        state.phase = GamePhase::Playing;
        log::info!("Ball launched at frame {}", state.frame);
        events.push(GameEvent::Launched);
    }

    move_paddle(state);
    move_ball(state, &mut events);

    let was_terminal = state.is_terminal();
    if evaluate(state) == Terminal::Win && !was_terminal {
        events.push(GameEvent::Won { score: state.score });
    }

    events
}

/// Paddle phase: move, clamp, and carry a resting ball along
pub fn move_paddle(state: &mut GameState) {
    state.paddle.advance(state.config.canvas_width);
    if !state.ball.moving {
        state.ball.rest_on(&state.paddle);
    }
}

/// Ball phase: move, collide, and handle a miss at the bottom edge.
///
/// Skipped entirely while the ball rests on the paddle.
pub fn move_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.ball.moving {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    wall_collision(ball, state.config.canvas_width);
    paddle_collision(ball, &state.paddle);

    for (row, column) in brick_collision(ball, &mut state.bricks) {
        state.score += state.config.points_per_brick;
        log::debug!("Brick ({}, {}) destroyed, score {}", row, column, state.score);
        events.push(GameEvent::BrickDestroyed { row, column });
    }

    if ball_missed(&state.ball, state.config.canvas_height) {
        lose_life(state, events);
    }
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost {
        lives_left: state.lives,
    });

    if state.lives > 0 {
        state
            .ball
            .serve(&state.paddle, state.config.ball.launch_velocity);
        state.phase = GamePhase::Serve;
        log::info!("Ball lost, {} lives left", state.lives);
        return;
    }

    // Out of lives: freeze the ball and collapse ball and paddle so nothing
    // is drawn for them.
    state.ball.moving = false;
    state.ball.radius = 0.0;
    state.paddle.width = 0.0;
    state.phase = GamePhase::Lost;
    log::info!("Game over! Final score: {}", state.score);
    events.push(GameEvent::Lost { score: state.score });
}

/// Check for a win and report the session's terminal state.
///
/// Clearing the last brick parks the ball on the paddle and ends the session
/// without touching lives or score. A session that already ended is left as
/// it is.
pub fn evaluate(state: &mut GameState) -> Terminal {
    if !state.is_terminal() && state.bricks.all_cleared() {
        state.ball.rest_on(&state.paddle);
        state.ball.moving = false;
        state.phase = GamePhase::Won;
        log::info!(
            "All bricks cleared! Final score: {}, lives left: {}",
            state.score,
            state.lives
        );
    }
    state.terminal_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;
    use proptest::prelude::*;

    fn launch() -> TickInput {
        TickInput {
            launch: true,
            ..Default::default()
        }
    }

    fn steer(steer: Steer) -> TickInput {
        TickInput {
            steer,
            ..Default::default()
        }
    }

    fn assert_resting(state: &GameState) {
        assert!(!state.ball.moving);
        assert_eq!(state.ball.pos.x, state.paddle.center_x());
        assert_eq!(state.ball.pos.y, state.paddle.pos.y - state.ball.radius);
    }

    #[test]
    fn test_tick_serve_to_playing() {
        let mut state = GameState::default();
        assert_eq!(state.phase, GamePhase::Serve);

        // Tick without launch - should stay in Serve
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Serve);
        assert_resting(&state);

        // Launch
        let events = tick(&mut state, &launch());
        assert_eq!(events, vec![GameEvent::Launched]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.ball.moving);
        assert_eq!(state.ball.pos, Vec2::new(402.0, 470.0));
    }

    #[test]
    fn test_launch_while_moving_is_ignored() {
        let mut state = GameState::default();
        tick(&mut state, &launch());
        let events = tick(&mut state, &launch());
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(404.0, 468.0));
    }

    #[test]
    fn test_resting_ball_follows_paddle() {
        let mut state = GameState::default();
        for _ in 0..50 {
            tick(&mut state, &steer(Steer::Left));
            assert_resting(&state);
        }
        assert_eq!(state.paddle.pos.x, 200.0);

        for _ in 0..500 {
            tick(&mut state, &steer(Steer::Left));
        }
        assert_eq!(state.paddle.pos.x, 0.0);
        assert_resting(&state);

        for _ in 0..500 {
            tick(&mut state, &steer(Steer::Right));
        }
        assert_eq!(state.paddle.right(), 800.0);
        assert_resting(&state);
    }

    #[test]
    fn test_first_brick_hit_from_centered_serve() {
        let mut state = GameState::default();
        tick(&mut state, &launch());

        let mut hit = Vec::new();
        for _ in 0..500 {
            let events = tick(&mut state, &TickInput::default());
            hit = events
                .into_iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .collect();
            if !hit.is_empty() {
                break;
            }
        }

        // Up and to the right from (400, 472): the bottom row, column 6
        assert_eq!(hit, vec![GameEvent::BrickDestroyed { row: 4, column: 6 }]);
        assert!(!state.bricks.get(4, 6).unwrap().visible);
        assert_eq!(state.bricks.visible_count(), 39);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_life_lost_reserves_ball() {
        let mut state = GameState::default();
        tick(&mut state, &launch());
        state.ball.pos = Vec2::new(100.0, 493.0);
        state.ball.vel = Vec2::new(-2.0, 2.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_resting(&state);
    }

    #[test]
    fn test_last_life_lost_ends_game() {
        let mut state = GameState::default();
        tick(&mut state, &launch());
        state.lives = 1;
        state.score = 70;
        state.ball.pos = Vec2::new(100.0, 495.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(
            events,
            vec![
                GameEvent::LifeLost { lives_left: 0 },
                GameEvent::Lost { score: 70 }
            ]
        );
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.terminal_state(), Terminal::Lose);
        assert!(!state.ball.moving);
        assert_eq!(state.ball.radius, 0.0);
        assert_eq!(state.paddle.width, 0.0);
    }

    #[test]
    fn test_terminal_session_is_frozen() {
        let mut state = GameState::default();
        state.phase = GamePhase::Lost;
        let before = state.snapshot();
        let events = tick(&mut state, &TickInput { steer: Steer::Left, launch: true });
        assert!(events.is_empty());
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_clearing_all_bricks_wins() {
        let mut state = GameState::default();
        tick(&mut state, &launch());
        for (_, _, brick) in state.bricks.iter_mut() {
            brick.visible = false;
        }
        state.score = 400;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Won { score: 400 }]);
        assert_eq!(state.terminal_state(), Terminal::Win);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 400);
        assert_resting(&state);

        // Launch after a win does nothing
        assert!(tick(&mut state, &launch()).is_empty());
        assert!(!state.ball.moving);
    }

    #[test]
    fn test_win_ignores_remaining_lives() {
        for lives in 1..=3 {
            let mut state = GameState::default();
            state.lives = lives;
            for (_, _, brick) in state.bricks.iter_mut() {
                brick.visible = false;
            }
            assert_eq!(evaluate(&mut state), Terminal::Win);
            assert_eq!(state.lives, lives);
        }
    }

    #[test]
    fn test_one_brick_left_is_not_a_win() {
        let mut state = GameState::default();
        for (row, column, brick) in state.bricks.iter_mut() {
            brick.visible = row == 2 && column == 5;
        }
        assert_eq!(evaluate(&mut state), Terminal::None);
        assert_eq!(state.phase, GamePhase::Serve);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            steer(Steer::Left),
            launch(),
            steer(Steer::Right),
            TickInput::default(),
        ];

        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        for i in 0..3000 {
            let input = &inputs[(i / 40) % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.frame, state2.frame);
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (0u8..3, proptest::bool::weighted(0.05)).prop_map(|(s, launch)| TickInput {
            steer: match s {
                0 => Steer::Idle,
                1 => Steer::Left,
                _ => Steer::Right,
            },
            launch,
        })
    }

    proptest! {
        #[test]
        fn resting_ball_rides_paddle(inputs in proptest::collection::vec(input_strategy(), 1..300)) {
            let mut state = GameState::default();
            for input in &inputs {
                let input = TickInput { launch: false, ..input.clone() };
                tick(&mut state, &input);
                prop_assert!(!state.ball.moving);
                prop_assert_eq!(state.ball.pos.x, state.paddle.center_x());
                prop_assert_eq!(state.ball.pos.y, state.paddle.pos.y - state.ball.radius);
                prop_assert!(state.paddle.pos.x >= 0.0);
                prop_assert!(state.paddle.right() <= state.config.canvas_width);
            }
        }

        #[test]
        fn score_lives_and_terminal_stay_consistent(
            inputs in proptest::collection::vec(input_strategy(), 1..200),
        ) {
            let config = GameConfig::default();
            let initial = config.grid.brick_count();
            let mut state = GameState::new(config).unwrap();
            let mut lives = state.lives;

            for frame in 0..4000 {
                let input = &inputs[frame % inputs.len()];
                tick(&mut state, input);

                let destroyed = (initial - state.bricks.visible_count()) as u64;
                prop_assert_eq!(state.score, 10 * destroyed);
                prop_assert!(state.lives <= lives);
                lives = state.lives;
                prop_assert_eq!(state.phase == GamePhase::Lost, state.lives == 0);
                if state.phase == GamePhase::Won {
                    prop_assert_eq!(state.bricks.visible_count(), 0);
                }
                if !state.is_terminal() && !state.ball.moving {
                    prop_assert_eq!(state.ball.pos.x, state.paddle.center_x());
                }
            }
        }
    }
}
