//! Demo player
//!
//! Follows the ball with a small seeded aiming error and serves after a short
//! random pause. With `miss_chance > 0` it sometimes aims past the paddle
//! edge on purpose, so demo runs end in both wins and losses.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, Steer, TickInput};

/// Aim error as a fraction of half the paddle width
const AIM_SPREAD: f32 = 0.6;
/// How far past the paddle edge a deliberate miss aims (pixels)
const MISS_MARGIN: std::ops::Range<f32> = 10.0..40.0;
/// Frames to wait on the paddle before serving
const SERVE_DELAY: std::ops::Range<u32> = 10..60;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    miss_chance: f32,
    /// Ball-relative aim point for the current return
    aim_offset: f32,
    /// Deliberately aiming off the paddle this return
    missing: bool,
    was_descending: bool,
    /// Where to carry the ball before serving, and how long to wait
    serve_target: Option<f32>,
    serve_wait: u32,
}

impl Autopilot {
    pub fn new(seed: u64, miss_chance: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            miss_chance: miss_chance.clamp(0.0, 1.0),
            aim_offset: 0.0,
            missing: false,
            was_descending: false,
            serve_target: None,
            serve_wait: 0,
        }
    }

    /// Input for the next frame
    pub fn drive(&mut self, state: &GameState) -> TickInput {
        if state.is_terminal() {
            return TickInput::default();
        }
        if !state.ball.moving {
            return self.serve(state);
        }

        let ball = &state.ball;
        let descending = ball.vel.y > 0.0;
        if descending && !self.was_descending {
            self.retarget(state.paddle.width);
        }
        self.was_descending = descending;

        let target = if self.missing {
            // Stay on the open side of the ball so the wall never pushes
            // the paddle back underneath it
            let side = if ball.pos.x < state.config.canvas_width / 2.0 {
                1.0
            } else {
                -1.0
            };
            ball.pos.x + side * self.aim_offset
        } else {
            ball.pos.x + self.aim_offset
        };

        TickInput {
            steer: steer_toward(target, state.paddle.center_x(), state.paddle.speed),
            launch: false,
        }
    }

    fn serve(&mut self, state: &GameState) -> TickInput {
        let paddle = &state.paddle;
        let target = match self.serve_target {
            Some(target) => target,
            None => {
                let half = paddle.width / 2.0;
                let target = self
                    .rng
                    .random_range(half..(state.config.canvas_width - half).max(half + 1.0));
                self.serve_target = Some(target);
                self.serve_wait = self.rng.random_range(SERVE_DELAY);
                self.was_descending = false;
                log::debug!("Autopilot serving from x={:.0}", target);
                target
            }
        };

        let steer = steer_toward(target, paddle.center_x(), paddle.speed);
        self.serve_wait = self.serve_wait.saturating_sub(1);
        let launch = steer == Steer::Idle && self.serve_wait == 0;
        if launch {
            self.serve_target = None;
        }
        TickInput { steer, launch }
    }

    fn retarget(&mut self, paddle_width: f32) {
        let half = paddle_width / 2.0;
        self.missing = self.rng.random::<f32>() < self.miss_chance;
        self.aim_offset = if self.missing {
            half + self.rng.random_range(MISS_MARGIN)
        } else {
            let spread = half * AIM_SPREAD;
            self.rng.random_range(-spread..=spread)
        };
    }
}

/// Steer so the paddle center approaches `target`, idling within one step
fn steer_toward(target: f32, center: f32, speed: f32) -> Steer {
    let delta = target - center;
    if delta.abs() <= speed {
        Steer::Idle
    } else if delta < 0.0 {
        Steer::Left
    } else {
        Steer::Right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use glam::Vec2;

    #[test]
    fn test_steer_toward() {
        assert_eq!(steer_toward(100.0, 400.0, 3.0), Steer::Left);
        assert_eq!(steer_toward(700.0, 400.0, 3.0), Steer::Right);
        assert_eq!(steer_toward(402.0, 400.0, 3.0), Steer::Idle);
    }

    #[test]
    fn test_serves_within_delay() {
        let mut game = Game::default();
        let mut pilot = Autopilot::new(7, 0.0);
        // Longest carry is the full canvas at 3 px/frame, plus the wait
        for _ in 0..400 {
            let input = pilot.drive(game.state());
            game.step(&input);
            if game.state().ball.moving {
                return;
            }
        }
        panic!("autopilot never served");
    }

    #[test]
    fn test_tracks_descending_ball() {
        let mut state = GameState::default();
        state.ball.moving = true;
        state.ball.vel = Vec2::new(2.0, 2.0);

        let mut pilot = Autopilot::new(1, 0.0);
        state.ball.pos = Vec2::new(700.0, 300.0);
        assert_eq!(pilot.drive(&state).steer, Steer::Right);

        state.ball.pos = Vec2::new(100.0, 300.0);
        assert_eq!(pilot.drive(&state).steer, Steer::Left);
    }

    #[test]
    fn test_deliberate_miss_aims_off_paddle() {
        let mut state = GameState::default();
        state.ball.moving = true;
        state.ball.vel = Vec2::new(2.0, 2.0);
        state.ball.pos = Vec2::new(250.0, 300.0);

        let mut pilot = Autopilot::new(3, 1.0);
        pilot.drive(&state);
        assert!(pilot.missing);
        assert!(pilot.aim_offset > state.paddle.width / 2.0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let play = |seed| {
            let mut game = Game::default();
            let mut pilot = Autopilot::new(seed, 0.2);
            game.run(|state| pilot.drive(state), 20_000)
        };

        let a = play(42);
        let b = play(42);
        assert_eq!(a, b);
        assert_eq!(a.score, 10 * (40 - a.bricks_left as u64));
        assert!(a.lives <= 3);
    }
}
