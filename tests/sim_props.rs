//! Property-based tests for the simulation.
//!
//! Run with: cargo test --release sim_props

use glam::Vec2;
use proptest::prelude::*;

use double_arkanoid::GameConfig;
use double_arkanoid::sim::{
    GameEvent, GameState, Grid, MatchPhase, Rect, ball_rect_collision, reflect_off_walls, step,
};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(GameConfig::default(), seed).unwrap();
    state.start();
    state.drain_events();
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Scores only grow, each ball converts at most one cell per tick, and
    /// score totals equal conversion events.
    #[test]
    fn prop_conversions_and_scores(seed in any::<u64>(), ticks in 1usize..1500) {
        let mut state = started(seed);
        let cells = state.grid.rows() * state.grid.cols();
        let mut conversions = 0u64;

        for _ in 0..ticks {
            let before = state.scores;
            step(&mut state);
            let events = state.drain_events();

            for ball in 0..state.balls.len() {
                let per_ball = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::CellConverted { ball: b, .. } if *b == ball))
                    .count();
                prop_assert!(per_ball <= 1);
            }
            conversions += events
                .iter()
                .filter(|e| matches!(e, GameEvent::CellConverted { .. }))
                .count() as u64;

            prop_assert!(state.scores.light >= before.light);
            prop_assert!(state.scores.dark >= before.dark);
            prop_assert_eq!(state.grid.count_by_faction().total(), cells);

            if state.phase == MatchPhase::Ended {
                break;
            }
        }

        prop_assert_eq!(state.scores.total(), conversions);
    }

    /// Reset always lands on the same canonical layout.
    #[test]
    fn prop_reset_is_canonical(seed in any::<u64>(), ticks in 0usize..500) {
        let mut state = started(seed);
        for _ in 0..ticks {
            step(&mut state);
        }
        state.reset();

        prop_assert_eq!(&state.grid, &Grid::new(15, 20));
        prop_assert_eq!(state.scores.total(), 0);
        prop_assert_eq!(state.phase, MatchPhase::Idle);
        prop_assert_eq!(state.winner, None);
        prop_assert_eq!(state.balls[0].pos, Vec2::new(200.0, 300.0));
        prop_assert_eq!(state.balls[1].pos, Vec2::new(600.0, 300.0));
        for ball in &state.balls {
            for v in [ball.vel.x.abs(), ball.vel.y.abs()] {
                prop_assert!((3.0..=5.0).contains(&v));
            }
        }
    }

    /// Wall reflection always leaves the center inside [r, extent - r].
    #[test]
    fn prop_walls_clamp_into_arena(
        x in -50.0f32..850.0,
        y in -50.0f32..650.0,
        vx in -10.0f32..10.0,
        vy in -10.0f32..10.0,
    ) {
        let mut pos = Vec2::new(x, y);
        let mut vel = Vec2::new(vx, vy);
        let hit = reflect_off_walls(&mut pos, &mut vel, 8.0, 800.0, 600.0);

        prop_assert!(pos.x >= 8.0 && pos.x <= 792.0);
        prop_assert!(pos.y >= 8.0 && pos.y <= 592.0);
        prop_assert_eq!(vel.x, if hit.x { -vx } else { vx });
        prop_assert_eq!(vel.y, if hit.y { -vy } else { vy });
    }

    /// A ball whose center lies inside a rectangle always collides with it.
    #[test]
    fn prop_center_inside_collides(
        rx in 0.0f32..500.0,
        ry in 0.0f32..500.0,
        w in 1.0f32..100.0,
        h in 1.0f32..100.0,
        tx in 0.0f32..1.0,
        ty in 0.0f32..1.0,
        r in 0.1f32..20.0,
    ) {
        let rect = Rect::new(rx, ry, w, h);
        let center = Vec2::new(rx + w * tx, ry + h * ty);
        prop_assert!(ball_rect_collision(center, r, &rect));
    }
}
