//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match deterministically. Not reentrant:
//! a step must finish before the next command touches the state.

use super::collision::{Axis, Rect, ball_rect_collision, bounce_axis, reflect, reflect_off_walls};
use super::grid::{Faction, Grid};
use super::state::{Ball, GameEvent, GameState, MatchPhase, push_event};
use crate::config::OnWin;
use crate::consts::ESCAPE_STEPS;

/// Advance the match by one tick
///
/// Only a running match simulates. An ended match with an auto-restart
/// policy counts down its delay instead. Returns the winner on the tick the
/// match ends.
pub fn step(state: &mut GameState) -> Option<Faction> {
    match state.phase {
        MatchPhase::Running => {}
        MatchPhase::Ended => {
            countdown_restart(state);
            return None;
        }
        MatchPhase::Idle | MatchPhase::Paused => return None,
    }

    state.time_ticks += 1;

    let width = state.config.arena_width;
    let height = state.config.arena_height;
    let cell_w = state.config.cell_width();
    let cell_h = state.config.cell_height();

    for (index, ball) in state.balls.iter_mut().enumerate() {
        // Plain Euler step, no substepping
        ball.pos += ball.vel;

        let hit = reflect_off_walls(&mut ball.pos, &mut ball.vel, ball.radius, width, height);
        if hit.x {
            push_event(&mut state.events, GameEvent::WallBounce {
                ball: index,
                axis: Axis::X,
            });
        }
        if hit.y {
            push_event(&mut state.events, GameEvent::WallBounce {
                ball: index,
                axis: Axis::Y,
            });
        }

        // At most one conversion per ball per tick
        if let Some((row, col)) = find_cell_collision(&state.grid, ball, cell_w, cell_h) {
            let cell = cell_rect(row, col, cell_w, cell_h);
            state.grid.convert(row, col, ball.faction);
            state.scores.increment(ball.faction);

            ball.vel = reflect(ball.vel, bounce_axis(ball.pos, cell.center()));
            ball.pos += ball.vel * ESCAPE_STEPS;

            log::debug!(
                "{} ball converted cell ({row}, {col}) at tick {}",
                ball.faction.as_str(),
                state.time_ticks
            );
            push_event(&mut state.events, GameEvent::CellConverted {
                ball: index,
                row,
                col,
                faction: ball.faction,
            });
        }
    }

    check_win(state)
}

/// Run one rendered frame: up to `speed_multiplier` steps in sequence
///
/// A win ends the frame early so the ended match, winner included, is what
/// gets drawn. Returns the winner if the match ended during this frame.
pub fn advance_frame(state: &mut GameState) -> Option<Faction> {
    for _ in 0..state.config.speed_multiplier {
        if let Some(winner) = step(state) {
            return Some(winner);
        }
    }
    None
}

/// End the match if one faction owns every cell
pub fn check_win(state: &mut GameState) -> Option<Faction> {
    if state.phase != MatchPhase::Running {
        return None;
    }

    let counts = state.grid.count_by_faction();
    let winner = counts.sole_owner()?;

    state.phase = MatchPhase::Ended;
    state.winner = Some(winner);
    push_event(&mut state.events, GameEvent::MatchWon { winner });
    log::info!(
        "{} wins at tick {} (light {}, dark {})",
        winner.as_str(),
        state.time_ticks,
        state.scores.light,
        state.scores.dark
    );

    if let OnWin::RestartAfterDelay { delay_ticks } = state.config.on_win {
        state.restart_ticks = delay_ticks;
    }

    Some(winner)
}

fn countdown_restart(state: &mut GameState) {
    if !state.auto_restarts() {
        return;
    }
    // Stay ended for `delay_ticks` ticks, restart on the next one
    if state.restart_ticks > 0 {
        state.restart_ticks -= 1;
    } else {
        state.reinitialize();
        state.phase = MatchPhase::Running;
        push_event(&mut state.events, GameEvent::MatchRestarted);
        log::info!("Match restarted");
    }
}

/// Bounds of the cell at `(row, col)`
pub fn cell_rect(row: usize, col: usize, cell_w: f32, cell_h: f32) -> Rect {
    Rect::new(col as f32 * cell_w, row as f32 * cell_h, cell_w, cell_h)
}

/// First opposing cell the ball overlaps
///
/// Scans the 3x3 neighborhood around the ball's cell (clamped to the grid)
/// top to bottom, left to right.
pub fn find_cell_collision(
    grid: &Grid,
    ball: &Ball,
    cell_w: f32,
    cell_h: f32,
) -> Option<(usize, usize)> {
    let row = (ball.pos.y / cell_h).floor() as isize;
    let col = (ball.pos.x / cell_w).floor() as isize;
    let max_row = grid.rows() as isize - 1;
    let max_col = grid.cols() as isize - 1;

    for r in (row - 1).max(0)..=(row + 1).min(max_row) {
        for c in (col - 1).max(0)..=(col + 1).min(max_col) {
            let (r, c) = (r as usize, c as usize);
            if grid.get(r, c) == Some(ball.faction) {
                continue;
            }
            if ball_rect_collision(ball.pos, ball.radius, &cell_rect(r, c, cell_w, cell_h)) {
                return Some((r, c));
            }
        }
    }

    None
}
