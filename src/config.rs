/// Fixed board geometry and timing.  The board is not configurable at
/// runtime; everything the simulation and renderer agree on lives here.

use std::time::Duration;

// ── Board ─────────────────────────────────────────────────────────────────────

pub const BOARD_WIDTH: usize = 60;
pub const BOARD_HEIGHT: usize = 30;

/// Row holding both score runs.
pub const SCORE_ROW: i32 = 0;
/// Top border row.  The bottom border is the last row of the board.
pub const TOP_BORDER_ROW: i32 = 1;
pub const BOTTOM_BORDER_ROW: i32 = BOARD_HEIGHT as i32 - 1;

pub const CENTER_COLUMN: i32 = BOARD_WIDTH as i32 / 2 - 1;
pub const RIGHT_BORDER_COLUMN: i32 = BOARD_WIDTH as i32 - 2;

pub const LEFT_PADDLE_COLUMN: i32 = 1;
pub const RIGHT_PADDLE_COLUMN: i32 = BOARD_WIDTH as i32 - 3;

/// Columns where the ball meets a paddle (or misses it).
pub const LEFT_GUTTER_COLUMN: i32 = 2;
pub const RIGHT_GUTTER_COLUMN: i32 = BOARD_WIDTH as i32 - 4;

/// Rows where the ball bounces off the top/bottom walls.
pub const TOP_WALL_ROW: i32 = 2;
pub const BOTTOM_WALL_ROW: i32 = BOARD_HEIGHT as i32 - 2;

// ── Rules ─────────────────────────────────────────────────────────────────────

pub const SCORE_MAX: u32 = 5;
pub const PADDLE_LENGTH: i32 = 5;

// ── Timing (in ticks) ─────────────────────────────────────────────────────────

pub const TICK_PERIOD: Duration = Duration::from_millis(50);

pub const TURN_START_TICKS: u32 = 35;
pub const POINT_SCORED_TICKS: u32 = 30;
pub const GAME_OVER_TICKS: u32 = 100;

/// Blinking elements are shown for this many ticks, then hidden for as many.
pub const BLINK_HALF_PERIOD: u32 = 5;
