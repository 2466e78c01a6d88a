/// Projects a `GameWorld` into a `FrameBuffer`.
///
/// No game logic is performed here and nothing is written to a device; the
/// display sinks take it from the finished buffer.

use crate::config::{
    BLINK_HALF_PERIOD, BOARD_HEIGHT, BOARD_WIDTH, BOTTOM_BORDER_ROW, CENTER_COLUMN,
    LEFT_PADDLE_COLUMN, RIGHT_BORDER_COLUMN, RIGHT_PADDLE_COLUMN, SCORE_MAX, SCORE_ROW,
    TOP_BORDER_ROW,
};
use crate::entities::{GameWorld, MatchState, Side};
use crate::frame::{FrameBuffer, Rgb, BALL, BORDER, LEFT, OFF, RIGHT};

/// Blinking elements are shown while `(frame_counter / 5)` is even.
pub fn blink_visible(frame_counter: u32) -> bool {
    (frame_counter / BLINK_HALF_PERIOD) % 2 == 0
}

fn side_color(side: Side) -> Rgb {
    match side {
        Side::Left => LEFT,
        Side::Right => RIGHT,
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(world: &GameWorld) -> FrameBuffer {
    let mut fb = FrameBuffer::new();
    render_into(world, &mut fb);
    fb
}

/// Render into an existing buffer, overwriting every cell.
pub fn render_into(world: &GameWorld, fb: &mut FrameBuffer) {
    fb.clear(OFF);
    draw_border(fb);

    let blink_off = !blink_visible(world.frame_counter);
    for side in [Side::Left, Side::Right] {
        draw_paddle(fb, world, side, blink_off);
        draw_score(fb, world, side, blink_off);
    }
    draw_ball(fb, world, blink_off);
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border(fb: &mut FrameBuffer) {
    // Horizontal bars stop one short of the last column.
    fb.hline(0, TOP_BORDER_ROW, BOARD_WIDTH as i32 - 1, BORDER);
    fb.hline(0, BOTTOM_BORDER_ROW, BOARD_WIDTH as i32 - 1, BORDER);

    let height = BOARD_HEIGHT as i32 - TOP_BORDER_ROW;
    for column in [0, CENTER_COLUMN, RIGHT_BORDER_COLUMN] {
        fb.vline(column, TOP_BORDER_ROW, height, BORDER);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_paddle(fb: &mut FrameBuffer, world: &GameWorld, side: Side, blink_off: bool) {
    // After a point, the side that conceded blinks.
    let hidden = world.state == MatchState::PointScored
        && blink_off
        && world.last_scorer() != side;
    let color = if hidden { OFF } else { side_color(side) };

    let column = match side {
        Side::Left => LEFT_PADDLE_COLUMN,
        Side::Right => RIGHT_PADDLE_COLUMN,
    };
    let paddle = world.paddle(side);
    fb.vline(column, paddle.y, paddle.length, color);
}

/// One cell per point along the score row: the left run grows rightwards
/// from column 1, the right run grows leftwards from the right paddle column.
fn draw_score(fb: &mut FrameBuffer, world: &GameWorld, side: Side, blink_off: bool) {
    let score = world.paddle(side).score;
    let hidden = blink_off
        && match world.state {
            MatchState::PointScored => world.last_scorer() == side,
            MatchState::GameOver => score == SCORE_MAX,
            _ => false,
        };
    let color = if hidden { OFF } else { side_color(side) };

    let len = score as i32;
    match side {
        Side::Left => fb.hline(1, SCORE_ROW, len, color),
        Side::Right => fb.hline(RIGHT_PADDLE_COLUMN - len + 1, SCORE_ROW, len, color),
    }
}

fn draw_ball(fb: &mut FrameBuffer, world: &GameWorld, blink_off: bool) {
    let blinking = matches!(
        world.state,
        MatchState::AwaitingTurnStart | MatchState::PointScored
    );
    let color = if blinking && blink_off { OFF } else { BALL };
    fb.set(world.ball.x, world.ball.y, color);
}
