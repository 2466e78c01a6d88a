/// The match state machine and the per-tick physics of a rally.
///
/// Functions read a `GameWorld` and hand back the next one; the only side
/// effect is drawing serve directions from the caller's RNG.

use rand::Rng;

use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, BOTTOM_WALL_ROW, GAME_OVER_TICKS, LEFT_GUTTER_COLUMN,
    PADDLE_LENGTH, POINT_SCORED_TICKS, RIGHT_GUTTER_COLUMN, SCORE_MAX, TOP_WALL_ROW,
    TURN_START_TICKS,
};
use crate::entities::{Ball, GameWorld, MatchState, Paddle, PaddleInput, Side};

/// Lowest row a paddle's top edge may occupy.
const PADDLE_MIN_Y: i32 = TOP_WALL_ROW;

fn paddle_max_y(length: i32) -> i32 {
    BOARD_HEIGHT as i32 - 1 - length
}

fn random_direction(rng: &mut impl Rng) -> i32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

// ── Transitions ──────────────────────────────────────────────────────────────

/// The one side effect shared by every transition.
fn enter_state(world: &mut GameWorld, state: MatchState) {
    tracing::debug!(from = ?world.state, to = ?state, "state transition");
    world.state = state;
    world.frame_counter = 0;
}

/// Park the ball at the centre with a random diagonal and recentre both
/// paddles, then wait for the serve.
pub fn start_turn(world: &GameWorld, rng: &mut impl Rng) -> GameWorld {
    let mut next = *world;
    enter_state(&mut next, MatchState::AwaitingTurnStart);

    next.ball = Ball {
        x: BOARD_WIDTH as i32 / 2 - 1,
        y: BOARD_HEIGHT as i32 / 2,
        x_velocity: random_direction(rng),
        y_velocity: random_direction(rng),
    };

    for side in [Side::Left, Side::Right] {
        let paddle = next.paddle_mut(side);
        paddle.length = PADDLE_LENGTH;
        paddle.y = BOARD_HEIGHT as i32 / 2 - PADDLE_LENGTH / 2;
    }
    next
}

/// Build a fresh game: scores and velocities zeroed, first turn pending.
pub fn init_game(rng: &mut impl Rng) -> GameWorld {
    let blank = GameWorld {
        left: Paddle::default(),
        right: Paddle::default(),
        ball: Ball::default(),
        state: MatchState::AwaitingTurnStart,
        frame_counter: 0,
        last_scorer_was_left: false,
    };
    start_turn(&blank, rng)
}

/// Credit `scorer` with one point and freeze the board.
fn award_point(world: &mut GameWorld, scorer: Side) {
    let paddle = world.paddle_mut(scorer);
    paddle.score = (paddle.score + 1).min(SCORE_MAX);
    let score = paddle.score;

    world.last_scorer_was_left = scorer == Side::Left;
    if score == SCORE_MAX {
        tracing::info!(?scorer, "game won");
        enter_state(world, MatchState::GameOver);
    } else {
        tracing::info!(?scorer, left = world.left.score, right = world.right.score, "point scored");
        enter_state(world, MatchState::PointScored);
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Store a sampled velocity pair on the paddles.  Samples are normalised to
/// -1, 0 or 1.
pub fn apply_input(world: &GameWorld, input: PaddleInput) -> GameWorld {
    let mut next = *world;
    next.left.y_velocity = input.left.signum();
    next.right.y_velocity = input.right.signum();
    next
}

// ── Simulation step ──────────────────────────────────────────────────────────

/// Move a paddle by its velocity, then saturate it inside the walls.
pub fn move_paddle(paddle: &Paddle) -> Paddle {
    let y = (paddle.y + paddle.y_velocity)
        .min(paddle_max_y(paddle.length))
        .max(PADDLE_MIN_Y);
    Paddle { y, ..*paddle }
}

fn step_playing(world: &mut GameWorld) {
    // Paddles move first so the ball checks below see this tick's positions.
    world.left = move_paddle(&world.left);
    world.right = move_paddle(&world.right);

    if world.ball.x == LEFT_GUTTER_COLUMN {
        if !world.left.covers(world.ball.y) {
            award_point(world, Side::Right);
            return;
        }
        world.ball.x_velocity = -world.ball.x_velocity;
    }

    if world.ball.x == RIGHT_GUTTER_COLUMN {
        if !world.right.covers(world.ball.y) {
            award_point(world, Side::Left);
            return;
        }
        world.ball.x_velocity = -world.ball.x_velocity;
    }

    if world.ball.y == TOP_WALL_ROW || world.ball.y == BOTTOM_WALL_ROW {
        world.ball.y_velocity = -world.ball.y_velocity;
    }

    world.ball.x += world.ball.x_velocity;
    world.ball.y += world.ball.y_velocity;
}

// ── Per-tick advance ─────────────────────────────────────────────────────────

/// Advance the state machine by one tick.  Randomness is only consumed when
/// a new turn is served.
pub fn tick(world: &GameWorld, rng: &mut impl Rng) -> GameWorld {
    let mut next = *world;
    next.frame_counter += 1;

    match next.state {
        MatchState::AwaitingTurnStart => {
            if next.frame_counter >= TURN_START_TICKS {
                enter_state(&mut next, MatchState::Playing);
            }
        }
        MatchState::Playing => step_playing(&mut next),
        MatchState::PointScored => {
            if next.frame_counter >= POINT_SCORED_TICKS {
                next = start_turn(&next, rng);
            }
        }
        MatchState::GameOver => {
            if next.frame_counter >= GAME_OVER_TICKS {
                tracing::debug!("restarting game");
                next = init_game(rng);
            }
        }
    }
    next
}
