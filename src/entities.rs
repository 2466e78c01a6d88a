/// Game entities and the world that owns them. Plain data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    /// Ball parked at the centre, blinking, waiting to be served.
    AwaitingTurnStart,
    Playing,
    /// Board frozen after a point while the scorer's run blinks.
    PointScored,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

// ── Paddles & ball ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Paddle {
    pub score: u32,
    /// Row of the top cell.
    pub y: i32,
    /// -1 (up), 0 or 1 (down).
    pub y_velocity: i32,
    /// Height in rows.
    pub length: i32,
}

impl Paddle {
    /// Whether `row` lies within the paddle's vertical span.
    pub fn covers(&self, row: i32) -> bool {
        row >= self.y && row <= self.y + self.length - 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    /// Always -1 or 1.
    pub x_velocity: i32,
    /// Always -1 or 1.
    pub y_velocity: i32,
}

// ── Input sample ──────────────────────────────────────────────────────────────

/// One per-tick velocity sample for both paddles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PaddleInput {
    pub left: i32,
    pub right: i32,
}

impl PaddleInput {
    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  `Copy` so pure update functions can return a
/// new value without touching the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameWorld {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub state: MatchState,
    /// Ticks elapsed since entering `state`.
    pub frame_counter: u32,
    /// Only meaningful in `PointScored` and `GameOver`.
    pub last_scorer_was_left: bool,
}

impl GameWorld {
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn last_scorer(&self) -> Side {
        if self.last_scorer_was_left {
            Side::Left
        } else {
            Side::Right
        }
    }
}
