use matrix_pong::entities::*;

fn make_world() -> GameWorld {
    GameWorld {
        left: Paddle { score: 1, y: 10, y_velocity: 0, length: 5 },
        right: Paddle { score: 2, y: 20, y_velocity: 1, length: 5 },
        ball: Ball { x: 29, y: 15, x_velocity: 1, y_velocity: -1 },
        state: MatchState::Playing,
        frame_counter: 0,
        last_scorer_was_left: true,
    }
}

#[test]
fn paddle_covers_its_span_only() {
    let p = Paddle { score: 0, y: 10, y_velocity: 0, length: 5 };
    assert!(!p.covers(9));
    assert!(p.covers(10));
    assert!(p.covers(14));
    assert!(!p.covers(15));
}

#[test]
fn paddle_accessors_pick_the_right_side() {
    let mut w = make_world();
    assert_eq!(w.paddle(Side::Left).score, 1);
    assert_eq!(w.paddle(Side::Right).score, 2);

    w.paddle_mut(Side::Right).score = 4;
    assert_eq!(w.right.score, 4);
    assert_eq!(w.left.score, 1);
}

#[test]
fn last_scorer_follows_flag() {
    let mut w = make_world();
    assert_eq!(w.last_scorer(), Side::Left);
    w.last_scorer_was_left = false;
    assert_eq!(w.last_scorer(), Side::Right);
}

#[test]
fn world_copy_is_independent() {
    let original = make_world();
    let mut copy = original;

    copy.ball.x = 3;
    copy.left.score = 5;
    copy.state = MatchState::GameOver;

    assert_eq!(original.ball.x, 29);
    assert_eq!(original.left.score, 1);
    assert_eq!(original.state, MatchState::Playing);
}
