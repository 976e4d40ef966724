use volley_core::*;

fn new_match(seed: u64) -> Match {
    Match::new(Config::classic(), 640.0, 480.0, GameRng::new(seed)).unwrap()
}

/// Tick until the ball leaves the court, with a generous safety cap.
fn run_to_end(game: &mut Match) {
    for _ in 0..100_000 {
        game.tick();
        if game.state() == MatchState::Ended {
            return;
        }
    }
    panic!("Match did not end within the tick cap");
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let mut config = Config::classic();
    config.ball_width = 0.0;
    assert!(Match::new(config, 640.0, 480.0, GameRng::new(1)).is_err());

    assert!(
        Match::new(Config::classic(), -640.0, 480.0, GameRng::new(1)).is_err(),
        "Degenerate bounds must fail construction"
    );
}

#[test]
fn test_match_starts_playing_with_right_aligned_paddle() {
    let game = new_match(1);
    assert_eq!(game.state(), MatchState::Playing);
    assert_eq!(game.paddle(Side::Left).rect.x, 0.0);
    assert_eq!(
        game.paddle(Side::Right).rect.x,
        640.0 - game.config().paddle_width
    );
    let ball = game.ball();
    assert_eq!(ball.pos.x, 320.0, "Ball serves from the horizontal center");
}

#[test]
fn test_paddle_action_moves_paddle_on_tick() {
    let mut game = new_match(2);
    game.push_action(Action::Paddle {
        side: Side::Left,
        dir: Dir::Up,
    });
    game.tick();

    let paddle = game.paddle(Side::Left);
    let boost = game.config().paddle_boost;
    assert_eq!(paddle.rect.y, boost, "One impulse moves the paddle by boost");
    assert!(
        (paddle.velocity - (boost - game.config().paddle_decel)).abs() < 1e-6,
        "Velocity damped once after the move"
    );
    assert_eq!(
        game.paddle(Side::Right).rect.y,
        0.0,
        "Other paddle is untouched"
    );
}

#[test]
fn test_ball_exit_ends_the_match() {
    let mut game = new_match(12345);
    run_to_end(&mut game);

    let ball = game.ball();
    assert!(
        ball.pos.x < 0.0 || ball.pos.x > 640.0,
        "Ended match leaves the ball outside the court, got x={}",
        ball.pos.x
    );
}

#[test]
fn test_ended_match_freezes_physics() {
    let mut game = new_match(12345);
    run_to_end(&mut game);

    let ball_before = game.ball();
    let paddle_before = game.paddle(Side::Left);

    for _ in 0..10 {
        game.push_action(Action::Paddle {
            side: Side::Left,
            dir: Dir::Up,
        });
        game.tick();
    }

    assert_eq!(game.state(), MatchState::Ended);
    assert_eq!(game.ball().pos, ball_before.pos, "Ball frozen while ended");
    assert_eq!(
        game.paddle(Side::Left).rect.y,
        paddle_before.rect.y,
        "Paddles frozen while ended"
    );
}

#[test]
fn test_reset_action_restarts_an_ended_match() {
    let mut game = new_match(12345);
    run_to_end(&mut game);

    game.push_action(Action::Reset);
    game.tick();

    assert_eq!(game.state(), MatchState::Playing);
    let ball = game.ball();
    assert_eq!(ball.pos.x, 320.0, "Ball re-served from center");
    assert!(ball.pos.y >= 120.0 && ball.pos.y < 360.0);
    assert_eq!(ball.returns, 0);
    assert_eq!(game.paddle(Side::Left).velocity, 0.0);
    assert_eq!(game.paddle(Side::Right).velocity, 0.0);
}

#[test]
fn test_reset_while_playing_is_a_no_op() {
    // Two matches with the same seed: one receives a reset command, the
    // other does not. Their states must stay bit-identical.
    let mut with_reset = new_match(77);
    let mut control = new_match(77);

    with_reset.push_action(Action::Reset);
    with_reset.tick();
    control.tick();

    assert_eq!(with_reset.state(), MatchState::Playing);
    assert_eq!(with_reset.ball().pos, control.ball().pos);
    assert_eq!(with_reset.ball().angle, control.ball().angle);
    assert_eq!(
        with_reset.paddle(Side::Left).rect.y,
        control.paddle(Side::Left).rect.y
    );
    assert_eq!(
        with_reset.paddle(Side::Right).rect.y,
        control.paddle(Side::Right).rect.y
    );
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = new_match(9);
    game.reset();
    game.reset();

    assert_eq!(game.state(), MatchState::Playing);
    let ball = game.ball();
    assert_eq!(ball.pos.x, 320.0);
    assert!(ball.pos.y >= 120.0 && ball.pos.y < 360.0);
}

#[test]
fn test_resize_realigns_right_paddle_only() {
    let mut game = new_match(3);
    let ball_before = game.ball();
    let left_y = game.paddle(Side::Left).rect.y;

    game.resize(800.0, 600.0);

    assert_eq!(game.bounds(), Bounds::new(800.0, 600.0).unwrap());
    assert_eq!(
        game.paddle(Side::Right).rect.x,
        800.0 - game.config().paddle_width
    );
    assert_eq!(game.paddle(Side::Left).rect.x, 0.0);
    assert_eq!(game.paddle(Side::Left).rect.y, left_y);
    assert_eq!(game.ball().pos, ball_before.pos, "Resize leaves the ball alone");
}

#[test]
fn test_degenerate_resize_is_ignored() {
    let mut game = new_match(3);
    let bounds = game.bounds();
    let right_x = game.paddle(Side::Right).rect.x;

    game.resize(0.0, 600.0);
    game.resize(800.0, -1.0);

    assert_eq!(game.bounds(), bounds, "Bounds unchanged after bad resize");
    assert_eq!(game.paddle(Side::Right).rect.x, right_x);
}

#[test]
fn test_same_seed_and_script_replays_identically() {
    let script = |game: &mut Match, tick: usize| {
        if tick % 3 == 0 {
            game.push_action(Action::Paddle {
                side: Side::Left,
                dir: Dir::Up,
            });
        }
        if tick % 5 == 0 {
            game.push_action(Action::Paddle {
                side: Side::Right,
                dir: Dir::Down,
            });
        }
        game.tick();
    };

    let mut a = new_match(4242);
    let mut b = new_match(4242);
    for tick in 0..500 {
        script(&mut a, tick);
        script(&mut b, tick);
    }

    assert_eq!(a.state(), b.state());
    assert_eq!(a.ball().pos, b.ball().pos);
    assert_eq!(a.ball().angle, b.ball().angle);
    assert_eq!(a.ball().returns, b.ball().returns);
    assert_eq!(
        a.paddle(Side::Left).rect.y,
        b.paddle(Side::Left).rect.y
    );
    assert_eq!(
        a.paddle(Side::Right).rect.y,
        b.paddle(Side::Right).rect.y
    );
}
