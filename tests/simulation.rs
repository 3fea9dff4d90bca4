use candle_runner::config::MultiplierPolicy;
use candle_runner::render::NullSink;
use candle_runner::sim::{
    Aabb, Actor, Candle, CandleTint, GamePhase, GameState, Pump, ScoreState, TickInput,
    hits_candle, tick,
};
use candle_runner::{Config, FrameControl, LifecycleSink, Runner};
use glam::Vec2;
use proptest::prelude::*;

const DT: f32 = 1.0 / 60.0;

/// Config with spawning pushed out of reach so tests control the pools
fn quiet_config() -> Config {
    Config {
        candle_min_interval: 1.0e9,
        pump_interval: 1.0e9,
        ..Config::default()
    }
}

fn resting_state(config: &Config, seed: u64) -> GameState {
    let mut state = GameState::new(config, seed);
    state.actor.pos.y = config.floor_y() - state.actor.size.y;
    state
}

#[derive(Default)]
struct FinalScore(Option<u64>);

impl LifecycleSink for FinalScore {
    fn game_over(&mut self, final_score: u64) {
        self.0 = Some(final_score);
    }
}

#[test]
fn test_candle_collision_timing() {
    let config = quiet_config();
    let mut state = resting_state(&config, 3);
    let distance = 100.0;
    let height = 60.0;
    let front = state.actor.bounds().right();
    state.candles.push_back(Candle {
        pos: Vec2::new(front + distance, config.floor_y() - height),
        size: Vec2::new(config.candle_width, height),
        tint: CandleTint::Green,
    });

    let expected = (distance / (config.scroll_speed * DT)).ceil() as i64;
    let mut ticks = 0i64;
    while state.phase == GamePhase::Running && ticks < 1000 {
        ticks += 1;
        tick(&mut state, &config, &TickInput::at(ticks as f64 * DT as f64), DT);
    }

    assert_eq!(state.phase, GamePhase::Over);
    assert!((ticks - expected).abs() <= 1, "hit at tick {ticks}, expected {expected}");
    let elapsed = (ticks - 1) as f64 * DT as f64;
    assert!((state.score.score - config.base_score_rate * elapsed).abs() < 1e-3);
}

#[test]
fn test_jump_clears_candle() {
    let config = quiet_config();
    let mut state = resting_state(&config, 3);
    let front = state.actor.bounds().right();
    state.candles.push_back(Candle {
        pos: Vec2::new(front + 30.0, config.floor_y() - 80.0),
        size: Vec2::new(config.candle_width, 80.0),
        tint: CandleTint::Red,
    });

    let mut input = TickInput::at(0.0);
    input.events.push(candle_runner::sim::InputEvent::press(0.0));
    tick(&mut state, &config, &input, DT);
    for i in 1..180 {
        tick(&mut state, &config, &TickInput::at(i as f64 * DT as f64), DT);
    }

    assert_eq!(state.phase, GamePhase::Running);
    assert!(state.candles.is_empty(), "candle scrolled off and was pruned");
    assert!(!state.actor.airborne);
}

#[test]
fn test_restart_after_game_over() {
    let mut runner = Runner::new(Config::default(), 11, 0.0).unwrap();
    let mut lifecycle = FinalScore::default();

    let mut now = 0.0;
    let mut control = FrameControl::Continue;
    for _ in 0..60 * 60 {
        now += 1.0 / 60.0;
        control = runner.frame(now, &mut NullSink, &mut lifecycle);
        if control == FrameControl::Stop {
            break;
        }
    }
    assert_eq!(control, FrameControl::Stop, "no input means the first candle ends the run");
    assert_eq!(runner.state().phase, GamePhase::Over);
    let final_score = lifecycle.0.expect("game over reported");
    assert_eq!(final_score, runner.state().score.truncated());
    assert!(final_score > 0);

    assert_eq!(runner.restart(now, &mut lifecycle), FrameControl::Continue);
    let state = runner.state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score.score, 0.0);
    assert_eq!(state.score.multiplier, 1);
    assert!(state.candles.is_empty());
    assert!(state.pumps.is_empty());
    assert_eq!(state.actor.pos, Vec2::new(100.0, 300.0));
    assert_eq!(state.actor.vy, 0.0);
    assert!(!state.actor.airborne);
    assert_eq!(state.spawner.since_candle, 0.0);
    assert_eq!(state.spawner.since_pump, 0.0);
}

#[test]
fn test_multiplier_score_matches_reference() {
    let config = quiet_config();
    let mut state = resting_state(&config, 5);
    state.pumps.push_back(Pump {
        pos: Vec2::new(120.0, 350.0),
        size: Vec2::splat(config.pump_size),
        active: true,
    });

    let ticks = 12 * 60;
    let mut reference = 0.0f64;
    for i in 0..ticks {
        tick(&mut state, &config, &TickInput::at(i as f64 * DT as f64), DT);
        // Collected on tick 0, active while less than 10s have run down
        let remaining = config.multiplier_duration as f64 - (i + 1) as f64 * DT as f64;
        let multiplier = if remaining > 0.0 { 2.0 } else { 1.0 };
        reference += config.base_score_rate * multiplier * DT as f64;
    }

    assert_eq!(state.score.multiplier, 1);
    let one_tick = config.base_score_rate * DT as f64;
    assert!((state.score.score - reference).abs() <= one_tick * 1.01);
}

#[test]
fn test_fixed_policy_does_not_stack() {
    let config = Config {
        multiplier_policy: MultiplierPolicy::Fixed(2),
        ..quiet_config()
    };
    let mut state = resting_state(&config, 5);
    for x in [110.0, 140.0] {
        state.pumps.push_back(Pump {
            pos: Vec2::new(x, 350.0),
            size: Vec2::splat(config.pump_size),
            active: true,
        });
    }
    tick(&mut state, &config, &TickInput::at(0.0), DT);
    assert_eq!(state.score.multiplier, 2);
}

proptest! {
    #[test]
    fn prop_score_integrates_base_rate(dts in prop::collection::vec(0.001f32..0.05, 1..300)) {
        let config = quiet_config();
        let mut state = GameState::new(&config, 9);
        let mut now = 0.0;
        let mut expected = 0.0f64;
        for &dt in &dts {
            now += dt as f64;
            tick(&mut state, &config, &TickInput::at(now), dt);
            expected += config.base_score_rate * dt as f64;
        }
        prop_assert!((state.score.score - expected).abs() < 1e-9);
        prop_assert!(state.score.score >= 0.0);
    }

    #[test]
    fn prop_fall_rests_on_floor(start_y in 0.0f32..300.0, dt in 0.001f32..0.05) {
        let config = Config::default();
        let mut actor = Actor::new(&config);
        actor.pos.y = start_y;
        actor.airborne = true;
        let mut landed = false;
        for _ in 0..10_000 {
            actor.apply_gravity(config.gravity, config.max_fall_speed, dt);
            actor.integrate(dt);
            if actor.clamp_to_floor(config.floor_y()) {
                landed = true;
                break;
            }
        }
        prop_assert!(landed);
        prop_assert_eq!(actor.pos.y, config.floor_y() - actor.size.y);
        prop_assert!(!actor.airborne);
    }

    #[test]
    fn prop_stacking_counts_pumps(gaps in prop::collection::vec(0.0f32..0.9, 1..10)) {
        let mut score = ScoreState::new();
        for &gap in &gaps {
            score.decay(gap);
            score.collect(MultiplierPolicy::Stack, 10.0);
        }
        prop_assert_eq!(score.multiplier, gaps.len() as u32 + 1);
        prop_assert_eq!(score.countdown, 10.0);
    }

    #[test]
    fn prop_touching_candle_is_safe(x in -500i32..500, y in 0i32..300, h in 40i32..80) {
        let (x, y, h) = (x as f32, y as f32, h as f32);
        let actor = Aabb::new(Vec2::new(x, y), Vec2::new(64.0, 64.0));

        // Candle whose left edge touches the actor's right edge
        let beside = Aabb::new(Vec2::new(x + 64.0, y), Vec2::new(20.0, h));
        prop_assert!(!hits_candle(&actor, &beside));
        let overlapping = Aabb::new(Vec2::new(x + 63.0, y), Vec2::new(20.0, h));
        prop_assert!(hits_candle(&actor, &overlapping));

        // Candle whose top touches the actor's bottom
        let below = Aabb::new(Vec2::new(x + 10.0, y + 64.0), Vec2::new(20.0, h));
        prop_assert!(!hits_candle(&actor, &below));
        let raised = Aabb::new(Vec2::new(x + 10.0, y + 63.0), Vec2::new(20.0, h));
        prop_assert!(hits_candle(&actor, &raised));
    }
}
