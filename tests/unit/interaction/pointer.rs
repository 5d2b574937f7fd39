use super::*;

fn tracker() -> PointerTracker {
    PointerTracker::new(TrackerConfig::default()).unwrap()
}

#[test]
fn velocity_is_scaled_delta_and_distance_accumulates() {
    let mut t = tracker();
    assert!(t.on_move(Point::new(10.0, 10.0), 0));
    assert_eq!(t.velocity(), Vec2::ZERO);
    assert!(!t.is_moving());

    t.on_move(Point::new(13.0, 14.0), 16);
    assert_eq!(t.position(), Point::new(13.0, 14.0));
    assert!((t.velocity().x - 0.3).abs() < 1e-12);
    assert!((t.velocity().y - 0.4).abs() < 1e-12);
    assert!((t.distance() - 5.0).abs() < 1e-12);
    assert!(t.is_moving());

    t.on_move(Point::new(13.0, 20.0), 32);
    assert!((t.distance() - 11.0).abs() < 1e-12);
}

#[test]
fn tiny_moves_do_not_count_as_moving() {
    let mut t = tracker();
    t.on_move(Point::new(0.0, 0.0), 0);
    t.on_move(Point::new(0.3, 0.0), 10);
    assert!(!t.is_moving());
    assert!((t.distance() - 0.3).abs() < 1e-12);
}

#[test]
fn velocity_is_zero_once_idle_timeout_elapses() {
    let mut t = tracker();
    t.on_move(Point::new(0.0, 0.0), 1000);
    t.on_move(Point::new(50.0, 0.0), 1016);
    t.tick(1050);
    assert!(t.is_moving());
    assert_ne!(t.velocity(), Vec2::ZERO);

    t.tick(1116);
    assert!(!t.is_moving());
    assert_eq!(t.velocity(), Vec2::ZERO);
    // distance survives the idle reset
    assert!((t.distance() - 50.0).abs() < 1e-12);
}

#[test]
fn new_movement_restarts_the_idle_clock() {
    let mut t = tracker();
    t.on_move(Point::new(0.0, 0.0), 0);
    t.on_move(Point::new(10.0, 0.0), 90);
    t.tick(150);
    assert!(t.is_moving());
    t.tick(190);
    assert!(!t.is_moving());
}

#[test]
fn samples_outside_bounds_are_ignored() {
    let cfg = TrackerConfig {
        bounds: Some(Rect::new(100.0, 100.0, 300.0, 200.0)),
        ..TrackerConfig::default()
    };
    let mut t = PointerTracker::new(cfg).unwrap();
    assert!(!t.on_move(Point::new(50.0, 150.0), 0));
    assert_eq!(t.distance(), 0.0);

    assert!(t.on_move(Point::new(150.0, 120.0), 10));
    assert_eq!(t.position(), Point::new(50.0, 20.0));
    assert!(t.on_move(Point::new(300.0, 200.0), 20));
    assert_eq!(t.position(), Point::new(200.0, 100.0));
}

#[test]
fn smoothed_position_eases_toward_pointer() {
    let mut t = tracker();
    t.on_move(Point::new(0.0, 0.0), 0);
    t.on_move(Point::new(100.0, 0.0), 10);
    t.tick(16);
    assert!((t.smoothed().x - 10.0).abs() < 1e-9);
    t.tick(32);
    assert!((t.smoothed().x - 19.0).abs() < 1e-9);
    for i in 0..400 {
        t.tick(48 + i);
    }
    assert!((t.smoothed().x - 100.0).abs() < 1e-6);
}

#[test]
fn reset_clears_history() {
    let mut t = tracker();
    t.on_move(Point::new(0.0, 0.0), 0);
    t.on_move(Point::new(10.0, 0.0), 10);
    t.reset();
    assert_eq!(t.distance(), 0.0);
    assert_eq!(t.velocity(), Vec2::ZERO);
    t.on_move(Point::new(40.0, 0.0), 20);
    assert_eq!(t.distance(), 0.0);
}

#[test]
fn config_validation() {
    let cfg = TrackerConfig {
        smooth_factor: 1.5,
        ..TrackerConfig::default()
    };
    assert!(PointerTracker::new(cfg).is_err());
    let cfg: TrackerConfig = serde_json::from_str(r#"{ "idle_timeout_ms": 250 }"#).unwrap();
    assert_eq!(cfg.idle_timeout_ms, 250);
    assert_eq!(cfg.velocity_scale, 0.1);
}

#[test]
fn non_finite_samples_are_ignored() {
    let mut t = tracker();
    assert!(t.on_move(Point::new(0.0, 0.0), 0));
    assert!(!t.on_move(Point::new(f64::NAN, 0.0), 8));
    assert!(!t.on_move(Point::new(0.0, f64::INFINITY), 12));
    assert_eq!(t.position(), Point::ZERO);
    assert!(t.on_move(Point::new(10.0, 0.0), 16));
    assert!((t.distance() - 10.0).abs() < 1e-12);
    assert!(t.velocity().is_finite());
}

#[test]
fn inverted_or_non_finite_bounds_are_rejected() {
    let cfg = TrackerConfig {
        bounds: Some(Rect::new(100.0, 0.0, 0.0, 100.0)),
        ..TrackerConfig::default()
    };
    assert!(PointerTracker::new(cfg).is_err());
    let cfg = TrackerConfig {
        bounds: Some(Rect::new(0.0, 0.0, f64::INFINITY, 100.0)),
        ..TrackerConfig::default()
    };
    assert!(PointerTracker::new(cfg).is_err());
    let cfg = TrackerConfig {
        bounds: Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
        ..TrackerConfig::default()
    };
    let mut t = PointerTracker::new(cfg).unwrap();
    assert!(t.on_move(Point::new(100.0, 100.0), 0));
    assert_eq!(t.position(), Point::new(100.0, 100.0));
}
