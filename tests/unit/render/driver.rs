use super::*;
use crate::{
    foundation::core::Length,
    render::binding::{ProgressSource, Track},
    render::value::{StyleProperty, StyleValue},
    scroll::progress::{ScrollGeometry, ScrollOffset},
    animation::interp::Breakpoints,
};

const DT: f64 = 1.0 / 60.0;

fn source() -> ScrollProgressSource {
    ScrollProgressSource::new(
        ScrollGeometry {
            target_top: 0.0,
            target_height: 3000.0,
            viewport_height: 1000.0,
        },
        ScrollOffset::CONTAIN,
    )
    .unwrap()
}

fn wave() -> Layer {
    Layer::new(
        "wave",
        vec![
            Track::new(
                StyleProperty::TranslateY,
                ProgressSource::Smoothed,
                Breakpoints::new(
                    vec![0.0, 1.0],
                    vec![
                        StyleValue::Length(Length::percent(0.0)),
                        StyleValue::Length(Length::percent(100.0)),
                    ],
                )
                .unwrap(),
            )
            .unwrap(),
            Track::raw(
                StyleProperty::Opacity,
                vec![0.0, 1.0],
                vec![StyleValue::Number(0.0), StyleValue::Number(1.0)],
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn without_spring_smoothed_equals_raw() {
    let mut d = ScrollDriver::new(source(), None, vec![wave()]).unwrap();
    assert!(!d.has_spring());
    d.on_scroll(1000.0);
    let out = d.tick(DT);
    assert_eq!(out.raw.get(), 0.5);
    assert_eq!(out.smoothed, out.raw);
    assert!(d.is_settled());
    let style = out.layer("wave").unwrap();
    assert_eq!(
        style.get(StyleProperty::TranslateY),
        Some(&StyleValue::Length(Length::percent(50.0)))
    );
}

#[test]
fn spring_lags_then_converges_to_raw_progress() {
    let spring = SpringConfig::new(100.0, 30.0).with_rest_delta(0.001);
    let mut d = ScrollDriver::new(source(), Some(spring), vec![wave()]).unwrap();
    d.on_scroll(2000.0);

    let first = d.tick(DT);
    assert_eq!(first.raw, Progress::END);
    assert!(first.smoothed.get() > 0.0 && first.smoothed.get() < 1.0);
    assert_eq!(
        first.layer("wave").unwrap().get(StyleProperty::Opacity),
        Some(&StyleValue::Number(1.0))
    );

    let mut last = first;
    for _ in 0..600 {
        last = d.tick(DT);
        if d.is_settled() {
            break;
        }
    }
    assert!(d.is_settled());
    assert_eq!(last.smoothed, Progress::END);
    assert_eq!(
        last.layer("wave").unwrap().get(StyleProperty::TranslateY),
        Some(&StyleValue::Length(Length::percent(100.0)))
    );
}

#[test]
fn smoothed_progress_never_leaves_unit_interval() {
    let mut d = ScrollDriver::new(source(), Some(SpringConfig::default()), vec![]).unwrap();
    d.on_scroll(2000.0);
    for _ in 0..300 {
        let out = d.tick(DT);
        assert!((0.0..=1.0).contains(&out.smoothed.get()));
    }
}

#[test]
fn frames_count_up_and_unmount_resets() {
    let mut d =
        ScrollDriver::new(source(), Some(SpringConfig::new(100.0, 30.0)), vec![wave()]).unwrap();
    d.on_scroll(1500.0);
    d.tick(DT);
    let out = d.tick(DT);
    assert_eq!(out.frame, 2);

    d.unmount();
    let out = d.evaluate();
    assert_eq!(out.frame, 0);
    assert_eq!(out.raw, Progress::START);
    assert_eq!(out.smoothed, Progress::START);
    assert!(d.is_settled());
}

#[test]
fn missing_layer_lookup_is_none() {
    let d = ScrollDriver::new(source(), None, vec![wave()]).unwrap();
    assert!(d.evaluate().layer("nope").is_none());
}
