use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn clamps_to_boundary_outputs() {
    let bp = Breakpoints::new(vec![0.2, 0.8], vec![10.0, 20.0]).unwrap();
    for s in [-1.0, 0.0, 0.1, 0.2] {
        assert_eq!(bp.map(s), 10.0);
    }
    for s in [0.8, 0.9, 1.0, 5.0] {
        assert_eq!(bp.map(s), 20.0);
    }
}

#[test]
fn interpolation_is_affine_within_each_segment() {
    // orken scale track
    let bp = Breakpoints::new(vec![0.0, 0.5, 1.0], vec![1.0, 1.5, 0.8]).unwrap();
    for seg in [(0.0, 0.5), (0.5, 1.0)] {
        let (a, b) = seg;
        let fa = bp.map(a + 1e-6);
        let fb = bp.map(b - 1e-6);
        let slope = (fb - fa) / ((b - 1e-6) - (a + 1e-6));
        for i in 1..10 {
            let s = a + (b - a) * (i as f64 / 10.0);
            let expected = fa + slope * (s - (a + 1e-6));
            assert!(approx(bp.map(s), expected), "s={s}");
        }
    }
    assert!(approx(bp.map(0.25), 1.25));
    assert!(approx(bp.map(0.75), 1.15));
}

#[test]
fn hits_interior_breakpoints_exactly() {
    let bp = Breakpoints::new(vec![0.0, 0.3, 0.7, 1.0], vec![1.0, 0.8, 0.3, 0.0]).unwrap();
    assert_eq!(bp.map(0.3), 0.8);
    assert_eq!(bp.map(0.7), 0.3);
}

#[test]
fn single_pair_is_constant() {
    let bp = Breakpoints::new(vec![0.5], vec![42.0]).unwrap();
    assert_eq!(bp.map(0.0), 42.0);
    assert_eq!(bp.map(1.0), 42.0);
}

#[test]
fn repeated_input_jumps_to_right_hand_output() {
    let bp = Breakpoints::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 5.0, 6.0]).unwrap();
    assert!(approx(bp.map(0.25), 0.5));
    assert_eq!(bp.map(0.5), 5.0);
    assert!(approx(bp.map(0.75), 5.5));
}

#[test]
fn nan_scalar_maps_to_first_output() {
    let bp = Breakpoints::new(vec![0.0, 1.0], vec![3.0, 4.0]).unwrap();
    assert_eq!(bp.map(f64::NAN), 3.0);
}

#[test]
fn unclamped_breakpoints_extrapolate() {
    let bp = Breakpoints::new(vec![0.0, 1.0], vec![0.0, 100.0])
        .unwrap()
        .with_clamp(false);
    assert!(approx(bp.map(1.5), 150.0));
    assert!(approx(bp.map(-0.5), -50.0));
}

#[test]
fn per_segment_ease_is_applied() {
    let bp = Breakpoints::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0])
        .unwrap()
        .with_ease(vec![Ease::InQuad, Ease::Linear])
        .unwrap();
    assert!(approx(bp.map(0.5), 0.25));
    assert!(approx(bp.map(1.5), 1.5));

    let wrong = Breakpoints::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0])
        .unwrap()
        .with_ease(vec![Ease::InQuad, Ease::Linear, Ease::OutQuad]);
    assert!(wrong.is_err());
}

#[test]
fn colors_interpolate_per_channel() {
    // radga color shift
    let bp = Breakpoints::new(
        vec![0.0, 0.5, 1.0],
        vec![
            Rgba8::from_hex("#06b6d4").unwrap(),
            Rgba8::from_hex("#8b5cf6").unwrap(),
            Rgba8::from_hex("#ec4899").unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(bp.map(0.0).to_hex(), "#06b6d4");
    assert_eq!(bp.map(0.5).to_hex(), "#8b5cf6");
    let mid = bp.map(0.25);
    assert_eq!(mid.r, ((0x06 as f64 + 0x8b as f64) / 2.0).round() as u8);
}

#[test]
fn lengths_keep_their_unit() {
    let bp = Breakpoints::new(
        vec![0.0, 1.0],
        vec![Length::percent(0.0), Length::percent(100.0)],
    )
    .unwrap();
    assert_eq!(bp.map(0.25), Length::percent(25.0));
}

#[test]
fn mixed_units_switch_immediately() {
    let a = Length::px(0.0);
    let b = Length::percent(50.0);
    assert_eq!(Length::lerp(&a, &b, 0.0), a);
    assert_eq!(Length::lerp(&a, &b, 0.01), b);
}

#[test]
fn construction_rejects_bad_shapes() {
    assert!(Breakpoints::<f64>::new(vec![], vec![]).is_err());
    assert!(Breakpoints::new(vec![0.0, 1.0], vec![1.0]).is_err());
}

#[test]
fn validate_rejects_decreasing_and_non_finite_inputs() {
    let bp = Breakpoints::new(vec![0.0, 0.6, 0.4], vec![0.0, 1.0, 2.0]).unwrap();
    let err = bp.validate().unwrap_err().to_string();
    assert!(err.contains("non-decreasing"), "{err}");

    let bp = Breakpoints::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]).unwrap();
    assert!(bp.validate().is_err());

    let bp = Breakpoints::new(vec![0.0, 0.0, 1.0], vec![0.0, 1.0, 2.0]).unwrap();
    assert!(bp.validate().is_ok());
}

#[test]
fn out_of_order_inputs_do_not_panic() {
    let bp = Breakpoints::new(vec![1.0, 0.0, 0.5], vec![0.0, 1.0, 2.0]).unwrap();
    for i in 0..=20 {
        let _ = bp.map(i as f64 / 20.0);
    }
}

#[test]
fn one_shot_interpolate() {
    let v = interpolate(&[0.0, 100.0], &[0.0, -20.0], 50.0).unwrap();
    assert!(approx(v, -10.0));
    assert!(interpolate::<f64>(&[0.0], &[], 0.0).is_err());
}
