use super::*;
use crate::foundation::core::Progress;

#[test]
fn every_preset_validates_and_round_trips_through_json() {
    let scenes = presets();
    assert_eq!(scenes.len(), PRESET_NAMES.len());
    for scene in scenes {
        scene.validate().unwrap();
        let json = scene.to_json_pretty().unwrap();
        let back = Scene::from_reader(json.as_bytes()).unwrap();
        assert_eq!(back.def(), scene.def(), "{}", scene.name());
    }
}

#[test]
fn unknown_preset_is_none() {
    assert!(preset("wodniack").is_none());
}

#[test]
fn parallax_layers_move_at_different_rates() {
    let mut d = preset("parallax").unwrap().driver().unwrap();
    d.on_scroll(1500.0); // halfway through the 3000px sticky span
    let out = d.tick(1.0 / 60.0);
    assert_eq!(out.raw, Progress::new(0.5));
    let css = |name: &str| out.layer(name).unwrap().to_css();
    assert_eq!(css("background"), "transform: translateY(50%) scale(1.5)");
    assert_eq!(css("floating"), "transform: translateY(30%)");
    assert_eq!(css("midground"), "transform: translateY(15%)");
    assert_eq!(css("foreground"), "transform: translateY(-15%)");
    assert_eq!(css("card-b"), "transform: rotate(-180deg)");
}

#[test]
fn radga_color_follows_raw_progress_while_wave_is_smoothed() {
    let mut d = preset("radga").unwrap().driver().unwrap();
    d.on_scroll(750.0);
    let out = d.tick(1.0 / 60.0);
    assert_eq!(out.raw, Progress::new(0.5));
    assert_eq!(
        out.layer("gradient").unwrap().to_css(),
        "color: #8b5cf6"
    );
    assert!(out.smoothed.get() < 0.5);
}

#[test]
fn first_last_cross_fades() {
    let mut d = preset("first-last").unwrap().driver().unwrap();
    d.on_scroll(3000.0);
    let mut out = d.tick(1.0 / 60.0);
    for _ in 0..1200 {
        out = d.tick(1.0 / 60.0);
        if d.is_settled() {
            break;
        }
    }
    assert_eq!(out.smoothed, Progress::END);
    assert_eq!(
        out.layer("first").unwrap().to_css(),
        "transform: scale(0.8) rotate(-180deg); opacity: 0"
    );
    assert_eq!(
        out.layer("last").unwrap().to_css(),
        "transform: scale(1) rotate(0deg); opacity: 1"
    );
    assert_eq!(
        out.layer("progress-ring").unwrap().to_css(),
        "stroke-dashoffset: 0px"
    );
}
