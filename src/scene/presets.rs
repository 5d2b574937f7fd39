//! Built-in scenes reproducing the scroll showcase pages.

use crate::{
    animation::spring::SpringConfig,
    foundation::core::{Length, Rgba8},
    render::binding::ProgressSource,
    render::value::{StyleProperty as P, StyleValue},
    scene::model::{LayerDef, Scene, SceneDef, TrackDef},
    scroll::progress::{ScrollGeometry, ScrollOffset},
};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 5] = ["parallax", "orken", "radga", "sofi", "first-last"];

/// Look up a built-in scene by name.
pub fn preset(name: &str) -> Option<Scene> {
    let def = match name {
        "parallax" => parallax(),
        "orken" => orken(),
        "radga" => radga(),
        "sofi" => sofi(),
        "first-last" => first_last(),
        _ => return None,
    };
    Some(Scene::from_def(def))
}

/// Every built-in scene, in [`PRESET_NAMES`] order.
pub fn presets() -> Vec<Scene> {
    PRESET_NAMES.iter().filter_map(|n| preset(n)).collect()
}

fn num(v: f64) -> StyleValue {
    StyleValue::Number(v)
}

fn pct(v: f64) -> StyleValue {
    StyleValue::Length(Length::percent(v))
}

fn deg(v: f64) -> StyleValue {
    StyleValue::Length(Length::deg(v))
}

fn hex(rgb: u32) -> StyleValue {
    let [_, r, g, b] = rgb.to_be_bytes();
    StyleValue::Color(Rgba8::rgb(r, g, b))
}

fn track(property: P, inputs: &[f64], outputs: &[StyleValue]) -> TrackDef {
    TrackDef {
        property,
        source: ProgressSource::Raw,
        inputs: inputs.to_vec(),
        outputs: outputs.to_vec(),
        ease: Vec::new(),
        clamp: true,
    }
}

fn smoothed(property: P, inputs: &[f64], outputs: &[StyleValue]) -> TrackDef {
    TrackDef {
        source: ProgressSource::Smoothed,
        ..track(property, inputs, outputs)
    }
}

fn layer(name: &str, tracks: Vec<TrackDef>) -> LayerDef {
    LayerDef {
        name: name.to_owned(),
        tracks,
    }
}

fn sticky_section(height_vh: f64) -> ScrollGeometry {
    ScrollGeometry {
        target_top: 0.0,
        target_height: height_vh * 10.0,
        viewport_height: 1000.0,
    }
}

fn parallax() -> SceneDef {
    SceneDef {
        name: "parallax".to_owned(),
        geometry: sticky_section(400.0),
        offset: ScrollOffset::CONTAIN,
        spring: None,
        layers: vec![
            layer(
                "background",
                vec![
                    track(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(100.0)]),
                    track(P::Scale, &[0.0, 0.5, 1.0], &[num(1.0), num(1.5), num(2.0)]),
                ],
            ),
            layer(
                "floating",
                vec![track(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(60.0)])],
            ),
            layer(
                "card-a",
                vec![track(P::Rotate, &[0.0, 1.0], &[num(0.0), num(360.0)])],
            ),
            layer(
                "card-b",
                vec![track(P::Rotate, &[0.0, 1.0], &[num(0.0), num(-360.0)])],
            ),
            layer(
                "midground",
                vec![track(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(30.0)])],
            ),
            layer(
                "foreground",
                vec![track(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(-30.0)])],
            ),
            layer(
                "hero-text",
                vec![
                    track(
                        P::TranslateY,
                        &[0.0, 0.5, 1.0],
                        &[pct(0.0), pct(-50.0), pct(-100.0)],
                    ),
                    track(
                        P::Opacity,
                        &[0.0, 0.3, 0.7, 1.0],
                        &[num(1.0), num(0.8), num(0.3), num(0.0)],
                    ),
                ],
            ),
            layer(
                "showcase-image",
                vec![track(P::TranslateY, &[0.3, 0.7], &[pct(0.0), pct(-20.0)])],
            ),
        ],
    }
}

fn orken() -> SceneDef {
    SceneDef {
        name: "orken".to_owned(),
        geometry: sticky_section(300.0),
        offset: ScrollOffset::CONTAIN,
        spring: None,
        layers: vec![layer(
            "stage",
            vec![
                track(P::Scale, &[0.0, 0.5, 1.0], &[num(1.0), num(1.5), num(0.8)]),
                track(P::Rotate, &[0.0, 1.0], &[deg(0.0), deg(180.0)]),
                track(
                    P::Opacity,
                    &[0.0, 0.2, 0.8, 1.0],
                    &[num(0.0), num(1.0), num(1.0), num(0.0)],
                ),
            ],
        )],
    }
}

fn radga() -> SceneDef {
    SceneDef {
        name: "radga".to_owned(),
        geometry: sticky_section(250.0),
        offset: ScrollOffset::CONTAIN,
        spring: Some(SpringConfig::new(100.0, 30.0).with_rest_delta(0.001)),
        layers: vec![
            layer(
                "wave",
                vec![smoothed(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(100.0)])],
            ),
            layer(
                "orb",
                vec![smoothed(
                    P::Scale,
                    &[0.0, 0.5, 1.0],
                    &[num(0.8), num(1.2), num(0.8)],
                )],
            ),
            layer(
                "gradient",
                vec![track(
                    P::Color,
                    &[0.0, 0.5, 1.0],
                    &[hex(0x06b6d4), hex(0x8b5cf6), hex(0xec4899)],
                )],
            ),
        ],
    }
}

fn sofi() -> SceneDef {
    SceneDef {
        name: "sofi".to_owned(),
        geometry: sticky_section(300.0),
        offset: ScrollOffset::CONTAIN,
        spring: None,
        layers: vec![
            layer(
                "header",
                vec![
                    track(P::TranslateY, &[0.0, 1.0], &[pct(0.0), pct(-50.0)]),
                    track(
                        P::Opacity,
                        &[0.0, 0.3, 0.7, 1.0],
                        &[num(1.0), num(0.8), num(0.3), num(0.0)],
                    ),
                ],
            ),
            layer(
                "hero-image",
                vec![
                    track(P::Scale, &[0.0, 0.5, 1.0], &[num(1.0), num(1.2), num(1.5)]),
                    track(P::Blur, &[0.0, 0.5, 1.0], &[num(0.0), num(5.0), num(10.0)]),
                ],
            ),
            layer(
                "overlay",
                vec![track(P::Opacity, &[0.0, 1.0], &[num(0.3), num(0.8)])],
            ),
        ],
    }
}

fn first_last() -> SceneDef {
    SceneDef {
        name: "first-last".to_owned(),
        geometry: sticky_section(400.0),
        offset: ScrollOffset::CONTAIN,
        spring: Some(SpringConfig::new(100.0, 30.0)),
        layers: vec![
            layer(
                "first",
                vec![
                    smoothed(
                        P::Opacity,
                        &[0.0, 0.2, 0.8, 1.0],
                        &[num(1.0), num(1.0), num(0.0), num(0.0)],
                    ),
                    smoothed(P::Scale, &[0.0, 0.2], &[num(1.0), num(0.8)]),
                    smoothed(P::Rotate, &[0.0, 0.5], &[num(0.0), num(-180.0)]),
                ],
            ),
            layer(
                "middle",
                vec![smoothed(
                    P::Opacity,
                    &[0.0, 0.2, 0.8, 1.0],
                    &[num(0.0), num(1.0), num(1.0), num(0.0)],
                )],
            ),
            layer(
                "last",
                vec![
                    smoothed(
                        P::Opacity,
                        &[0.0, 0.2, 0.8, 1.0],
                        &[num(0.0), num(0.0), num(1.0), num(1.0)],
                    ),
                    smoothed(P::Scale, &[0.8, 1.0], &[num(0.8), num(1.0)]),
                    smoothed(P::Rotate, &[0.5, 1.0], &[num(180.0), num(0.0)]),
                ],
            ),
            layer(
                "progress-ring",
                vec![smoothed(
                    P::StrokeDashoffset,
                    &[0.0, 1.0],
                    &[num(502.0), num(0.0)],
                )],
            ),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
