use std::convert::Infallible;

use tilt_text_engine::domain::font::FontDescriptor;
use tilt_text_engine::systems::text_bodies::{TextExtents, TextMeasure};
use tilt_text_engine::{DemoConfig, DrawCommand, OrientationReading, Scene};

/// Glyph box of half an em per character
struct HalfEm;

impl TextMeasure for HalfEm {
    type Error = Infallible;

    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtents, Infallible> {
        let width = text.chars().count() as f64 * font.size * 0.5;
        Ok(TextExtents { left: 0.0, right: width, ascent: font.size * 0.75, descent: font.size * 0.25 })
    }
}

#[test]
fn perf_smoke_frame() {
    let mut scene = Scene::with_seed(DemoConfig::default(), 800.0, 600.0, 7);
    scene.create_bounds();
    scene.populate(&HalfEm).unwrap();
    scene.enable_perf_metrics(true);

    for _ in 0..30 {
        scene.frame_tick(None);
    }

    let stats = scene.get_frame_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.frame_ms() >= stats.render_ms());
    assert_eq!(stats.frames(), 30);
    assert_eq!(stats.body_count(), 14);
}

#[test]
fn display_list_covers_every_body() {
    let mut scene = Scene::with_seed(DemoConfig::default(), 800.0, 600.0, 7);
    scene.create_bounds();
    scene.populate(&HalfEm).unwrap();

    let reading = OrientationReading::degrees(0.0, 90.0, 0.0);
    let commands = scene.frame_tick(Some(&reading));

    assert!(matches!(commands[0], DrawCommand::Clear { .. }));
    assert!(matches!(commands[1], DrawCommand::FillRect { .. }));

    let outlines = commands.iter().filter(|c| matches!(c, DrawCommand::StrokePolygon { .. })).count();
    let labels = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Text { text, .. } if text == "Hello World"))
        .count();
    assert_eq!(outlines, 14);
    assert_eq!(labels, 10);

    let overlay: Vec<&str> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } if text != "Hello World" => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(overlay, ["alpha: 0", "beta: 90", "gamma: 0"]);
}

#[test]
fn config_from_json_drives_population() {
    let config = DemoConfig::from_json(r#"{ "label": "Hi", "body_count": 3, "spawn_margin": 20 }"#).unwrap();
    let mut scene = Scene::with_seed(config, 200.0, 200.0, 1);
    scene.create_bounds();
    let handles = scene.populate(&HalfEm).unwrap();

    assert_eq!(handles.len(), 3);
    for handle in handles {
        let p = scene.physics().position(handle).unwrap();
        assert!((20.0..=180.0).contains(&p.x), "x = {}", p.x);
        assert!((20.0..=180.0).contains(&p.y), "y = {}", p.y);
        assert_eq!(scene.text_bodies().get(handle).unwrap().label, "Hi");
    }
}
