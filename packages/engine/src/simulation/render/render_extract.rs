//! Display-list extraction
//!
//! Turns the scene into `DrawCommand`s; `api::canvas` replays them on a 2D
//! context. Keeping this pure lets tests assert what a frame would paint.

use crate::core::Vec2;
use crate::domain::orientation::OrientationReading;

use super::Scene;

pub const BACKGROUND_COLOR: &str = "#fff";
pub const INK_COLOR: &str = "#000";
pub const OUTLINE_WIDTH: f64 = 1.0;

pub const OVERLAY_FONT: &str = "16px monospace";
pub const OVERLAY_LINE_HEIGHT: f64 = 16.0;
/// Distance of the overlay from the left and bottom edges
pub const OVERLAY_INSET: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Alphabetic,
}

impl TextBaseline {
    pub fn as_str(self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Alphabetic => "alphabetic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Start,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Start => "start",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface
    Clear { width: f64, height: f64 },
    FillRect { x: f64, y: f64, width: f64, height: f64, color: &'static str },
    /// Closed polygon outline
    StrokePolygon { points: Vec<Vec2>, line_width: f64, color: &'static str },
    /// Text whose origin sits at `(x, y)`, rotated by `angle` around it
    Text {
        text: String,
        font: String,
        x: f64,
        y: f64,
        angle: f64,
        baseline: TextBaseline,
        align: TextAlign,
        color: &'static str,
    },
}

/// Background, then every body (label first, outline on top).
pub(super) fn extract_bodies(scene: &mut Scene) {
    let Scene { physics, texts, commands, width, height, .. } = scene;

    commands.push(DrawCommand::Clear { width: *width, height: *height });
    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: *width,
        height: *height,
        color: BACKGROUND_COLOR,
    });

    for &handle in physics.handles() {
        let Some(outline) = physics.outline(handle) else {
            continue;
        };

        if let Some(tag) = texts.get(handle) {
            let origin = outline.vertices[0];
            commands.push(DrawCommand::Text {
                text: tag.label.clone(),
                font: tag.font.css(),
                x: origin.x,
                y: origin.y,
                angle: outline.angle,
                baseline: TextBaseline::Top,
                align: TextAlign::Left,
                color: INK_COLOR,
            });
        }

        commands.push(DrawCommand::StrokePolygon {
            points: outline.vertices.to_vec(),
            line_width: OUTLINE_WIDTH,
            color: INK_COLOR,
        });
    }
}

/// Bottom-left readout of the latest tilt. Nothing without a reading.
pub(super) fn extract_overlay(scene: &mut Scene, reading: Option<&OrientationReading>) {
    let Some(reading) = reading else {
        return;
    };

    let lines = [
        format!("alpha: {}", reading.alpha_or_default()),
        format!("beta: {}", reading.beta_or_default()),
        format!("gamma: {}", reading.gamma_or_default()),
    ];

    let bottom = scene.height - OVERLAY_INSET;
    for (i, text) in lines.into_iter().enumerate() {
        scene.commands.push(DrawCommand::Text {
            text,
            font: OVERLAY_FONT.to_string(),
            x: OVERLAY_INSET,
            y: bottom - OVERLAY_LINE_HEIGHT * (i + 1) as f64,
            angle: 0.0,
            baseline: TextBaseline::Alphabetic,
            align: TextAlign::Start,
            color: INK_COLOR,
        });
    }
}
