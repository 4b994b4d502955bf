use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::domain::font::FontDescriptor;
use crate::simulation::DrawCommand;
use crate::systems::text_bodies::{TextExtents, TextMeasure};

/// Glyph metrics straight from `measureText`, using the exact font the label
/// will later be drawn with.
impl TextMeasure for CanvasRenderingContext2d {
    type Error = JsValue;

    fn measure(&self, text: &str, font: &FontDescriptor) -> Result<TextExtents, JsValue> {
        self.set_font(&font.css());
        let metrics = self.measure_text(text)?;
        Ok(TextExtents {
            left: metrics.actual_bounding_box_left(),
            right: metrics.actual_bounding_box_right(),
            ascent: metrics.actual_bounding_box_ascent(),
            descent: metrics.actual_bounding_box_descent(),
        })
    }
}

/// Replay a display list on a 2D context.
pub fn paint(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    for command in commands {
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCommand::FillRect { x, y, width, height, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawCommand::StrokePolygon { points, line_width, color } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x, first.y);
                for p in rest {
                    ctx.line_to(p.x, p.y);
                }
                ctx.close_path();
                ctx.set_line_width(*line_width);
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawCommand::Text { text, font, x, y, angle, baseline, align, color } => {
                ctx.save();
                ctx.set_font(font);
                ctx.set_text_baseline(baseline.as_str());
                ctx.set_text_align(align.as_str());
                ctx.set_fill_style_str(color);
                let drawn = fill_text_at(ctx, text, *x, *y, *angle);
                ctx.restore();
                drawn?;
            }
        }
    }
    Ok(())
}

/// Text with its origin moved to `(x, y)` and rotated around it.
/// Caller brackets this with save/restore.
fn fill_text_at(ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64, angle: f64) -> Result<(), JsValue> {
    ctx.translate(x, y)?;
    if angle != 0.0 {
        ctx.rotate(angle)?;
    }
    ctx.fill_text(text, 0.0, 0.0)
}
