use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::simulation::Size;
use crate::systems::debug::Wireframe;

const STATIC_STROKE: &str = "#888888";
const DYNAMIC_STROKE: &str = "#22c55e";
const GRABBED_STROKE: &str = "#f97316";
const SPRING_STROKE: &str = "#ef4444";

/// Transparent wireframe overlay stacked on top of the zone container
pub struct DebugCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl DebugCanvas {
    pub fn attach(document: &Document, container: &HtmlElement, size: Size) -> Result<Self, JsValue> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let style = canvas.style();
        style.set_property("position", "absolute")?;
        style.set_property("top", "0")?;
        style.set_property("left", "0")?;
        style.set_property("pointer-events", "none")?;
        container.append_child(&canvas)?;

        let overlay = Self { canvas, ctx };
        overlay.resize(size);
        Ok(overlay)
    }

    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    pub fn draw(&self, wireframe: &Wireframe) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        ctx.set_line_width(1.0);

        for shape in &wireframe.shapes {
            let stroke = if shape.grabbed {
                GRABBED_STROKE
            } else if shape.is_static {
                STATIC_STROKE
            } else {
                DYNAMIC_STROKE
            };
            ctx.set_stroke_style_str(stroke);
            ctx.begin_path();
            let [first, rest @ ..] = &shape.vertices;
            ctx.move_to(first.x as f64, first.y as f64);
            for v in rest {
                ctx.line_to(v.x as f64, v.y as f64);
            }
            ctx.close_path();
            // Heading tick from centre to the first edge midpoint
            let mid = (shape.vertices[0] + shape.vertices[1]) * 0.5;
            ctx.move_to(shape.center.x as f64, shape.center.y as f64);
            ctx.line_to(mid.x as f64, mid.y as f64);
            ctx.stroke();
        }

        ctx.set_stroke_style_str(SPRING_STROKE);
        for (anchor, attachment) in &wireframe.springs {
            ctx.begin_path();
            ctx.move_to(anchor.x as f64, anchor.y as f64);
            ctx.line_to(attachment.x as f64, attachment.y as f64);
            ctx.stroke();
        }
    }

    pub fn detach(&self) {
        self.canvas.remove();
    }
}
