//! Browser canvas backend (Canvas 2D)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Color, GradientStop, Rect, Surface, Viewport};
use crate::error::{Result, SceneError};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    /// A clip is pushed on the context state stack
    clipped: bool,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SceneError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| SceneError::SurfaceUnavailable("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::SurfaceUnavailable("context is not 2d".into()))?;

        let viewport = Viewport::new(
            canvas.client_width() as f32,
            canvas.client_height() as f32,
            1.0,
        );
        Ok(Self {
            canvas,
            ctx,
            viewport,
            clipped: false,
        })
    }

    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.viewport.width
    }

    fn height(&self) -> f32 {
        self.viewport.height
    }

    fn resize(&mut self, viewport: Viewport) {
        let (w, h) = viewport.physical_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.width));
        let _ = style.set_property("height", &format!("{}px", viewport.height));

        // Resizing resets the context state
        let ratio = viewport.pixel_ratio as f64;
        let _ = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
        self.ctx.set_image_smoothing_enabled(false);
        self.clipped = false;
        self.viewport = viewport;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 {
            return;
        }
        self.set_fill(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if color.a == 0 || radius <= 0.0 {
            return;
        }
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, stops: &[GradientStop]) {
        if stops.is_empty() {
            return;
        }
        let gradient =
            self.ctx
                .create_linear_gradient(0.0, rect.y as f64, 0.0, rect.bottom() as f64);
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn set_clip(&mut self, clip: Option<Rect>) {
        if self.clipped {
            self.ctx.restore();
            self.clipped = false;
        }
        if let Some(r) = clip {
            self.ctx.save();
            self.ctx.begin_path();
            self.ctx
                .rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
            self.ctx.clip();
            self.clipped = true;
        }
    }
}
