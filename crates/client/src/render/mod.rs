// Canvas rendering - arena background and sprites
use game::{BacteriaKind, Bounds, Rect, Renderer, SpriteKind};
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#10141c";
const BORDER: &str = "#2b3a4f";
const CELL_FILL: &str = "#4fc3f7";
const CELL_NUCLEUS: &str = "#0277bd";
const PROTEIN_FILL: &str = "#ffd54f";
const BACTERIA_FILL: &str = "#9ccc65";
const BOMB_FILL: &str = "#ef5350";
const BOMB_CORE: &str = "#4a0000";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self { canvas, ctx })
    }

    /// Match the canvas to the arena size.
    pub fn fit(&self, bounds: &Bounds) {
        self.canvas.set_width(bounds.width().ceil() as u32);
        self.canvas.set_height(bounds.height().ceil() as u32);
    }

    #[inline]
    fn disc(&self, rect: &Rect, scale: f64, fill: &str) {
        let center = rect.center();
        let radius = f64::from(rect.width().min(rect.height())) / 2.0 * scale;
        self.ctx.set_fill_style_str(fill);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(f64::from(center.x), f64::from(center.y), radius, 0.0, TAU);
        self.ctx.fill();
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, bounds: &Bounds) {
        let (w, h) = (f64::from(bounds.width()), f64::from(bounds.height()));
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_stroke_style_str(BORDER);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke_rect(1.0, 1.0, w - 2.0, h - 2.0);
    }

    fn draw(&mut self, kind: SpriteKind, rect: Rect) {
        match kind {
            SpriteKind::Cell => {
                self.disc(&rect, 1.0, CELL_FILL);
                self.disc(&rect, 0.35, CELL_NUCLEUS);
            }
            SpriteKind::Protein => {
                self.ctx.set_fill_style_str(PROTEIN_FILL);
                self.ctx.fill_rect(
                    f64::from(rect.x()),
                    f64::from(rect.y()),
                    f64::from(rect.width()),
                    f64::from(rect.height()),
                );
            }
            SpriteKind::Bacteria(BacteriaKind::Standard) => {
                self.disc(&rect, 1.0, BACTERIA_FILL);
            }
            SpriteKind::Bacteria(BacteriaKind::Bomb) => {
                self.disc(&rect, 1.0, BOMB_FILL);
                self.disc(&rect, 0.4, BOMB_CORE);
            }
        }
    }
}
