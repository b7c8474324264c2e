//! Canvas backend: executes the draw list on a 2D context.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use duckhunt_core::types::Viewport;
use duckhunt_sim::render::DrawCommand;

use crate::errors::SessionError;
use crate::sprites::{context_2d, prepare_sheet};

const CROSSHAIR_COLOR: &str = "#ff3030";
const CROSSHAIR_LINE_WIDTH: f64 = 3.0;

/// The visible canvas plus the images it draws from.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    background: HtmlImageElement,
    sheet: HtmlCanvasElement,
}

impl CanvasSurface {
    /// Look up the canvas and images by id and key the duck sheet.
    pub fn attach(
        document: &Document,
        canvas_id: &str,
        background_id: &str,
        sheet_id: &str,
    ) -> Result<Self, SessionError> {
        let canvas: HtmlCanvasElement = element_by_id(document, canvas_id)?;
        let background: HtmlImageElement = element_by_id(document, background_id)?;
        let sheet_image: HtmlImageElement = element_by_id(document, sheet_id)?;
        let ctx = context_2d(&canvas)?;
        let sheet = prepare_sheet(document, &sheet_image)?;

        Ok(Self {
            canvas,
            ctx,
            background,
            sheet,
        })
    }

    /// Match the backing store to the viewport the engine is using.
    pub fn resize(&self, viewport: &Viewport) {
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Run every command in order. A failed draw call is logged and skipped.
    pub fn draw(&self, commands: &[DrawCommand]) {
        for command in commands {
            if let Err(e) = self.draw_one(command) {
                tracing::debug!(?command, error = ?e, "draw call failed");
            }
        }
    }

    fn draw_one(&self, command: &DrawCommand) -> Result<(), wasm_bindgen::JsValue> {
        match command {
            DrawCommand::Background { width, height } => {
                let (w, h) = (*width as f64, *height as f64);
                self.ctx.clear_rect(0.0, 0.0, w, h);
                if self.background.complete() && self.background.natural_width() > 0 {
                    self.ctx
                        .draw_image_with_html_image_element_and_dw_and_dh(&self.background, 0.0, 0.0, w, h)?;
                }
            }
            DrawCommand::Sprite { src, dest, size } => {
                self.ctx
                    .draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                        &self.sheet,
                        src.x as f64,
                        src.y as f64,
                        src.w as f64,
                        src.h as f64,
                        dest.x as f64,
                        dest.y as f64,
                        *size as f64,
                        *size as f64,
                    )?;
            }
            DrawCommand::Crosshair { at, radius, armed } => {
                let (x, y, r) = (at.x as f64, at.y as f64, *radius as f64);
                self.ctx.set_stroke_style_str(CROSSHAIR_COLOR);
                self.ctx.set_line_width(CROSSHAIR_LINE_WIDTH);
                self.ctx.begin_path();
                self.ctx.arc(x, y, r, 0.0, TAU)?;
                self.ctx.move_to(x - r * 1.5, y);
                self.ctx.line_to(x + r * 1.5, y);
                self.ctx.move_to(x, y - r * 1.5);
                self.ctx.line_to(x, y + r * 1.5);
                self.ctx.stroke();
                if *armed {
                    self.ctx.set_fill_style_str(CROSSHAIR_COLOR);
                    self.ctx.begin_path();
                    self.ctx.arc(x, y, r * 0.35, 0.0, TAU)?;
                    self.ctx.fill();
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SessionError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SessionError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SessionError::MissingElement(id.to_string()))
}
