use std::f64::consts::PI;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::driver::surface::{triangle_vertices, RenderTarget};
use crate::driver::viewport::SurfaceDimensions;
use crate::error::{DriverError, Result};

const FOOD_COLOR: &str = "rgb(0, 255, 128)";
const ANIMAL_COLOR: &str = "rgb(255, 255, 255)";

fn js_error(value: JsValue) -> DriverError {
    DriverError::surface(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

/// `RenderTarget` over a 2d canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| DriverError::surface("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DriverError::surface("2d context has an unexpected type"))?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl RenderTarget for CanvasSurface {
    fn configure(&mut self, dims: &SurfaceDimensions, scale: f64) -> Result<()> {
        self.canvas.set_width(dims.backing_width);
        self.canvas.set_height(dims.backing_height);

        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", dims.css_width))
            .map_err(js_error)?;
        style
            .set_property("height", &format!("{}px", dims.css_height))
            .map_err(js_error)?;

        self.ctx.scale(scale, scale).map_err(js_error)
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, 2.0 * PI).map_err(js_error)?;
        self.ctx.set_fill_style(&JsValue::from_str(FOOD_COLOR));
        self.ctx.fill();
        Ok(())
    }

    fn draw_triangle(&mut self, x: f64, y: f64, size: f64, rotation: f64) -> Result<()> {
        let [apex, left, right] = triangle_vertices(x, y, size, rotation);

        self.ctx.begin_path();
        self.ctx.move_to(apex.0, apex.1);
        self.ctx.line_to(left.0, left.1);
        self.ctx.line_to(right.0, right.1);
        self.ctx.line_to(apex.0, apex.1);
        self.ctx.stroke();

        self.ctx.set_fill_style(&JsValue::from_str(ANIMAL_COLOR));
        self.ctx.fill();
        Ok(())
    }
}
