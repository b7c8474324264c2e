//! Sprite sheet preparation: knock the solid backdrop colour out of the duck
//! sheet so ducks draw with transparent edges.

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, ImageData};

use crate::errors::{describe_js, SessionError};

/// Backdrop colour of the duck sheet.
pub const SHEET_KEY_COLOR: [u8; 3] = [0, 255, 0];
/// Per-channel distance from the key that still counts as backdrop.
pub const SHEET_KEY_TOLERANCE: u8 = 60;

/// Zero the alpha of every RGBA pixel within `tolerance` of `key` on all
/// three channels. Returns how many pixels were cleared.
pub fn chroma_key(rgba: &mut [u8], key: [u8; 3], tolerance: u8) -> usize {
    let mut cleared = 0;
    for px in rgba.chunks_exact_mut(4) {
        let near = px[..3]
            .iter()
            .zip(key)
            .all(|(c, k)| c.abs_diff(k) <= tolerance);
        if near && px[3] != 0 {
            px[3] = 0;
            cleared += 1;
        }
    }
    cleared
}

/// Copy a loaded image into an offscreen canvas with the key colour removed.
pub fn prepare_sheet(
    document: &Document,
    image: &HtmlImageElement,
) -> Result<HtmlCanvasElement, SessionError> {
    let (w, h) = (image.natural_width(), image.natural_height());
    if w == 0 || h == 0 {
        return Err(SessionError::MissingElement("duck-sheet (not loaded)".into()));
    }

    let canvas = document
        .create_element("canvas")
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SessionError::Canvas("created element is not a canvas".into()))?;
    canvas.set_width(w);
    canvas.set_height(h);

    let ctx = context_2d(&canvas)?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?;

    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?;
    let mut pixels = data.data().0;
    let cleared = chroma_key(&mut pixels, SHEET_KEY_COLOR, SHEET_KEY_TOLERANCE);
    tracing::debug!(width = w, height = h, cleared, "duck sheet keyed");

    let keyed = ImageData::new_with_u8_clamped_array_and_sh(Clamped(&pixels), w, h)
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?;
    ctx.put_image_data(&keyed, 0.0, 0.0)
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?;
    Ok(canvas)
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SessionError> {
    canvas
        .get_context("2d")
        .map_err(|e| SessionError::Canvas(describe_js(&e)))?
        .ok_or_else(|| SessionError::Canvas("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SessionError::Canvas("2d context has the wrong type".into()))
}
