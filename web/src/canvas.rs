use concorde_core as game;
use game::{Banner, Overlay, Rgb, Scene};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn font(size_px: u32) -> String {
    format!("{}px sans-serif", size_px)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Paints a whole frame, cells get a thin black outline.
pub(crate) fn paint(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    let area = scene.canvas.rect();

    ctx.set_fill_style_str(&scene.background.to_string());
    ctx.fill_rect(area.x, area.y, area.w, area.h);

    ctx.set_stroke_style_str(&Rgb::BLACK.to_string());
    ctx.set_line_width(1.);
    for sprite in &scene.cells {
        let rect = sprite.rect;
        ctx.set_fill_style_str(&sprite.fill.to_string());
        ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        ctx.stroke_rect(rect.x, rect.y, rect.w, rect.h);
    }

    let text = scene.overlay.text();
    match scene.overlay {
        Overlay::Countdown(_) => {
            ctx.set_fill_style_str(&Rgb::BLACK.to_string());
            ctx.set_font(&font(Overlay::COUNTDOWN_FONT_PX));
            ctx.set_text_align("center");
            ctx.set_text_baseline("alphabetic");
            ctx.fill_text(&text, area.w / 2., Overlay::COUNTDOWN_BASELINE_Y)?;
        }
        Overlay::Banner(banner) => {
            ctx.set_fill_style_str(&banner.fill().to_string());
            ctx.fill_rect(area.x, area.y, area.w, area.h);
            ctx.set_fill_style_str(&Rgb::WHITE.to_string());
            ctx.set_font(&font(Banner::FONT_PX));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            let center = area.center();
            ctx.fill_text(&text, center.x, center.y)?;
        }
    }

    Ok(())
}
