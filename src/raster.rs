use std::{collections::HashMap, io::Cursor};

use crate::{
    config::RenderConfig,
    error::{PlacardError, PlacardResult},
    text_layout::TextLayoutEngine,
};

/// Seam between the packager and the drawing backend.
///
/// Batch packaging only depends on this trait, so tests can substitute a
/// stub that fails on demand.
pub trait TextRenderer {
    /// Render `text` as a single centered line over a solid background and
    /// return encoded PNG bytes.
    fn render(&mut self, text: &str, config: &RenderConfig) -> PlacardResult<Vec<u8>>;
}

/// CPU rasterizer: Parley layout drawn through `vello_cpu` and encoded as
/// PNG.
pub struct Rasterizer {
    text_engine: TextLayoutEngine,
    font_cache: HashMap<u64, vello_cpu::peniko::FontData>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
            font_cache: HashMap::new(),
        }
    }
}

impl TextRenderer for Rasterizer {
    fn render(&mut self, text: &str, config: &RenderConfig) -> PlacardResult<Vec<u8>> {
        config.validate()?;

        let width_u16: u16 = config
            .width
            .try_into()
            .map_err(|_| PlacardError::render_unavailable("surface width exceeds u16"))?;
        let height_u16: u16 = config
            .height
            .try_into()
            .map_err(|_| PlacardError::render_unavailable("surface height exceeds u16"))?;

        let layout = self.text_engine.layout_single_line(
            text,
            &config.font_family,
            config.font_size_px as f32,
            config.text_color,
        )?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        let bg = config.background_color;
        clear_pixmap(&mut pixmap, premul_rgba8(bg.r, bg.g, bg.b, bg.a));

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(config.width),
            f64::from(config.height),
        ));

        // Shift the layout box so its center lands on the canvas center.
        let tx = (config.width as f32 - layout.width()) * 0.5;
        let ty = (config.height as f32 - layout.height()) * 0.5;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(tx),
            f64::from(ty),
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let run_font = run.run().font();
                let key = run_font.data.id();
                let font = match self.font_cache.get(&key) {
                    Some(font) => font.clone(),
                    None => {
                        let font = vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(run_font.data.as_ref().to_vec()),
                            run_font.index,
                        );
                        self.font_cache.insert(key, font.clone());
                        font
                    }
                };

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        encode_png(pixmap.data_as_u8_slice(), config.width, config.height)
    }
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn encode_png(rgba8: &[u8], width: u32, height: u32) -> PlacardResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba8.to_vec())
        .ok_or_else(|| PlacardError::render_unavailable("pixel buffer length mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PlacardError::render_unavailable(format!("encode png: {e}")))?;
    Ok(buf)
}
