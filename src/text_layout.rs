use std::borrow::Cow;

use crate::{
    config::Rgba8,
    error::{PlacardError, PlacardResult},
};

/// Stateful helper for building Parley text layouts against the system font
/// collection.
///
/// Reused across renders so font lookups and shaping scratch space amortize
/// over a batch.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out `text` as a single unbroken line.
    ///
    /// `family_chain` is a CSS-style font stack (`"Segoe UI, system-ui,
    /// sans-serif"`); unknown families fall through to the next entry.
    pub fn layout_single_line(
        &mut self,
        text: &str,
        family_chain: &str,
        size_px: f32,
        brush: Rgba8,
    ) -> PlacardResult<parley::Layout<Rgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PlacardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family_chain.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_produces_no_glyph_runs() {
        let mut engine = TextLayoutEngine::new();
        let layout = engine
            .layout_single_line("", "sans-serif", 32.0, Rgba8::rgb(255, 255, 255))
            .unwrap();

        let runs: usize = layout
            .lines()
            .map(|line| {
                line.items()
                    .filter(|item| {
                        matches!(item, parley::layout::PositionedLayoutItem::GlyphRun(_))
                    })
                    .count()
            })
            .sum();
        assert_eq!(runs, 0);
    }

    #[test]
    fn rejects_non_positive_size() {
        let mut engine = TextLayoutEngine::new();
        assert!(
            engine
                .layout_single_line("x", "sans-serif", 0.0, Rgba8::default())
                .is_err()
        );
        assert!(
            engine
                .layout_single_line("x", "sans-serif", f32::NAN, Rgba8::default())
                .is_err()
        );
    }
}
