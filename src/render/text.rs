use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{ChromeError, ChromeResult};

const LABEL_FAMILIES: &str =
    "'SF Pro Text', 'Helvetica Neue', Helvetica, Arial, 'DejaVu Sans', 'Noto Sans', sans-serif";

/// Premultiplied RGBA8 raster of one label, sized around its text box.
#[derive(Clone, Debug)]
pub(crate) struct LabelRaster {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LabelKey {
    text: String,
    size_bits: u64,
    color: [u8; 4],
}

/// Rasterizes single-line labels through `usvg` text layout and caches the results.
#[derive(Default)]
pub(crate) struct LabelCache {
    rasters: HashMap<LabelKey, LabelRaster>,
}

impl LabelCache {
    pub fn raster(&mut self, text: &str, font_size: f64, color: [u8; 4]) -> ChromeResult<LabelRaster> {
        let key = LabelKey {
            text: text.to_owned(),
            size_bits: font_size.to_bits(),
            color,
        };
        if let Some(r) = self.rasters.get(&key) {
            return Ok(r.clone());
        }
        let raster = rasterize_label(text, font_size, color)?;
        self.rasters.insert(key, raster.clone());
        Ok(raster)
    }
}

/// Box a label is laid out in: generous enough for the widest glyphs at `font_size`.
pub(crate) fn label_box(text: &str, font_size: f64) -> (u32, u32) {
    let font_size = font_size.max(1.0);
    let chars = text.chars().count() as f64;
    let w = (chars * font_size * 0.75 + font_size).ceil();
    let h = (font_size * 2.0).ceil();
    (w.clamp(1.0, 8192.0) as u32, h.clamp(1.0, 8192.0) as u32)
}

pub(crate) fn label_svg(text: &str, font_size: f64, color: [u8; 4]) -> String {
    let (w, h) = label_box(text, font_size);
    let [r, g, b, a] = color;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><text x="{x}" y="{y}" font-family="{LABEL_FAMILIES}" font-size="{font_size}" font-weight="600" text-anchor="middle" fill="rgb({r},{g},{b})" fill-opacity="{op}">{body}</text></svg>"#,
        x = f64::from(w) / 2.0,
        y = f64::from(h) / 2.0 + font_size * 0.35,
        op = f64::from(a) / 255.0,
        body = escape_xml(text),
    )
}

fn rasterize_label(text: &str, font_size: f64, color: [u8; 4]) -> ChromeResult<LabelRaster> {
    let (width, height) = label_box(text, font_size);
    let svg = label_svg(text, font_size, color);
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        font_resolver: label_font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse label svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ChromeError::render("failed to allocate label pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    tracing::debug!(text, width, height, "rasterized label");
    Ok(LabelRaster {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

// Any installed face beats an empty label.
fn label_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
