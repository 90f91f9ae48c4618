//! CJK font setup.
//!
//! egui's bundled fonts have no Hanja or Hangul glyphs, so a system font is
//! added as a fallback. `CHEONJA_FONT` overrides the search with a path.

use std::sync::Arc;

use eframe::egui::{Context, FontData, FontDefinitions, FontFamily};

const FONT_NAME: &str = "cheonja-cjk";

#[cfg(not(target_arch = "wasm32"))]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

#[cfg(not(target_arch = "wasm32"))]
fn find_font() -> Option<Vec<u8>> {
    let from_env = std::env::var_os("CHEONJA_FONT").map(std::path::PathBuf::from);
    let candidates = from_env
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(std::path::PathBuf::from));
    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => {
                log::info!("using CJK font {}", path.display());
                return Some(bytes);
            }
            Err(e) => log::debug!("font {} unavailable: {e}", path.display()),
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn find_font() -> Option<Vec<u8>> {
    None
}

pub(crate) fn install(ctx: &Context) {
    let Some(bytes) = find_font() else {
        log::warn!("no CJK font found; set CHEONJA_FONT to a font file path");
        return;
    };
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
}
