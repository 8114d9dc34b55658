//! PDFドキュメントの読み込み (pdfium-render)

use super::{display_name, DocumentKind, LoadedDocument};
use crate::coords::{PageOrigin, PageSpace};
use anyhow::{Context, Result};
use eframe::egui;
use once_cell::sync::Lazy;
use pdfium_render::prelude::*;
use std::path::Path;

/// レンダリング解像度の倍率
///
/// 表示時はフィット縮小されるため、拡大に耐えるよう高めに取る。
const RENDER_SCALE: f32 = 2.0;

/// プロセス全体で共有するPDFiumバインディング
static PDFIUM: Lazy<Option<Pdfium>> = Lazy::new(|| {
    // 実行ファイルと同じディレクトリを優先し、なければシステムから読み込み
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .ok()
});

/// PDFiumライブラリを取得
fn get_pdfium() -> Result<&'static Pdfium> {
    PDFIUM
        .as_ref()
        .context("PDFiumライブラリを読み込めませんでした")
}

/// 先頭ページを読み込んでレンダリングする
pub fn load_first_page(path: &Path, origin: PageOrigin) -> Result<LoadedDocument> {
    let pdfium = get_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(path, None)
        .context("PDFファイルを開けませんでした")?;

    let page = document
        .pages()
        .get(0)
        .context("PDFにページがありません")?;

    // ページサイズ (ポイント単位)
    let width = page.width().value;
    let height = page.height().value;

    let render_config = PdfRenderConfig::new()
        .set_target_width((width * RENDER_SCALE) as i32)
        .set_target_height((height * RENDER_SCALE) as i32)
        .render_form_data(true)
        .render_annotations(true);

    let bitmap = page
        .render_with_config(&render_config)
        .context("ページをレンダリングできませんでした")?;

    // egui::ColorImage に変換
    let img = bitmap.as_image()?;
    let rgba = img.to_rgba8();
    let (img_width, img_height) = rgba.dimensions();

    let pixels: Vec<egui::Color32> = rgba
        .pixels()
        .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();

    let page_image = egui::ColorImage {
        size: [img_width as usize, img_height as usize],
        pixels,
    };

    let name = display_name(path);
    log::info!("PDFを読み込みました: {} ({:.0}x{:.0}pt)", name, width, height);

    Ok(LoadedDocument {
        name,
        kind: DocumentKind::Pdf,
        page_image,
        page_space: PageSpace::new(width, height, origin),
    })
}
