//! 画像ドキュメントの読み込み (PNG / JPEG)

use super::{display_name, DocumentKind, LoadedDocument};
use crate::coords::{PageOrigin, PageSpace};
use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;

/// 画像ファイルを読み込む
///
/// 画像のページ座標系はアスペクト比によらずA4縦に固定する。
pub fn load_image(path: &Path, origin: PageOrigin) -> Result<LoadedDocument> {
    let data = std::fs::read(path)
        .with_context(|| format!("ファイルを読み込めませんでした: {}", path.display()))?;

    let decoded = image::load_from_memory(&data).context("画像をデコードできませんでした")?;

    let rgba = decoded.to_rgba8();
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
    log::info!("画像を読み込みました: {} ({}x{}px)", name, img_width, img_height);

    Ok(LoadedDocument {
        name,
        kind: DocumentKind::Raster,
        page_image,
        page_space: PageSpace::a4(origin),
    })
}
