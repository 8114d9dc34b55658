//! ドキュメント読み込みモジュール - PDF / 画像を1ページの表示用データへ変換

mod pdf;
mod raster;

use crate::coords::{PageOrigin, PageSpace};
use eframe::egui;
use std::path::Path;
use thiserror::Error;

/// ドキュメント読み込みエラー
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 対応していないファイル形式 (読み込み前に拡張子で判定する)
    #[error("未対応のファイル形式です: {0}")]
    Unsupported(String),
    /// 読み込み・デコード・レンダリングの失敗
    #[error("ドキュメントを読み込めませんでした: {0}")]
    Load(anyhow::Error),
}

/// ドキュメントの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Raster,
}

impl DocumentKind {
    /// 日本語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Raster => "画像",
        }
    }
}

/// 読み込み済みドキュメント
///
/// 先頭ページのレンダリング結果と、注釈座標の基準になる
/// ページ座標系を持つ。
pub struct LoadedDocument {
    /// ファイル名 (表示用)
    pub name: String,
    /// 種類
    pub kind: DocumentKind,
    /// レンダリング済みページ画像
    pub page_image: egui::ColorImage,
    /// ページ座標系 (PDFはネイティブサイズ、画像はA4)
    pub page_space: PageSpace,
}

impl LoadedDocument {
    /// ファイルを開いて先頭ページを読み込む
    ///
    /// 拡張子の判定はファイルを読む前に行う。未対応の形式では
    /// 一切の入出力をせずに `DocumentError::Unsupported` を返す。
    pub fn open(path: &Path, origin: PageOrigin) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => pdf::load_first_page(path, origin).map_err(DocumentError::Load),
            "png" | "jpg" | "jpeg" => raster::load_image(path, origin).map_err(DocumentError::Load),
            _ => Err(DocumentError::Unsupported(display_name(path))),
        }
    }
}

/// 表示用のファイル名を取得
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
