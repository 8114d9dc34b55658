//! 矩形注釈ツール - ドキュメント上に矩形注釈を描画する
//!
//! 機能:
//! - PDF / 画像 (PNG, JPEG) の表示
//! - ドラッグによる矩形注釈の作成 (ページ座標系で保存)
//! - 注釈一覧の表示と削除
//! - 原点規約 (左上 / 左下) の切り替え

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod annotation;
mod app;
mod coords;
mod document;
mod ui;

use anyhow::Result;
use eframe::egui;

fn main() -> Result<()> {
    // ロギング初期化
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("矩形注釈ツールを起動中...");

    // eframe オプション設定
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("矩形注釈ツール"),
        ..Default::default()
    };

    // アプリケーション起動
    eframe::run_native(
        "Rect Annotator",
        options,
        Box::new(|cc| {
            // 日本語フォントを登録
            setup_fonts(&cc.egui_ctx);
            // ダークモードを初期設定
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::AnnotatorApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("アプリケーションエラー: {}", e))
}

/// 日本語フォントを設定
///
/// フォントは同梱せず、システムの標準的なパスから検索する。
/// 見つからなくても起動は続行する (ラベルが豆腐になるだけ)。
fn setup_fonts(ctx: &egui::Context) {
    let candidates = [
        // Linux
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Regular.otf",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        // Windows
        "C:\\Windows\\Fonts\\meiryo.ttc",
        "C:\\Windows\\Fonts\\msgothic.ttc",
        // macOS
        "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    ];

    if let Some(data) = candidates.iter().find_map(|path| std::fs::read(path).ok()) {
        let mut fonts = egui::FontDefinitions::default();

        fonts
            .font_data
            .insert("japanese".to_owned(), egui::FontData::from_owned(data));

        // フォント優先順位を設定
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .insert(0, "japanese".to_owned());

        fonts
            .families
            .entry(egui::FontFamily::Monospace)
            .or_default()
            .insert(0, "japanese".to_owned());

        ctx.set_fonts(fonts);
    } else {
        log::warn!("日本語フォントが見つかりませんでした。表示が乱れる場合があります");
    }
}
