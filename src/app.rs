//! アプリケーションの状態管理

use crate::annotation::AnnotationStore;
use crate::coords::PageOrigin;
use crate::document::{DocumentError, LoadedDocument};
use crate::ui::{AnnotationPanel, ViewerPanel};
use eframe::egui;
use std::path::PathBuf;

/// アプリケーション全体の状態
pub struct AnnotatorApp {
    // UI パネル
    viewer_panel: ViewerPanel,
    annotation_panel: AnnotationPanel,

    // ドキュメント
    current_document: Option<LoadedDocument>,

    // 注釈コレクション (ドキュメント読み込みでリセットされる)
    store: AnnotationStore,

    // ページ座標系の原点規約
    origin: PageOrigin,

    // ステータスメッセージ
    status_message: String,
}

impl AnnotatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            viewer_panel: ViewerPanel::new(),
            annotation_panel: AnnotationPanel::new(),
            current_document: None,
            store: AnnotationStore::new(),
            origin: PageOrigin::BottomLeft,
            status_message: "準備完了".to_string(),
        }
    }

    /// ドキュメントファイルを開く
    pub fn open_document(&mut self, path: PathBuf) {
        match LoadedDocument::open(&path, self.origin) {
            Ok(doc) => {
                self.status_message = format!("開きました: {}", doc.name);
                self.current_document = Some(doc);
                self.store.reset();
                self.viewer_panel.invalidate_cache();
            }
            Err(DocumentError::Unsupported(name)) => {
                // 未対応の形式は状態を一切変えずに警告だけ出す
                log::warn!("未対応のファイル形式です: {}", name);
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("未対応のファイル形式")
                    .set_description(format!(
                        "このファイルは開けません: {}\n対応形式: PDF / PNG / JPEG",
                        name
                    ))
                    .show();
            }
            Err(e) => {
                // 読み込み失敗はドキュメント未設定の状態へ戻す
                self.status_message = format!("エラー: {}", e);
                log::error!("ドキュメントを開けません: {}", e);
                self.current_document = None;
                self.store.reset();
                self.viewer_panel.invalidate_cache();
            }
        }
    }

    /// ファイル選択ダイアログを開く
    fn pick_document(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("ドキュメント (PDF/PNG/JPEG)", &["pdf", "png", "jpg", "jpeg"])
            .add_filter("すべてのファイル", &["*"])
            .pick_file()
        {
            self.open_document(path);
        }
    }

    /// 原点規約を切り替える
    ///
    /// 保存済みの矩形は失わず、新しい規約の値へ再表現する。
    fn set_origin(&mut self, origin: PageOrigin) {
        if self.origin == origin {
            return;
        }
        self.origin = origin;
        if let Some(ref mut doc) = self.current_document {
            doc.page_space.origin = origin;
            self.store.reexpress_origin(doc.page_space.height);
        }
        self.status_message = format!("原点規約: {}", origin.label());
        log::info!("原点規約を変更しました: {}", origin.label());
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // メニューバー
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("ファイル", |ui| {
                    if ui.button("📂 開く...").clicked() {
                        self.pick_document();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("❌ 終了").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("表示", |ui| {
                    if ui.button("🌙 ダークモード").clicked() {
                        ctx.set_visuals(egui::Visuals::dark());
                        ui.close_menu();
                    }
                    if ui.button("☀ ライトモード").clicked() {
                        ctx.set_visuals(egui::Visuals::light());
                        ui.close_menu();
                    }
                });
            });
        });

        // ステータスバー
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref doc) = self.current_document {
                        ui.label(format!("注釈: {} 件", self.store.len()));
                        ui.label(format!(
                            "| {} ({}) {:.0}x{:.0}pt",
                            doc.name,
                            doc.kind.label(),
                            doc.page_space.width,
                            doc.page_space.height
                        ));
                    }
                });
            });
        });

        // 右パネル: 注釈一覧
        egui::SidePanel::right("annotation_list")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("📋 注釈一覧");
                ui.separator();

                // 原点規約の選択
                let mut origin = self.origin;
                ui.horizontal(|ui| {
                    ui.label("原点:");
                    egui::ComboBox::from_id_salt("origin_select")
                        .selected_text(origin.label())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut origin,
                                PageOrigin::TopLeft,
                                PageOrigin::TopLeft.label(),
                            );
                            ui.selectable_value(
                                &mut origin,
                                PageOrigin::BottomLeft,
                                PageOrigin::BottomLeft.label(),
                            );
                        });
                });
                if origin != self.origin {
                    self.set_origin(origin);
                }
                ui.separator();

                let page_space = self.current_document.as_ref().map(|d| &d.page_space);
                let list_result = self.annotation_panel.show(ui, &self.store, page_space);

                if let Some(id) = list_result.removed {
                    self.store.remove(id);
                    self.status_message = "注釈を削除しました".to_string();
                    log::info!("注釈を削除しました: {}", id);
                }
            });

        // 中央パネル: ビューア
        egui::CentralPanel::default().show(ctx, |ui| {
            // 借用の都合で結果を集めてから適用する
            let mut added = None;
            let mut removed = None;
            let mut open_requested = false;

            if let Some(ref doc) = self.current_document {
                ui.horizontal(|ui| {
                    ui.label(format!("📄 {}", doc.name));
                    open_requested = ui.button("📂 別のファイルを開く...").clicked();
                });

                let viewer_result = self.viewer_panel.show(ui, doc, &self.store);
                added = viewer_result.added;
                removed = viewer_result.removed;
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("ファイル › 開く からドキュメントを選択してください (PDF / PNG / JPEG)");
                });
            }

            if let Some(rect) = added {
                let id = self.store.add(rect);
                self.status_message = "注釈を追加しました".to_string();
                log::info!(
                    "注釈を追加しました: {} ({:.1}, {:.1}) {:.1}x{:.1}",
                    id,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height
                );
            }
            if let Some(id) = removed {
                self.store.remove(id);
                self.status_message = "注釈を削除しました".to_string();
                log::info!("注釈を削除しました: {}", id);
            }
            if open_requested {
                self.pick_document();
            }
        });
    }
}
