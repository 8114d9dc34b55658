//! 注釈一覧パネル - 座標の一覧表示と削除

use crate::annotation::{Annotation, AnnotationId, AnnotationStore};
use crate::coords::PageSpace;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use serde::Serialize;

/// 一覧操作の結果
pub struct AnnotationPanelResult {
    /// 削除ボタンが押された注釈のID
    pub removed: Option<AnnotationId>,
}

impl Default for AnnotationPanelResult {
    fn default() -> Self {
        Self { removed: None }
    }
}

/// クリップボードへ書き出すJSONの形
///
/// 座標だけでは解釈できないため、ページ座標系 (サイズと原点規約) を
/// 一緒に含める。
#[derive(Serialize)]
struct ExportPayload<'a> {
    page: &'a PageSpace,
    annotations: &'a [Annotation],
}

/// 注釈一覧パネル
pub struct AnnotationPanel;

impl AnnotationPanel {
    pub fn new() -> Self {
        Self
    }

    /// UIを描画
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &AnnotationStore,
        page_space: Option<&PageSpace>,
    ) -> AnnotationPanelResult {
        let mut result = AnnotationPanelResult::default();

        ui.horizontal(|ui| {
            ui.label(format!("{} 件", store.len()));
            if let Some(space) = page_space {
                if !store.is_empty() && ui.button("📋 JSONをコピー").clicked() {
                    copy_as_json(ui.ctx(), store, space);
                }
            }
        });
        ui.separator();

        if store.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("注釈がありません");
            });
            return result;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("X");
                });
                header.col(|ui| {
                    ui.strong("Y");
                });
                header.col(|ui| {
                    ui.strong("幅");
                });
                header.col(|ui| {
                    ui.strong("高さ");
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for (index, annotation) in store.list().iter().enumerate() {
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            // 表示は1始まり
                            ui.label(format!("{}", index + 1));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", annotation.rect.x));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", annotation.rect.y));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", annotation.rect.width));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", annotation.rect.height));
                        });
                        row.col(|ui| {
                            if ui.small_button("🗑").clicked() {
                                result.removed = Some(annotation.id);
                            }
                        });
                    });
                }
            });

        result
    }
}

/// 一覧をJSONとしてクリップボードへコピー
fn copy_as_json(ctx: &egui::Context, store: &AnnotationStore, space: &PageSpace) {
    let payload = ExportPayload {
        page: space,
        annotations: store.list(),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(json) => {
            ctx.copy_text(json);
            log::info!("注釈一覧をクリップボードへコピーしました ({} 件)", store.len());
        }
        Err(e) => {
            log::error!("JSONへの変換に失敗しました: {}", e);
        }
    }
}
