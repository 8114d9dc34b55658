//! ビューアパネル - ページ表示、ドラッグ取り込み、オーバーレイ描画

use crate::annotation::{AnnotationId, AnnotationStore, DragCapture};
use crate::coords::PageRect;
use crate::document::LoadedDocument;
use eframe::egui::{self, Color32, TextureHandle, Vec2};

/// ビューア操作の結果
pub struct ViewerResult {
    /// 確定したドラッグから作られた矩形 (ページ座標系)
    pub added: Option<PageRect>,
    /// 削除ボタンが押された注釈のID
    pub removed: Option<AnnotationId>,
}

impl Default for ViewerResult {
    fn default() -> Self {
        Self {
            added: None,
            removed: None,
        }
    }
}

/// ビューアパネルの状態
pub struct ViewerPanel {
    // ページテクスチャのキャッシュ
    page_texture: Option<TextureHandle>,

    // ズーム (フィット表示に対する倍率)
    zoom: f32,

    // ドラッグ取り込み状態
    drag: DragCapture,
}

impl ViewerPanel {
    pub fn new() -> Self {
        Self {
            page_texture: None,
            zoom: 1.0,
            drag: DragCapture::new(),
        }
    }

    /// UIを描画
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        doc: &LoadedDocument,
        store: &AnnotationStore,
    ) -> ViewerResult {
        let mut result = ViewerResult::default();

        // ズームコントロール
        ui.horizontal(|ui| {
            ui.label("ズーム:");
            if ui.button("−").clicked() {
                self.zoom = (self.zoom - 0.25).max(0.25);
            }
            ui.label(format!("{:.0}%", self.zoom * 100.0));
            if ui.button("＋").clicked() {
                self.zoom = (self.zoom + 0.25).min(4.0);
            }
            if ui.button("リセット").clicked() {
                self.zoom = 1.0;
            }
            ui.separator();
            ui.label("ドラッグで矩形を描画、✕で削除");
        });

        ui.separator();

        // ページテクスチャを準備
        if self.page_texture.is_none() {
            self.page_texture = Some(ui.ctx().load_texture(
                "document_page",
                doc.page_image.clone(),
                egui::TextureOptions::LINEAR,
            ));
        }

        let texture_id = match self.page_texture {
            Some(ref texture) => texture.id(),
            None => return result,
        };

        // フィット表示サイズ (アスペクト比を維持して利用可能領域に収める)
        let [img_w, img_h] = doc.page_image.size;
        let avail = ui.available_size();
        let fit = (avail.x / img_w as f32).min(avail.y / img_h as f32);
        let scale = (fit * self.zoom).clamp(0.05, 8.0);
        let display_size = Vec2::new(img_w as f32 * scale, img_h as f32 * scale);

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(display_size, egui::Sense::click_and_drag());

                // ページ画像描画
                ui.painter().image(
                    texture_id,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );

                // ドラッグで矩形を取り込む
                if response.drag_started() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.drag.begin(pos, rect);
                    }
                } else if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.drag.update(pos, rect);
                    }
                }
                if response.drag_stopped() {
                    match response.interact_pointer_pos() {
                        Some(pos) => {
                            if let Some(drag_rect) = self.drag.finish(pos, rect) {
                                result.added = Some(doc.page_space.rect_to_page(drag_rect, rect));
                            }
                        }
                        None => self.drag.cancel(),
                    }
                }

                // 保存済み注釈のオーバーレイ (百分率配置を現在のサーフェスへ解決)
                for annotation in store.list() {
                    let overlay = doc.page_space.to_display(&annotation.rect).resolve(rect);
                    ui.painter().rect_filled(
                        overlay,
                        0.0,
                        Color32::from_rgba_unmultiplied(255, 0, 0, 25),
                    );
                    ui.painter()
                        .rect_stroke(overlay, 0.0, egui::Stroke::new(2.0, Color32::RED));

                    // 削除ボタン - ボタンがクリックを受けるため、
                    // この位置からドラッグが始まることはない
                    let delete_rect = egui::Rect::from_min_size(
                        egui::pos2(overlay.max.x - 18.0, overlay.min.y + 2.0),
                        Vec2::splat(16.0),
                    );
                    if ui.put(delete_rect, egui::Button::new("✕").small()).clicked() {
                        result.removed = Some(annotation.id);
                    }
                }

                // ドラッグ中のライブプレビュー
                if let Some(preview) = self.drag.preview() {
                    ui.painter().rect_filled(
                        preview,
                        0.0,
                        Color32::from_rgba_unmultiplied(30, 100, 255, 30),
                    );
                    ui.painter().rect_stroke(
                        preview,
                        0.0,
                        egui::Stroke::new(1.5, Color32::from_rgb(30, 100, 255)),
                    );
                }

                if response.hovered() || self.drag.is_dragging() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
                }
            });

        result
    }

    /// ドキュメント切り替え時にテクスチャと進行中のドラッグを破棄
    pub fn invalidate_cache(&mut self) {
        self.page_texture = None;
        self.drag.cancel();
    }
}
