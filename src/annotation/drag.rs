//! ドラッグ取り込み - ポインタ操作から矩形を作るステートマシン

use eframe::egui::{Pos2, Rect};

/// ドラッグとして成立する最小サイズ (サーフェスピクセル)
///
/// 幅と高さの両方がこの値以上でなければ矩形は作られない。
pub const MIN_DRAG_SIZE: f32 = 15.0;

/// ドラッグの進行状態
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    /// 待機中
    Idle,
    /// ドラッグ中 - 開始点と現在点だけを保持する
    Dragging { anchor: Pos2, current: Pos2 },
}

/// ポインタのドラッグから矩形を取り込むステートマシン
#[derive(Debug)]
pub struct DragCapture {
    phase: DragPhase,
}

impl DragCapture {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// ドラッグ開始 - 開始点をサーフェス内に収めて記録する
    pub fn begin(&mut self, pos: Pos2, surface: Rect) {
        let anchor = clamp_to_surface(pos, surface);
        self.phase = DragPhase::Dragging {
            anchor,
            current: anchor,
        };
    }

    /// ドラッグ中の現在点を更新する (待機中なら何もしない)
    pub fn update(&mut self, pos: Pos2, surface: Rect) {
        if let DragPhase::Dragging { anchor, .. } = self.phase {
            self.phase = DragPhase::Dragging {
                anchor,
                current: clamp_to_surface(pos, surface),
            };
        }
    }

    /// ライブプレビュー矩形 (開始点と現在点の min/max)
    pub fn preview(&self) -> Option<Rect> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { anchor, current } => Some(Rect::from_two_pos(anchor, current)),
        }
    }

    /// ドラッグ終了
    ///
    /// 幅と高さの両方が [`MIN_DRAG_SIZE`] 以上なら確定した矩形を返す。
    /// 未満なら何も返さず破棄する (エラーにはしない)。
    pub fn finish(&mut self, pos: Pos2, surface: Rect) -> Option<Rect> {
        if let DragPhase::Dragging { anchor, .. } = self.phase {
            self.phase = DragPhase::Idle;
            let rect = Rect::from_two_pos(anchor, clamp_to_surface(pos, surface));
            if rect.width() >= MIN_DRAG_SIZE && rect.height() >= MIN_DRAG_SIZE {
                return Some(rect);
            }
            log::debug!(
                "最小サイズ未満のためドラッグを破棄: {:.0}x{:.0}",
                rect.width(),
                rect.height()
            );
        }
        None
    }

    /// ドラッグを中断して待機状態へ戻す (ドキュメント切り替え時)
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// ドラッグ中かどうか
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }
}

/// ポインタ位置をサーフェス矩形内に収める
fn clamp_to_surface(pos: Pos2, surface: Rect) -> Pos2 {
    pos.clamp(surface.min, surface.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationStore;
    use crate::coords::{PageOrigin, PageSpace};
    use eframe::egui::pos2;

    fn surface() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(595.0, 842.0))
    }

    #[test]
    fn small_drag_is_discarded() {
        let mut drag = DragCapture::new();
        drag.begin(pos2(10.0, 10.0), surface());
        drag.update(pos2(15.0, 18.0), surface());

        assert!(drag.finish(pos2(20.0, 20.0), surface()).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn zero_size_drag_is_discarded() {
        let mut drag = DragCapture::new();
        drag.begin(pos2(50.0, 50.0), surface());

        assert!(drag.finish(pos2(50.0, 50.0), surface()).is_none());
    }

    #[test]
    fn drag_at_threshold_is_kept() {
        let mut drag = DragCapture::new();
        drag.begin(pos2(0.0, 0.0), surface());

        let rect = drag.finish(pos2(15.0, 15.0), surface()).unwrap();
        assert_eq!(rect.width(), 15.0);
        assert_eq!(rect.height(), 15.0);
    }

    #[test]
    fn one_short_dimension_discards_the_drag() {
        // 幅は十分でも高さが足りなければ破棄
        let mut drag = DragCapture::new();
        drag.begin(pos2(0.0, 0.0), surface());

        assert!(drag.finish(pos2(100.0, 10.0), surface()).is_none());
    }

    #[test]
    fn preview_normalizes_reversed_direction() {
        let mut drag = DragCapture::new();
        drag.begin(pos2(50.0, 50.0), surface());
        drag.update(pos2(30.0, 70.0), surface());

        let preview = drag.preview().unwrap();
        assert_eq!(preview.min, pos2(30.0, 50.0));
        assert_eq!(preview.max, pos2(50.0, 70.0));
    }

    #[test]
    fn pointer_outside_surface_is_clamped() {
        let bounds = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 200.0));
        let mut drag = DragCapture::new();
        drag.begin(pos2(50.0, 50.0), bounds);

        let rect = drag.finish(pos2(250.0, 300.0), bounds).unwrap();
        assert_eq!(rect.max, pos2(200.0, 200.0));
    }

    #[test]
    fn finish_without_begin_returns_nothing() {
        let mut drag = DragCapture::new();
        assert!(drag.finish(pos2(100.0, 100.0), surface()).is_none());
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut drag = DragCapture::new();
        drag.update(pos2(100.0, 100.0), surface());

        assert!(drag.preview().is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_drops_the_drag() {
        let mut drag = DragCapture::new();
        drag.begin(pos2(10.0, 10.0), surface());
        drag.cancel();

        assert!(drag.preview().is_none());
        assert!(drag.finish(pos2(200.0, 200.0), surface()).is_none());
    }

    #[test]
    fn captured_drag_lands_in_store_top_left() {
        // 595x842px のサーフェス上で (100,100) から (200,250) までドラッグ
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let mut drag = DragCapture::new();
        let mut store = AnnotationStore::new();

        drag.begin(pos2(100.0, 100.0), surface());
        drag.update(pos2(150.0, 180.0), surface());
        if let Some(rect) = drag.finish(pos2(200.0, 250.0), surface()) {
            store.add(space.rect_to_page(rect, surface()));
        }

        assert_eq!(store.len(), 1);
        let stored = &store.list()[0].rect;
        assert!((stored.x - 100.0).abs() < 1e-3);
        assert!((stored.y - 100.0).abs() < 1e-3);
        assert!((stored.width - 100.0).abs() < 1e-3);
        assert!((stored.height - 150.0).abs() < 1e-3);
    }

    #[test]
    fn captured_drag_lands_in_store_bottom_left() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::BottomLeft);
        let mut drag = DragCapture::new();
        let mut store = AnnotationStore::new();

        drag.begin(pos2(100.0, 100.0), surface());
        if let Some(rect) = drag.finish(pos2(200.0, 250.0), surface()) {
            store.add(space.rect_to_page(rect, surface()));
        }

        assert_eq!(store.len(), 1);
        let stored = &store.list()[0].rect;
        assert!((stored.x - 100.0).abs() < 1e-3);
        assert!((stored.y - 592.0).abs() < 1e-3); // 842 - 250
        assert!((stored.width - 100.0).abs() < 1e-3);
        assert!((stored.height - 150.0).abs() < 1e-3);
    }

    #[test]
    fn discarded_drag_leaves_store_empty() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let mut drag = DragCapture::new();
        let mut store = AnnotationStore::new();

        drag.begin(pos2(10.0, 10.0), surface());
        if let Some(rect) = drag.finish(pos2(20.0, 20.0), surface()) {
            store.add(space.rect_to_page(rect, surface()));
        }

        assert!(store.is_empty());
    }
}
