//! 座標変換モジュール - 表示サーフェスとページ座標系の相互変換

use eframe::egui::{pos2, vec2, Pos2, Rect};
use serde::{Deserialize, Serialize};

/// A4縦のページサイズ (ポイント単位)
pub const A4_PORTRAIT: (f32, f32) = (595.0, 842.0);

/// ページ座標系の原点規約
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageOrigin {
    /// 左上原点 - yは下方向に増加 (画面と同じ向き)
    TopLeft,
    /// 左下原点 - yは上方向に増加 (PDF標準の印刷座標系)
    BottomLeft,
}

impl PageOrigin {
    /// 日本語ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PageOrigin::TopLeft => "左上原点",
            PageOrigin::BottomLeft => "左下原点 (PDF標準)",
        }
    }
}

/// ページ座標系での矩形
///
/// `x`/`y` は基準コーナーを指す。左上原点では矩形の上端左、
/// 左下原点では矩形の下端左。どちらの規約でも両コーナーの
/// 成分ごとの最小値になる。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRect {
    /// X座標 (ポイント)
    pub x: f32,
    /// Y座標 (ポイント)
    pub y: f32,
    /// 幅 (ポイント)
    pub width: f32,
    /// 高さ (ポイント)
    pub height: f32,
}

impl PageRect {
    /// 2つのコーナーから正規化した矩形を作る
    pub fn from_corners(a: (f32, f32), b: (f32, f32)) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (a.0 - b.0).abs(),
            height: (a.1 - b.1).abs(),
        }
    }

    /// y軸を反転した同じ矩形を返す (原点規約の切り替え用)
    ///
    /// 2回適用すると元の値に戻る。
    pub fn flipped_y(&self, page_height: f32) -> Self {
        Self {
            x: self.x,
            y: page_height - self.y - self.height,
            width: self.width,
            height: self.height,
        }
    }
}

/// ページ座標系 - 固定のページサイズと原点規約
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSpace {
    /// ページ幅 (ポイント)
    pub width: f32,
    /// ページ高さ (ポイント)
    pub height: f32,
    /// 原点規約
    pub origin: PageOrigin,
}

impl PageSpace {
    pub fn new(width: f32, height: f32, origin: PageOrigin) -> Self {
        Self {
            width,
            height,
            origin,
        }
    }

    /// A4縦のページ座標系 (画像ドキュメント用)
    pub fn a4(origin: PageOrigin) -> Self {
        let (width, height) = A4_PORTRAIT;
        Self::new(width, height, origin)
    }

    /// サーフェス上の点をページ座標へ変換
    ///
    /// `surface` は現在フレームでページが占める画面上の矩形。
    pub fn to_page_point(&self, pos: Pos2, surface: Rect) -> (f32, f32) {
        let nx = (pos.x - surface.min.x) / surface.width();
        let ny = (pos.y - surface.min.y) / surface.height();
        let x = nx * self.width;
        let y = match self.origin {
            PageOrigin::TopLeft => ny * self.height,
            PageOrigin::BottomLeft => self.height - ny * self.height,
        };
        (x, y)
    }

    /// ページ座標の点をサーフェス上の位置へ変換 (`to_page_point` の逆変換)
    pub fn to_surface_point(&self, point: (f32, f32), surface: Rect) -> Pos2 {
        let nx = point.0 / self.width;
        let ny = match self.origin {
            PageOrigin::TopLeft => point.1 / self.height,
            PageOrigin::BottomLeft => (self.height - point.1) / self.height,
        };
        pos2(
            surface.min.x + nx * surface.width(),
            surface.min.y + ny * surface.height(),
        )
    }

    /// ドラッグ矩形 (サーフェス座標) をページ座標の矩形へ変換
    pub fn rect_to_page(&self, drag: Rect, surface: Rect) -> PageRect {
        let a = self.to_page_point(drag.min, surface);
        let b = self.to_page_point(drag.max, surface);
        PageRect::from_corners(a, b)
    }

    /// 保存済み矩形をサーフェスに対する百分率配置へ変換
    pub fn to_display(&self, rect: &PageRect) -> DisplayRect {
        // 画面上端からの距離に直す
        let top_edge = match self.origin {
            PageOrigin::TopLeft => rect.y,
            PageOrigin::BottomLeft => self.height - rect.y - rect.height,
        };
        DisplayRect {
            left_pct: rect.x / self.width * 100.0,
            top_pct: top_edge / self.height * 100.0,
            width_pct: rect.width / self.width * 100.0,
            height_pct: rect.height / self.height * 100.0,
        }
    }
}

/// サーフェスに対する百分率での配置
///
/// サーフェスのリサイズに追従させるための表現。保存データには
/// 含めず、描画のたびに計算し直す。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// 左端 (サーフェス幅に対する%)
    pub left_pct: f32,
    /// 上端 (サーフェス高さに対する%)
    pub top_pct: f32,
    /// 幅 (%)
    pub width_pct: f32,
    /// 高さ (%)
    pub height_pct: f32,
}

impl DisplayRect {
    /// 現在のサーフェス矩形に対する実ピクセル矩形へ解決
    pub fn resolve(&self, surface: Rect) -> Rect {
        Rect::from_min_size(
            pos2(
                surface.min.x + self.left_pct / 100.0 * surface.width(),
                surface.min.y + self.top_pct / 100.0 * surface.height(),
            ),
            vec2(
                self.width_pct / 100.0 * surface.width(),
                self.height_pct / 100.0 * surface.height(),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn surface_595x842() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(595.0, 842.0))
    }

    #[test]
    fn drag_maps_one_to_one_at_native_scale_top_left() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let drag = Rect::from_min_max(pos2(100.0, 100.0), pos2(200.0, 250.0));

        let rect = space.rect_to_page(drag, surface_595x842());

        assert!(close(rect.x, 100.0));
        assert!(close(rect.y, 100.0));
        assert!(close(rect.width, 100.0));
        assert!(close(rect.height, 150.0));
    }

    #[test]
    fn drag_maps_one_to_one_at_native_scale_bottom_left() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::BottomLeft);
        let drag = Rect::from_min_max(pos2(100.0, 100.0), pos2(200.0, 250.0));

        let rect = space.rect_to_page(drag, surface_595x842());

        assert!(close(rect.x, 100.0));
        assert!(close(rect.y, 592.0)); // 842 - 250
        assert!(close(rect.width, 100.0));
        assert!(close(rect.height, 150.0));
    }

    #[test]
    fn scaled_surface_maps_by_page_per_surface_ratio() {
        // 半分のサイズで表示されたサーフェス
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let surface = Rect::from_min_max(pos2(0.0, 0.0), pos2(297.5, 421.0));
        let drag = Rect::from_min_max(pos2(50.0, 50.0), pos2(100.0, 125.0));

        let rect = space.rect_to_page(drag, surface);

        assert!(close(rect.x, 100.0));
        assert!(close(rect.y, 100.0));
        assert!(close(rect.width, 100.0));
        assert!(close(rect.height, 150.0));
    }

    #[test]
    fn point_round_trip_top_left() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let surface = Rect::from_min_size(pos2(13.5, 27.25), vec2(400.0, 300.0));
        let pos = pos2(137.0, 212.5);

        let page = space.to_page_point(pos, surface);
        let back = space.to_surface_point(page, surface);

        assert!(close(back.x, pos.x));
        assert!(close(back.y, pos.y));
    }

    #[test]
    fn point_round_trip_bottom_left() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::BottomLeft);
        let surface = Rect::from_min_size(pos2(13.5, 27.25), vec2(400.0, 300.0));
        let pos = pos2(137.0, 212.5);

        let page = space.to_page_point(pos, surface);
        let back = space.to_surface_point(page, surface);

        assert!(close(back.x, pos.x));
        assert!(close(back.y, pos.y));
    }

    #[test]
    fn from_corners_normalizes_reversed_corners() {
        let a = PageRect::from_corners((200.0, 250.0), (100.0, 100.0));
        let b = PageRect::from_corners((100.0, 100.0), (200.0, 250.0));

        assert_eq!(a, b);
        assert!(close(a.x, 100.0));
        assert!(close(a.y, 100.0));
        assert!(close(a.width, 100.0));
        assert!(close(a.height, 150.0));
    }

    #[test]
    fn flipped_y_twice_is_identity() {
        let rect = PageRect {
            x: 100.0,
            y: 592.0,
            width: 100.0,
            height: 150.0,
        };

        let flipped = rect.flipped_y(842.0);
        assert!(close(flipped.y, 100.0));

        let restored = flipped.flipped_y(842.0);
        assert!(close(restored.x, rect.x));
        assert!(close(restored.y, rect.y));
        assert!(close(restored.width, rect.width));
        assert!(close(restored.height, rect.height));
    }

    #[test]
    fn display_placement_is_percentage_of_page() {
        let space = PageSpace::new(595.0, 842.0, PageOrigin::BottomLeft);
        let rect = PageRect {
            x: 100.0,
            y: 592.0,
            width: 100.0,
            height: 150.0,
        };

        let display = space.to_display(&rect);

        assert!(close(display.left_pct, 100.0 / 595.0 * 100.0));
        // 左下原点では上端 = 842 - 592 - 150 = 100
        assert!(close(display.top_pct, 100.0 / 842.0 * 100.0));
        assert!(close(display.width_pct, 100.0 / 595.0 * 100.0));
        assert!(close(display.height_pct, 150.0 / 842.0 * 100.0));
    }

    #[test]
    fn resize_changes_only_resolved_pixels() {
        // サーフェスを2倍にしても保存値と百分率は変わらず、
        // 解決後のピクセルだけが2倍になる
        let space = PageSpace::new(595.0, 842.0, PageOrigin::TopLeft);
        let rect = PageRect {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 150.0,
        };

        let display = space.to_display(&rect);
        let small = display.resolve(Rect::from_min_size(pos2(0.0, 0.0), vec2(595.0, 842.0)));
        let large = display.resolve(Rect::from_min_size(pos2(0.0, 0.0), vec2(1190.0, 1684.0)));

        assert!(close(small.min.x, 100.0));
        assert!(close(small.min.y, 100.0));
        assert!(close(small.width(), 100.0));
        assert!(close(small.height(), 150.0));

        assert!(close(large.min.x, 200.0));
        assert!(close(large.min.y, 200.0));
        assert!(close(large.width(), 200.0));
        assert!(close(large.height(), 300.0));
    }

    #[test]
    fn display_round_trip_reproduces_the_drag() {
        // 取り込み → 表示解決で元のドラッグ矩形に戻る
        let space = PageSpace::new(595.0, 842.0, PageOrigin::BottomLeft);
        let surface = surface_595x842();
        let drag = Rect::from_min_max(pos2(100.0, 100.0), pos2(200.0, 250.0));

        let stored = space.rect_to_page(drag, surface);
        let resolved = space.to_display(&stored).resolve(surface);

        assert!(close(resolved.min.x, drag.min.x));
        assert!(close(resolved.min.y, drag.min.y));
        assert!(close(resolved.max.x, drag.max.x));
        assert!(close(resolved.max.y, drag.max.y));
    }
}
