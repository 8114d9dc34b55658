//! 注釈モジュール - 矩形注釈の定義、ストア、ドラッグ取り込み

mod drag;
mod store;

pub use drag::{DragCapture, MIN_DRAG_SIZE};
pub use store::AnnotationStore;

use crate::coords::PageRect;
use serde::{Deserialize, Serialize};

/// 注釈の一意なID
pub type AnnotationId = uuid::Uuid;

/// ページ上の矩形注釈
///
/// 作成後は変更しない値オブジェクト。座標はページ座標系 (ポイント)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// 一意なID
    pub id: AnnotationId,
    /// ページ座標系での矩形
    pub rect: PageRect,
}

impl Annotation {
    /// 新しい注釈を作成 (IDを採番する)
    pub fn new(rect: PageRect) -> Self {
        Self {
            id: AnnotationId::new_v4(),
            rect,
        }
    }
}
