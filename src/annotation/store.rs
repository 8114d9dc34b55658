//! 注釈ストア - 挿入順を保持するコレクション

use super::{Annotation, AnnotationId};
use crate::coords::PageRect;

/// 挿入順を保持する注釈コレクション
///
/// 単一の対話スレッドからのみ操作されるためロックは持たない。
#[derive(Debug, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// 矩形を末尾に追加して採番したIDを返す
    pub fn add(&mut self, rect: PageRect) -> AnnotationId {
        let annotation = Annotation::new(rect);
        let id = annotation.id;
        self.annotations.push(annotation);
        id
    }

    /// IDが一致する注釈を削除する (存在しなければ何もしない)
    pub fn remove(&mut self, id: AnnotationId) {
        self.annotations.retain(|a| a.id != id);
    }

    /// 挿入順の一覧を返す
    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// 全注釈を破棄する (新しいドキュメントの読み込み時)
    pub fn reset(&mut self) {
        self.annotations.clear();
    }

    /// 原点規約の切り替えに合わせて全矩形を再表現する
    ///
    /// IDと挿入順は維持される。2回適用すると元の値に戻る。
    pub fn reexpress_origin(&mut self, page_height: f32) {
        for annotation in &mut self.annotations {
            annotation.rect = annotation.rect.flipped_y(page_height);
        }
    }
}
