//! 入力コレクションモデル
//!
//! - TextInputs: 順序付きテキスト入力（記事分類画面）
//! - ImageInput: 画像1枚の保持（画像分類画面）
//!
//! I/Oは行わない。変更系メソッドは状態が変わったかどうかを返す。

use crate::validator;

/// 順序付きテキスト入力列
///
/// 要素は位置でのみ識別する。常に `min_items` 件以上を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputs {
    items: Vec<String>,
    min_items: usize,
}

impl TextInputs {
    /// 空の入力を `min_items` 件（最低1件）持つ状態で作成
    pub fn new(min_items: usize) -> Self {
        let min_items = min_items.max(1);
        Self {
            items: vec![String::new(); min_items],
            min_items,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    /// 末尾に空の入力を追加（上限なし）
    pub fn append(&mut self) {
        self.items.push(String::new());
    }

    /// 指定位置を削除
    ///
    /// 範囲外、または最低件数を下回る場合は何もしない。
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.items.len() <= self.min_items {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// 指定位置の内容を置き換え（範囲外は何もしない）
    pub fn update(&mut self, index: usize, content: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                *item = content.into();
                true
            }
            None => false,
        }
    }

    /// 編集用の可変参照（UIのテキスト欄に直接バインドする）
    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.items.get_mut(index)
    }

    /// 初期状態（空の入力 `min_items` 件）に戻す
    pub fn reset(&mut self) {
        self.items = vec![String::new(); self.min_items];
    }

    pub fn all_valid(&self) -> bool {
        validator::all_valid(&self.items)
    }

    pub fn invalid_indices(&self) -> Vec<usize> {
        validator::invalid_indices(&self.items)
    }
}

impl Default for TextInputs {
    fn default() -> Self {
        Self::new(1)
    }
}

/// 送信対象の画像データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for_file_name(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// 画像1枚の保持
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageInput {
    blob: Option<ImageBlob>,
}

impl ImageInput {
    pub fn blob(&self) -> Option<&ImageBlob> {
        self.blob.as_ref()
    }

    pub fn is_held(&self) -> bool {
        self.blob.is_some()
    }

    /// 保持中の画像を置き換える
    pub fn hold(&mut self, blob: ImageBlob) {
        self.blob = Some(blob);
    }

    pub fn clear(&mut self) -> bool {
        self.blob.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(texts: &[&str]) -> TextInputs {
        let mut inputs = TextInputs::new(1);
        for _ in 1..texts.len() {
            inputs.append();
        }
        for (i, text) in texts.iter().enumerate() {
            inputs.update(i, *text);
        }
        inputs
    }

    #[test]
    fn test_initial_shape() {
        let inputs = TextInputs::default();
        assert_eq!(inputs.items(), &[String::new()]);
        assert_eq!(TextInputs::new(0).len(), 1);
        assert_eq!(TextInputs::new(3).len(), 3);
    }

    #[test]
    fn test_append_and_update() {
        let mut inputs = TextInputs::default();
        inputs.append();
        assert_eq!(inputs.len(), 2);
        assert!(inputs.update(1, "second"));
        assert_eq!(inputs.get(1), Some("second"));
        assert_eq!(inputs.get(0), Some(""));
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut inputs = TextInputs::default();
        assert!(!inputs.update(5, "x"));
        assert_eq!(inputs.items(), &[String::new()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut inputs = filled(&["a", "b"]);
        assert!(!inputs.remove(2));
        assert_eq!(inputs.len(), 2);
    }

    #[test]
    fn test_remove_last_item_is_refused() {
        let mut inputs = filled(&["only"]);
        assert!(!inputs.remove(0));
        assert_eq!(inputs.items(), &["only".to_string()]);
    }

    #[test]
    fn test_remove_then_append_keeps_length() {
        let mut inputs = filled(&["a", "b", "c"]);
        assert!(inputs.remove(1));
        inputs.append();
        assert_eq!(
            inputs.items(),
            &["a".to_string(), "c".to_string(), String::new()]
        );
    }

    #[test]
    fn test_reset_restores_single_empty_item() {
        let mut inputs = filled(&["a", "b", "c"]);
        inputs.reset();
        assert_eq!(inputs, TextInputs::default());
    }

    #[test]
    fn test_validation_helpers() {
        let inputs = filled(&["Stocks rally today", "  "]);
        assert!(!inputs.all_valid());
        assert_eq!(inputs.invalid_indices(), vec![1]);
    }

    #[test]
    fn test_mime_for_file_name() {
        assert_eq!(mime_for_file_name("cat.JPG"), "image/jpeg");
        assert_eq!(mime_for_file_name("dog.png"), "image/png");
        assert_eq!(mime_for_file_name("photo.webp"), "image/webp");
        assert_eq!(mime_for_file_name("noext"), "application/octet-stream");
    }

    #[test]
    fn test_image_input_hold_and_clear() {
        let mut input = ImageInput::default();
        assert!(!input.is_held());
        input.hold(ImageBlob::new("a.png", vec![1, 2, 3]));
        input.hold(ImageBlob::new("b.jpg", vec![4]));
        assert_eq!(input.blob().map(|b| b.file_name.as_str()), Some("b.jpg"));
        assert_eq!(input.blob().map(|b| b.mime_type.as_str()), Some("image/jpeg"));
        assert!(input.clear());
        assert!(!input.clear());
    }
}
