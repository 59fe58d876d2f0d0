//! 画像ファイルの読み込み
//!
//! 送信前に内容から形式を判定し、画像でないファイルは弾く。

use ai_tools_common::ImageBlob;
use std::path::Path;

use crate::error::{AiToolsError, Result};

pub fn load_image_blob(path: &Path) -> Result<ImageBlob> {
    if !path.is_file() {
        return Err(AiToolsError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes)
        .map_err(|e| AiToolsError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageBlob::new(file_name, bytes).with_mime_type(format.to_mime_type()))
}
