use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ai_tools::image_source::load_image_blob;
use ai_tools_common::ImageBlob;

use crate::model::PreviewData;

const PREVIEW_MAX: (u32, u32) = (480, 360);

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Image", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
        .pick_file()
}

pub fn load_image(path: &Path) -> Result<(ImageBlob, PreviewData)> {
    let blob = load_image_blob(path).with_context(|| format!("read {}", path.display()))?;
    let decoded = image::load_from_memory(&blob.bytes)
        .with_context(|| format!("decode {}", path.display()))?;
    let thumb = decoded.thumbnail(PREVIEW_MAX.0, PREVIEW_MAX.1);
    let preview = PreviewData {
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    };
    Ok((blob, preview))
}
