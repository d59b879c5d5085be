/// Composite PNG export
///
/// Writes the currently displayed composite to disk at the path the
/// user picked. Encoding is CPU-bound, so the blocking body runs on
/// the tokio blocking pool like the decode step does.

use std::path::PathBuf;

use crate::error::AnalyzeError;

/// Encode the composite buffer as a PNG and write it to `path`
pub async fn export_png(
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<PathBuf, AnalyzeError> {
    tokio::task::spawn_blocking(move || export_png_blocking(path, width, height, pixels))
        .await
        .map_err(|e| AnalyzeError::Task(e.to_string()))?
}

/// Blocking implementation of the PNG export
fn export_png_blocking(
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<PathBuf, AnalyzeError> {
    let buffer = image::RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        AnalyzeError::Export(format!(
            "composite buffer does not match {}x{}",
            width, height
        ))
    })?;

    buffer
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|e| AnalyzeError::Export(e.to_string()))?;

    println!("📸 Exported composite: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mismatched_buffer_is_rejected() {
        let result = export_png(PathBuf::from("/tmp/unused.png"), 4, 4, vec![0u8; 3]).await;
        assert!(matches!(result, Err(AnalyzeError::Export(_))));
    }

    #[tokio::test]
    async fn test_unwritable_path_is_reported() {
        let pixels = vec![255u8; 2 * 2 * 4];
        let result = export_png(
            PathBuf::from("/nonexistent-dir/out.png"),
            2,
            2,
            pixels,
        )
        .await;
        assert!(matches!(result, Err(AnalyzeError::Export(_))));
    }

    #[tokio::test]
    async fn test_exports_to_a_writable_path() {
        let path = std::env::temp_dir().join("psd-inspector-export-test.png");
        let pixels = vec![128u8; 3 * 2 * 4];
        let result = export_png(path.clone(), 3, 2, pixels).await;

        assert_eq!(result.unwrap(), path);
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
