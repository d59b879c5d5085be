/// Composite renderer
///
/// Turns the parser's flattened RGBA buffer into an iced image handle
/// the preview pane can draw. Byte-for-byte placement at the handle's
/// native size: no scaling, no cropping, no color correction. The
/// full buffer is required up front; there is no progressive path.

use iced::widget::image::Handle;

use crate::error::AnalyzeError;

/// Build a drawable handle from a composite buffer
///
/// The buffer must be exactly `width * height * 4` bytes (flat RGBA).
/// Anything else means the parser and header disagree, and the whole
/// analysis is rejected rather than showing a torn image.
pub fn preview_handle(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<Handle, AnalyzeError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(AnalyzeError::CompositeSize {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(Handle::from_rgba(width, height, pixels))
}
