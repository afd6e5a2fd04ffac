//! Decoding of the backend's `data:image/png;base64,...` QR payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use egui::ColorImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not a base64 data URL")]
    MissingBase64Marker,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid image payload: {0}")]
    Image(#[from] image::ImageError),
}

/// A decoded QR payload: the displayable image plus the raw PNG bytes
/// (kept for the download action).
pub struct DecodedQr {
    pub image: ColorImage,
    pub png_bytes: Vec<u8>,
}

/// Decodes a `data:<mime>;base64,<payload>` URL into pixels.
pub fn decode_data_url(data_url: &str) -> Result<DecodedQr, DecodeError> {
    let (_, payload) = data_url
        .split_once(";base64,")
        .ok_or(DecodeError::MissingBase64Marker)?;

    let png_bytes = STANDARD.decode(payload.as_bytes())?;
    let decoded = image::load_from_memory(&png_bytes)?.to_rgba8();

    let size = [decoded.width() as usize, decoded.height() as usize];
    let image = ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());

    Ok(DecodedQr { image, png_bytes })
}
