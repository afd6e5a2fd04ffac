pub mod colors;
pub mod qr_image;
