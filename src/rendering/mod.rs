pub mod png_encode;

pub use png_encode::encode_png;
