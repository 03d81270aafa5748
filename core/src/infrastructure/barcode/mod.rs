pub mod rxing_decoder;
pub use rxing_decoder::RxingBarcodeDecoder;
