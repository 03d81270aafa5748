pub mod ocr_space_client;
pub use ocr_space_client::OcrSpaceClient;
