pub mod barcode;
pub mod http;
pub mod llm;
pub mod ocr;
pub mod product;
