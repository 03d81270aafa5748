pub mod scan_and_analyze;
pub mod scan_product;
