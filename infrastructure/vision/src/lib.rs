pub mod barcode_reader;
pub mod ean13;
pub mod image_loader;
pub mod placeholder_oracle;
pub mod qr;
