pub mod client;
pub mod request_builder;
pub mod response_converter;

pub use client::HttpAnalysisService;
pub use request_builder::RequestBuilderImpl;
pub use response_converter::{extract_error_message, ResponseConverterImpl};
