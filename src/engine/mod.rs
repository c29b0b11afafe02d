pub mod converter;
pub mod merger;

pub use converter::Converter;
pub use merger::Merger;
