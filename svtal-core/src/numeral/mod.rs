//! 数词模块
//!
//! 瑞典语数词与整数之间的双向转换

pub mod tables;
pub mod tokenizer;
pub mod encoder;
pub mod decoder;
pub mod converter;

// 导出核心类型
pub use tables::{Morpheme, Scale, MAX_VALUE};
pub use tokenizer::{ScanMode, Token, Tokenizer};
pub use encoder::{Gender, Spacing, SwedishEncoder};
pub use decoder::SwedishDecoder;
pub use converter::{NumberConverter, RoundTrip};
