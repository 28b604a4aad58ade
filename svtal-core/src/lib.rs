//! svtal Core
//!
//! 瑞典语数词与整数（0 ~ 999 999 999 999）之间的双向转换

#![warn(rust_2018_idioms)]

pub mod numeral;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{SvTalError, SvTalResult};
pub use config::SvTalConfig;
pub use numeral::{
    Gender, NumberConverter, ScanMode, Spacing, SwedishDecoder, SwedishEncoder, Tokenizer,
    MAX_VALUE,
};

/// 整数 → 数词（中性 "ett" 形式，连写）
///
/// ```
/// assert_eq!(svtal_core::to_words(21).unwrap(), "tjugoett");
/// ```
pub fn to_words(n: u64) -> SvTalResult<String> {
    SwedishEncoder::encode(n)
}

/// 整数 → 数词，指定 "一" 的性别形式
pub fn to_words_with_gender(n: u64, gender: Gender) -> SvTalResult<String> {
    SwedishEncoder::encode_with_gender(n, gender)
}

/// 数词 → 整数（宽松模式）
///
/// ```
/// assert_eq!(svtal_core::to_number("två tusen miljoner").unwrap(), 2_000_000_000);
/// ```
pub fn to_number(text: &str) -> SvTalResult<u64> {
    SwedishDecoder::default().decode(text)
}

/// 初始化日志系统
///
/// 调试模式 (--features debug-logs): 日志级别由 SVTAL_LOG 控制，默认 warn
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("SVTAL_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 静默运行，如需日志请使用 --features debug-logs 编译
    }
}
