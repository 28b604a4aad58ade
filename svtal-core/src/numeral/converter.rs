//! NumberConverter - 双向转换入口
//!
//! 按配置组合编码器与解码器

use crate::config::SvTalConfig;
use crate::error::SvTalResult;
use crate::numeral::{
    Gender, ScanMode, Spacing, SwedishDecoder, SwedishEncoder, Token, Tokenizer,
};

/// 往返转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    /// 原始数值
    pub value: u64,
    /// 编码后的数词
    pub words: String,
    /// 再次解码得到的数值
    pub decoded: u64,
}

impl RoundTrip {
    pub fn is_consistent(&self) -> bool {
        self.value == self.decoded
    }
}

/// 数词转换器
#[derive(Debug, Clone)]
pub struct NumberConverter {
    gender: Gender,
    spacing: Spacing,
    decoder: SwedishDecoder,
}

impl NumberConverter {
    /// 根据配置创建转换器
    pub fn new(config: &SvTalConfig) -> Self {
        Self {
            gender: config.encoder.gender,
            spacing: config.encoder.spacing,
            decoder: SwedishDecoder::new(config.decoder.scan_mode),
        }
    }

    pub fn with_mode(mode: ScanMode) -> Self {
        Self {
            decoder: SwedishDecoder::new(mode),
            ..Self::default()
        }
    }

    /// 整数 → 数词
    pub fn to_words(&self, n: u64) -> SvTalResult<String> {
        match self.spacing {
            Spacing::Compact => SwedishEncoder::encode_with_gender(n, self.gender),
            Spacing::Grouped => SwedishEncoder::encode_grouped(n, self.gender),
        }
    }

    /// 数词 → 整数
    pub fn to_number(&self, text: &str) -> SvTalResult<u64> {
        self.decoder.decode(text)
    }

    /// 分词（按当前扫描模式）
    pub fn tokenize(&self, text: &str) -> SvTalResult<Vec<Token>> {
        Tokenizer::tokenize(text, self.decoder.mode())
    }

    /// 编码后再解码
    pub fn round_trip(&self, value: u64) -> SvTalResult<RoundTrip> {
        let words = self.to_words(value)?;
        let decoded = self.to_number(&words)?;
        if decoded != value {
            tracing::warn!("往返不一致: {} → {:?} → {}", value, words, decoded);
        }
        Ok(RoundTrip {
            value,
            words,
            decoded,
        })
    }
}

impl Default for NumberConverter {
    fn default() -> Self {
        Self::new(&SvTalConfig::default())
    }
}
