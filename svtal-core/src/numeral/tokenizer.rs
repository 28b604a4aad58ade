//! Tokenizer - 数词分词器
//!
//! 将连写的瑞典语数词切分为词素序列，供解码器折叠

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{SvTalError, SvTalResult};
use crate::numeral::tables::Morpheme;

/// 扫描模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// 宽松模式 - 跳过无法识别的字符
    #[default]
    Permissive,
    /// 严格模式 - 遇到无法识别的字符立即报错
    Strict,
}

/// 词素 Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// 词素分类
    pub morpheme: Morpheme,
    /// 在去除空格后的文本中的字节范围
    pub span: Range<usize>,
    /// 词素原文
    pub content: String,
}

impl Token {
    pub fn new(morpheme: Morpheme, span: Range<usize>, content: String) -> Self {
        Self {
            morpheme,
            span,
            content,
        }
    }
}

/// Tokenizer - 最长匹配分词器
pub struct Tokenizer;

impl Tokenizer {
    /// 将文本切分为词素
    ///
    /// 规则：
    /// - 先去掉所有空格（空格只是分组的装饰，不影响语义）
    /// - 每个位置取最长的已知词素
    /// - 宽松模式下无法匹配的字符逐个跳过；严格模式下报 `Parse` 错误
    pub fn tokenize(text: &str, mode: ScanMode) -> SvTalResult<Vec<Token>> {
        let compact = Self::compact(text);
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < compact.len() {
            let rest = &compact[pos..];

            if let Some((word, morpheme)) = Morpheme::longest_prefix(rest) {
                let end = pos + word.len();
                tokens.push(Token::new(morpheme, pos..end, word.to_string()));
                pos = end;
                continue;
            }

            let unmatched = Self::unmatched_run(rest);
            match mode {
                ScanMode::Strict => {
                    return Err(SvTalError::Parse {
                        token: unmatched.to_string(),
                        offset: pos,
                    });
                }
                ScanMode::Permissive => {
                    tracing::debug!("跳过无法识别的字符: {:?} (offset={})", unmatched, pos);
                    pos += unmatched.len();
                }
            }
        }

        tracing::trace!(
            "分词结果: {:?}",
            tokens.iter().map(|t| t.content.as_str()).collect::<Vec<_>>()
        );

        Ok(tokens)
    }

    /// 去掉空格并转为小写
    fn compact(text: &str) -> String {
        text.chars()
            .filter(|&c| c != ' ')
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// 从开头起连续无法开始任何词素的字符
    fn unmatched_run(rest: &str) -> &str {
        let end = rest
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .find(|&i| Morpheme::longest_prefix(&rest[i..]).is_some())
            .unwrap_or(rest.len());
        &rest[..end]
    }

    /// 以空格分隔的词素序列，便于调试
    pub fn describe(text: &str) -> String {
        match Self::tokenize(text, ScanMode::Permissive) {
            Ok(tokens) => tokens
                .iter()
                .map(|t| t.content.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Err(_) => String::new(),
        }
    }

    /// 检查文本是否完全由瑞典语数词组成
    pub fn is_swedish_number(text: &str) -> bool {
        matches!(Self::tokenize(text, ScanMode::Strict), Ok(tokens) if !tokens.is_empty())
    }
}
