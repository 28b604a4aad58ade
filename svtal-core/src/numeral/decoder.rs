//! 瑞典语数词解析模块
//!
//! 将数词（可连写，也可用空格分组）还原为整数
//!
//! 支持：noll ~ tolv, tretton ~ nitton, tjugo ~ nittio, hundra, tusen, miljon(er), miljard(er)

use crate::error::{SvTalError, SvTalResult};
use crate::numeral::tables::Morpheme;
use crate::numeral::tokenizer::{ScanMode, Tokenizer};

/// 瑞典语数词解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct SwedishDecoder {
    mode: ScanMode,
}

/// 折叠状态：当前组的累加值 + 已完成的数量级组
#[derive(Debug, Default)]
struct Accumulator {
    sum: u64,
    groups: Vec<u64>,
}

impl SwedishDecoder {
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// 将数词转换为整数
    ///
    /// # 参数
    /// - `text`: 数词文本（例如："två tusen miljoner"）
    ///
    /// # 返回
    /// - `Ok(u64)`: 数值
    /// - `Err`: 严格模式下含无法识别的内容，或数值溢出
    ///
    /// # 示例
    /// ```
    /// # use svtal_core::numeral::decoder::SwedishDecoder;
    /// let decoder = SwedishDecoder::default();
    /// assert_eq!(decoder.decode("tjugoen").unwrap(), 21);
    /// ```
    pub fn decode(&self, text: &str) -> SvTalResult<u64> {
        let tokens = Tokenizer::tokenize(text, self.mode)?;

        if tokens.is_empty() && self.mode == ScanMode::Strict {
            return Err(SvTalError::EmptyInput);
        }

        let overflow = || SvTalError::Overflow(text.to_string());
        let mut acc = Accumulator::default();

        for token in &tokens {
            Self::fold(&mut acc, token.morpheme).ok_or_else(overflow)?;
        }

        acc.groups.push(acc.sum);
        acc.groups
            .iter()
            .try_fold(0u64, |total, &group| total.checked_add(group))
            .ok_or_else(overflow)
    }

    /// 折叠单个词素，溢出时返回 None
    fn fold(acc: &mut Accumulator, morpheme: Morpheme) -> Option<()> {
        let value = morpheme.value();
        match morpheme {
            Morpheme::Hundred => acc.sum = acc.sum.max(1).checked_mul(value)?,
            Morpheme::Scale { scale, .. } => {
                // "tusen miljoner" / "tusen miljarder"：把前一组并回乘数
                if scale.is_noun() {
                    if let Some(&last) = acc.groups.last() {
                        if (1_000..1_000_000).contains(&last) {
                            tracing::debug!("合并 {} 到 {}", last, scale.word());
                            acc.sum = acc.sum.checked_add(last)?;
                            acc.groups.pop();
                        }
                    }
                }

                acc.groups.push(acc.sum.max(1).checked_mul(value)?);
                acc.sum = 0;
            }
            Morpheme::Small(_)
            | Morpheme::One
            | Morpheme::Teen { .. }
            | Morpheme::Anchor(_)
            | Morpheme::Tens { .. } => acc.sum = acc.sum.checked_add(value)?,
        }
        Some(())
    }

    /// 解析单个完整词素，例如 "fyrtio" → 40，"miljoner" → 1 000 000
    pub fn word_value(word: &str) -> SvTalResult<u64> {
        Morpheme::classify(&word.to_lowercase())
            .map(Morpheme::value)
            .ok_or_else(|| SvTalError::Parse {
                token: word.to_string(),
                offset: 0,
            })
    }
}
