//! 数字编码模块
//!
//! 将 0 ~ 999 999 999 999 的整数拼写为瑞典语数词
//!
//! 规则按优先级依次匹配：数量级整除 → 整百 → 0-12 → 十几 → 整十 → 组合拆分

use serde::{Deserialize, Serialize};

use crate::error::{SvTalError, SvTalResult};
use crate::numeral::tables::{anchor_word, Scale, MAX_VALUE, SMALL};
use crate::numeral::tokenizer::{ScanMode, Tokenizer};

/// "一" 的语法性别形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// 中性 "ett"（默认，独立计数时使用）
    #[default]
    Neuter,
    /// 通性 "en"（miljon / miljard 前使用）
    Common,
}

impl Gender {
    pub fn word(self) -> &'static str {
        match self {
            Gender::Neuter => "ett",
            Gender::Common => "en",
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// 全部连写："tvåmiljonertrettiotusen"
    #[default]
    Compact,
    /// 数量级词前后加空格："två miljoner trettio tusen"
    Grouped,
}

/// 瑞典语数词编码器
pub struct SwedishEncoder;

impl SwedishEncoder {
    /// 拼写整数（中性 "ett" 形式）
    ///
    /// # 示例
    /// ```
    /// # use svtal_core::numeral::encoder::SwedishEncoder;
    /// assert_eq!(SwedishEncoder::encode(157).unwrap(), "etthundrafemtiosju");
    /// ```
    pub fn encode(n: u64) -> SvTalResult<String> {
        Self::encode_with_gender(n, Gender::Neuter)
    }

    /// 拼写整数，`gender` 仅在 n == 1 时生效
    ///
    /// # 返回
    /// - `Ok(String)`: 连写的数词
    /// - `Err(OutOfRange)`: n 超过 999 999 999 999
    pub fn encode_with_gender(n: u64, gender: Gender) -> SvTalResult<String> {
        if n > MAX_VALUE {
            return Err(SvTalError::OutOfRange {
                value: n,
                max: MAX_VALUE,
            });
        }
        Ok(Self::spell(n, gender))
    }

    /// 按数量级分组拼写
    ///
    /// 每个数量级词前后各加一个空格，例如 1 288 → "ett tusen tvåhundraåttioåtta"。
    /// 解码结果与连写形式相同。
    pub fn encode_grouped(n: u64, gender: Gender) -> SvTalResult<String> {
        let compact = Self::encode_with_gender(n, gender)?;
        let tokens = Tokenizer::tokenize(&compact, ScanMode::Strict)?;

        let mut out = String::with_capacity(compact.len() + 8);
        for token in &tokens {
            if token.morpheme.is_scale() {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&token.content);
                out.push(' ');
            } else {
                out.push_str(&token.content);
            }
        }

        Ok(out.trim_end().to_string())
    }

    /// 递归拼写，调用方保证 n <= MAX_VALUE
    fn spell(n: u64, gender: Gender) -> String {
        // Step 1: 数量级整除
        for scale in Scale::DESCENDING {
            let value = scale.value();
            // 商 >= 1000 的 tusen 会拼成 "etttusenetttusen"，交给组合拆分
            if scale == Scale::Tusen && n / value >= 1_000 {
                continue;
            }
            if n >= value && n % value == 0 {
                return Self::spell_scaled(n / value, scale);
            }
        }

        // Step 2: 整百
        if (100..1000).contains(&n) && n % 100 == 0 {
            return Self::spell(n / 100, Gender::Neuter) + "hundra";
        }

        match n {
            1 => gender.word().to_string(),
            0..=12 => SMALL[n as usize].to_string(),

            // 十几：tretton, sjutton, nitton 去掉词尾 o 再加 tton
            13 | 17 | 19 => {
                let stem = Self::spell(n - 10, Gender::Neuter);
                format!("{}tton", stem.strip_suffix('o').unwrap_or(&stem))
            }
            15 | 16 => Self::spell(n - 10, Gender::Neuter) + "ton",
            14 | 18 | 20 => Self::irregular(n),

            // 整十
            40 | 50 | 60 | 80 => {
                let stem = Self::spell(n / 10, Gender::Neuter);
                let stem = stem.strip_suffix('a').unwrap_or(&stem);
                format!("{}tio", stem.strip_suffix('t').unwrap_or(stem))
            }
            30 | 70 | 90 => {
                let stem = Self::spell(n / 10, Gender::Neuter);
                let stem = stem.strip_suffix('a').unwrap_or(&stem);
                format!("{}ttio", stem.strip_suffix('o').unwrap_or(stem))
            }

            // 组合：整数部分 + 余数，余数不会为 0（整除情况已在上面处理）
            21..=99 => Self::split(n, 10),
            101..=999 => Self::split(n, 100),
            1_001..=999_999 => Self::split(n, 1_000),
            1_000_001..=999_999_999 => Self::split(n, 1_000_000),
            _ => Self::split(n, 1_000_000_000),
        }
    }

    /// count × scale，例如 tvåmiljoner, etttusen, enmiljard
    fn spell_scaled(count: u64, scale: Scale) -> String {
        let gender = if scale.is_noun() {
            Gender::Common
        } else {
            Gender::Neuter
        };

        let mut out = Self::spell(count, gender);
        out.push_str(scale.word());
        if scale.is_noun() && count % 10 != 1 {
            out.push_str("er");
        }
        out
    }

    fn split(n: u64, scale: u64) -> String {
        debug_assert!(n % scale != 0);
        Self::spell(n / scale * scale, Gender::Neuter) + &Self::spell(n % scale, Gender::Neuter)
    }

    fn irregular(n: u64) -> String {
        anchor_word(n).unwrap_or_default().to_string()
    }
}
