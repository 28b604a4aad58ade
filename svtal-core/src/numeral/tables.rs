//! 静态数词表
//!
//! 编码器和解码器共享的只读数据：0-12 基础词、数量级表、不规则词表，
//! 以及分词器使用的全部词素

/// 0-12 的标准拼写（下标 = 数值）
pub const SMALL: [&str; 13] = [
    "noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio", "tio", "elva",
    "tolv",
];

/// 编码器支持的最大值
pub const MAX_VALUE: u64 = 999_999_999_999;

/// 数量级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// tusen = 1 000
    Tusen,
    /// miljon = 1 000 000
    Miljon,
    /// miljard = 1 000 000 000
    Miljard,
}

impl Scale {
    /// 从大到小的查找顺序
    pub const DESCENDING: [Scale; 3] = [Scale::Miljard, Scale::Miljon, Scale::Tusen];

    pub fn value(self) -> u64 {
        match self {
            Scale::Tusen => 1_000,
            Scale::Miljon => 1_000_000,
            Scale::Miljard => 1_000_000_000,
        }
    }

    /// 单数形式
    pub fn word(self) -> &'static str {
        match self {
            Scale::Tusen => "tusen",
            Scale::Miljon => "miljon",
            Scale::Miljard => "miljard",
        }
    }

    /// miljon / miljard 需要 "en" 形式和复数后缀；tusen 两者都不需要
    pub fn is_noun(self) -> bool {
        !matches!(self, Scale::Tusen)
    }
}

/// 不规则词 → 数值
///
/// 编码时直接查拼写，无需递归推导；词素表中的 Anchor 值与此一致
pub const ANCHORS: [(&str, u64); 10] = [
    ("fjorton", 14),
    ("arton", 18),
    ("nitton", 19),
    ("tjugo", 20),
    ("fyrtio", 40),
    ("åttio", 80),
    ("nittio", 90),
    ("tusen", 1_000),
    ("miljon", 1_000_000),
    ("miljard", 1_000_000_000),
];

/// 查找不规则词的拼写
pub fn anchor_word(value: u64) -> Option<&'static str> {
    ANCHORS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(word, _)| *word)
}

/// 词素分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Morpheme {
    /// 0-12 基础词
    Small(u64),
    /// "en"（通性的 "一"，用在 miljon/miljard 前或 tjugoen 这类写法中）
    One,
    /// 词干 + ton/tton：tretton, femton, sexton, sjutton（stem 为词干数值）
    Teen { stem: u64 },
    /// 不规则词：fjorton, arton, nitton, tjugo, fyrtio, åttio, nittio
    Anchor(u64),
    /// 词干 + tio/ttio：trettio, femtio, sextio, sjuttio（stem 为词干数值）
    Tens { stem: u64 },
    /// hundra
    Hundred,
    /// tusen / miljon(er) / miljard(er)
    Scale { scale: Scale, plural: bool },
}

/// 分词器识别的全部词素
pub const MORPHEMES: [(&str, Morpheme); 35] = [
    ("noll", Morpheme::Small(0)),
    ("ett", Morpheme::Small(1)),
    ("två", Morpheme::Small(2)),
    ("tre", Morpheme::Small(3)),
    ("fyra", Morpheme::Small(4)),
    ("fem", Morpheme::Small(5)),
    ("sex", Morpheme::Small(6)),
    ("sju", Morpheme::Small(7)),
    ("åtta", Morpheme::Small(8)),
    ("nio", Morpheme::Small(9)),
    ("tio", Morpheme::Small(10)),
    ("elva", Morpheme::Small(11)),
    ("tolv", Morpheme::Small(12)),
    ("en", Morpheme::One),
    ("tretton", Morpheme::Teen { stem: 3 }),
    ("femton", Morpheme::Teen { stem: 5 }),
    ("sexton", Morpheme::Teen { stem: 6 }),
    ("sjutton", Morpheme::Teen { stem: 7 }),
    ("fjorton", Morpheme::Anchor(14)),
    ("arton", Morpheme::Anchor(18)),
    ("nitton", Morpheme::Anchor(19)),
    ("tjugo", Morpheme::Anchor(20)),
    ("fyrtio", Morpheme::Anchor(40)),
    ("åttio", Morpheme::Anchor(80)),
    ("nittio", Morpheme::Anchor(90)),
    ("trettio", Morpheme::Tens { stem: 3 }),
    ("femtio", Morpheme::Tens { stem: 5 }),
    ("sextio", Morpheme::Tens { stem: 6 }),
    ("sjuttio", Morpheme::Tens { stem: 7 }),
    ("hundra", Morpheme::Hundred),
    ("tusen", Morpheme::Scale { scale: Scale::Tusen, plural: false }),
    ("miljon", Morpheme::Scale { scale: Scale::Miljon, plural: false }),
    ("miljoner", Morpheme::Scale { scale: Scale::Miljon, plural: true }),
    ("miljard", Morpheme::Scale { scale: Scale::Miljard, plural: false }),
    ("miljarder", Morpheme::Scale { scale: Scale::Miljard, plural: true }),
];

impl Morpheme {
    /// 将完整的词素字符串分类
    pub fn classify(word: &str) -> Option<Morpheme> {
        MORPHEMES
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, m)| *m)
    }

    /// 在文本开头查找最长的词素
    pub fn longest_prefix(text: &str) -> Option<(&'static str, Morpheme)> {
        MORPHEMES
            .iter()
            .filter(|(w, _)| text.starts_with(w))
            .max_by_key(|(w, _)| w.len())
            .copied()
    }

    /// 词素的数值：十几 = 10 + 词干，整十 = 词干 × 10
    pub fn value(self) -> u64 {
        match self {
            Morpheme::Small(value) | Morpheme::Anchor(value) => value,
            Morpheme::One => 1,
            Morpheme::Teen { stem } => 10 + stem,
            Morpheme::Tens { stem } => stem * 10,
            Morpheme::Hundred => 100,
            Morpheme::Scale { scale, .. } => scale.value(),
        }
    }

    pub fn is_scale(&self) -> bool {
        matches!(self, Morpheme::Scale { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_table() {
        assert_eq!(SMALL[0], "noll");
        assert_eq!(SMALL[8], "åtta");
        assert_eq!(SMALL[12], "tolv");
        assert_eq!(Morpheme::classify("elva"), Some(Morpheme::Small(11)));
    }

    #[test]
    fn test_scale_order() {
        let values: Vec<u64> = Scale::DESCENDING.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1_000_000_000, 1_000_000, 1_000]);
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_anchor_lookup() {
        assert_eq!(anchor_word(14), Some("fjorton"));
        assert_eq!(anchor_word(20), Some("tjugo"));
        assert_eq!(anchor_word(15), None);
        for scale in Scale::DESCENDING {
            assert_eq!(anchor_word(scale.value()), Some(scale.word()));
        }
    }

    #[test]
    fn test_morpheme_stems_resolve() {
        for (word, morpheme) in MORPHEMES.iter() {
            match morpheme {
                Morpheme::Small(v) => assert_eq!(SMALL[*v as usize], *word),
                Morpheme::Teen { stem } | Morpheme::Tens { stem } => {
                    assert!(word.starts_with(SMALL[*stem as usize]), "{}", word);
                }
                Morpheme::Anchor(v) => {
                    assert_eq!(anchor_word(*v), Some(*word));
                }
                Morpheme::Scale { scale, plural } => {
                    assert!(word.starts_with(scale.word()));
                    assert_eq!(*plural, word.ends_with("er"));
                }
                Morpheme::One | Morpheme::Hundred => {}
            }
        }
    }

    #[test]
    fn test_morpheme_values() {
        let value = |w: &str| Morpheme::classify(w).unwrap().value();
        assert_eq!(value("sjutton"), 17);
        assert_eq!(value("nitton"), 19);
        assert_eq!(value("femtio"), 50);
        assert_eq!(value("åttio"), 80);
        assert_eq!(value("en"), 1);
        assert_eq!(value("hundra"), 100);
        assert_eq!(value("miljarder"), 1_000_000_000);
    }

    #[test]
    fn test_longest_prefix() {
        assert_eq!(Morpheme::longest_prefix("sextio").map(|m| m.0), Some("sextio"));
        assert_eq!(Morpheme::longest_prefix("sextusen").map(|m| m.0), Some("sex"));
        assert_eq!(Morpheme::longest_prefix("miljoner").map(|m| m.0), Some("miljoner"));
        assert_eq!(Morpheme::longest_prefix("sjutton").map(|m| m.0), Some("sjutton"));
        assert_eq!(Morpheme::longest_prefix("xyz"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Morpheme::classify("en"), Some(Morpheme::One));
        assert_eq!(Morpheme::classify("hundra"), Some(Morpheme::Hundred));
        assert_eq!(
            Morpheme::classify("miljarder"),
            Some(Morpheme::Scale { scale: Scale::Miljard, plural: true })
        );
        assert!(Morpheme::classify("tusen").unwrap().is_scale());
        assert_eq!(Morpheme::classify("tjugoett"), None);
    }
}
