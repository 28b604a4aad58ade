//! 数词转换演示程序
//!
//! 演示整数 ⇄ 瑞典语数词的双向转换
//!
//! 运行：cargo run --example numbers_demo

use svtal_core::numeral::{Gender, NumberConverter, ScanMode, Spacing, SwedishEncoder, Tokenizer};
use svtal_core::SvTalConfig;

fn main() {
    svtal_core::init_logging();

    println!("=== svtal 数词转换演示 ===\n");

    let config = SvTalConfig::load().unwrap_or_else(|e| {
        println!("配置加载失败，使用默认配置: {}", e);
        SvTalConfig::default()
    });
    let converter = NumberConverter::new(&config);

    // 测试用例
    let test_cases: Vec<(u64, &str)> = vec![
        (0, "noll"),
        (21, "tjugoett"),
        (157, "etthundrafemtiosju"),
        (1_000, "etttusen"),
        (1_000_000, "enmiljon"),
        (2_030_700, "tvåmiljonertrettiotusensjuhundra"),
        (
            123_456_789_123,
            "etthundratjugotremiljarderfyrahundrafemtiosexmiljonersjuhundraåttioniotusenetthundratjugotre",
        ),
    ];

    println!("【编码】\n");
    for (i, (nr, expected)) in test_cases.iter().enumerate() {
        match SwedishEncoder::encode(*nr) {
            Ok(words) => {
                let status = if &words == expected { "✓" } else { "✗" };
                println!("#{} {} {} → \"{}\"", i + 1, status, nr, words);
            }
            Err(e) => println!("#{} ✗ {} → 错误: {}", i + 1, nr, e),
        }
    }

    println!("\n【解码】\n");
    let inputs = [
        "tjugoen",
        "hundrafemtio miljarder",
        "två tusen miljoner",
        "tusen",
        "tjugo och ett",
    ];
    for text in inputs {
        match converter.to_number(text) {
            Ok(nr) => println!("\"{}\" → {}  [{}]", text, nr, Tokenizer::describe(text)),
            Err(e) => println!("\"{}\" → 错误: {}", text, e),
        }
    }

    println!("\n【分组输出】\n");
    for nr in [1_288u64, 98_765, 123_456_789_123] {
        match SwedishEncoder::encode_grouped(nr, Gender::Neuter) {
            Ok(words) => println!("{} → \"{}\"", nr, words),
            Err(e) => println!("{} → 错误: {}", nr, e),
        }
    }

    println!("\n【模式切换演示】\n");
    let text = "tjugo och ett";
    println!("测试文本: \"{}\"", text);
    for mode in [ScanMode::Permissive, ScanMode::Strict] {
        let converter = NumberConverter::with_mode(mode);
        match converter.to_number(text) {
            Ok(nr) => println!("{:?} 模式: {}", mode, nr),
            Err(e) => println!("{:?} 模式: 错误: {}", mode, e),
        }
    }

    println!("\n当前配置: gender={:?}, spacing={:?}", config.encoder.gender, config.encoder.spacing);
    if config.encoder.spacing == Spacing::Grouped {
        println!("（to_words 将输出分组形式）");
    }

    println!("\n=== 演示完成 ===");
}
