//! 数词转换性能基准测试
//!
//! 验证单次转换 < 100μs 的要求
//!
//! 运行：cargo run --release --example numbers_performance

use std::time::Instant;
use svtal_core::numeral::NumberConverter;

fn main() {
    println!("=== svtal 性能基准测试 ===\n");

    let converter = NumberConverter::default();

    let test_cases: Vec<u64> = vec![7, 157, 12_504, 2_030_700, 123_456_789_123, 999_999_999_999];

    println!("要求：单次往返 < 100μs\n");

    // 批量测试
    println!("【批量往返 (1000次)】\n");
    let iterations = 1000;

    for (i, nr) in test_cases.iter().enumerate() {
        let start = Instant::now();
        for _ in 0..iterations {
            let _result = converter.round_trip(*nr);
        }
        let total_duration = start.elapsed();
        let avg_duration = total_duration / iterations;

        let status = if avg_duration.as_micros() < 100 {
            "✓"
        } else {
            "✗"
        };

        println!("#{} {} {}", i + 1, status, nr);
        println!("   平均: {}μs ({:.6}ms)",
            avg_duration.as_micros(), avg_duration.as_secs_f64() * 1000.0);
        println!("   总计: {:.3}ms", total_duration.as_secs_f64() * 1000.0);
    }

    // 几何采样：n = n * 18 / 17 + 1
    println!("\n【几何采样往返】\n");
    let start = Instant::now();
    let mut nr: u64 = 1;
    let mut count = 0u32;
    let mut failures = 0u32;
    while nr < 1_000_000_000_000 {
        match converter.round_trip(nr) {
            Ok(rt) if rt.is_consistent() => {}
            _ => failures += 1,
        }
        count += 1;
        nr = nr * 18 / 17 + 1;
    }
    let total_duration = start.elapsed();

    println!("样本: {} 个", count);
    println!("失败: {} 个", failures);
    println!("总时间: {:.3}ms", total_duration.as_secs_f64() * 1000.0);
    if count > 0 {
        println!("平均时间: {}μs", (total_duration / count).as_micros());
    }

    let status = if failures == 0 { "✓ 通过" } else { "✗ 未通过" };
    println!("状态: {}", status);

    println!("\n=== 性能测试完成 ===");
}
