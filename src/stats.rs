//! 分类统计
//! 为运维输出生成基金类型的频次分布

use std::collections::HashMap;

use crate::index::FundRecord;

/// 按基金类型统计频次，数量降序排列
/// 同数量时按类型名升序，保证输出稳定
pub fn category_breakdown(records: &[FundRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }

    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, category: &str) -> FundRecord {
        FundRecord {
            code: code.to_string(),
            name: format!("基金{}", code),
            category: category.to_string(),
            pinyin: format!("JIJIN{}", code),
        }
    }

    #[test]
    fn test_breakdown_sorts_by_count_descending() {
        // 测试场景：频次降序
        let records = vec![
            record("1", "混合型"),
            record("2", "股票型"),
            record("3", "混合型"),
            record("4", "混合型"),
            record("5", "股票型"),
            record("6", "债券型"),
        ];
        let breakdown = category_breakdown(&records);

        assert_eq!(
            breakdown,
            vec![
                ("混合型".to_string(), 3),
                ("股票型".to_string(), 2),
                ("债券型".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_breakdown_breaks_ties_by_name() {
        // 测试场景：同频次时按类型名升序，保证重复运行输出一致
        let records = vec![record("1", "b类"), record("2", "a类")];
        let breakdown = category_breakdown(&records);

        assert_eq!(
            breakdown,
            vec![("a类".to_string(), 1), ("b类".to_string(), 1)]
        );
    }

    #[test]
    fn test_breakdown_empty_input() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
