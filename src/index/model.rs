//! 基金索引数据模型定义
//! 仅存储基金基础信息，无业务逻辑，支持序列化/反序列化

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 基金基础信息（索引库的一行）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRecord {
    /// 基金代码（定宽数字串，上游保证唯一）
    pub code: String,
    /// 基金名称
    pub name: String,
    /// 基金类型（上游自由文本分类，不做本地枚举校验）
    pub category: String,
    /// 拼音检索键（大写，上游生成，原样透传）
    pub pinyin: String,
}

impl FundRecord {
    /// 从上游原始行投影，取固定下标 {0, 2, 3, 4}
    /// 字段数不足5或对应位置不是字符串时视为畸形行，返回None
    pub fn from_row(row: &[Value]) -> Option<Self> {
        if row.len() < 5 {
            return None;
        }
        Some(Self {
            code: row[0].as_str()?.to_string(),
            name: row[2].as_str()?.to_string(),
            category: row[3].as_str()?.to_string(),
            pinyin: row[4].as_str()?.to_string(),
        })
    }

    /// 压缩数据集使用的定位4元组形式（丢弃字段名以减小体积）
    pub fn to_tuple(&self) -> [&str; 4] {
        [&self.code, &self.name, &self.category, &self.pinyin]
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| json!(v)).collect()
    }

    #[test]
    fn test_from_row_projects_fixed_positions() {
        // 测试场景：标准5字段行，下标1（简拼）被跳过
        let raw = row(&["000001", "HXCZHH", "华夏成长混合", "混合型-灵活", "HUAXIACHENGZHANGHUNHE"]);
        let record = FundRecord::from_row(&raw).unwrap();

        assert_eq!(record.code, "000001");
        assert_eq!(record.name, "华夏成长混合");
        assert_eq!(record.category, "混合型-灵活");
        assert_eq!(record.pinyin, "HUAXIACHENGZHANGHUNHE");
    }

    #[test]
    fn test_from_row_rejects_short_row() {
        // 测试场景：字段数不足5，应返回None
        let raw = row(&["000002", "x"]);
        assert_eq!(FundRecord::from_row(&raw), None);
    }

    #[test]
    fn test_from_row_rejects_non_string_cell() {
        // 测试场景：固定下标处出现非字符串值，应视为畸形行
        let raw = vec![
            json!("000003"),
            json!("JP"),
            json!(42),
            json!("股票型"),
            json!("PY"),
        ];
        assert_eq!(FundRecord::from_row(&raw), None);
    }

    #[test]
    fn test_to_tuple_keeps_field_order() {
        let record = FundRecord {
            code: "000001".to_string(),
            name: "Fund A".to_string(),
            category: "mixed-flexible".to_string(),
            pinyin: "HUAXIACHENGZHANGHUNHE".to_string(),
        };
        assert_eq!(
            record.to_tuple(),
            ["000001", "Fund A", "mixed-flexible", "HUAXIACHENGZHANGHUNHE"]
        );
    }
}
