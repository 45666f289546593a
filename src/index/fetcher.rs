//! 基金索引拉取器
//! 负责从天天基金网拉取全量基金代码表，提取内嵌数组并投影为FundRecord

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::model::FundRecord;
use crate::config::GlobalConfig;
use crate::error::{FundIndexerError, FundResult};

/// 定位 `var r = [...];` 数组字面量（(?s)允许.跨行匹配）
static ARRAY_LITERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)var r = (\[.*\]);").unwrap());

/// 拉取结果：投影后的记录序列与被跳过的畸形行数
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// 投影成功的记录，保持上游顺序
    pub records: Vec<FundRecord>,
    /// 字段数不足或类型异常而被跳过的行数
    pub skipped_rows: usize,
}

/// 基金索引拉取器
/// 设计：无状态工具类，单次GET → 正则提取 → JSON解析 → 定位投影
pub struct IndexFetcher;

impl IndexFetcher {
    /// 拉取并解析基金索引
    pub async fn fetch(config: &GlobalConfig) -> FundResult<FetchOutcome> {
        // 1. 校验配置的接口URL
        let url = Url::parse(&config.index_url)?;

        // 2. 构建带超时的客户端并发起GET请求
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout))
            .build()?;

        debug!("开始拉取基金索引，URL：{}", url);
        let response = client
            .get(url.clone())
            .header("User-Agent", config.user_agent.as_str())
            .header("Accept-Encoding", "gzip, deflate")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FundIndexerError::FetchError(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        // 3. 响应体按UTF-8文本读取
        let body = response.text().await?;

        // 4. 提取数组字面量并投影为记录序列
        let outcome = Self::parse_body(&body)?;
        debug!("成功获取{}条基金记录", outcome.records.len());
        Ok(outcome)
    }

    /// 从响应体中提取内嵌数组并投影
    /// 畸形行（字段数不足5或固定下标处非字符串）被跳过并计数，不报错
    pub fn parse_body(body: &str) -> FundResult<FetchOutcome> {
        let literal = Self::extract_array_literal(body)?;

        // 内嵌字面量本身是合法的JSON数组
        let rows: Vec<Value> = serde_json::from_str(literal)?;

        let mut outcome = FetchOutcome::default();
        for row in &rows {
            match row.as_array().and_then(|cells| FundRecord::from_row(cells)) {
                Some(record) => outcome.records.push(record),
                None => outcome.skipped_rows += 1,
            }
        }

        if outcome.skipped_rows > 0 {
            warn!("跳过{}条畸形行（字段数不足或类型异常），疑似上游schema变更", outcome.skipped_rows);
        }

        Ok(outcome)
    }

    /// 定位响应体中 `var r = [...];` 的数组部分
    fn extract_array_literal(body: &str) -> FundResult<&str> {
        ARRAY_LITERAL_REGEX
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                FundIndexerError::ParseError(
                    "响应体中未找到 var r = [...] 数组字面量".to_string(),
                )
            })
    }
}
