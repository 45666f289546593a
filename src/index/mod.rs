//! 基金索引模块：数据模型与索引拉取
pub mod model;
pub mod fetcher;

// 导出核心接口
pub use self::model::FundRecord;
pub use self::fetcher::{FetchOutcome, IndexFetcher};
