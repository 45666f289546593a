//! fundindexer - 基金索引库生成工具
//! 从天天基金网拉取全量公募基金索引，导出压缩数据集与Kotlin加载器

// 导出全局错误类型
pub use self::error::{FundIndexerError, FundResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出索引模块核心接口
pub use self::index::{FundRecord, FetchOutcome, IndexFetcher};

// 导出导出器模块核心接口
pub use self::export::{DatasetWriter, LoaderGenerator};

// 导出统计接口
pub use self::stats::category_breakdown;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod index;
pub mod export;
pub mod stats;
