//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 天天基金网基金代码索引接口
pub const DEFAULT_INDEX_URL: &str = "https://fund.eastmoney.com/js/fundcode_search.js";

/// 压缩数据集在App工程内的相对路径
const DATASET_REL_PATH: &str = "src/main/res/raw/fund_index.json";
/// Kotlin加载器在App工程内的相对路径
const LOADER_REL_PATH: &str = "src/main/java/com/example/jjsj/data/local/FundIndexData.kt";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 基金索引接口URL
    pub index_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 请求User-Agent
    pub user_agent: String,
    // 压缩数据集输出路径
    pub dataset_path: PathBuf,
    // Kotlin加载器输出路径
    pub loader_path: PathBuf,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        let app_dir = PathBuf::from("app");
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            http_timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            dataset_path: app_dir.join(DATASET_REL_PATH),
            loader_path: app_dir.join(LOADER_REL_PATH),
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn index_url(mut self, url: String) -> Self {
        self.config.index_url = url;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// 以App工程根目录推导两个输出路径
    pub fn app_dir(mut self, dir: PathBuf) -> Self {
        self.config.dataset_path = dir.join(DATASET_REL_PATH);
        self.config.loader_path = dir.join(LOADER_REL_PATH);
        self
    }

    pub fn dataset_path(mut self, path: PathBuf) -> Self {
        self.config.dataset_path = path;
        self
    }

    pub fn loader_path(mut self, path: PathBuf) -> Self {
        self.config.loader_path = path;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_app_tree() {
        let config = ConfigManager::get_default();
        assert_eq!(config.index_url, DEFAULT_INDEX_URL);
        assert_eq!(config.http_timeout, 10);
        assert!(config.dataset_path.ends_with("res/raw/fund_index.json"));
        assert!(config.loader_path.ends_with("data/local/FundIndexData.kt"));
    }

    #[test]
    fn test_app_dir_rewrites_both_output_paths() {
        // 测试场景：自定义App根目录后，两个输出路径同时跟随
        let config = ConfigManager::custom()
            .app_dir(PathBuf::from("/tmp/demo"))
            .build();
        assert_eq!(
            config.dataset_path,
            PathBuf::from("/tmp/demo/src/main/res/raw/fund_index.json")
        );
        assert_eq!(
            config.loader_path,
            PathBuf::from("/tmp/demo/src/main/java/com/example/jjsj/data/local/FundIndexData.kt")
        );
    }
}
