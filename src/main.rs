//! CLI入口：拉取 → 导出数据集 → 生成加载器 → 输出统计
//! 不带参数运行即复现固定行为，参数仅用于覆盖默认值

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fundindexer::{
    category_breakdown, ConfigManager, DatasetWriter, GlobalConfig, IndexFetcher, LoaderGenerator,
};

/// 基金索引库生成工具
#[derive(Debug, Parser)]
#[command(name = "fundindexer", version, about = "基金索引库生成工具")]
struct Cli {
    /// 下游App工程根目录（数据集与加载器写入其资源/源码树）
    #[arg(long, default_value = "app")]
    app_dir: PathBuf,

    /// HTTP超时（单位：秒）
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConfigManager::custom()
        .app_dir(cli.app_dir)
        .http_timeout(cli.timeout)
        .verbose(cli.verbose)
        .build();

    run(&config).await
}

/// 主流水线：任一阶段失败都只打印诊断并正常退出，不写出不完整产物
async fn run(config: &GlobalConfig) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("基金索引库生成工具");
    println!("{}", "=".repeat(60));

    println!("正在获取基金列表: {}", config.index_url);

    // 拉取失败与拉取为空同样处理：不写任何文件，退出码0
    let outcome = match IndexFetcher::fetch(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("获取基金列表失败：{}", e);
            println!("❌ 获取基金列表失败: {}", e);
            println!("\n❌ 未获取到基金数据，退出程序");
            return Ok(());
        }
    };

    if outcome.records.is_empty() {
        println!("\n❌ 未获取到基金数据，退出程序");
        return Ok(());
    }

    let records = &outcome.records;
    println!("✅ 成功获取 {} 只基金", records.len());
    if outcome.skipped_rows > 0 {
        println!("   （跳过 {} 条畸形行）", outcome.skipped_rows);
    }

    // 1. 生成JSON资源文件
    println!("\n正在生成JSON文件: {}", config.dataset_path.display());
    let size = match DatasetWriter::write(records, &config.dataset_path) {
        Ok(size) => size,
        Err(e) => {
            error!("数据集写入失败：{}", e);
            println!("❌ JSON文件生成失败: {}", e);
            return Ok(());
        }
    };
    println!("✅ JSON文件生成成功!");
    println!("   文件路径: {}", config.dataset_path.display());
    println!("   基金总数: {}", records.len());
    println!("   文件大小: {:.2} MB", size as f64 / (1024.0 * 1024.0));

    // 2. 生成Kotlin加载器
    println!("\n正在生成Kotlin加载器: {}", config.loader_path.display());
    if let Err(e) = LoaderGenerator::generate(&config.loader_path, records.len()) {
        error!("Kotlin加载器生成失败：{}", e);
        println!("❌ Kotlin加载器生成失败: {}", e);
        return Ok(());
    }
    println!("✅ Kotlin加载器生成成功!");
    println!("   文件路径: {}", config.loader_path.display());

    // 统计信息
    println!("\n{}", "=".repeat(60));
    println!("统计信息:");
    println!("  - 基金总数: {}", records.len());

    let breakdown = category_breakdown(records);
    println!("  - 基金类型数: {}", breakdown.len());
    for (category, count) in breakdown.iter().take(10) {
        println!("    • {}: {}", category, count);
    }

    println!("{}", "=".repeat(60));
    println!("✅ 全部完成!");
    Ok(())
}

/// 初始化日志：默认info，--verbose提升到debug，RUST_LOG可覆盖
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
