//! 压缩数据集导出器
//! 以定位数组形式序列化基金索引，写入下游App的raw资源目录

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FundResult;
use crate::index::FundRecord;

/// 压缩数据集写入器
pub struct DatasetWriter;

impl DatasetWriter {
    /// 将记录序列以紧凑JSON写入目标路径，返回写入的字节数
    /// 压缩数据：使用数组而不是对象，减小体积
    pub fn write(records: &[FundRecord], path: &Path) -> FundResult<u64> {
        let compact: Vec<[&str; 4]> = records.iter().map(FundRecord::to_tuple).collect();
        let json = serde_json::to_string(&compact)?;

        write_atomic(path, &json)?;

        let size = json.len() as u64;
        debug!("数据集已写入 {}，共{}字节", path.display(), size);
        Ok(size)
    }
}

/// 先写同目录临时文件再重命名，避免目标路径出现半写状态
/// 父目录不存在时自动创建
pub(crate) fn write_atomic(path: &Path, contents: &str) -> FundResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
