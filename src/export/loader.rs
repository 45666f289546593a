//! Kotlin加载器生成器
//! 生成下游App随包编译的FundIndexData.kt，模板仅以记录总数参数化
//! 模板结构是下游消费方的既定契约，改动需与App侧同步

use std::path::Path;

use tracing::debug;

use super::dataset::write_atomic;
use crate::error::FundResult;

/// 记录总数占位符
const TOTAL_COUNT_PLACEHOLDER: &str = "__TOTAL_COUNT__";

/// Kotlin加载器模板
/// 记录数据不内嵌于此文件，App运行时从raw资源加载压缩数据集
const LOADER_TEMPLATE: &str = r#"package com.example.jjsj.data.local

import android.content.Context
import kotlinx.coroutines.Dispatchers
import kotlinx.coroutines.withContext
import org.json.JSONArray

/**
 * 基金索引数据加载器
 * 从资源文件加载全国所有公募基金的基本信息
 * 总数: __TOTAL_COUNT__ 只
 */
object FundIndexData {

    data class FundBasicInfo(
        val code: String,
        val name: String,
        val type: String,
        val pinyin: String
    )

    private var cachedFunds: List<FundBasicInfo>? = null

    /**
     * 加载基金索引数据
     * 首次调用时从资源文件加载，后续使用缓存
     */
    suspend fun loadFunds(context: Context): List<FundBasicInfo> = withContext(Dispatchers.IO) {
        // 如果已缓存，直接返回
        cachedFunds?.let { return@withContext it }

        try {
            // 从raw资源读取JSON文件
            val inputStream = context.resources.openRawResource(R.raw.fund_index)
            val jsonString = inputStream.bufferedReader().use { it.readText() }

            // 解析JSON数组
            val jsonArray = JSONArray(jsonString)
            val funds = mutableListOf<FundBasicInfo>()

            for (i in 0 until jsonArray.length()) {
                val item = jsonArray.getJSONArray(i)
                funds.add(
                    FundBasicInfo(
                        code = item.getString(0),
                        name = item.getString(1),
                        type = item.getString(2),
                        pinyin = item.getString(3)
                    )
                )
            }

            cachedFunds = funds
            funds
        } catch (e: Exception) {
            e.printStackTrace()
            emptyList()
        }
    }

    /**
     * 搜索基金
     * @param context Android上下文
     * @param keyword 搜索关键词（支持代码、名称、拼音）
     * @return 匹配的基金列表
     */
    suspend fun search(context: Context, keyword: String): List<FundBasicInfo> {
        if (keyword.isBlank()) return emptyList()

        val allFunds = loadFunds(context)
        val lowerKeyword = keyword.lowercase()

        return allFunds.filter { fund ->
            fund.code.contains(lowerKeyword) ||
            fund.name.lowercase().contains(lowerKeyword) ||
            fund.pinyin.lowercase().contains(lowerKeyword)
        }.take(50) // 限制返回数量
    }
}
"#;

/// Kotlin加载器生成器
pub struct LoaderGenerator;

impl LoaderGenerator {
    /// 以记录总数替换模板占位符并写入目标路径
    pub fn generate(path: &Path, total_count: usize) -> FundResult<()> {
        let source = LOADER_TEMPLATE.replace(TOTAL_COUNT_PLACEHOLDER, &total_count.to_string());
        write_atomic(path, &source)?;
        debug!("Kotlin加载器已写入 {}", path.display());
        Ok(())
    }
}
