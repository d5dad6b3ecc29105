// ==========================================
// Pressia 洗衣店管理系统 - 行编解码工具
// ==========================================
// 职责: 时间戳/日期/状态/明细 JSON 在 TEXT 列与领域类型之间的转换
// 存储格式:
// - 时间戳: "YYYY-MM-DD HH:MM:SS.sss"，UTC（与 SQLite CURRENT_TIMESTAMP 同一时区）
//           读出时换算为本地时间，统计按本地日历日归属
// - 日期:   "YYYY-MM-DD"
// - 明细:   JSON 数组
// ==========================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

use crate::domain::order::LineItem;
use crate::domain::types::OrderStatus;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 当前时间（存储格式）
pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// 任意时区的时间 → 存储格式（UTC）
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    ts.naive_utc().format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// 解析时间戳，返回本地时间
///
/// 兼容: 本系统格式、SQLite CURRENT_TIMESTAMP、ISO-8601（含/不含时区）、纯日期
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp_in(raw, &Local)
}

/// 解析时间戳并换算到指定时区
///
/// 不带时区的时间戳一律按 UTC 解释；纯日期视为该时区当天零点
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&ts).with_timezone(tz).naive_local());
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(tz).naive_local());
    }
    parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 解析日期（容忍带时间部分的字符串，只取前 10 位）
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

pub fn encode_items(items: &[LineItem]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, message.into())
}

// ==========================================
// 列读取辅助（供 query_map 闭包使用）
// ==========================================

pub fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw).ok_or_else(|| conversion_error(idx, format!("时间戳格式错误: {}", raw)))
}

pub fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    parse_date(&raw).ok_or_else(|| conversion_error(idx, format!("日期格式错误: {}", raw)))
}

pub fn status_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<OrderStatus> {
    // 历史数据 status 可能为 NULL，按默认值 pending 处理
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(OrderStatus::Pending),
        Some(s) => OrderStatus::from_str(&s)
            .ok_or_else(|| conversion_error(idx, format!("未知订单状态: {}", s))),
    }
}

pub fn items_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<LineItem>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(idx, format!("订单明细 JSON 无效: {}", e)))
}
