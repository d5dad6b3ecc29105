// ==========================================
// Pressia 洗衣店管理系统 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// 每个命令都返回 ApiResponse 信封，不向前端抛错
// ==========================================

#![cfg(feature = "tauri-app")]

mod backup;
mod common;
mod customers;
mod dashboard;
mod expenses;
mod item_types;
mod orders;
mod settings;

pub use backup::*;
pub use customers::*;
pub use dashboard::*;
pub use expenses::*;
pub use item_types::*;
pub use orders::*;
pub use settings::*;
