// ==========================================
// Pressia 洗衣店管理系统 - 客户通讯录
// ==========================================
// 对齐: customers 表
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// 不区分大小写的子串匹配（名 / 姓 / 电话）
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.phone.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl CustomerInput {
    /// 从下单时填写的客户全名拆分: 第一个词为名，其余为姓
    pub fn from_order_contact(full_name: &str, phone: Option<&str>) -> Self {
        let mut parts = full_name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");
        Self {
            first_name,
            last_name,
            phone: phone.map(str::trim).unwrap_or_default().to_string(),
        }
    }
}
