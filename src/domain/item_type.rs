// ==========================================
// Pressia 洗衣店管理系统 - 价目表条目
// ==========================================
// 对齐: item_types 表
// 下单时按值拷贝进订单明细，不做实时关联
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::order::LineItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl ItemType {
    /// 按值拷贝为订单明细行
    pub fn to_line_item(&self, quantity: u32) -> LineItem {
        LineItem::new(
            Some(self.id.clone()),
            self.name.clone(),
            self.category.clone(),
            self.price,
            quantity,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTypeInput {
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// 首次建库时写入的默认价目表 (名称, 单价, 分类)
pub const DEFAULT_ITEM_TYPES: [(&str, f64, &str); 11] = [
    ("Chemise Homme", 500.0, "Vêtements Homme"),
    ("Pantalon Homme", 600.0, "Vêtements Homme"),
    ("Costume", 1200.0, "Vêtements Homme"),
    ("Robe", 800.0, "Vêtements Femme"),
    ("Jupe", 500.0, "Vêtements Femme"),
    ("Blouse", 400.0, "Vêtements Femme"),
    ("T-shirt", 300.0, "Vêtements Général"),
    ("Jeans", 700.0, "Vêtements Général"),
    ("Drap de lit", 800.0, "Linge de maison"),
    ("Serviette", 400.0, "Linge de maison"),
    ("Nappe", 600.0, "Linge de maison"),
];
