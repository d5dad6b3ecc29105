// ==========================================
// Pressia 洗衣店管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 提供数据访问接口,屏蔽数据库细节
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod customer_repo;
pub mod error;
pub mod expense_repo;
pub mod item_type_repo;
pub mod order_repo;
pub mod row_codec;

pub use customer_repo::CustomerRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use expense_repo::ExpenseRepository;
pub use item_type_repo::ItemTypeRepository;
pub use order_repo::OrderRepository;
