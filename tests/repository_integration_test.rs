// ==========================================
// Repository 层集成测试
// ==========================================
// 直接在临时数据库上验证各仓储的读写、排序、历史数据兼容
// ==========================================


use std::sync::{Arc, Mutex};

use pressia::db::open_and_bootstrap;
use pressia::domain::customer::CustomerInput;
use pressia::domain::expense::ExpenseInput;
use pressia::domain::item_type::ItemTypeInput;
use pressia::domain::order::NewOrder;
use pressia::domain::types::OrderStatus;
use pressia::repository::{
    CustomerRepository, ExpenseRepository, ItemTypeRepository, OrderRepository,
};
use rusqlite::{params, Connection};
use test_helpers::*;

fn shared_conn() -> (tempfile::NamedTempFile, Arc<Mutex<Connection>>) {
    let (temp_file, db_path) = create_test_db().expect("无法创建测试数据库");
    let conn = open_and_bootstrap(&db_path).expect("无法打开测试数据库");
    (temp_file, Arc::new(Mutex::new(conn)))
}

#[test]
fn test_order_repo_写入与读取明细快照() {
    let (_tmp, conn) = shared_conn();
    let repo = OrderRepository::from_connection(conn.clone());

    let created = repo
        .insert(&NewOrder {
            customer_name: "Akouvi".to_string(),
            customer_phone: None,
            items: vec![line_item("Pantalon", 400.0, 2), line_item("Veste", 1000.0, 1)],
            total_amount: 1800.0,
            pickup_date: date(2024, 6, 12),
        })
        .unwrap();
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_id(&created.id).unwrap().expect("订单应存在");
    assert_eq!(found.items.len(), 2);
    assert_eq!(found.items[0].name, "Pantalon");
    assert_eq!(found.items[0].quantity, 2);
    assert_eq!(found.total_amount, 1800.0);
    assert_eq!(found.customer_phone, None);

    // items 列的存储格式: price 字段
    let raw: String = conn
        .lock()
        .unwrap()
        .query_row("SELECT items FROM orders WHERE id = ?1", params![created.id], |row| {
            row.get(0)
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["price"], 400.0);

    assert!(repo.find_by_id("inconnu").unwrap().is_none());
}

#[test]
fn test_order_repo_状态更新与最近订单() {
    let (_tmp, conn) = shared_conn();
    {
        let guard = conn.lock().unwrap();
        for i in 1..=7 {
            insert_order_at(
                &guard,
                &format!("o-{}", i),
                100.0 * i as f64,
                "pending",
                "2024-06-20",
                &format!("2024-06-0{} 08:00:00", i),
            )
            .unwrap();
        }
    }
    let repo = OrderRepository::from_connection(conn);

    let recent = repo.find_recent(3).unwrap();
    let ids: Vec<&str> = recent.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o-7", "o-6", "o-5"]);

    assert_eq!(repo.update_status("o-1", OrderStatus::Completed).unwrap(), 1);
    assert_eq!(repo.update_status("missing", OrderStatus::Completed).unwrap(), 0);

    let updated = repo.find_by_id("o-1").unwrap().unwrap();
    assert_eq!(updated.status, OrderStatus::Completed);
    assert!(updated.updated_at > updated.created_at);
}

#[test]
fn test_order_repo_兼容历史空状态() {
    let (_tmp, conn) = shared_conn();
    conn.lock()
        .unwrap()
        .execute(
            "INSERT INTO orders (id, customer_name, items, total_amount, pickup_date, status)
             VALUES ('legacy', 'Ancien Client', '[]', 0, '2023-12-01', NULL)",
            [],
        )
        .unwrap();

    let repo = OrderRepository::from_connection(conn);
    let legacy = repo.find_by_id("legacy").unwrap().unwrap();
    assert_eq!(legacy.status, OrderStatus::Pending);
    assert!(legacy.items.is_empty());
}

#[test]
fn test_expense_repo_crud() {
    let (_tmp, conn) = shared_conn();
    let repo = ExpenseRepository::from_connection(conn);

    let input = ExpenseInput {
        description: "Fer à repasser".to_string(),
        amount: 15000.0,
        category: "Fournitures".to_string(),
        date: date(2024, 6, 8),
    };
    let created = repo.insert(&input).unwrap();
    assert_eq!(repo.find_by_id(&created.id).unwrap().unwrap().amount, 15000.0);

    let changed = ExpenseInput {
        amount: 14000.0,
        ..input
    };
    assert_eq!(repo.update(&created.id, &changed).unwrap(), 1);
    assert_eq!(repo.find_all().unwrap()[0].amount, 14000.0);

    assert_eq!(repo.delete(&created.id).unwrap(), 1);
    assert_eq!(repo.delete(&created.id).unwrap(), 0);
}

#[test]
fn test_item_type_repo_crud() {
    let (_tmp, conn) = shared_conn();
    let repo = ItemTypeRepository::from_connection(conn);
    let seeded = repo.find_all().unwrap().len();

    let created = repo
        .insert(&ItemTypeInput {
            name: "Rideau".to_string(),
            price: 1200.0,
            category: "Linge de maison".to_string(),
        })
        .unwrap();
    assert_eq!(repo.find_all().unwrap().len(), seeded + 1);

    let renamed = ItemTypeInput {
        name: "Rideau double".to_string(),
        price: 1800.0,
        category: "Linge de maison".to_string(),
    };
    assert_eq!(repo.update(&created.id, &renamed).unwrap(), 1);
    let found = repo.find_by_id(&created.id).unwrap().unwrap();
    assert_eq!(found.name, "Rideau double");
    assert_eq!(found.price, 1800.0);

    assert_eq!(repo.delete(&created.id).unwrap(), 1);
    assert_eq!(repo.find_all().unwrap().len(), seeded);
}

#[test]
fn test_customer_repo_find_match() {
    let (_tmp, conn) = shared_conn();
    let repo = CustomerRepository::from_connection(conn);

    repo.insert(&CustomerInput {
        first_name: "Yao".to_string(),
        last_name: "Amegee".to_string(),
        phone: "90112233".to_string(),
    })
    .unwrap();

    // 电话相同
    assert!(repo.find_match("Autre Nom", "90112233").unwrap().is_some());
    // 全名相同，换了新号码
    assert!(repo.find_match("Yao Amegee", "99999999").unwrap().is_some());
    // 全名（空白归一、不区分大小写）
    assert!(repo.find_match("  yao   AMEGEE ", "").unwrap().is_some());
    // 都不相同
    assert!(repo.find_match("Yao", "").unwrap().is_none());
    assert!(repo.find_match("Yao", "99999999").unwrap().is_none());
}
