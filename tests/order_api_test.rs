// ==========================================
// OrderApi 集成测试
// ==========================================
// 测试范围:
// 1. 下单: 校验、总额重算、客户自动登记
// 2. 状态变更: 宽松/严格模式、未知订单
// 3. 订单跟踪视图与建议取件日期
// ==========================================

mod helpers;

use chrono::Duration;
use helpers::api_test_helper::*;
use pressia::api::validator::parse_payload;
use pressia::api::{ApiError, ApiResponse};
use pressia::config::config_keys;
use pressia::domain::item_type::ItemTypeInput;
use pressia::domain::order::CreateOrderRequest;
use pressia::domain::types::{DueWindow, OrderPriority, OrderStatus};
use pressia::engine::OrderFilter;
use test_helpers::*;

// ==========================================
// 下单测试
// ==========================================

#[test]
fn test_create_order_价目表条目下单() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let item = env
        .item_type_api
        .create_item_type(&ItemTypeInput {
            name: "Chemise Homme".to_string(),
            price: 500.0,
            category: "Vêtements Homme".to_string(),
        })
        .expect("创建价目表条目失败");

    let before = env.dashboard_api.get_dashboard_stats().expect("统计失败");

    let order = env
        .order_api
        .create_order(order_request(
            "Kossi Agbo",
            Some("90112233"),
            vec![item.to_line_item(2)],
        ))
        .expect("下单失败");

    assert_eq!(order.total_amount, 1000.0);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items[0].id.as_deref(), Some(item.id.as_str()));

    let after = env.dashboard_api.get_dashboard_stats().expect("统计失败");
    assert_eq!(after.pending_orders, before.pending_orders + 1);

    let orders = env.order_api.get_orders().expect("查询失败");
    let stored = orders.iter().find(|o| o.id == order.id).expect("订单未落库");
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.total_amount, 1000.0);
    assert_eq!(stored.items, order.items);
}

#[test]
fn test_create_order_忽略前端传入的总额() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let raw = r#"{
        "customerName": "Ama",
        "items": [
            {"name": "Robe", "category": "Vêtements Femme", "price": 800, "quantity": 1},
            {"name": "Jupe", "category": "Vêtements Femme", "price": 500, "quantity": 3}
        ],
        "totalAmount": 1,
        "pickupDate": "2024-06-21"
    }"#;
    let req = serde_json::from_str(raw).expect("反序列化失败");

    let order = env.order_api.create_order(req).expect("下单失败");
    assert_eq!(order.total_amount, 2300.0);
}

#[test]
fn test_create_order_校验失败不落库() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let cases = vec![
        order_request("  ", None, vec![line_item("Costume", 1200.0, 1)]),
        order_request("Afi", None, vec![]),
        order_request("Afi", None, vec![line_item("Costume", 1200.0, 0)]),
    ];
    for req in cases {
        let err = env.order_api.create_order(req).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)), "意外错误: {:?}", err);
    }

    assert!(env.order_api.get_orders().unwrap().is_empty());
    assert!(env.customer_api.get_customers().unwrap().is_empty());
}

#[test]
fn test_create_order_畸形表单返回校验失败信封() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let malformed = [
        serde_json::json!({
            "customerName": "Koffi",
            "items": [{"name": "Robe", "price": 800, "quantity": -1}],
            "pickupDate": "2024-06-20"
        }),
        serde_json::json!({
            "customerName": "Koffi",
            "items": [{"name": "Robe", "price": 800, "quantity": 1}],
            "pickupDate": ""
        }),
        serde_json::json!({
            "customerName": "Koffi",
            "items": [{"name": "Robe", "price": "huit cents", "quantity": 1}],
            "pickupDate": "2024-06-20"
        }),
    ];
    for payload in malformed {
        let result = parse_payload::<CreateOrderRequest>(payload)
            .and_then(|req| env.order_api.create_order(req));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));

        let envelope: ApiResponse<_> = result.into();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["code"], "INVALID_INPUT");
    }
    assert!(env.order_api.get_orders().unwrap().is_empty());

    // 合法表单（snake_case 同样接受）
    let ok = parse_payload::<CreateOrderRequest>(serde_json::json!({
        "customer_name": "Koffi",
        "items": [{"name": "Robe", "category": "Vêtements Femme", "price": 800, "quantity": 2}],
        "pickup_date": "2024-06-20",
        "totalAmount": 1
    }))
    .and_then(|req| env.order_api.create_order(req))
    .unwrap();
    assert_eq!(ok.total_amount, 1600.0);
}

#[test]
fn test_create_order_自动登记客户且不重复() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    env.order_api
        .create_order(order_request("Yawa Mensah", Some("90001122"), vec![line_item("Jeans", 700.0, 1)]))
        .unwrap();
    // 同一电话再次下单（名字写法不同）
    env.order_api
        .create_order(order_request("yawa mensah", Some("90001122"), vec![line_item("Jeans", 700.0, 1)]))
        .unwrap();
    // 无电话，按全名匹配
    env.order_api
        .create_order(order_request("Edem", None, vec![line_item("T-shirt", 300.0, 2)]))
        .unwrap();
    env.order_api
        .create_order(order_request("EDEM", None, vec![line_item("T-shirt", 300.0, 2)]))
        .unwrap();

    let customers = env.customer_api.get_customers().unwrap();
    assert_eq!(customers.len(), 2);

    let yawa = customers.iter().find(|c| c.phone == "90001122").expect("客户未登记");
    assert_eq!(yawa.first_name, "Yawa");
    assert_eq!(yawa.last_name, "Mensah");
}

#[test]
fn test_create_order_老客户换号码不重复登记() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.customer_api
        .create_customer(&pressia::domain::customer::CustomerInput {
            first_name: "Ama".to_string(),
            last_name: "Mensah".to_string(),
            phone: "90000000".to_string(),
        })
        .unwrap();

    env.order_api
        .create_order(order_request("Ama Mensah", Some("91111111"), vec![line_item("Robe", 800.0, 1)]))
        .unwrap();

    let customers = env.customer_api.get_customers().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].phone, "90000000");
}

#[test]
fn test_create_order_客户登记失败不影响下单() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.with_conn(|conn| conn.execute_batch("DROP TABLE customers;"))
        .unwrap();

    let order = env
        .order_api
        .create_order(order_request("Kodjo", Some("93334455"), vec![line_item("Costume", 1200.0, 1)]))
        .expect("客户表损坏时下单仍应成功");

    let orders = env.order_api.get_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].total_amount, 1200.0);
    assert!(env.customer_api.get_customers().is_err());
}

// ==========================================
// 状态变更测试
// ==========================================

#[test]
fn test_update_order_status_完整流转() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let order = env
        .order_api
        .create_order(order_request("Kodjo", None, vec![line_item("Nappe", 600.0, 1)]))
        .unwrap();

    let completed = env
        .order_api
        .update_order_status(&order.id, "completed")
        .expect("状态更新失败");
    assert_eq!(completed.status, OrderStatus::Completed);
    assert!(completed.updated_at >= order.updated_at);

    let picked = env
        .order_api
        .update_order_status(&order.id, "picked_up")
        .expect("状态更新失败");
    assert_eq!(picked.status, OrderStatus::PickedUp);
    assert!(picked.updated_at >= completed.updated_at);

    let stored = env.order_api.get_order(&order.id).unwrap();
    assert_eq!(stored.status, OrderStatus::PickedUp);
}

#[test]
fn test_update_order_status_默认宽松模式() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let order = env
        .order_api
        .create_order(order_request("Kodjo", None, vec![line_item("Nappe", 600.0, 1)]))
        .unwrap();

    env.order_api.update_order_status(&order.id, "picked_up").unwrap();
    let back = env.order_api.update_order_status(&order.id, "pending").unwrap();
    assert_eq!(back.status, OrderStatus::Pending);
}

#[test]
fn test_update_order_status_严格模式拒绝非法流转() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.settings_api
        .set_setting(config_keys::STRICT_STATUS_TRANSITIONS, "true")
        .unwrap();

    let order = env
        .order_api
        .create_order(order_request("Kodjo", None, vec![line_item("Nappe", 600.0, 1)]))
        .unwrap();

    let err = env
        .order_api
        .update_order_status(&order.id, "picked_up")
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidStateTransition { .. }));
    assert_eq!(
        env.order_api.get_order(&order.id).unwrap().status,
        OrderStatus::Pending
    );

    env.order_api.update_order_status(&order.id, "completed").unwrap();
    env.order_api.update_order_status(&order.id, "picked_up").unwrap();
}

#[test]
fn test_update_order_status_未知订单与未知状态() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let err = env
        .order_api
        .update_order_status("does-not-exist", "completed")
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let order = env
        .order_api
        .create_order(order_request("Kodjo", None, vec![line_item("Nappe", 600.0, 1)]))
        .unwrap();
    let err = env
        .order_api
        .update_order_status(&order.id, "archived")
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

// ==========================================
// 订单跟踪
// ==========================================

#[test]
fn test_get_tracked_orders_优先级排序与过滤() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let today = date(2024, 6, 10);

    let mut late = order_request("Late", None, vec![line_item("Robe", 800.0, 1)]);
    late.pickup_date = today - Duration::days(1);
    let mut soon = order_request("Soon", None, vec![line_item("Robe", 800.0, 1)]);
    soon.pickup_date = today + Duration::days(2);
    let mut far = order_request("Far", None, vec![line_item("Robe", 800.0, 1)]);
    far.pickup_date = today + Duration::days(20);

    let late = env.order_api.create_order(late).unwrap();
    env.order_api.create_order(far).unwrap();
    env.order_api.create_order(soon).unwrap();

    let tracked = env
        .order_api
        .get_tracked_orders_at(&OrderFilter::default(), today)
        .unwrap();
    let priorities: Vec<OrderPriority> = tracked.iter().map(|t| t.priority).collect();
    assert_eq!(
        priorities,
        vec![OrderPriority::Overdue, OrderPriority::Urgent, OrderPriority::Normal]
    );

    let overdue_only = OrderFilter {
        due: Some(DueWindow::Overdue),
        ..Default::default()
    };
    let tracked = env.order_api.get_tracked_orders_at(&overdue_only, today).unwrap();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].order.id, late.id);

    // 取件后不再逾期
    env.order_api.update_order_status(&late.id, "picked_up").unwrap();
    let summary = env.order_api.get_tracking_summary_at(today).unwrap();
    assert_eq!(summary.overdue, 0);
    assert_eq!(summary.pending, 2);
    assert_eq!(summary.due_this_week, 1);
}

#[test]
fn test_suggested_pickup_date_可配置() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let today = date(2024, 6, 10);

    assert_eq!(
        env.order_api.suggested_pickup_date_at(today).unwrap(),
        date(2024, 6, 13)
    );

    env.settings_api
        .set_setting(config_keys::DEFAULT_PICKUP_DAYS, "5")
        .unwrap();
    assert_eq!(
        env.order_api.suggested_pickup_date_at(today).unwrap(),
        date(2024, 6, 15)
    );
}

#[test]
fn test_get_recent_orders_默认五条() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    for i in 0..7 {
        env.with_conn(|conn| {
            insert_order_at(
                conn,
                &format!("o-{}", i),
                100.0,
                "pending",
                "2024-06-20",
                &format!("2024-06-0{} 10:00:00", i + 1),
            )
        })
        .unwrap();
    }

    let recent = env.order_api.get_recent_orders(None).unwrap();
    let ids: Vec<&str> = recent.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o-6", "o-5", "o-4", "o-3", "o-2"]);

    assert_eq!(env.order_api.get_recent_orders(Some(2)).unwrap().len(), 2);
}
