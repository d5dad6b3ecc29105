// ==========================================
// Pressia 洗衣店管理系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + SQLite
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pressia::app::get_default_db_path;

#[cfg(feature = "tauri-app")]
fn main() {
    use pressia::app::tauri_commands::*;
    use pressia::app::AppState;

    pressia::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - Gestion de Blanchisserie", pressia::APP_NAME);
    tracing::info!("系统版本: {}", pressia::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path.display());

    let app_state = AppState::new(db_path).expect("无法初始化AppState");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 订单
            // ==========================================
            get_orders,
            get_recent_orders,
            create_order,
            update_order_status,
            get_tracked_orders,
            get_tracking_summary,
            get_suggested_pickup_date,

            // ==========================================
            // 支出
            // ==========================================
            get_expenses,
            create_expense,
            update_expense,
            delete_expense,
            get_expense_summary,
            get_expense_categories,

            // ==========================================
            // 价目表
            // ==========================================
            get_item_types,
            create_item_type,
            update_item_type,
            delete_item_type,

            // ==========================================
            // 客户通讯录
            // ==========================================
            get_customers,
            search_customers,
            create_customer,
            update_customer,
            delete_customer,

            // ==========================================
            // 驾驶舱 / 备份 / 配置
            // ==========================================
            get_dashboard_stats,
            export_database,
            import_database,
            get_settings,
            get_setting,
            set_setting,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    pressia::logging::init();

    println!("==================================================");
    println!("{} - Gestion de Blanchisserie", pressia::APP_NAME);
    println!("系统版本: {}", pressia::VERSION);
    println!("==================================================");
    println!();
    println!("数据库路径: {}", get_default_db_path().display());
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
}
