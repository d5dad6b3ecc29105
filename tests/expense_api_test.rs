// ==========================================
// ExpenseApi 集成测试
// ==========================================

mod helpers;

use helpers::api_test_helper::*;
use pressia::api::ApiError;
use pressia::domain::expense::{ExpenseFilter, ExpenseInput, EXPENSE_CATEGORIES};
use test_helpers::*;

fn input(description: &str, amount: f64, category: &str, d: (i32, u32, u32)) -> ExpenseInput {
    ExpenseInput {
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date: date(d.0, d.1, d.2),
    }
}

#[test]
fn test_create_expense_金额必须为正() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    for amount in [0.0, -250.0] {
        let err = env
            .expense_api
            .create_expense(&input("Facture", amount, "Eau", (2024, 6, 1)))
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
    assert!(env.expense_api.get_expenses().unwrap().is_empty());
}

#[test]
fn test_create_expense_按日期倒序列出() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.expense_api
        .create_expense(&input("Lessive", 4500.0, "Produits de nettoyage", (2024, 6, 3)))
        .unwrap();
    env.expense_api
        .create_expense(&input("Salaire juin", 60000.0, "Salaire", (2024, 6, 28)))
        .unwrap();
    env.expense_api
        .create_expense(&input("Taxi", 1500.0, "Transport", (2024, 5, 30)))
        .unwrap();

    let expenses = env.expense_api.get_expenses().unwrap();
    let descriptions: Vec<&str> = expenses.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Salaire juin", "Lessive", "Taxi"]);
}

#[test]
fn test_update_and_delete_expense() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let created = env
        .expense_api
        .create_expense(&input("Facture CEET", 12000.0, "Électricité", (2024, 6, 5)))
        .unwrap();

    env.expense_api
        .update_expense(&created.id, &input("Facture CEET mai", 13500.0, "Électricité", (2024, 6, 6)))
        .unwrap();
    let expenses = env.expense_api.get_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount, 13500.0);
    assert_eq!(expenses[0].date, date(2024, 6, 6));

    // 修改时同样校验
    assert!(env
        .expense_api
        .update_expense(&created.id, &input("Facture", 0.0, "Électricité", (2024, 6, 6)))
        .is_err());

    let deleted = env.expense_api.delete_expense(&created.id).unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(env.expense_api.get_expenses().unwrap().is_empty());
}

#[test]
fn test_未知支出_修改删除无变化也算成功() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    assert!(env
        .expense_api
        .update_expense("ghost", &input("X", 10.0, "Autres", (2024, 6, 1)))
        .is_ok());
    assert!(env.expense_api.delete_expense("ghost").is_ok());
    assert!(env.expense_api.get_expenses().unwrap().is_empty());
}

#[test]
fn test_expense_filter_and_summary() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    env.expense_api
        .create_expense(&input("Eau juin", 3000.0, "Eau", (2024, 6, 2)))
        .unwrap();
    env.expense_api
        .create_expense(&input("Eau mai", 2800.0, "Eau", (2024, 5, 2)))
        .unwrap();
    env.expense_api
        .create_expense(&input("Affiches", 5000.0, "Marketing", (2024, 6, 2)))
        .unwrap();

    let water = ExpenseFilter {
        category: Some("Eau".to_string()),
        date: None,
    };
    assert_eq!(env.expense_api.get_filtered_expenses(&water).unwrap().len(), 2);

    let on_day = ExpenseFilter {
        category: None,
        date: Some(date(2024, 6, 2)),
    };
    assert_eq!(env.expense_api.get_filtered_expenses(&on_day).unwrap().len(), 2);

    let summary = env
        .expense_api
        .get_expense_summary_at(&water, date(2024, 6, 15))
        .unwrap();
    assert_eq!(summary.filtered_total, 5800.0);
    assert_eq!(summary.month_total, 8000.0);
    assert_eq!(summary.category_count, 2);

    assert_eq!(env.expense_api.get_expense_categories().len(), EXPENSE_CATEGORIES.len());
}
