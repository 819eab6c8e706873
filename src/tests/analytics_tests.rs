use bigdecimal::BigDecimal;

use crate::{
	analytics::summarize,
	models::TransactionType,
	tests::fixtures::TestFixtures,
};

#[test]
fn test_empty_set_yields_all_zero_percentages() {
	let summary = summarize(&[]);

	assert_eq!(summary.total_income, BigDecimal::from(0));
	assert_eq!(summary.total_expense, BigDecimal::from(0));
	assert_eq!(summary.net_balance, BigDecimal::from(0));
	assert_eq!(summary.count_income_pct, 0);
	assert_eq!(summary.count_expense_pct, 0);
	assert_eq!(summary.flow_in_pct, 0);
	assert_eq!(summary.flow_out_pct, 0);
	assert!(summary.income_by_category.is_empty());
	assert!(summary.expense_by_category.is_empty());
}

#[test]
fn test_net_balance_and_flow_shares() {
	let transactions = vec![
		TestFixtures::transaction(TransactionType::Income, 500, "salary"),
		TestFixtures::transaction(TransactionType::Expense, 200, "food"),
	];

	let summary = summarize(&transactions);
	assert_eq!(summary.net_balance, BigDecimal::from(300));
	assert_eq!(summary.flow_in_pct, 71); // round(500 / 700 * 100)
	assert_eq!(summary.flow_out_pct, 29);
}

#[test]
fn test_count_shares() {
	let transactions = vec![
		TestFixtures::transaction(TransactionType::Income, 500, "salary"),
		TestFixtures::transaction(TransactionType::Expense, 200, "food"),
		TestFixtures::transaction(TransactionType::Expense, 50, "fuel"),
		TestFixtures::transaction(TransactionType::Expense, 80, "food"),
	];

	let summary = summarize(&transactions);
	assert_eq!(summary.count_income_pct, 25);
	assert_eq!(summary.count_expense_pct, 75);
}

#[test]
fn test_category_breakdown_sums_and_shares() {
	let transactions = vec![
		TestFixtures::transaction(TransactionType::Expense, 200, "food"),
		TestFixtures::transaction(TransactionType::Expense, 80, "food"),
		TestFixtures::transaction(TransactionType::Expense, 120, "fuel"),
		TestFixtures::transaction(TransactionType::Income, 1000, "salary"),
	];

	let summary = summarize(&transactions);
	assert_eq!(summary.total_expense, BigDecimal::from(400));

	let food = summary
		.expense_by_category
		.iter()
		.find(|row| row.category == "food")
		.expect("food row");
	assert_eq!(food.amount, BigDecimal::from(280));
	assert_eq!(food.pct, 70);

	let fuel = summary
		.expense_by_category
		.iter()
		.find(|row| row.category == "fuel")
		.expect("fuel row");
	assert_eq!(fuel.amount, BigDecimal::from(120));
	assert_eq!(fuel.pct, 30);

	assert_eq!(summary.income_by_category.len(), 1);
	assert_eq!(summary.income_by_category[0].pct, 100);
}

#[test]
fn test_zero_sum_category_rows_are_omitted() {
	let transactions = vec![
		TestFixtures::transaction(TransactionType::Expense, 0, "subscriptions"),
		TestFixtures::transaction(TransactionType::Expense, 150, "rent"),
	];

	let summary = summarize(&transactions);
	assert_eq!(summary.expense_by_category.len(), 1);
	assert_eq!(summary.expense_by_category[0].category, "rent");
}

#[test]
fn test_single_sided_flow() {
	let transactions =
		vec![TestFixtures::transaction(TransactionType::Income, 900, "salary")];

	let summary = summarize(&transactions);
	assert_eq!(summary.flow_in_pct, 100);
	assert_eq!(summary.flow_out_pct, 0);
	assert_eq!(summary.count_income_pct, 100);
	assert_eq!(summary.net_balance, BigDecimal::from(900));
}
