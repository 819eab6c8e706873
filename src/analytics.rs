use bigdecimal::{BigDecimal, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategorySum {
	pub category: String,
	pub amount: BigDecimal,
	pub pct: i64,
}

/// Display figures derived from a transaction set. Nothing here is persisted;
/// the whole summary is recomputed from the filtered listing on each request.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsSummary {
	pub total_income: BigDecimal,
	pub total_expense: BigDecimal,
	pub net_balance: BigDecimal,
	pub count_income_pct: i64,
	pub count_expense_pct: i64,
	pub flow_in_pct: i64,
	pub flow_out_pct: i64,
	pub income_by_category: Vec<CategorySum>,
	pub expense_by_category: Vec<CategorySum>,
}

fn share(part: f64, whole: f64) -> i64 {
	if whole > 0.0 {
		(part / whole * 100.0).round() as i64
	} else {
		0
	}
}

fn as_f64(amount: &BigDecimal) -> f64 {
	amount.to_f64().unwrap_or(0.0)
}

fn accumulate(sums: &mut Vec<(String, BigDecimal)>, category: &str, amount: &BigDecimal) {
	match sums.iter_mut().find(|(cat, _)| cat == category) {
		Some((_, sum)) => *sum += amount.clone(),
		None => sums.push((category.to_string(), amount.clone())),
	}
}

fn category_rows(sums: Vec<(String, BigDecimal)>, type_total: &BigDecimal) -> Vec<CategorySum> {
	let zero = BigDecimal::from(0);
	sums.into_iter()
		.filter(|(_, amount)| *amount != zero)
		.map(|(category, amount)| {
			let pct = share(as_f64(&amount), as_f64(type_total));
			CategorySum { category, amount, pct }
		})
		.collect()
}

pub fn summarize(transactions: &[Transaction]) -> AnalyticsSummary {
	let mut total_income = BigDecimal::from(0);
	let mut total_expense = BigDecimal::from(0);
	let mut income_count = 0usize;
	let mut expense_count = 0usize;
	let mut income_sums: Vec<(String, BigDecimal)> = Vec::new();
	let mut expense_sums: Vec<(String, BigDecimal)> = Vec::new();

	for txn in transactions {
		if txn.transaction_type == TransactionType::Income.as_str() {
			total_income += txn.amount.clone();
			income_count += 1;
			accumulate(&mut income_sums, &txn.category, &txn.amount);
		} else if txn.transaction_type == TransactionType::Expense.as_str() {
			total_expense += txn.amount.clone();
			expense_count += 1;
			accumulate(&mut expense_sums, &txn.category, &txn.amount);
		}
	}

	let total_count = transactions.len() as f64;
	let cash_flow = as_f64(&total_income) + as_f64(&total_expense);

	AnalyticsSummary {
		net_balance: total_income.clone() - total_expense.clone(),
		count_income_pct: share(income_count as f64, total_count),
		count_expense_pct: share(expense_count as f64, total_count),
		flow_in_pct: share(as_f64(&total_income), cash_flow),
		flow_out_pct: share(as_f64(&total_expense), cash_flow),
		income_by_category: category_rows(income_sums, &total_income),
		expense_by_category: category_rows(expense_sums, &total_expense),
		total_income,
		total_expense,
	}
}
