//! Aggregations over the expense book.
//!
//! All functions are pure and work on a slice of expenses, so the service can
//! compute every figure of an analytics response from a single snapshot.

use std::collections::{BTreeMap, HashMap};

use super::models::expense::Expense;

/// Sum of all amounts; 0 for an empty book
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts per category, matched by exact string equality.
///
/// Categories are listed in the order they first appear in `expenses`.
/// Categories with no expenses are absent rather than zero.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        match positions.get(expense.category.as_str()) {
            Some(&index) => totals[index].1 += expense.amount,
            None => {
                positions.insert(expense.category.as_str(), totals.len());
                totals.push((expense.category.clone(), expense.amount));
            }
        }
    }

    totals
}

/// Category with the largest total. On a tie the category seen first wins.
pub fn highest_category(totals: &[(String, f64)]) -> Option<(String, f64)> {
    pick_category(totals, |candidate, best| candidate > best)
}

/// Category with the smallest total. On a tie the category seen first wins.
pub fn lowest_category(totals: &[(String, f64)]) -> Option<(String, f64)> {
    pick_category(totals, |candidate, best| candidate < best)
}

fn pick_category(
    totals: &[(String, f64)],
    beats: impl Fn(f64, f64) -> bool,
) -> Option<(String, f64)> {
    let mut iter = totals.iter();
    let mut best = iter.next()?;
    for entry in iter {
        if beats(entry.1, best.1) {
            best = entry;
        }
    }
    Some(best.clone())
}

/// Sum of amounts per date string, ascending by the date string.
///
/// Ordering is lexicographic, which is chronological for well-formed
/// `YYYY-MM-DD` dates.
pub fn trend_by_date(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.date.as_str()).or_insert(0.0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(date, total)| (date.to_string(), total))
        .collect()
}

/// Every figure served by the analytics endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total: f64,
    pub by_category: Vec<(String, f64)>,
    pub highest: Option<(String, f64)>,
    pub lowest: Option<(String, f64)>,
    pub trend: Vec<(String, f64)>,
}

impl AnalyticsSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let by_category = totals_by_category(expenses);
        Self {
            total: total_amount(expenses),
            highest: highest_category(&by_category),
            lowest: lowest_category(&by_category),
            trend: trend_by_date(expenses),
            by_category,
        }
    }
}
