use super::round_cents;
use crate::domain::AnalyticsSummary;
use shared::{AnalyticsResponse, CategoryAmount, CategoryBreakdown, DateAmount};

pub struct AnalyticsMapper;

impl AnalyticsMapper {
    pub fn to_dto(summary: AnalyticsSummary) -> AnalyticsResponse {
        AnalyticsResponse {
            total: round_cents(summary.total),
            by_category: CategoryBreakdown(
                summary
                    .by_category
                    .into_iter()
                    .map(Self::to_category_amount)
                    .collect(),
            ),
            highest: summary.highest.map(Self::to_category_amount),
            lowest: summary.lowest.map(Self::to_category_amount),
            trend: summary
                .trend
                .into_iter()
                .map(|(date, amount)| DateAmount {
                    date,
                    amount: round_cents(amount),
                })
                .collect(),
        }
    }

    fn to_category_amount((category, amount): (String, f64)) -> CategoryAmount {
        CategoryAmount {
            category,
            amount: round_cents(amount),
        }
    }
}
