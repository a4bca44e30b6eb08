use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single expense as it travels over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    /// Free-text label such as "Food"
    pub category: String,
    /// Amount rounded to two decimals
    pub amount: f64,
    /// Calendar date as entered, normally YYYY-MM-DD
    pub date: String,
    /// Optional note; empty string when the user left it blank
    pub description: String,
}

/// Body of `POST /api/expenses`.
///
/// Every field is optional at the decoding stage so that a missing field
/// surfaces as a 400 with a readable message instead of a decoder rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Amount as submitted by a client: the bundled front end sends a number,
/// older clients sent the amount as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Numeric value of the input, or `None` when a text amount does not parse
    pub fn value(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Simple `{"message": "..."}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAmount {
    pub date: String,
    pub amount: f64,
}

/// Per-category totals, serialized as a JSON object whose key order follows
/// the order in which each category first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(pub Vec<CategoryAmount>);

impl CategoryBreakdown {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = CategoryBreakdown;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of category names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, amount)) = access.next_entry::<String, f64>()? {
                    entries.push(CategoryAmount { category, amount });
                }
                Ok(CategoryBreakdown(entries))
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// Body of `GET /api/analytics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total: f64,
    pub by_category: CategoryBreakdown,
    pub highest: Option<CategoryAmount>,
    pub lowest: Option<CategoryAmount>,
    /// Ascending by date string
    pub trend: Vec<DateAmount>,
}
