use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("income") {
            Ok(Self::Income)
        } else if value.eq_ignore_ascii_case("expense") {
            Ok(Self::Expense)
        } else {
            Err(format!("unknown transaction type '{value}'"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
}

/// Totals served by `GET /api/summary`.
///
/// Field names are PascalCase on the wire. Decoding fails when any of the
/// three fields is missing or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryResponse {
    pub income_total: f64,
    pub expense_total: f64,
    pub net_flow: f64,
}

impl SummaryResponse {
    pub fn is_finite(&self) -> bool {
        self.income_total.is_finite() && self.expense_total.is_finite() && self.net_flow.is_finite()
    }
}

#[derive(Debug, Deserialize)]
pub struct AddTransactionForm {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct EditTransactionForm {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTransactionForm {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" EXPENSE ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn transaction_uses_type_key() {
        let tx = Transaction {
            id: 3,
            kind: TransactionKind::Expense,
            amount: 12.5,
            description: "lunch".into(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "Expense");
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn summary_uses_pascal_case_and_rejects_missing_fields() {
        let summary: SummaryResponse =
            serde_json::from_str(r#"{"IncomeTotal":1000,"ExpenseTotal":400,"NetFlow":600}"#)
                .unwrap();
        assert_eq!(summary.income_total, 1000.0);
        assert_eq!(summary.net_flow, 600.0);

        let missing =
            serde_json::from_str::<SummaryResponse>(r#"{"IncomeTotal":1,"ExpenseTotal":2}"#);
        assert!(missing.is_err());

        let non_numeric = serde_json::from_str::<SummaryResponse>(
            r#"{"IncomeTotal":"1","ExpenseTotal":2,"NetFlow":3}"#,
        );
        assert!(non_numeric.is_err());
    }
}
