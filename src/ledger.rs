use crate::models::{SummaryResponse, Transaction, TransactionKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction {0} not found")]
    NotFound(u32),

    #[error("no transaction ids left after {0}")]
    IdsExhausted(u32),
}

/// Ordered list of transactions. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn next_id(&self) -> Result<u32, LedgerError> {
        match self.transactions.iter().map(|tx| tx.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(LedgerError::IdsExhausted(max)),
        }
    }

    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        let tx = Transaction {
            id: self.next_id()?,
            kind,
            amount,
            description: description.into(),
        };
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    pub fn edit(
        &mut self,
        id: u32,
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        let entry = self
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        entry.kind = kind;
        entry.amount = amount;
        entry.description = description.into();
        Ok(entry.clone())
    }

    pub fn delete(&mut self, id: u32) -> Result<Transaction, LedgerError> {
        let index = self
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        Ok(self.transactions.remove(index))
    }

    pub fn summary(&self) -> SummaryResponse {
        let mut income_total = 0.0;
        let mut expense_total = 0.0;
        for tx in &self.transactions {
            match tx.kind {
                TransactionKind::Income => income_total += tx.amount,
                TransactionKind::Expense => expense_total += tx.amount,
            }
        }

        SummaryResponse {
            income_total,
            expense_total,
            net_flow: income_total - expense_total,
        }
    }
}
