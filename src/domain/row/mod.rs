use csv::StringRecord;
use serde::Serialize;

/// Column sequence the bank export uses, after the summary preamble.
pub const LEDGER_HEADER: [&str; 7] = [
    "REF",
    "TRANSACTION DATE",
    "POSTED DATE",
    "TYPE",
    "DESCRIPTION",
    "Category",
    "AMOUNT",
];

/// Column sequence of the Simplifi import format.
pub const SIMPLIFI_HEADER: [&str; 4] = ["Date", "Payee", "Amount", "Tags"];

/// One transaction row of the ledger, borrowed out of a parsed record.
///
/// Only the columns that survive into the output (plus `kind`, which drives
/// the sign policy) are extracted; `REF` and `POSTED DATE` are dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct LedgerRow<'a> {
    pub date: &'a str,
    pub kind: &'a str,
    pub payee: &'a str,
    pub tags: &'a str,
    pub amount: &'a str,
}

impl<'a> LedgerRow<'a> {
    /// Extract the ledger columns, or `None` when the record does not have
    /// exactly [`LEDGER_HEADER`]'s arity.
    pub fn from_record(record: &'a StringRecord) -> Option<Self> {
        if record.len() != LEDGER_HEADER.len() {
            return None;
        }

        Some(Self {
            date: &record[1],
            kind: &record[3],
            payee: &record[4],
            tags: &record[5],
            amount: &record[6],
        })
    }
}

/// One row of the Simplifi import file.
#[derive(Debug, Serialize)]
pub struct SimplifiRow<'a> {
    pub date: &'a str,
    pub payee: &'a str,
    pub amount: &'a str,
    pub tags: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_surviving_columns() {
        let record = StringRecord::from(vec![
            "#123",
            "2024-01-15",
            "2024-01-16",
            "PURCHASE",
            "GROCERY STORE",
            "Groceries",
            "50.00",
        ]);

        assert_eq!(
            LedgerRow::from_record(&record),
            Some(LedgerRow {
                date: "2024-01-15",
                kind: "PURCHASE",
                payee: "GROCERY STORE",
                tags: "Groceries",
                amount: "50.00",
            })
        );
    }

    #[test]
    fn rejects_any_other_arity() {
        let short = StringRecord::from(vec!["#123", "2024-01-15", "PURCHASE"]);
        let long = StringRecord::from(vec!["a", "b", "c", "d", "e", "f", "g", "h"]);

        assert_eq!(LedgerRow::from_record(&short), None);
        assert_eq!(LedgerRow::from_record(&long), None);
    }
}
