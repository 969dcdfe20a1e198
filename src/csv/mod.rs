use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;
use tracing::{error, warn};

use crate::{
    domain::{
        amount::{self, SignPolicy},
        error::Error as LedgerError,
        row::{LedgerRow, SimplifiRow, LEDGER_HEADER, SIMPLIFI_HEADER},
    },
    error::Result,
};

/// Account name, summary header and summary values come before the real
/// header in every export.
const PREAMBLE_RECORDS: usize = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How forgiving the conversion is with malformed input.
///
/// [`Mode::Strict`] is the canonical behavior: the ledger header must match
/// exactly, dates are normalized, and every amount's sign is inverted.
/// [`Mode::Permissive`] reproduces the legacy best-effort behavior: the
/// header row is consumed without inspection, dates pass through verbatim,
/// and only `PURCHASE` rows have their sign flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Strict,
    Permissive,
}

impl Mode {
    fn sign_policy(self) -> SignPolicy {
        match self {
            Mode::Strict => SignPolicy::Invert,
            Mode::Permissive => SignPolicy::InvertPurchases,
        }
    }
}

/// A tolerated defect in the ledger, reported instead of aborting the run.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("line {line}: expected 7 fields, found {fields}")]
    RowArity { line: u64, fields: usize },
    #[error("line {line}: date `{value}` is not YYYY-MM-DD")]
    DateFormat { line: u64, value: String },
}

/// What a finished conversion did, warnings included, so callers get the
/// diagnostics without depending on a logging backend.
#[derive(Debug, Default)]
pub struct Report {
    pub rows_read: usize,
    pub rows_written: usize,
    pub warnings: Vec<Warning>,
}

/// Convert a bank ledger read from `reader` into the Simplifi import format
/// on `writer`.
///
/// The input is consumed once, in order, with one record of lookahead for
/// the header; emitted rows keep the source order. Rows with the wrong
/// field count are skipped with a [`Warning`]; a bad header (strict mode)
/// or an unparseable amount aborts the run, leaving whatever was already
/// written in the output.
pub fn convert(reader: impl Read, writer: impl Write, mode: Mode) -> Result<Report> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    let mut records = reader.records();

    // Running out of input during the preamble skip is not an error.
    for _ in 0..PREAMBLE_RECORDS {
        records.next().transpose()?;
    }

    let header = records.next().transpose()?;
    if mode == Mode::Strict
        && !header
            .as_ref()
            .is_some_and(|record| record.iter().eq(LEDGER_HEADER))
    {
        return Err(LedgerError::InvalidHeader.into());
    }

    writer.write_record(SIMPLIFI_HEADER)?;

    let mut report = Report::default();
    for record in records {
        let record = record?;
        report.rows_read += 1;
        let line = record.position().map_or(0, |position| position.line());

        let Some(row) = LedgerRow::from_record(&record) else {
            let warning = Warning::RowArity {
                line,
                fields: record.len(),
            };
            warn!("skipping row: {warning}");
            report.warnings.push(warning);
            continue;
        };

        let date = match mode {
            Mode::Strict => normalize_date(row.date, line, &mut report),
            Mode::Permissive => row.date.to_owned(),
        };

        let amount = match amount::parse(row.amount) {
            Ok(amount) => amount,
            Err(err) => {
                if mode == Mode::Strict {
                    error!(line, row = ?record, "{err}");
                }
                return Err(err.into());
            }
        };
        let amount = amount::format(mode.sign_policy().apply(row.kind, amount));

        writer.serialize(SimplifiRow {
            date: &date,
            payee: row.payee,
            amount: &amount,
            tags: row.tags,
        })?;
        report.rows_written += 1;
    }

    writer.flush()?;
    Ok(report)
}

fn normalize_date(value: &str, line: u64, report: &mut Report) -> String {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => date.format(DATE_FORMAT).to_string(),
        Err(_) => {
            let warning = Warning::DateFormat {
                line,
                value: value.to_owned(),
            };
            warn!("passing date through: {warning}");
            report.warnings.push(warning);
            value.to_owned()
        }
    }
}
