use crate::account::AccountRecord;
use crate::amount::Currency;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StatementRow<'a> {
    number: &'a str,
    kind: &'a str,
    balance: Decimal,
    currency: Currency,
    holder: Option<&'a str>,
}

impl<'a> From<&'a AccountRecord> for StatementRow<'a> {
    fn from(record: &'a AccountRecord) -> Self {
        let (kind, holder) = match record {
            AccountRecord::Own { .. } => ("own", None),
            AccountRecord::Domestic { full_name, .. } => ("domestic", Some(full_name.as_str())),
            AccountRecord::International { full_name, .. } => {
                ("international", Some(full_name.as_str()))
            }
        };
        let balance = record.balance();
        Self {
            number: record.number().as_str(),
            kind,
            balance: balance.volume,
            currency: balance.currency,
            holder,
        }
    }
}

/// Writes a closing statement, one CSV row per account record.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_accounts(&mut self, records: &[AccountRecord]) -> Result<()> {
        for record in records {
            self.writer.serialize(StatementRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
