use crate::builder::{AccountRow, OrderDraft};
use crate::error::Error;
use std::io::Read;

/// Streams transfer-order drafts out of a CSV source.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn orders(self) -> impl Iterator<Item = Result<OrderDraft, Error>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Error::from))
    }
}

/// Streams seed account rows out of a CSV source.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<AccountRow, Error>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(Error::from))
    }
}
