use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use teller::account::{AccountNumber, AccountRecord, BankInfo, CountryCode};
use teller::amount::Amount;
use teller::builder::{self, OrderDraft, OrderKind};
use teller::ledger::Ledger;
use teller::payment::Payment;

pub const A: &str = "EE471000001020145685";
pub const B: &str = "EE471000001020145686";
pub const C: &str = "EE471000001020145687";
pub const GB: &str = "GB33BUKB20201555555555";
pub const INTL: &str = "4003830171874018";

pub fn us_bank() -> BankInfo {
    BankInfo {
        name: "US Bank".to_string(),
        address: "Chicago".to_string(),
        country_code: CountryCode::Us,
        swift_code: "ABBVUS44".to_string(),
    }
}

/// Ledger used across the scenario tests: two own accounts, two domestic
/// holders, one international holder. All balances in EUR.
pub fn seeded_ledger() -> Ledger {
    Ledger::new([
        AccountRecord::Own {
            number: AccountNumber::from(A),
            balance: Amount::eur(dec!(10000.00)),
        },
        AccountRecord::Own {
            number: AccountNumber::from(B),
            balance: Amount::eur(dec!(0.00)),
        },
        AccountRecord::Domestic {
            number: AccountNumber::from(C),
            balance: Amount::eur(dec!(1000.00)),
            full_name: "Jaak Jola".to_string(),
        },
        AccountRecord::Domestic {
            number: AccountNumber::from(GB),
            balance: Amount::eur(dec!(2000.00)),
            full_name: "John Lord".to_string(),
        },
        AccountRecord::International {
            number: AccountNumber::from(INTL),
            balance: Amount::eur(dec!(3000.00)),
            full_name: "Jimi Hendrix".to_string(),
            address: "Seattle".to_string(),
            bank: us_bank(),
        },
    ])
}

pub fn own_order(from: &str, to: &str, amount: Decimal) -> Payment {
    builder::build_payment(OrderDraft {
        kind: OrderKind::Own,
        from: from.to_string(),
        to: to.to_string(),
        amount,
        ..OrderDraft::default()
    })
    .expect("own order should build")
}

pub fn local_order(from: &str, to: &str, amount: Decimal, name: &str) -> Payment {
    builder::build_payment(OrderDraft {
        kind: OrderKind::Local,
        from: from.to_string(),
        to: to.to_string(),
        amount,
        name: Some(name.to_string()),
        ..OrderDraft::default()
    })
    .expect("local order should build")
}

pub fn sepa_order(from: &str, to: &str, amount: Decimal, name: &str, note: &str) -> Payment {
    builder::build_payment(OrderDraft {
        kind: OrderKind::Sepa,
        from: from.to_string(),
        to: to.to_string(),
        amount,
        name: Some(name.to_string()),
        note: Some(note.to_string()),
        ..OrderDraft::default()
    })
    .expect("sepa order should build")
}

pub fn international_order(from: &str, to: &str, amount: Decimal) -> Payment {
    builder::build_payment(OrderDraft {
        kind: OrderKind::International,
        from: from.to_string(),
        to: to.to_string(),
        amount,
        name: Some("Jimi Hendrix".to_string()),
        address: Some("Seattle".to_string()),
        bank_name: Some("US Bank".to_string()),
        bank_address: Some("Chicago".to_string()),
        bank_country: Some(CountryCode::Us),
        swift_code: Some("ABBVUS44".to_string()),
        note: Some("debt repay".to_string()),
        ..OrderDraft::default()
    })
    .expect("international order should build")
}
