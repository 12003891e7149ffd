mod common;

use common::*;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use teller::ledger::Ledger;
use teller::payment::Payment;

async fn total_volume(ledger: &Ledger) -> Decimal {
    ledger
        .statement()
        .await
        .iter()
        .map(|record| record.balance().volume)
        .sum()
}

fn random_order(rng: &mut impl Rng) -> Payment {
    let cents = rng.gen_range(1..=50_000);
    let amount = Decimal::new(cents, 2);
    match rng.gen_range(0..4) {
        0 => own_order(A, B, amount),
        1 => own_order(B, A, amount),
        2 => local_order(A, C, amount, "Jaak Jola"),
        _ => sepa_order(A, GB, amount, "John Lord", "debt repay"),
    }
}

#[tokio::test]
async fn test_money_is_conserved_across_random_transfers() {
    let ledger = seeded_ledger();
    let before = total_volume(&ledger).await;
    assert_eq!(before, dec!(16000.00));

    let mut rng = rand::thread_rng();
    let mut accepted = 0;
    for _ in 0..500 {
        if ledger.transfer_order(random_order(&mut rng)).await.is_ok() {
            accepted += 1;
        }
    }

    assert!(accepted > 0, "at least some random transfers should land");
    assert_eq!(total_volume(&ledger).await, before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_transfers_serialize_on_the_ledger() {
    let ledger = Arc::new(seeded_ledger());
    let before = total_volume(&ledger).await;

    let mut handles = Vec::new();
    for i in 0..200 {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            let payment = if i % 2 == 0 {
                own_order(A, B, dec!(1.00))
            } else {
                own_order(B, A, dec!(1.00))
            };
            // Failures (B running dry) are fine; partial writes are not.
            let _ = ledger.transfer_order(payment).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(total_volume(&ledger).await, before);
}
