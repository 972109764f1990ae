/// settle a debtor with an overpayment, then reopen it by removing the payment
use debt_ledger_rs::chrono::{NaiveDate, TimeZone, Utc};
use debt_ledger_rs::{DebtorBook, Money, NewDebtor, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pin the clock so the run is reproducible
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap(),
    ));
    let mut book = DebtorBook::new();

    let details = book.register(
        NewDebtor {
            name: "Beta Logistics".to_string(),
            incurred_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            principal: Money::from_str_exact("1000.00")?,
            daily_rate: Rate::from_str_exact("0.001")?,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: None,
        },
        &time,
    )?;
    let debtor_id = details.summary.id;

    // the overpayment clears the whole debt, the surplus is absorbed
    let details = book.add_payment(
        debtor_id,
        Money::from_str_exact("2000.00")?,
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
        &time,
    )?;
    println!("after payment: {:?}", details.summary.status);

    // deleting the payment puts the debt back, the next read reopens
    let payment_id = details.payments[0].id;
    let details = book.remove_payment(debtor_id, payment_id, &time)?;
    println!("after removal: {:?}", details.summary.status);
    println!("total due again: {}", details.summary.total_due);

    Ok(())
}
