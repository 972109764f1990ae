/// quick start - register a debtor, record a payment, read the balances
use debt_ledger_rs::chrono::NaiveDate;
use debt_ledger_rs::{DebtorBook, Money, NewDebtor, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut book = DebtorBook::new();

    let details = book.register(
        NewDebtor {
            name: "Alpha Trading".to_string(),
            incurred_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            principal: Money::from_str_exact("1000.00")?,
            daily_rate: Rate::from_str_exact("0.001")?,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: None,
        },
        &time,
    )?;
    let debtor_id = details.summary.id;

    let details = book.add_payment(
        debtor_id,
        Money::from_str_exact("20.00")?,
        NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
        &time,
    )?;

    println!("principal remaining: {}", details.snapshot.principal_remaining);
    println!("interest accrued:    {}", details.snapshot.interest_accrued);
    println!("total debt:          {}", details.snapshot.total_debt);
    println!("status:              {:?}", details.summary.status);

    Ok(())
}
