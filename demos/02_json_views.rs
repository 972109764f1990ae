/// serialize the list and detail views the way the API layer would
use debt_ledger_rs::chrono::{NaiveDate, TimeZone, Utc};
use debt_ledger_rs::{DebtorBook, Money, NewDebtor, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2026, 1, 11, 9, 0, 0).unwrap(),
    ));
    let mut book = DebtorBook::new();

    let details = book.register(
        NewDebtor {
            name: "Gamma Foods".to_string(),
            incurred_date: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
            principal: Money::from_str_exact("1000.00")?,
            daily_rate: Rate::from_str_exact("0.001")?,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: None,
        },
        &time,
    )?;
    book.add_payment(
        details.summary.id,
        Money::from_str_exact("20.00")?,
        NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
        &time,
    )?;

    let rows = book.list(&time);
    println!("list: {}", serde_json::to_string_pretty(&rows)?);

    let details = book.details(rows[0].id, &time)?;
    println!("detail: {}", serde_json::to_string_pretty(&details)?);

    Ok(())
}
