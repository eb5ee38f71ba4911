use fisc_domain::{Amount, Dataset, Direction, LedgerRow, Section};

/// Builds one raw line with an arbitrary nature code.
pub fn row(direction: Direction, section: Section, fonction: &str, cents: i64) -> LedgerRow {
    LedgerRow::new(direction, section, fonction, "70", Amount::from_cents(cents))
}

/// The three-line fixture used across the query and aggregation scenarios:
/// one operating revenue, one investment revenue, one operating expense.
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        2017,
        vec![
            row(Direction::Revenue, Section::Operating, "RF01", 100),
            row(Direction::Revenue, Section::Investment, "RI02", 50),
            row(Direction::Expenditure, Section::Operating, "DF03", 30),
        ],
    )
}
