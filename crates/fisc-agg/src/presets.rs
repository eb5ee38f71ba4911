//! Built-in classification schemes.

use fisc_domain::{CategoryDef, ClassificationScheme, Direction, RowFilter, Section};
use once_cell::sync::Lazy;

/// Revenue root category id.
pub const REVENUE: &str = "REVENUE";
/// Expenditure root category id.
pub const EXPENDITURE: &str = "EXPENDITURE";
/// Recettes de fonctionnement.
pub const RF: &str = "RF";
/// Recettes d'investissement.
pub const RI: &str = "RI";
/// Dépenses de fonctionnement.
pub const DF: &str = "DF";
/// Dépenses d'investissement.
pub const DI: &str = "DI";

/// The four-quadrant scheme of the budget explorer's landing view:
/// revenue/expenditure split into operating/investment.
pub static RDFI_SCHEME: Lazy<ClassificationScheme> = Lazy::new(|| {
    ClassificationScheme::new("rdfi")
        .with_label("Recettes et dépenses")
        .with_roots([REVENUE, EXPENDITURE])
        .with_categories([
            CategoryDef::new(REVENUE, "Recettes")
                .with_filter(RowFilter::direction(Direction::Revenue))
                .with_children([RF, RI]),
            CategoryDef::new(RF, "Recettes de fonctionnement").with_filter(
                RowFilter::direction(Direction::Revenue).with_section(Section::Operating),
            ),
            CategoryDef::new(RI, "Recettes d'investissement").with_filter(
                RowFilter::direction(Direction::Revenue).with_section(Section::Investment),
            ),
            CategoryDef::new(EXPENDITURE, "Dépenses")
                .with_filter(RowFilter::direction(Direction::Expenditure))
                .with_children([DF, DI]),
            CategoryDef::new(DF, "Dépenses de fonctionnement").with_filter(
                RowFilter::direction(Direction::Expenditure).with_section(Section::Operating),
            ),
            CategoryDef::new(DI, "Dépenses d'investissement").with_filter(
                RowFilter::direction(Direction::Expenditure).with_section(Section::Investment),
            ),
        ])
});
