mod common;

use common::{row, sample_dataset};
use fisc_agg::presets::{DF, DI, EXPENDITURE, RDFI_SCHEME, REVENUE, RF, RI};
use fisc_agg::{aggregate, flatten, TreeIndex};
use fisc_domain::{Amount, Dataset, Direction, Section};

#[test]
fn rdfi_quadrants_sum_to_the_expected_totals() {
    let dataset = sample_dataset();
    let tree = aggregate(&dataset, &RDFI_SCHEME).expect("aggregate");
    let index = TreeIndex::build(&tree.root);

    assert_eq!(
        index.total_of(&REVENUE.into()).expect("revenue"),
        Amount::from_cents(150)
    );
    assert_eq!(
        index.total_of(&EXPENDITURE.into()).expect("expenditure"),
        Amount::from_cents(30)
    );
    assert_eq!(index.total_of(&RF.into()).expect("rf"), Amount::from_cents(100));
    assert_eq!(index.total_of(&RI.into()).expect("ri"), Amount::from_cents(50));
    assert_eq!(index.total_of(&DF.into()).expect("df"), Amount::from_cents(30));
    // DI exists with a zero total; it is not "missing".
    assert_eq!(index.total_of(&DI.into()).expect("di"), Amount::ZERO);
    assert_eq!(tree.root.total, Amount::from_cents(180));
}

#[test]
fn every_non_leaf_total_equals_the_sum_of_its_children() {
    // The RD×FI filters partition their matched sets fully, so the direct
    // sums and the child sums must coincide at every level.
    let tree = aggregate(&sample_dataset(), &RDFI_SCHEME).expect("aggregate");
    for node in flatten(&tree.root) {
        if !node.is_leaf() {
            let child_sum: Amount = node.children.iter().map(|child| child.total).sum();
            assert_eq!(node.total, child_sum, "node {}", node.id);
        }
    }
}

#[test]
fn aggregation_is_deterministic_across_equal_inputs() {
    let dataset = sample_dataset();
    // A second dataset with equal rows but its own identity.
    let clone = Dataset::new(dataset.exercice, dataset.rows.clone());

    let first = aggregate(&dataset, &RDFI_SCHEME).expect("first");
    let second = aggregate(&clone, &RDFI_SCHEME).expect("second");

    assert_eq!(first.root, second.root);
    assert_eq!(first.outcome, second.outcome);

    let order: Vec<&str> = first
        .root
        .children
        .iter()
        .map(|child| child.id.as_str())
        .collect();
    assert_eq!(order, [REVENUE, EXPENDITURE]);
}

#[test]
fn a_row_outside_the_taxonomy_is_dropped_without_error() {
    use fisc_domain::{CategoryDef, ClassificationScheme, RowFilter};

    // Functional scheme keyed on fonction prefixes, so a ZZ99 row matches
    // nothing at all.
    let scheme = ClassificationScheme::new("fonctionnel")
        .with_roots(["R", "D"])
        .with_categories([
            CategoryDef::new("R", "Recettes")
                .with_filter(RowFilter::default().with_fonction_prefix("R")),
            CategoryDef::new("D", "Dépenses")
                .with_filter(RowFilter::default().with_fonction_prefix("D")),
        ]);
    let dataset = Dataset::new(
        2017,
        vec![
            row(Direction::Revenue, Section::Operating, "RF01", 100),
            row(Direction::Expenditure, Section::Operating, "ZZ99", 999),
        ],
    );

    let tree = aggregate(&dataset, &scheme).expect("aggregate succeeds");
    let index = TreeIndex::build(&tree.root);
    assert_eq!(index.total_of(&"R".into()).expect("r"), Amount::from_cents(100));
    assert_eq!(index.total_of(&"D".into()).expect("d"), Amount::ZERO);
    assert_eq!(tree.root.total, Amount::from_cents(100));
    assert_eq!(tree.outcome.unclassified_rows, 1);
}

#[test]
fn cached_and_fresh_trees_are_interchangeable() {
    use fisc_agg::AggregationCache;

    let dataset = sample_dataset();
    let mut cache = AggregationCache::new();
    let cached = cache
        .get_or_compute(dataset.id, &RDFI_SCHEME.id, || {
            aggregate(&dataset, &RDFI_SCHEME)
        })
        .expect("first compute");
    let again = cache
        .get_or_compute(dataset.id, &RDFI_SCHEME.id, || {
            panic!("must not recompute for the same key")
        })
        .expect("cache hit");

    assert_eq!(cached.root, again.root);
    let index = TreeIndex::build(&again.root);
    assert_eq!(
        index.total_of(&REVENUE.into()).expect("revenue"),
        Amount::from_cents(150)
    );
}
