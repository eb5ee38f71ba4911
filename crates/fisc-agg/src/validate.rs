//! Structural validation of classification schemes.
//!
//! Runs before any aggregation recursion so that a malformed hierarchy is
//! reported with the offending category id instead of recursing forever.

use std::collections::{HashMap, HashSet};

use fisc_domain::{CategoryDef, CategoryId, ClassificationScheme};

use crate::error::{AggError, Result};

/// A scheme whose structure has been checked: ids unique, every reference
/// defined, every category claimed by at most one parent, no cycles.
#[derive(Debug)]
pub struct ValidatedScheme<'s> {
    scheme: &'s ClassificationScheme,
    by_id: HashMap<&'s CategoryId, &'s CategoryDef>,
}

impl<'s> ValidatedScheme<'s> {
    pub fn scheme(&self) -> &'s ClassificationScheme {
        self.scheme
    }

    pub fn category(&self, id: &CategoryId) -> Option<&'s CategoryDef> {
        self.by_id.get(id).copied()
    }
}

/// Checks a scheme's structure, failing fast with the offending id.
pub fn validate_scheme(scheme: &ClassificationScheme) -> Result<ValidatedScheme<'_>> {
    let mut by_id: HashMap<&CategoryId, &CategoryDef> = HashMap::new();
    for category in &scheme.categories {
        if by_id.insert(&category.id, category).is_some() {
            return Err(AggError::DuplicateCategory(category.id.clone()));
        }
    }

    // A root slot counts as parentage too: a category cannot be both a
    // root and somebody's child.
    let mut claimed: HashSet<&CategoryId> = HashSet::new();
    for root in &scheme.roots {
        if !by_id.contains_key(root) {
            return Err(AggError::UnknownCategory(root.clone()));
        }
        if !claimed.insert(root) {
            return Err(AggError::DuplicateParentage(root.clone()));
        }
    }
    for category in &scheme.categories {
        for child in &category.children {
            if !by_id.contains_key(child) {
                return Err(AggError::UnknownCategory(child.clone()));
            }
            if !claimed.insert(child) {
                return Err(AggError::DuplicateParentage(child.clone()));
            }
        }
    }

    detect_cycles(scheme, &by_id)?;

    Ok(ValidatedScheme { scheme, by_id })
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Active,
    Done,
}

fn detect_cycles<'s>(
    scheme: &'s ClassificationScheme,
    by_id: &HashMap<&'s CategoryId, &'s CategoryDef>,
) -> Result<()> {
    let mut marks: HashMap<&CategoryId, Mark> = HashMap::new();
    for category in &scheme.categories {
        walk(&category.id, by_id, &mut marks)?;
    }
    Ok(())
}

fn walk<'s>(
    id: &'s CategoryId,
    by_id: &HashMap<&'s CategoryId, &'s CategoryDef>,
    marks: &mut HashMap<&'s CategoryId, Mark>,
) -> Result<()> {
    match marks.get(id).copied() {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Active) => return Err(AggError::SchemeCycle(id.clone())),
        None => {}
    }
    marks.insert(id, Mark::Active);
    if let Some(category) = by_id.get(id) {
        for child in &category.children {
            walk(child, by_id, marks)?;
        }
    }
    marks.insert(id, Mark::Done);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fisc_domain::CategoryDef;

    fn scheme_with(roots: &[&str], categories: Vec<CategoryDef>) -> ClassificationScheme {
        ClassificationScheme::new("test")
            .with_roots(roots.iter().copied())
            .with_categories(categories)
    }

    #[test]
    fn accepts_a_well_formed_tree() {
        let scheme = scheme_with(
            &["A"],
            vec![
                CategoryDef::new("A", "a").with_children(["B", "C"]),
                CategoryDef::new("B", "b"),
                CategoryDef::new("C", "c"),
            ],
        );
        let validated = validate_scheme(&scheme).expect("valid scheme");
        assert!(validated.category(&"B".into()).is_some());
    }

    #[test]
    fn rejects_a_category_defined_twice() {
        let scheme = scheme_with(
            &["A"],
            vec![CategoryDef::new("A", "a"), CategoryDef::new("A", "again")],
        );
        let err = validate_scheme(&scheme).expect_err("duplicate definition");
        assert!(matches!(err, AggError::DuplicateCategory(id) if id.as_str() == "A"));
    }

    #[test]
    fn rejects_an_undefined_child_reference() {
        let scheme = scheme_with(
            &["A"],
            vec![CategoryDef::new("A", "a").with_children(["GHOST"])],
        );
        let err = validate_scheme(&scheme).expect_err("dangling reference");
        assert!(matches!(err, AggError::UnknownCategory(id) if id.as_str() == "GHOST"));
    }

    #[test]
    fn rejects_an_undefined_root() {
        let scheme = scheme_with(&["GHOST"], vec![CategoryDef::new("A", "a")]);
        let err = validate_scheme(&scheme).expect_err("dangling root");
        assert!(matches!(err, AggError::UnknownCategory(id) if id.as_str() == "GHOST"));
    }

    #[test]
    fn rejects_a_child_claimed_by_two_parents() {
        let scheme = scheme_with(
            &["A", "B"],
            vec![
                CategoryDef::new("A", "a").with_children(["C"]),
                CategoryDef::new("B", "b").with_children(["C"]),
                CategoryDef::new("C", "c"),
            ],
        );
        let err = validate_scheme(&scheme).expect_err("shared child");
        assert!(matches!(err, AggError::DuplicateParentage(id) if id.as_str() == "C"));
    }

    #[test]
    fn rejects_a_root_that_is_also_a_child() {
        let scheme = scheme_with(
            &["A", "B"],
            vec![
                CategoryDef::new("A", "a").with_children(["B"]),
                CategoryDef::new("B", "b"),
            ],
        );
        let err = validate_scheme(&scheme).expect_err("root claimed as child");
        assert!(matches!(err, AggError::DuplicateParentage(id) if id.as_str() == "B"));
    }

    #[test]
    fn rejects_a_cycle_unreachable_from_the_roots() {
        // A is fine; B and C form a detached two-cycle that single-parentage
        // checks alone cannot see.
        let scheme = scheme_with(
            &["A"],
            vec![
                CategoryDef::new("A", "a"),
                CategoryDef::new("B", "b").with_children(["C"]),
                CategoryDef::new("C", "c").with_children(["B"]),
            ],
        );
        let err = validate_scheme(&scheme).expect_err("cycle");
        assert!(matches!(err, AggError::SchemeCycle(_)));
    }
}
