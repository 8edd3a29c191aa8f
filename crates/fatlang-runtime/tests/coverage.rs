//! The runtime exports exactly the symbols the catalogue describes.

use std::collections::BTreeSet;

use fatlang_abi::{Family, Kind, Operator, Symbol, catalogue};

fn exported_names() -> BTreeSet<&'static str> {
    fatlang_runtime::exports().iter().map(|export| export.name).collect()
}

#[test]
fn test_exports_match_catalogue() {
    let exported = exported_names();
    let described: BTreeSet<String> = catalogue().iter().map(Symbol::name).collect();
    let described: BTreeSet<&str> = described.iter().map(String::as_str).collect();

    let missing: Vec<_> = described.difference(&exported).collect();
    let unexpected: Vec<_> = exported.difference(&described).collect();
    assert!(missing.is_empty(), "not exported: {missing:?}");
    assert!(unexpected.is_empty(), "not in catalogue: {unexpected:?}");
    assert_eq!(fatlang_runtime::exports().len(), catalogue().len());
}

#[test]
fn test_every_cast_pair_is_exported() {
    let exported = exported_names();
    let mut pairs = 0;
    for from in Kind::ALL {
        for to in Kind::ALL.into_iter().filter(|&to| to != from) {
            let name = Symbol::Cast { from, to }.name();
            assert!(exported.contains(name.as_str()), "{name} missing");
            pairs += 1;
        }
    }
    assert_eq!(pairs, 72);
}

#[test]
fn test_every_operator_pair_is_exported() {
    let exported = exported_names();
    for op in Operator::ALL {
        for kind in Kind::ALL {
            let name = Symbol::Operator { op, kind }.name();
            assert_eq!(
                exported.contains(name.as_str()),
                op.supports(kind),
                "{name} exported state disagrees with the operator table"
            );
        }
    }
}

#[test]
fn test_family_sizes() {
    let count = |family: Family| catalogue().iter().filter(|s| s.family() == family).count();
    assert_eq!(count(Family::Operator), 117);
    assert_eq!(count(Family::Cast), 72);
    assert_eq!(count(Family::Io), 29);
    assert_eq!(count(Family::Memory), 4);
    assert_eq!(count(Family::Process), 1);
}
