use crate::engine::{Classifier, UNMATCHED_RULE};
use crate::rules::item::rules;
use crate::tables::ReferenceTables;
use crate::{Category, Classification, Entry, Error, RawItem, StyleClass, Verdict};

fn classify_with(tables: &ReferenceTables, item: &RawItem) -> crate::Result<Verdict> {
    let rules = rules::get();
    let classifier = Classifier::new(&rules, tables);
    classifier.classify(item)
}

fn classify(item: &RawItem) -> crate::Result<Verdict> {
    classify_with(&ReferenceTables::builtin(), item)
}

fn entry_of(item: &RawItem) -> Entry {
    match classify(item).unwrap().classification {
        Classification::Count(entry) => entry,
        Classification::Discard => panic!("{:?} was discarded", item.label),
    }
}

fn plain(label: &str) -> RawItem {
    RawItem::new(label, StyleClass::Other)
}

#[test]
fn item_examples_matching() {
    // Array of (expected_category, expected_name, expected_amount, row)
    let cases: Vec<(Category, &str, f64, RawItem)> = vec![
        (Category::Su, "Razorspine", 1.0, plain("Razorspine")),
        (Category::Su, "Hanfod T\u{e2}n", 1.0, plain("Hanfod TÃ¢n")),
        (Category::Other, "Jewel", 1.0, plain("Jewel")),
        (Category::Ssu, "Natalya's Deception", 1.0, plain("Natalya's Deception")),
        (Category::Sssu, "Tyrael's Might", 1.0, plain("Tyrael's Might")),
        (Category::Runewords, "Dawn", 1.0, plain("Dawn")),
        (Category::Amulets, "Niradyahk", 1.0, plain("Niradyahk")),
        (Category::Rings, "Ras Algethi", 1.0, plain("Ras Algethi")),
        (Category::Jewels, "Heavenstone", 1.0, plain("Heavenstone")),
        (Category::Quivers, "Bag of Tricks", 1.0, plain("Bag of Tricks")),
        (Category::MagicOrbs, "Larzuk's Round Shot", 1.0, plain("Larzuk's Round Shot")),
        (Category::RunewordBases, "Long Sword", 1.0, RawItem::new("Superior Long Sword", StyleClass::White)),
        (Category::RunewordBases, "Ring Mail", 1.0, RawItem::new("Ring Mail", StyleClass::Blue)),
        (
            Category::RunewordBases,
            "Long Sword [eth]",
            1.0,
            RawItem::new("Superior Long Sword", StyleClass::White).with_detail("[ethereal]"),
        ),
        (Category::ShrineBases, "Ring Mail", 1.0, RawItem::new("Ring Mail", StyleClass::Yellow)),
        (Category::Charms, "Sunstone of the Twin Seas", 1.0, plain("Sunstone of the Twin Seas")),
        (Category::Shrines, "Sacred Shrine", 3.7, plain("Sacred Shrine (37%)")),
        (Category::Shrines, "Quiet Shrine", 2.0, plain("Quiet Shrine (20)")),
        (Category::Shrines, "Sacred Shrine", 12.0, plain("Sacred Vessel").with_detail("Quantity: 12")),
        (Category::Other, "Arcane Crystal", 4.0, plain("Arcane Cluster").with_detail("Quantity: 4")),
        (Category::Other, "Arcane Crystal", 3.4, plain("Arcane Shards (17)")),
        (Category::Trophies, "Akarat Trophy", 1.0, plain("Akarat Trophy")),
        (Category::Other, "Mystery Box", 1.0, plain("Mystery Box")),
    ];

    for (category, name, amount, row) in cases {
        let entry = entry_of(&row);
        assert_eq!(entry.category, category, "category for {:?}", row.label);
        assert_eq!(entry.name, name, "name for {:?}", row.label);
        assert!((entry.amount - amount).abs() < 1e-9, "amount for {:?}: got {}", row.label, entry.amount);
        assert_eq!(entry.set, None);
    }
}

#[test]
fn set_suffix_names_the_set() {
    let entry = entry_of(&plain("Fire [Pantheon]"));
    assert_eq!(entry, Entry::set_item("Pantheon", "Fire"));

    // Brackets decide the set even when the name is also a known SU.
    let entry = entry_of(&plain("Razorspine [Made Up Set]"));
    assert_eq!(entry.category, Category::Sets);
    assert_eq!(entry.set.as_deref(), Some("Made Up Set"));
}

#[test]
fn labels_without_brackets_are_never_sets() {
    for label in ["Fire", "Earth", "Heaven", "Razorspine"] {
        assert_ne!(entry_of(&plain(label)).category, Category::Sets, "{label}");
    }
}

#[test]
fn header_and_ignored_rows_are_discarded() {
    let header = classify(&RawItem::header_row()).unwrap();
    assert_eq!(header.classification, Classification::Discard);
    assert_eq!(header.rule, "header row");

    for label in ["Horadric Cube", "Minor Healing Potion", "Apple"] {
        let verdict = classify(&plain(label)).unwrap();
        assert_eq!(verdict.classification, Classification::Discard, "{label}");
        assert_eq!(verdict.rule, "ignored name");
    }
}

#[test]
fn earlier_rules_win() {
    // Ignored beats every style rule.
    let verdict = classify(&RawItem::new("Horadric Cube", StyleClass::White)).unwrap();
    assert_eq!(verdict.classification, Classification::Discard);

    // Named tables beat style rules.
    let entry = entry_of(&RawItem::new("Dawn", StyleClass::Blue));
    assert_eq!(entry.category, Category::Runewords);

    // A bracketed marker in the label is read as a set suffix.
    let entry = entry_of(&RawItem::new("Long Sword [ethereal]", StyleClass::White));
    assert_eq!(entry, Entry::set_item("ethereal", "Long Sword"));

    // Plain style beats the shrine pattern.
    let entry = entry_of(&RawItem::new("Sacred Shrine (37%)", StyleClass::White));
    assert_eq!(entry.category, Category::RunewordBases);
}

#[test]
fn verdicts_name_their_rule() {
    let cases = [
        ("Razorspine", "su name"),
        ("Hanfod TÃ¢n", "su name (garbled)"),
        ("Jewel", "generic jewel"),
        ("Fire [Pantheon]", "set item"),
        ("Sacred Shrine (37%)", "shrine (<n>%)"),
        ("Arcane Shards (17)", "arcane shards (<n>)"),
        ("Mystery Box", "fallback"),
    ];
    for (label, rule) in cases {
        assert_eq!(classify(&plain(label)).unwrap().rule, rule, "{label}");
    }
}

#[test]
fn malformed_quantities_fail_the_row() {
    let rows = [
        plain("Sacred Vessel"),
        plain("Sacred Vessel").with_detail("Quantity: many"),
        plain("Arcane Cluster").with_detail("Stackable"),
        plain("Sacred Shrine (lots)"),
        plain("Arcane Shards (x)"),
    ];
    for row in rows {
        let err = classify(&row).unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata { ref label, .. } if *label == row.label), "{err}");
    }
}

#[test]
fn every_row_lands_somewhere() {
    let labels = ["", "   ", "(", "[", "Shrine (", "Shards ()", "Jewel of Nothing"];
    for label in labels {
        match classify(&plain(label)) {
            Ok(verdict) => assert_ne!(verdict.rule, UNMATCHED_RULE, "{label:?}"),
            Err(err) => assert!(matches!(err, Error::MalformedMetadata { .. }), "{label:?}: {err}"),
        }
    }
}

#[test]
fn custom_tables_are_consulted() {
    let tables = ReferenceTables::from_toml_str(
        r#"
mode = "replace"
trophies = ["Razorspine"]

[vessels]
"Odd Vessel" = "Odd Shrine"

[su_aliases]
"Gar" = "Garbled Name"
"#,
    )
    .unwrap();

    let verdict = classify_with(&tables, &plain("Razorspine")).unwrap();
    assert_eq!(verdict.classification, Classification::Count(Entry::new(Category::Trophies, "Razorspine")));

    let verdict = classify_with(&tables, &plain("Odd Vessel").with_detail("Quantity: 3")).unwrap();
    let expected = Entry::with_amount(Category::Shrines, "Odd Shrine", 3.0);
    assert_eq!(verdict.classification, Classification::Count(expected));

    let verdict = classify_with(&tables, &plain("xGarx")).unwrap();
    assert_eq!(verdict.classification, Classification::Count(Entry::new(Category::Su, "Garbled Name")));

    // Replaced tables drop the built-in names.
    let verdict = classify_with(&tables, &plain("Horadric Cube")).unwrap();
    assert_eq!(verdict.rule, "fallback");
}
