use wordlib_core::{Category, Meaning, StoreError, WordItem, WordItemParts, WordLib};

fn parts(meanings: Vec<Meaning>) -> WordItemParts {
    WordItemParts {
        meanings,
        ..WordItemParts::default()
    }
}

#[test]
fn run_scenario_end_to_end() {
    let mut lib = WordLib::new();

    let id = lib
        .add_word("Run", parts(vec![Meaning::new("to move fast", Category::Verb)]))
        .unwrap();
    assert_eq!(id, 1);

    let err = lib
        .add_word("run", parts(vec![Meaning::new("a jog", Category::Noun)]))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateWord { .. }));

    let found = lib.get_by_word("RUN").expect("case-insensitive lookup");
    assert_eq!(found.meanings()[0].text, "to move fast");

    let removed = lib.remove_by_word("run").expect("removal by word");
    assert_eq!(removed.word(), "run");
    assert!(!lib.contains_word("run"));
    assert!(lib.get_by_id(id).is_none());
}

#[test]
fn update_leaves_no_stale_index_entry() {
    let mut lib = WordLib::new();
    let id = lib
        .add_word("before", parts(vec![Meaning::new("earlier", Category::Adverb)]))
        .unwrap();
    lib.add_word("other", WordItemParts::default()).unwrap();

    lib.update_word_item(
        id,
        WordItem::with_parts("after", parts(vec![Meaning::new("later", Category::Adverb)])),
    )
    .unwrap();

    assert!(!lib.contains_word("before"));
    assert!(lib.contains_word("after"));
    assert_eq!(lib.get_by_word("after").unwrap().meanings()[0].text, "later");
    // the other entry is untouched
    assert!(lib.contains_word("other"));
    assert_eq!(lib.len(), 2);
}

#[test]
fn failed_update_changes_nothing() {
    let mut lib = WordLib::new();
    let a = lib.add_word("alpha", WordItemParts::default()).unwrap();
    let b = lib.add_word("beta", WordItemParts::default()).unwrap();

    // collision with b's word
    assert!(lib.update_word_item(a, WordItem::new("BETA")).is_err());
    // unknown id
    assert!(lib.update_word_item(99, WordItem::new("gamma")).is_err());

    assert_eq!(lib.get_by_id(a).unwrap().word(), "alpha");
    assert_eq!(lib.get_by_id(b).unwrap().word(), "beta");
    assert!(lib.contains_word("alpha"));
    assert!(lib.contains_word("beta"));
    assert!(!lib.contains_word("gamma"));
}

#[test]
fn statistics_sum_to_total_meaning_count() {
    let mut lib = WordLib::new();
    lib.add_word(
        "run",
        parts(vec![
            Meaning::new("to move fast", Category::Verb),
            Meaning::new("a jog", Category::Noun),
        ]),
    )
    .unwrap();
    lib.add_word("cat", parts(vec![Meaning::new("feline", Category::Noun)]))
        .unwrap();

    let stats = lib.category_statistics();
    assert_eq!(stats.get(&Category::Noun), Some(&2));
    assert_eq!(stats.get(&Category::Verb), Some(&1));

    let total: usize = lib.iter().map(|(_, item)| item.meaning_count()).sum();
    assert_eq!(stats.values().sum::<usize>(), total);
}

#[test]
fn meanings_getters_hand_out_owned_copies() {
    let mut lib = WordLib::new();
    let id = lib
        .add_word("word", parts(vec![Meaning::new("a unit of language", Category::Noun)]))
        .unwrap();

    let mut copy = lib.meanings_of_id(id).unwrap();
    copy.push(Meaning::new("smuggled in", Category::Verb));

    // mutating the copy never reaches the stored item
    assert_eq!(lib.get_by_id(id).unwrap().meaning_count(), 1);
    assert_eq!(lib.meanings_of_word("WORD").unwrap().len(), 1);
}
