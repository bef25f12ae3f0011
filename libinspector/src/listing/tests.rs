use libpvmisa::{
    instruction::{
        load::{LoadLength, LoadType},
        operation::Operation,
        register::Register,
        Decoded,
    },
    Word, NOP_WORD,
};

use super::{list, lookup_table, valid_words, FilterError, ListFilter};

#[test]
fn valid_words_are_sorted_and_counted() {
    let words = valid_words();

    assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    // Every legal instruction plus the no-op sentinel.
    assert_eq!(words.len(), 16 * 15 * 4 * 3 * 16 + 1);
    assert_eq!(words.last(), Some(&NOP_WORD));
    assert!(!words.contains(&0x0000));
    assert!(words.contains(&0x1023));
}

#[test]
fn lookup_table_format() {
    let table = lookup_table();

    assert!(table.ends_with("FFFF,"));
    assert!(table.contains("1023,"));
    assert_eq!(table.len(), valid_words().len() * 5);
}

#[test]
fn empty_filter_lists_everything() {
    assert_eq!(list(ListFilter::default()).count(), valid_words().len());
}

#[test]
fn filters_narrow_listing() {
    let filter = ListFilter {
        operation: Some(Operation::Divide),
        load_type: Some(LoadType::Immediate),
        load_length: Some(LoadLength::Byte),
        source: Some(Register::A),
        destination: None,
    };

    let listed: Vec<Word> = list(filter).map(|(word, _)| word).collect();

    // Any destination but `a` itself.
    assert_eq!(listed.len(), 15);
    assert!(listed.contains(&0x1023));
    assert!(listed
        .iter()
        .all(|word| word & 0x0FFF == 0x0023));
}

#[test]
fn filtered_listing_excludes_nop_sentinel() {
    let filter = ListFilter {
        operation: Some(Operation::Nop),
        ..Default::default()
    };

    assert!(list(filter).all(|(_, decoded)| decoded != Decoded::Nop));
}

#[test]
fn apply_key_value_pairs() {
    let mut filter = ListFilter::default();

    filter.apply("op=divide").unwrap();
    filter.apply("len=4").unwrap();
    filter.apply("dst=pc").unwrap();

    assert_eq!(
        filter,
        ListFilter {
            operation: Some(Operation::Divide),
            load_length: Some(LoadLength::DWord),
            destination: Some(Register::Pc),
            ..Default::default()
        }
    );
}

#[test]
fn apply_rejects_bad_pairs() {
    let mut filter = ListFilter::default();

    assert_eq!(
        filter.apply("colour=red"),
        Err(FilterError::UnknownKey("colour".to_string()))
    );
    assert_eq!(
        filter.apply("divide"),
        Err(FilterError::MissingValue("divide".to_string()))
    );
    assert!(matches!(
        filter.apply("src=reserved"),
        Err(FilterError::BadValue(_))
    ));
    assert!(filter.is_empty());
}
