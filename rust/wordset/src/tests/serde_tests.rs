use crate::BitSet;

#[test]
fn test_serialize_as_sorted_members() {
    let set: BitSet = [300, -2, 5].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[-2,5,300]");
    assert_eq!(serde_json::to_string(&BitSet::new()).unwrap(), "[]");
}

#[test]
fn test_deserialize_unsorted_with_duplicates() {
    let set: BitSet = serde_json::from_str("[9, 1, 9, -64]").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![-64, 1, 9]);

    let again: BitSet = serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
    assert_eq!(again, set);
}

#[test]
fn test_deserialize_rejects_non_integers() {
    assert!(serde_json::from_str::<BitSet>("[1, \"two\"]").is_err());
    assert!(serde_json::from_str::<BitSet>("[18446744073709551615]").is_err());
}
