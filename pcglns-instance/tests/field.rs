use pcglns_instance::*;

#[test]
fn test_locate_single_field() {
    let lines = ["NAME : x", "TYPE : AGTSP", "DIMENSION : 3"];
    assert_eq!(locate_field(&lines, "DIMENSION"), Some(2));
    assert_eq!(locate_field(&lines, "NAME"), Some(0));
}

#[test]
fn test_locate_missing_field() {
    let lines = ["NAME : x", "TYPE : AGTSP"];
    assert_eq!(locate_field(&lines, "EDGE_WEIGHT_SECTION"), None);
    assert_eq!(locate_field(&[], "DIMENSION"), None);
}

#[test]
fn test_locate_is_prefix_match() {
    let lines = [" DIMENSION : 3", "THE DIMENSION : 3", "EDGE_WEIGHT_TYPE : EXPLICIT"];
    assert_eq!(locate_field(&lines, "DIMENSION"), None);
    assert_eq!(locate_field(&lines, "EDGE_WEIGHT_SECTION"), None);
}

#[test]
fn test_distinct_matches_report_the_last() {
    let lines = ["DIMENSION : 3", "NAME : x", "DIMENSION : 4"];
    assert_eq!(locate_field(&lines, "DIMENSION"), Some(2));
}

#[test]
fn test_duplicate_matches_report_the_first_copy() {
    let lines = ["DIMENSION : 3", "NAME : x", "DIMENSION : 3"];
    assert_eq!(locate_field(&lines, "DIMENSION"), Some(0));

    // The last matching text decides, and it resolves to its earliest copy.
    let lines = ["DIMENSION : 3", "DIMENSION : 4", "DIMENSION : 3"];
    assert_eq!(locate_field(&lines, "DIMENSION"), Some(0));
}

#[test]
fn test_field_index_matches_locate_field() {
    let lines = [
        "NAME : x",
        "DIMENSION : 3",
        "GTSP_SETS : 2",
        "EDGE_WEIGHT_SECTION",
        "0 1 2",
        "EDGE_WEIGHT_SECTION",
        "DIMENSION : 3",
    ];
    let index = FieldIndex::build(&lines, &Field::ALL);
    for field in Field::ALL {
        assert_eq!(
            index.position(field),
            locate_field(&lines, field.prefix()),
            "{:?}",
            field
        );
    }
    assert_eq!(index.position(Field::Dimension), Some(1));
    assert_eq!(index.position(Field::EdgeWeightSection), Some(3));
    assert_eq!(index.position(Field::GtspSets), Some(2));
}

#[test]
fn test_field_index_only_tracks_requested_fields() {
    let lines = ["DIMENSION : 3", "GTSP_SETS : 2"];
    let index = FieldIndex::build(&lines, &[Field::Dimension]);
    assert_eq!(index.position(Field::Dimension), Some(0));
    assert_eq!(index.position(Field::GtspSets), None);
}
