use pcglns_instance::*;

#[test]
fn test_round_half_even() {
    assert_eq!(round_half_even(1.4), 1);
    assert_eq!(round_half_even(2.6), 3);
    assert_eq!(round_half_even(0.5), 0);
    assert_eq!(round_half_even(1.5), 2);
    assert_eq!(round_half_even(2.5), 2);
    assert_eq!(round_half_even(-0.5), 0);
    assert_eq!(round_half_even(-1.5), -2);
    assert_eq!(round_half_even(-1.0), -1);
}

#[test]
fn test_normalize_row() {
    assert_eq!(normalize_row("  1.4\t2.6   -1  0.5 \r"), "1.4 2.6 -1 0.5");
    assert_eq!(normalize_row("   "), "");
}

#[test]
fn test_round_row_keeps_sentinel() {
    let values = parse_row(&normalize_row("1.4 2.6 -1 0.5"), 1, 4).unwrap();
    assert_eq!(
        round_row(&values),
        vec![
            Distance::Finite(1),
            Distance::Finite(3),
            Distance::Forbidden,
            Distance::Finite(0)
        ]
    );
    assert_eq!(sentinel_positions(&values), vec![3]);
}

#[test]
fn test_sentinel_positions_use_unrounded_values() {
    // -0.6 rounds to the sentinel but is not a precedence entry.
    let values = [-1.0, -0.6, 3.0, -1.0];
    assert_eq!(sentinel_positions(&values), vec![1, 4]);
    assert_eq!(
        round_row(&values),
        vec![
            Distance::Forbidden,
            Distance::Forbidden,
            Distance::Finite(3),
            Distance::Forbidden
        ]
    );
}

#[test]
fn test_parse_row_wrong_token_count() {
    assert_eq!(
        parse_row("1 2 3", 8, 4),
        Err(CheckerError::MalformedRow {
            line: 8,
            reason: "expected 4 values, found 3".to_string()
        })
    );
    assert!(matches!(
        parse_row("1 2 3 4 5", 8, 4),
        Err(CheckerError::MalformedRow { line: 8, .. })
    ));
}

#[test]
fn test_parse_row_rejects_bad_tokens() {
    assert_eq!(
        parse_row("1 x 3", 2, 3),
        Err(CheckerError::MalformedRow {
            line: 2,
            reason: "non-numeric token 'x'".to_string()
        })
    );
    assert!(matches!(
        parse_row("1 inf 3", 2, 3),
        Err(CheckerError::MalformedRow { .. })
    ));
    assert!(matches!(
        parse_row("", 2, 3),
        Err(CheckerError::MalformedRow { .. })
    ));
}

#[test]
fn test_distance() {
    assert_eq!(Distance::from_rounded(-1), Distance::Forbidden);
    assert_eq!(Distance::from_rounded(-2), Distance::Finite(-2));
    assert_eq!(Distance::Finite(7).value(), Some(7));
    assert_eq!(Distance::Forbidden.value(), None);
    assert!(Distance::Forbidden.is_forbidden());
    assert_eq!(Distance::Forbidden.to_string(), "-1");
    assert_eq!(Distance::Finite(12).to_string(), "12");
}

#[test]
fn test_matrix_edge_lookup() {
    let matrix = DistanceMatrix::from(vec![vec![0, 4], vec![-1, 0]]);
    assert_eq!(matrix.dimension(), 2);
    assert_eq!(matrix.edge(1, 2), Ok(Distance::Finite(4)));
    assert_eq!(matrix.edge(2, 1), Ok(Distance::Forbidden));
    assert_eq!(matrix.get(0, 1), Some(Distance::Finite(4)));
    assert_eq!(matrix.get(2, 0), None);
    assert_eq!(
        matrix.edge(0, 1),
        Err(CheckerError::VertexOutOfRange {
            vertex: 0,
            dimension: 2
        })
    );
    assert_eq!(
        matrix.edge(1, 3),
        Err(CheckerError::VertexOutOfRange {
            vertex: 3,
            dimension: 2
        })
    );
}

#[test]
fn test_parse_row_rejects_values_past_i64() {
    assert_eq!(
        parse_row("0 1e30", 4, 2),
        Err(CheckerError::MalformedRow {
            line: 4,
            reason: "value '1e30' is out of range".to_string()
        })
    );
    assert!(matches!(
        parse_row("-1e19 0", 4, 2),
        Err(CheckerError::MalformedRow { line: 4, .. })
    ));
    assert_eq!(parse_row("0 9e18", 4, 2).unwrap(), vec![0.0, 9e18]);
}
