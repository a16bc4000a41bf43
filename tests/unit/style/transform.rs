use super::*;

#[test]
fn parses_mixed_separators_and_defaults() {
    let clauses = TransformClause::parse_list("translate(10) scale(2, 3),rotate(45 1 2)").unwrap();
    assert_eq!(
        clauses,
        vec![
            TransformClause::Translate(10.0, 0.0),
            TransformClause::Scale(2.0, 3.0),
            TransformClause::Rotate {
                angle: 45.0,
                cx: 1.0,
                cy: 2.0
            },
        ]
    );
    assert_eq!(
        TransformClause::parse_list("scale(2)").unwrap(),
        vec![TransformClause::Scale(2.0, 2.0)]
    );
    assert!(TransformClause::parse_list("").unwrap().is_empty());
}

#[test]
fn rejects_malformed_clauses() {
    assert!(TransformClause::parse_list("translate(1,2").is_err());
    assert!(TransformClause::parse_list("wobble(1)").is_err());
    assert!(TransformClause::parse_list("skewX(1,2)").is_err());
    assert!(TransformClause::parse_list("scale(a)").is_err());
}

#[test]
fn formats_back_to_svg() {
    let chain = [
        TransformClause::Translate(1.0, 2.5),
        TransformClause::SkewX(10.0),
        TransformClause::Matrix([1.0, 0.0, 0.0, 1.0, 5.0, 6.0]),
    ];
    let text = TransformClause::format_list(&chain);
    assert_eq!(text, "translate(1,2.5) skewX(10) matrix(1,0,0,1,5,6)");
    assert_eq!(TransformClause::parse_list(&text).unwrap(), chain.to_vec());
}
