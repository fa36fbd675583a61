use crate::utils::{UtilsError, parse_number_pool, parse_target};

#[test]
fn test_parse_pool_commas() {
    assert_eq!(
        parse_number_pool("25,50,75,100,3,6"),
        Ok(vec![25, 50, 75, 100, 3, 6])
    );
}

#[test]
fn test_parse_pool_mixed_separators() {
    assert_eq!(parse_number_pool(" 1, 2  3,\t4 "), Ok(vec![1, 2, 3, 4]));
    assert_eq!(parse_number_pool("7"), Ok(vec![7]));
    assert_eq!(parse_number_pool("0,0"), Ok(vec![0, 0]));
}

#[test]
fn test_parse_pool_empty() {
    assert_eq!(parse_number_pool(""), Err(UtilsError::EmptyPool));
    assert_eq!(parse_number_pool(" , ,"), Err(UtilsError::EmptyPool));
}

#[test]
fn test_parse_pool_invalid_entries() {
    assert_eq!(
        parse_number_pool("1,-2,3"),
        Err(UtilsError::InvalidNumber("-2".to_string()))
    );
    assert_eq!(
        parse_number_pool("1,2.5"),
        Err(UtilsError::InvalidNumber("2.5".to_string()))
    );
    assert!(parse_number_pool("12a").is_err());
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("952"), Ok(952));
    assert_eq!(parse_target(" -7 "), Ok(-7));
    assert_eq!(
        parse_target("9.5"),
        Err(UtilsError::InvalidTarget("9.5".to_string()))
    );
}
