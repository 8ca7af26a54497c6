use super::*;

#[test]
fn match_percent_rounds_to_whole_number() {
    assert_eq!(match_percent(0.87), "87% match");
    assert_eq!(match_percent(0.912), "91% match");
}

#[test]
fn match_percent_bounds() {
    assert_eq!(match_percent(1.0), "100% match");
    assert_eq!(match_percent(0.0), "0% match");
}
