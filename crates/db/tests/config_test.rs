use c3lingo_db::config::{parse_log_level, parse_max_connections, DEFAULT_DATABASE_URL};
use rstest::rstest;
use tracing::Level;

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case(" warn ", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(value), expected);
}

#[test]
fn test_parse_max_connections() {
    assert_eq!(parse_max_connections("8").unwrap(), 8);
    assert!(parse_max_connections("0").is_err());
    assert!(parse_max_connections("many").is_err());
}

#[test]
fn test_default_database_url_is_sqlite() {
    assert!(DEFAULT_DATABASE_URL.starts_with("sqlite:"));
}
