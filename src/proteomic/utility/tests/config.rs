use std::env;

use log::LevelFilter;

use crate::proteomic::error::MatchError;
use crate::proteomic::utility::config::{resolve, resolve_log_level, resolve_thread_count};

#[test]
fn test_resolve_prefers_cli_value() {
    env::set_var("PEPTIDE_FINDER_CONFIG_TEST_PREFERS_CLI", "from env");
    assert_eq!(resolve(Some("from cli"), "PEPTIDE_FINDER_CONFIG_TEST_PREFERS_CLI"), Some("from cli".to_owned()));
    assert_eq!(resolve(None, "PEPTIDE_FINDER_CONFIG_TEST_PREFERS_CLI"), Some("from env".to_owned()));
}

#[test]
fn test_resolve_unset_and_blank() {
    assert_eq!(resolve(None, "PEPTIDE_FINDER_CONFIG_TEST_NEVER_SET"), None);
    env::set_var("PEPTIDE_FINDER_CONFIG_TEST_BLANK", "  ");
    assert_eq!(resolve(None, "PEPTIDE_FINDER_CONFIG_TEST_BLANK"), None);
}

#[test]
fn test_thread_count() {
    assert_eq!(resolve_thread_count(Some("4".to_owned())).unwrap(), 4);
    assert!(resolve_thread_count(None).unwrap() >= 1);
    match resolve_thread_count(Some("0".to_owned())) {
        Err(MatchError::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other)
    }
    assert!(resolve_thread_count(Some("many".to_owned())).is_err());
}

#[test]
fn test_log_level() {
    assert_eq!(resolve_log_level(None).unwrap(), LevelFilter::Info);
    assert_eq!(resolve_log_level(Some("debug".to_owned())).unwrap(), LevelFilter::Debug);
    assert_eq!(resolve_log_level(Some("WARN".to_owned())).unwrap(), LevelFilter::Warn);
    assert!(resolve_log_level(Some("loud".to_owned())).is_err());
}
