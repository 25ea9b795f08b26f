//! token 发现集成测试

use std::fs;

use papertrail_viewer::{read_token_file, read_token_from, TokenError};
use tempfile::tempdir;

#[test]
fn test_token_file_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".papertrail.yml");
    fs::write(&path, "token: abc123def\n").unwrap();

    let token = read_token_from(None, Some(&path)).unwrap();
    assert_eq!(token, "abc123def");
}

#[test]
fn test_env_token_wins_over_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".papertrail.yml");
    fs::write(&path, "token: from-file\n").unwrap();

    let token = read_token_from(Some("from-env"), Some(&path)).unwrap();
    assert_eq!(token, "from-env");
}

#[test]
fn test_missing_file_yields_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".papertrail.yml");

    let err = read_token_from(None, Some(&path)).unwrap_err();
    assert!(matches!(err, TokenError::NotFound));
}

#[test]
fn test_file_without_token_key_yields_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".papertrail.yml");
    fs::write(&path, "# nothing useful here\nuser: someone\n").unwrap();

    let err = read_token_from(None, Some(&path)).unwrap_err();
    assert!(matches!(err, TokenError::NotFound));
}

#[test]
fn test_nonexistent_file_reads_as_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.yml");
    assert!(read_token_file(&path).unwrap().is_none());
}

#[test]
fn test_not_found_message_is_generic() {
    // 引导信息由 CLI 层负责；错误本身保持简短
    let err = read_token_from(None, None).unwrap_err();
    assert_eq!(err.to_string(), "no Papertrail API token found");
}
