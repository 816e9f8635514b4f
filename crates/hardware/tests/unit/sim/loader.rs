//! # Image Loader Tests

use std::io::Write;

use accsim_core::sim::loader::{LoadError, load_image_file, parse_hex_image};
use tempfile::NamedTempFile;

#[test]
fn test_parse_separators_and_comments() {
    let text = "; header\n1080, 129F\n\n0x1001\t0X1290 # trailing\n   \n0000";
    assert_eq!(
        parse_hex_image(text).unwrap(),
        vec![0x1080, 0x129F, 0x1001, 0x1290, 0x0000]
    );
}

#[test]
fn test_parse_empty_text() {
    assert!(parse_hex_image("").unwrap().is_empty());
    assert!(parse_hex_image("; nothing here\n# or here").unwrap().is_empty());
}

#[test]
fn test_short_words_are_zero_extended() {
    assert_eq!(parse_hex_image("1 ff 0x2").unwrap(), vec![0x0001, 0x00FF, 0x0002]);
}

#[test]
fn test_invalid_word_reports_line() {
    let err = parse_hex_image("1080\n129F zz01\n").unwrap_err();
    match err {
        LoadError::InvalidWord { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "zz01");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_word_wider_than_16_bits_rejected() {
    assert!(matches!(
        parse_hex_image("10800"),
        Err(LoadError::InvalidWord { line: 1, .. })
    ));
}

#[test]
fn test_load_image_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1005 ; LOAD #5").unwrap();
    writeln!(file, "0000").unwrap();
    assert_eq!(load_image_file(file.path()).unwrap(), vec![0x1005, 0x0000]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_image_file(dir.path().join("missing.hex"));
    assert!(matches!(result, Err(LoadError::Io(_))));
}
