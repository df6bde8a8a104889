use crate::{
    Result,
    error::{Error, ErrorKind},
    verify_arg,
};

fn check_threshold(min: i64, max: i64) -> Result<()> {
    verify_arg!(min, min >= 0);
    verify_arg!(max, min < max);
    Ok(())
}

#[test]
fn test_verify_arg() {
    assert!(check_threshold(0, 1).is_ok());

    let err = check_threshold(-1, 1).unwrap_err();
    match err.kind() {
        ErrorKind::InvalidArgument { name, message } => {
            assert_eq!(name, "min");
            assert_eq!(message, "min >= 0");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }

    let err = check_threshold(5, 5).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument { name, .. } if name == "max"));
}

#[test]
fn test_error_kinds() {
    let err = Error::invalid_format("line 3", "expected two fields");
    assert!(matches!(
        err.into_kind(),
        ErrorKind::InvalidFormat { element, .. } if element == "line 3"
    ));
}

#[test]
fn test_error_display() {
    assert_eq!(
        Error::length_mismatch(3, 4).to_string(),
        "bit length mismatch: 3 vs 4"
    );
    assert_eq!(
        Error::out_of_range("result", 7, 2).to_string(),
        "result index 7 out of range (len: 2)"
    );
    let io = Error::io(
        "input.tsv",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(matches!(io.kind(), ErrorKind::Io { context, .. } if context == "input.tsv"));
}
