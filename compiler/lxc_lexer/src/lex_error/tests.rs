use super::*;
use pretty_assertions::assert_eq;

#[test]
fn codes_are_lexer_codes() {
    for kind in [
        LexErrorKind::UnterminatedBlockComment,
        LexErrorKind::UnterminatedString,
        LexErrorKind::UnterminatedChar,
        LexErrorKind::InvalidCharLiteral,
        LexErrorKind::MalformedNumber,
        LexErrorKind::LoneUnderscore,
        LexErrorKind::InvalidCharacter,
    ] {
        assert!(kind.code().is_lexer_error(), "{kind:?}");
    }
}

#[test]
fn malformed_number_message_names_lexeme() {
    let err = LexError::new(LexErrorKind::MalformedNumber, 2, 5, "9lives");
    assert_eq!(
        err.message(),
        "'9lives' is not a valid number or identifier; identifiers cannot start with a digit"
    );
}

#[test]
fn diagnostic_keeps_position_and_first_line() {
    let err = LexError::new(LexErrorKind::UnterminatedBlockComment, 3, 1, "#* open\nint x;");
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0006);
    assert_eq!(diag.position(), (3, 1));
    assert_eq!(diag.found, "#* open");
}
