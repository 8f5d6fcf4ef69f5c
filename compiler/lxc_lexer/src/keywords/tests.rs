use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === Keyword tests ===

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("cons"), Some(TokenKind::Keyword(Keyword::Cons)));
    assert_eq!(lookup("let"), Some(TokenKind::Keyword(Keyword::Let)));
    assert_eq!(lookup("var"), Some(TokenKind::Keyword(Keyword::Var)));
    assert_eq!(lookup("only"), Some(TokenKind::Keyword(Keyword::Only)));
    assert_eq!(lookup("func"), Some(TokenKind::Keyword(Keyword::Func)));
    assert_eq!(lookup("main"), Some(TokenKind::Keyword(Keyword::Main)));
}

#[test]
fn type_keywords() {
    assert_eq!(lookup("int"), Some(TokenKind::Keyword(Keyword::Int)));
    assert_eq!(lookup("float"), Some(TokenKind::Keyword(Keyword::Float)));
    assert_eq!(lookup("text"), Some(TokenKind::Keyword(Keyword::Text)));
    assert_eq!(lookup("time"), Some(TokenKind::Keyword(Keyword::Time)));
    assert_eq!(lookup("timestamp"), Some(TokenKind::Keyword(Keyword::Timestamp)));
}

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("do"), Some(TokenKind::Keyword(Keyword::Do)));
    assert_eq!(lookup("if"), Some(TokenKind::Keyword(Keyword::If)));
    assert_eq!(lookup("what"), Some(TokenKind::Keyword(Keyword::What)));
    assert_eq!(lookup("then"), Some(TokenKind::Keyword(Keyword::Then)));
    assert_eq!(lookup("compare"), Some(TokenKind::Keyword(Keyword::Compare)));
    assert_eq!(lookup("continue"), Some(TokenKind::Keyword(Keyword::Continue)));
    assert_eq!(lookup("until"), Some(TokenKind::Keyword(Keyword::Until)));
    assert_eq!(lookup("stop"), Some(TokenKind::Keyword(Keyword::Stop)));
    assert_eq!(lookup("when"), Some(TokenKind::Keyword(Keyword::When)));
    assert_eq!(lookup("break"), Some(TokenKind::Keyword(Keyword::Break)));
    assert_eq!(lookup("back"), Some(TokenKind::Keyword(Keyword::Back)));
}

#[test]
fn reserved_words() {
    assert_eq!(lookup("true"), Some(TokenKind::ReservedWord(ReservedWord::True)));
    assert_eq!(lookup("false"), Some(TokenKind::ReservedWord(ReservedWord::False)));
    assert_eq!(lookup("exit"), Some(TokenKind::ReservedWord(ReservedWord::Exit)));
    assert_eq!(lookup("cease"), Some(TokenKind::ReservedWord(ReservedWord::Cease)));
    assert_eq!(lookup("system"), Some(TokenKind::ReservedWord(ReservedWord::System)));
    assert_eq!(lookup("goto"), Some(TokenKind::ReservedWord(ReservedWord::Goto)));
}

#[test]
fn every_listed_spelling_is_accepted() {
    for &kw in Keyword::ALL {
        assert_eq!(classify(kw.as_str()), WordClass::Keyword, "{kw}");
    }
    for &word in ReservedWord::ALL {
        assert_eq!(classify(word.as_str()), WordClass::ReservedWord, "{word}");
    }
}

// === Exact-match tests ===

#[test]
fn prefixes_are_identifiers() {
    // `tim` is on the path to `time` and `timestamp` but does not accept.
    assert_eq!(classify("tim"), WordClass::Identifier);
    assert_eq!(classify("times"), WordClass::Identifier);
    assert_eq!(classify("timestam"), WordClass::Identifier);
    assert_eq!(classify("con"), WordClass::Identifier);
}

#[test]
fn extensions_are_identifiers() {
    assert_eq!(classify("integer"), WordClass::Identifier);
    assert_eq!(classify("mainly"), WordClass::Identifier);
    assert_eq!(classify("trues"), WordClass::Identifier);
    assert_eq!(classify("do_"), WordClass::Identifier);
}

#[test]
fn case_sensitive() {
    assert_eq!(classify("Int"), WordClass::Identifier);
    assert_eq!(classify("MAIN"), WordClass::Identifier);
    assert_eq!(classify("True"), WordClass::Identifier);
}

#[test]
fn words_from_other_languages_are_identifiers() {
    for word in ["else", "for", "void", "string", "null", "end", "return_"] {
        assert_eq!(classify(word), WordClass::Identifier, "{word}");
    }
}

#[test]
fn empty_text_is_identifier() {
    assert_eq!(lookup(""), None);
}

#[test]
fn automaton_shares_prefixes() {
    let total_bytes: usize = Keyword::ALL
        .iter()
        .map(|k| k.as_str().len())
        .chain(ReservedWord::ALL.iter().map(|w| w.as_str().len()))
        .sum();
    let states = classifier().state_count();
    assert!(states < total_bytes + 1, "{states} states for {total_bytes} bytes");
}

// === Typo property ===

fn all_words() -> Vec<&'static str> {
    Keyword::ALL
        .iter()
        .map(|k| k.as_str())
        .chain(ReservedWord::ALL.iter().map(|w| w.as_str()))
        .collect()
}

proptest! {
    #[test]
    fn single_char_typo_is_identifier(
        word_index in 0usize..49,
        pos_seed in any::<usize>(),
        replacement in "[a-zA-Z0-9_]",
    ) {
        let words = all_words();
        let word = words[word_index % words.len()];
        let pos = pos_seed % word.len();
        let mut typo = word.as_bytes().to_vec();
        let new = replacement.as_bytes()[0];
        prop_assume!(typo[pos] != new);
        typo[pos] = new;
        let typo = String::from_utf8(typo).unwrap();
        // A mutation can land on another listed word (`in` -> `if`).
        prop_assume!(!words.contains(&typo.as_str()));
        prop_assert_eq!(classify(&typo), WordClass::Identifier);
    }
}
