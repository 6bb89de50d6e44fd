use symbios_ribbon::{
    FORWARD_A_RULE, FORWARD_B_RULE, PRODUCTION_LEN, RibbonError, Symbol, format_sequence,
    parse_sequence,
};

#[test]
fn test_forward_productions_have_fixed_length() {
    assert_eq!(Symbol::ForwardA.production().len(), PRODUCTION_LEN);
    assert_eq!(Symbol::ForwardB.production().len(), PRODUCTION_LEN);
    assert_eq!(PRODUCTION_LEN, 43);
}

#[test]
fn test_turn_symbols_are_terminal() {
    assert_eq!(Symbol::TurnLeft.production(), &[Symbol::TurnLeft]);
    assert_eq!(Symbol::TurnRight.production(), &[Symbol::TurnRight]);
}

#[test]
fn test_productions_match_textual_rules() {
    // Same rules in the notation used by config files.
    let a = parse_sequence("LL-R-R+L+L-R-RL+R+LLR-L+R+LL+R-LR-R-L+L+RR-").unwrap();
    let b = parse_sequence("+LL-R-R+L+LR+L-RR-L-R+LRR-L-RL+L+R-R-L+L+RR").unwrap();
    assert_eq!(a, FORWARD_A_RULE);
    assert_eq!(b, FORWARD_B_RULE);

    // Each production draws 25 segments.
    assert_eq!(a.iter().filter(|s| s.is_forward()).count(), 25);
    assert_eq!(b.iter().filter(|s| s.is_forward()).count(), 25);
}

#[test]
fn test_parse_skips_whitespace_and_round_trips() {
    let seq = parse_sequence("- R\n+ L").unwrap();
    assert_eq!(
        seq,
        vec![
            Symbol::TurnRight,
            Symbol::ForwardB,
            Symbol::TurnLeft,
            Symbol::ForwardA
        ]
    );
    assert_eq!(format_sequence(&seq), "-R+L");
}

#[test]
fn test_malformed_symbol_is_rejected() {
    let err = parse_sequence("LR+X-").unwrap_err();
    match err {
        RibbonError::MalformedSymbol { symbol, position } => {
            assert_eq!(symbol, 'X');
            assert_eq!(position, 3);
        }
        other => panic!("expected MalformedSymbol, got {other:?}"),
    }
}

#[test]
fn test_integer_codes() {
    for (code, symbol) in Symbol::ALL.iter().enumerate() {
        assert_eq!(Symbol::try_from(code as u8).unwrap(), *symbol);
        assert_eq!(u8::from(*symbol), code as u8);
    }
    assert!(matches!(
        Symbol::try_from(4u8),
        Err(RibbonError::UnknownSymbolCode(4))
    ));
}
