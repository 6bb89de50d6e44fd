use symbios_ribbon::{Symbol, expand, expanded_len, forward_count, parse_sequence};

fn seed() -> Vec<Symbol> {
    vec![Symbol::TurnRight, Symbol::ForwardB]
}

#[test]
fn test_zero_generations_returns_seed() {
    assert_eq!(expand(&seed(), 0), seed());
    assert!(expand(&[], 3).is_empty());
}

#[test]
fn test_one_generation_substitutes_in_order() {
    let out = expand(&seed(), 1);
    assert_eq!(out[0], Symbol::TurnRight);
    assert_eq!(&out[1..], Symbol::ForwardB.production());
}

#[test]
fn test_expansion_is_deterministic() {
    let a = expand(&seed(), 3);
    let b = expand(&seed(), 3);
    assert_eq!(a, b);
}

#[test]
fn test_length_law() {
    let mut current = seed();
    for g in 0..3 {
        let next = expand(&seed(), g + 1);
        assert_eq!(next.len(), expanded_len(&current), "generation {}", g + 1);
        current = next;
    }
}

#[test]
fn test_known_growth_of_default_seed() {
    // -R grows as 2 -> 44 -> 1094 -> 27344 symbols.
    let lengths: Vec<usize> = (0..4).map(|g| expand(&seed(), g).len()).collect();
    assert_eq!(lengths, vec![2, 44, 1094, 27344]);

    let forwards = expand(&seed(), 2).iter().filter(|s| s.is_forward()).count();
    assert_eq!(forwards, 625);
}

#[test]
fn test_turns_only_seed_never_grows() {
    let turns = parse_sequence("+-+-").unwrap();
    assert_eq!(expand(&turns, 5), turns);
}

#[test]
fn test_forward_count_matches_expansion() {
    let seeds = [
        seed(),
        parse_sequence("L+R-L").unwrap(),
        parse_sequence("++").unwrap(),
    ];
    for seed in &seeds {
        for generations in 0..4 {
            let actual = expand(seed, generations)
                .iter()
                .filter(|s| s.is_forward())
                .count();
            assert_eq!(
                forward_count(seed, generations),
                actual,
                "generations {generations}"
            );
        }
    }
}

#[test]
fn test_forward_count_saturates() {
    assert_eq!(forward_count(&seed(), u32::MAX), usize::MAX);
    assert_eq!(forward_count(&parse_sequence("+-").unwrap(), u32::MAX), 0);
}
