//! Generation-by-generation substitution over the fixed grammar.

use crate::grammar::Symbol;
use tracing::{debug, trace};

/// Length of `sequence` after one more generation.
///
/// Forward symbols contribute their production length, turn symbols contribute one.
pub fn expanded_len(sequence: &[Symbol]) -> usize {
    sequence.iter().map(|s| s.production().len()).sum()
}

/// Number of forward symbols `seed` will contain after `generations` rounds,
/// computed without building the sequence.
///
/// Turns never produce forward symbols, so only the forward counts are tracked.
/// The result saturates at `usize::MAX` instead of wrapping.
pub fn forward_count(seed: &[Symbol], generations: u32) -> usize {
    let mut a = seed.iter().filter(|s| **s == Symbol::ForwardA).count();
    let mut b = seed.iter().filter(|s| **s == Symbol::ForwardB).count();
    let (aa, ab) = forward_split(Symbol::ForwardA);
    let (ba, bb) = forward_split(Symbol::ForwardB);

    for _ in 0..generations {
        if (a == 0 && b == 0) || a.saturating_add(b) == usize::MAX {
            break;
        }
        let next_a = a.saturating_mul(aa).saturating_add(b.saturating_mul(ba));
        let next_b = a.saturating_mul(ab).saturating_add(b.saturating_mul(bb));
        a = next_a;
        b = next_b;
    }
    a.saturating_add(b)
}

// (ForwardA count, ForwardB count) in the production of `symbol`.
fn forward_split(symbol: Symbol) -> (usize, usize) {
    let production = symbol.production();
    let count = |wanted: Symbol| production.iter().filter(|s| **s == wanted).count();
    (count(Symbol::ForwardA), count(Symbol::ForwardB))
}

/// Rewrites `sequence` once, replacing every symbol with its production.
pub fn rewrite(sequence: &[Symbol]) -> Vec<Symbol> {
    // Exact sizing: one pass to count, one allocation, no regrowth while extending.
    let mut next = Vec::with_capacity(expanded_len(sequence));
    for symbol in sequence {
        next.extend_from_slice(symbol.production());
    }
    next
}

/// Expands `seed` for `generations` rounds of substitution.
///
/// Zero generations returns a copy of the seed. The result grows roughly
/// 25x per generation in forward symbols, so a handful of generations already
/// yields tens of thousands of symbols.
pub fn expand(seed: &[Symbol], generations: u32) -> Vec<Symbol> {
    let mut current = seed.to_vec();
    for generation in 1..=generations {
        current = rewrite(&current);
        trace!(generation, len = current.len(), "rewrote sequence");
    }
    debug!(
        generations,
        seed_len = seed.len(),
        len = current.len(),
        "expanded L-System"
    );
    current
}
