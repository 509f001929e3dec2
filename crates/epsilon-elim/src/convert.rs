//! Conversion of an ε-NFA into an equivalent epsilon-free NFA.

use crate::acceptance::propagate_acceptance;
use crate::closure::EpsilonClosure;
use crate::epsilon_nfa::EpsilonNfa;
use crate::nfa::Nfa;
use crate::rewrite::rewrite_transitions;
use log::debug;

/// Convert an epsilon-NFA into an equivalent NFA without epsilon
/// transitions.
///
/// A fixed pipeline: compute the epsilon-closure, rewrite every symbol
/// transition through it, extend the accepting set through it, and assemble
/// the result. State count, alphabet and start state carry over unchanged.
/// The computation is total over a validated automaton.
pub fn eliminate_epsilon(nfa: &EpsilonNfa) -> Nfa {
    let closure = EpsilonClosure::compute(nfa);
    debug!("computed epsilon-closure over {} states", nfa.state_count());

    let transitions = rewrite_transitions(nfa, &closure);
    let accepting = propagate_acceptance(nfa, &closure);
    debug!(
        "rewrote {} transition entries, extended accepting set to {} states",
        transitions.len(),
        accepting.len()
    );

    Nfa::new(
        nfa.state_count(),
        nfa.alphabet().clone(),
        nfa.start_state(),
        accepting,
        transitions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateId;
    use crate::symbol::{Alphabet, SymbolId};

    fn sorted_triples(nfa: &Nfa) -> Vec<(StateId, SymbolId, StateId)> {
        let mut triples: Vec<_> = nfa.transitions().collect();
        triples.sort_unstable();
        triples
    }

    #[test]
    fn test_epsilon_chain_only() {
        // 3 states, epsilon edges 0 -> 1 -> 2, no symbol transitions,
        // accepting {2}.
        let mut nfa = EpsilonNfa::new(3, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_epsilon_transition(0, 1).unwrap();
        nfa.add_epsilon_transition(1, 2).unwrap();
        nfa.add_accepting_state(2).unwrap();

        let closure = EpsilonClosure::compute(&nfa);
        assert_eq!(closure.row(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(closure.row(1).to_vec(), vec![1, 2]);
        assert_eq!(closure.row(2).to_vec(), vec![2]);

        let converted = eliminate_epsilon(&nfa);
        assert_eq!(converted.accepting_states().to_vec(), vec![0, 1, 2]);
        assert_eq!(sorted_triples(&converted), vec![]);
        assert_eq!(converted.start_state(), 0);
        assert_eq!(converted.state_count(), 3);
    }

    #[test]
    fn test_trivial_self_epsilon_changes_nothing() {
        // (0, a, 1) with only the trivial epsilon edge 1 -> 1.
        let mut nfa = EpsilonNfa::new(2, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_transition(0, 'a', 1).unwrap();
        nfa.add_epsilon_transition(1, 1).unwrap();
        nfa.add_accepting_state(1).unwrap();

        let converted = eliminate_epsilon(&nfa);
        assert_eq!(sorted_triples(&converted), vec![(0, 0, 1)]);
        assert_eq!(converted.accepting_states().to_vec(), vec![1]);
    }

    #[test]
    fn test_epsilon_cycle() {
        // Epsilon cycle 0 <-> 1 with (1, a, 1), accepting {1}.
        let mut nfa = EpsilonNfa::new(2, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_epsilon_transition(0, 1).unwrap();
        nfa.add_epsilon_transition(1, 0).unwrap();
        nfa.add_transition(1, 'a', 1).unwrap();
        nfa.add_accepting_state(1).unwrap();

        let closure = EpsilonClosure::compute(&nfa);
        assert!(closure.contains(0, 1));
        assert!(closure.contains(1, 0));

        let converted = eliminate_epsilon(&nfa);
        let triples = sorted_triples(&converted);
        assert!(triples.contains(&(0, 0, 1)));
        assert!(triples.contains(&(1, 0, 1)));
        assert_eq!(converted.accepting_states().to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_result_has_no_epsilon_and_same_language_on_samples() {
        // a*b built from fragments: 0 -a-> 0, 0 -ε-> 1, 1 -b-> 2.
        let mut nfa = EpsilonNfa::new(3, Alphabet::new(['a', 'b']).unwrap(), 0).unwrap();
        nfa.add_transition(0, 'a', 0).unwrap();
        nfa.add_epsilon_transition(0, 1).unwrap();
        nfa.add_transition(1, 'b', 2).unwrap();
        nfa.add_accepting_state(2).unwrap();

        let converted = eliminate_epsilon(&nfa);
        for input in ["b", "ab", "aaab", "", "a", "ba", "abb"] {
            assert_eq!(nfa.accepts(input), converted.accepts(input), "on {input:?}");
        }
    }

    #[test]
    fn test_random_automata_language_equivalence() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let symbols = ['a', 'b'];
        let mut rng = StdRng::seed_from_u64(0x00e5_f1ee);

        for _ in 0..300 {
            let state_count: StateId = rng.gen_range(1..=5);
            let mut nfa =
                EpsilonNfa::new(state_count, Alphabet::new(symbols).unwrap(), 0).unwrap();

            for _ in 0..rng.gen_range(0..=8) {
                let src = rng.gen_range(0..state_count);
                let dst = rng.gen_range(0..state_count);
                let sym = symbols[rng.gen_range(0..symbols.len())];
                nfa.add_transition(src, sym, dst).unwrap();
            }
            for _ in 0..rng.gen_range(0..=4) {
                let src = rng.gen_range(0..state_count);
                let dst = rng.gen_range(0..state_count);
                nfa.add_epsilon_transition(src, dst).unwrap();
            }
            for state in 0..state_count {
                if rng.gen_bool(0.3) {
                    nfa.add_accepting_state(state).unwrap();
                }
            }

            let converted = eliminate_epsilon(&nfa);

            for _ in 0..20 {
                let len = rng.gen_range(0..=6);
                let input: String = (0..len)
                    .map(|_| symbols[rng.gen_range(0..symbols.len())])
                    .collect();
                assert_eq!(
                    nfa.accepts(&input),
                    converted.accepts(&input),
                    "disagree on {input:?} for {nfa:?}"
                );
            }
        }
    }
}
