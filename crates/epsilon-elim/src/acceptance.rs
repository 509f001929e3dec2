//! Propagation of acceptance through the epsilon-closure.

use crate::closure::EpsilonClosure;
use crate::epsilon_nfa::EpsilonNfa;
use crate::state::StateSet;

/// Extend the accepting set: a state accepts in the output iff it can
/// epsilon-reach a state accepting in the input.
///
/// The closure is reflexive, so the result is always a superset of the
/// input accepting set.
pub fn propagate_acceptance(nfa: &EpsilonNfa, closure: &EpsilonClosure) -> StateSet {
    let mut accepting = StateSet::with_capacity(nfa.state_count() as usize);
    for state in 0..nfa.state_count() {
        if closure.row(state).intersects(nfa.accepting_states()) {
            accepting.insert(state);
        }
    }
    accepting
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Alphabet;

    #[test]
    fn test_acceptance_flows_backwards_along_epsilon() {
        // 0 -ε-> 1 -ε-> 2, only 2 accepting
        let mut nfa = EpsilonNfa::new(3, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_epsilon_transition(0, 1).unwrap();
        nfa.add_epsilon_transition(1, 2).unwrap();
        nfa.add_accepting_state(2).unwrap();

        let closure = EpsilonClosure::compute(&nfa);
        let accepting = propagate_acceptance(&nfa, &closure);
        assert_eq!(accepting.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_acceptance_is_monotonic() {
        let mut nfa = EpsilonNfa::new(5, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_epsilon_transition(3, 0).unwrap();
        nfa.add_accepting_state(1).unwrap();
        nfa.add_accepting_state(4).unwrap();

        let closure = EpsilonClosure::compute(&nfa);
        let accepting = propagate_acceptance(&nfa, &closure);

        for state in nfa.accepting_states().iter() {
            assert!(accepting.contains(state));
        }
        // 3 only reaches the non-accepting 0, so it stays out.
        assert_eq!(accepting.to_vec(), vec![1, 4]);
    }

    #[test]
    fn test_acceptance_ignores_symbol_edges() {
        // A symbol transition into an accepting state does not propagate.
        let mut nfa = EpsilonNfa::new(2, Alphabet::new(['a']).unwrap(), 0).unwrap();
        nfa.add_transition(0, 'a', 1).unwrap();
        nfa.add_accepting_state(1).unwrap();

        let closure = EpsilonClosure::compute(&nfa);
        let accepting = propagate_acceptance(&nfa, &closure);
        assert_eq!(accepting.to_vec(), vec![1]);
    }
}
