use dfa::prelude::*;

fn contains_one() -> DFA {
    DFA::builder()
        .with_symbols(['0', '1'])
        .with_states(["q0", "q1"])
        .with_start("q0")
        .with_finals(["q1"])
        .with_transitions([
            ("q0", '0', "q0"),
            ("q0", '1', "q1"),
            ("q1", '0', "q1"),
            ("q1", '1', "q1"),
        ])
        .build()
        .unwrap()
}

/// Three states over `{a, b, c}`, with a partial transition function.
fn partial() -> DFA {
    let mut dfa = DFA::new();
    for symbol in "abc".chars() {
        dfa.add_symbol(symbol);
    }
    for name in ["s", "t", "u"] {
        assert!(dfa.add_state(name));
    }
    dfa.set_start("s");
    dfa.set_final("u");
    dfa.add_transition("s", "t", 'a');
    dfa.add_transition("s", "u", 'b');
    dfa.add_transition("t", "u", 'a');
    dfa.add_transition("t", "s", 'c');
    dfa.add_transition("u", "u", 'c');
    dfa
}

#[test_log::test]
fn acceptance_examples() {
    let dfa = contains_one();
    assert!(dfa.accepts("0110"));
    assert!(!dfa.accepts("000"));
    assert!(!dfa.accepts(EMPTY_WORD_SENTINEL));

    let swapped = dfa.swap('0', '1');
    assert!(swapped.accepts("1001"));
    assert!(!swapped.accepts("111"));
}

#[test_log::test]
fn never_accepts_without_start_state() {
    let mut dfa = DFA::new();
    dfa.add_symbol('a');
    dfa.add_state("q");
    dfa.set_final("q");
    dfa.add_transition("q", "q", 'a');
    for input in ["", "e", "a", "aa", "b"] {
        assert!(!dfa.accepts(input), "{input:?} accepted without start state");
    }
}

#[test_log::test]
fn out_of_alphabet_input_is_rejected() {
    for dfa in [contains_one(), partial()] {
        for input in ["2", "0x", "ab!", "cccz", " "] {
            assert!(!dfa.accepts(input));
        }
    }
}

#[test_log::test]
fn unknown_names_change_nothing() {
    let mut dfa = contains_one();
    let before = dfa.to_string();
    let snapshot = dfa.clone();

    assert!(!dfa.set_start("nonexistent"));
    assert!(!dfa.set_final("nonexistent"));
    assert!(!dfa.add_transition("nonexistent", "q0", '0'));
    assert!(!dfa.add_transition("q0", "nonexistent", '0'));
    assert!(!dfa.add_transition("q0", "q1", '2'));
    assert!(!dfa.add_state("q1"));

    assert_eq!(dfa.to_string(), before);
    assert_eq!(dfa, snapshot);
    assert!(!dfa.is_start("nonexistent"));
    assert!(!dfa.is_final("nonexistent"));
    assert!(dfa.get_state("nonexistent").is_none());
    assert_eq!(dfa.get_transition("nonexistent", '0'), None);
}

#[test_log::test]
fn swap_moves_exactly_the_two_symbols() {
    let dfa = partial();
    let swapped = dfa.swap('a', 'b');
    for (from, symbol, to) in dfa.transitions() {
        let image = match symbol {
            'a' => 'b',
            'b' => 'a',
            other => other,
        };
        assert_eq!(swapped.get_transition(from.name(), image), Some(to.name()));
    }
    assert_eq!(swapped.transition_count(), dfa.transition_count());
    assert_eq!(swapped.get_transition("t", 'b'), Some("u"));
    assert_eq!(swapped.get_transition("t", 'a'), None);

    assert!(dfa.accepts("aa"));
    assert!(!swapped.accepts("aa"));
    assert!(swapped.accepts("bb"));
    assert!(swapped.accepts("a"));
    assert!(swapped.accepts("bcbbcc"));
}

#[test_log::test]
fn swap_is_an_involution() {
    for dfa in [contains_one(), partial()] {
        for (a, b) in [('0', '1'), ('a', 'c'), ('a', 'a'), ('b', 'z'), ('y', 'z')] {
            let twice = dfa.swap(a, b).swap(a, b);
            assert_eq!(twice, dfa);
            assert_eq!(twice.to_string(), dfa.to_string());
        }
    }
}

#[test_log::test]
fn swap_copies_are_deep() {
    let dfa = partial();
    let mut copy = dfa.swap('a', 'c');
    assert!(copy.add_state("v"));
    copy.add_symbol('d');
    assert!(copy.add_transition("u", "v", 'd'));
    assert!(copy.set_start("v"));

    assert_eq!(dfa.size(), 3);
    assert!(dfa.get_state("v").is_none());
    assert!(!dfa.get_sigma().contains('d'));
    assert!(dfa.is_start("s"));
    assert_eq!(dfa.get_transition("s", 'a'), Some("t"));
}

#[test_log::test]
fn try_variants_explain_refusals() {
    let mut dfa = partial();
    assert_eq!(
        dfa.try_add_state("s"),
        Err(ConstructionError::DuplicateState("s".into()))
    );
    assert_eq!(
        dfa.try_set_start("x"),
        Err(ConstructionError::UnknownState("x".into()))
    );
    assert_eq!(
        dfa.try_add_transition("s", "t", 'q'),
        Err(ConstructionError::UnknownSymbol('q'))
    );
    assert_eq!(
        dfa.run("ab"),
        Err(Rejection::MissingTransition {
            position: 1,
            state: "t".into(),
            symbol: 'b'
        })
    );
}

#[test_log::test]
fn concurrent_readers() {
    let owned = contains_one();
    let dfa = &owned;
    let swapped = std::thread::scope(|scope| {
        let readers: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || (dfa.accepts("0001"), dfa.accepts("000"))))
            .collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), (true, false));
        }
        scope.spawn(move || dfa.swap('0', '1')).join().unwrap()
    });
    assert!(swapped.accepts("1110"));
}
