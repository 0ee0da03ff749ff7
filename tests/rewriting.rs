// tests/rewriting.rs
use lsystem_turtle::{ConfigError, DEFAULT_ALPHABET, DEFAULT_RULES, GrowthError, LSystem};

fn default_rules() -> Vec<String> {
    DEFAULT_RULES.iter().map(|r| r.to_string()).collect()
}

#[test]
fn zero_iterations_yield_axiom() {
    let mut sys = LSystem::new();
    assert_eq!(sys.iterate(0).unwrap(), "F");
}

#[test]
fn one_iteration_applies_rules() {
    let mut sys = LSystem::new();
    assert_eq!(sys.iterate(1).unwrap(), "F[+F]F[-F]F");
    assert_eq!(sys.tree().len(), 11);
}

#[test]
fn two_iterations_expand_every_f() {
    let mut sys = LSystem::new();
    let tree = sys.iterate(2).unwrap();
    // 5 `F`s each expand to 11 symbols, 6 structural symbols pass through.
    assert_eq!(tree.len(), 5 * 11 + 6);
}

#[test]
fn iteration_composes() {
    // iterate(n + 1) equals rewriting iterate(n) exactly once more.
    let mut sys = LSystem::new();
    let two = sys.iterate(2).unwrap().to_owned();

    let one = sys.iterate(1).unwrap().to_owned();
    let mut resumed = LSystem::new();
    resumed
        .configure(DEFAULT_ALPHABET.to_vec(), one, default_rules())
        .unwrap();
    assert_eq!(resumed.iterate(1).unwrap(), two);
}

#[test]
fn generation_length_follows_per_symbol_law() {
    let mut sys = LSystem::new();
    for n in 1..=4 {
        let prev = sys.iterate(n - 1).unwrap().to_owned();
        let expected: usize = prev
            .chars()
            .map(|sym| sys.rule(sym).map_or(1, str::len))
            .sum();
        assert_eq!(sys.iterate(n).unwrap().len(), expected, "generation {n}");
    }
}

#[test]
fn symbols_outside_alphabet_pass_through() {
    let mut sys = LSystem::new();
    sys.configure(vec!['F'], "XFX".to_string(), vec!["FF".to_string()])
        .unwrap();
    assert_eq!(sys.iterate(1).unwrap(), "XFFX");
    assert_eq!(sys.iterate(2).unwrap(), "XFFFFX");
}

#[test]
fn configure_rejects_rule_count_mismatch() {
    let mut sys = LSystem::new();
    let err = sys
        .configure(vec!['F', '+'], "F".to_string(), vec!["FF".to_string()])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError {
            alphabet: 2,
            rules: 1
        }
    );
    // No partial mutation: the previous configuration still rewrites.
    assert_eq!(sys.axiom(), "F");
    assert_eq!(sys.iterate(1).unwrap(), "F[+F]F[-F]F");
}

#[test]
fn growth_ceiling_is_checked_before_building() {
    let mut sys = LSystem::new().with_max_len(100);
    assert_eq!(sys.iterate(2).unwrap().len(), 61);

    // Generation 2 holds 25 `F`s and 36 structural symbols, so generation 3
    // would need 25 * 11 + 36 = 311 bytes.
    let err = sys.iterate(3).unwrap_err();
    assert_eq!(
        err,
        GrowthError {
            required: 311,
            ceiling: 100
        }
    );
    // The last generation that fit is still available.
    assert_eq!(sys.tree().len(), 61);
}
