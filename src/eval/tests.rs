#[cfg(test)]
mod tests {
    use crate::eval::*;
    use crate::registry::Registry;
    use std::sync::Arc;

    fn eval_str(input: &str) -> (Engine, Result<(), EvalError>) {
        let mut engine = Engine::new();
        let result = engine.evaluate_batch(input);
        (engine, result)
    }

    fn stack_of(engine: &Engine) -> Vec<f64> {
        engine.current_stack().as_slice().to_vec()
    }

    #[test]
    fn eval_add() {
        let (e, r) = eval_str("2 3 +");
        r.unwrap();
        assert_eq!(stack_of(&e), vec![5.0]);
    }

    #[test]
    fn eval_divide() {
        let (e, r) = eval_str("10 2 /");
        r.unwrap();
        assert_eq!(stack_of(&e), vec![5.0]);
    }

    #[test]
    fn eval_dup_multiply() {
        let (e, r) = eval_str("5 dup *");
        r.unwrap();
        assert_eq!(stack_of(&e), vec![25.0]);
    }

    #[test]
    fn eval_sum() {
        let (e, r) = eval_str("1 2 3 sum");
        r.unwrap();
        assert_eq!(stack_of(&e), vec![6.0]);
    }

    #[test]
    fn eval_concatenated() {
        let (e, r) = eval_str("3+4");
        // `3 + 4`: + runs with one operand and fails
        assert!(matches!(r, Err(EvalError::StackTooSmall { .. })));
        assert_eq!(stack_of(&e), vec![3.0]);

        let (e, r) = eval_str("3 4+ 2dup *");
        r.unwrap();
        assert_eq!(stack_of(&e), vec![7.0, 4.0]);
    }

    #[test]
    fn eval_adjacent_words_stay_joined() {
        // only digit/word boundaries split, so `dup*` is a single token
        let (e, r) = eval_str("3 4+ 2dup*");
        assert_eq!(r, Err(EvalError::UnknownOperation("dup*".into())));
        assert_eq!(stack_of(&e), vec![7.0, 2.0]);
    }

    #[test]
    fn eval_unknown() {
        let (e, r) = eval_str("foo");
        assert_eq!(r, Err(EvalError::UnknownOperation("foo".into())));
        assert!(e.current_stack().is_empty());
    }

    #[test]
    fn eval_malformed_number_is_unknown() {
        let (e, r) = eval_str("1.2.3");
        assert_eq!(r, Err(EvalError::UnknownOperation("1.2.3".into())));
        assert!(e.current_stack().is_empty());
    }

    #[test]
    fn eval_partial_application_persists() {
        let (e, r) = eval_str("1 +");
        assert!(matches!(
            r,
            Err(EvalError::StackTooSmall { needed: 2, available: 1, .. })
        ));
        assert_eq!(stack_of(&e), vec![1.0]);
    }

    #[test]
    fn eval_fail_fast() {
        let (e, r) = eval_str("1 2 bogus 3");
        assert!(r.is_err());
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
    }

    #[test]
    fn eval_blank_is_noop() {
        let mut e = Engine::new();
        e.evaluate_batch("1 2").unwrap();
        e.evaluate_batch("   ").unwrap();
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
        // no snapshot was taken for the blank line
        assert_eq!(e.previous_stack().as_slice(), &[] as &[f64]);
    }

    #[test]
    fn eval_engine_usable_after_error() {
        let mut e = Engine::new();
        assert!(e.evaluate_batch("nope").is_err());
        e.evaluate_batch("4 5 *").unwrap();
        assert_eq!(stack_of(&e), vec![20.0]);
    }

    #[test]
    fn eval_ieee_edge_cases() {
        let (e, r) = eval_str("1 0 /");
        r.unwrap();
        assert_eq!(e.current_stack().peek(), Some(f64::INFINITY));

        let (e, r) = eval_str("0 1 - sqrt");
        r.unwrap();
        assert!(e.current_stack().peek().unwrap().is_nan());
    }

    #[test]
    fn undo_fresh_is_noop() {
        let (e, r) = eval_str("undo");
        r.unwrap();
        assert!(e.current_stack().is_empty());
        assert!(!e.can_undo());
    }

    #[test]
    fn undo_restores_previous_batch() {
        let mut e = Engine::new();
        e.evaluate_batch("3 4 +").unwrap();
        assert_eq!(stack_of(&e), vec![7.0]);
        e.evaluate_batch("undo").unwrap();
        assert!(e.current_stack().is_empty());
    }

    #[test]
    fn undo_within_batch() {
        let mut e = Engine::new();
        e.evaluate_batch("1").unwrap();
        e.evaluate_batch("3 4 + undo").unwrap();
        assert_eq!(stack_of(&e), vec![1.0]);
    }

    #[test]
    fn undo_is_single_level() {
        let mut e = Engine::new();
        e.evaluate_batch("1 2").unwrap();
        e.evaluate_batch("3").unwrap();
        assert_eq!(e.previous_stack().as_slice(), &[1.0, 2.0]);

        e.evaluate_batch("undo").unwrap();
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
        assert!(e.previous_stack().is_empty());

        e.evaluate_batch("  undo  ").unwrap();
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
    }

    #[test]
    fn undo_after_failed_batch() {
        let mut e = Engine::new();
        e.evaluate_batch("9").unwrap();
        assert!(e.evaluate_batch("1 2 oops").is_err());
        assert_eq!(stack_of(&e), vec![9.0, 1.0, 2.0]);
        e.evaluate_batch("undo").unwrap();
        assert_eq!(stack_of(&e), vec![9.0]);
    }

    #[test]
    fn discard_snapshot_disables_undo() {
        let mut e = Engine::new();
        e.evaluate_batch("1").unwrap();
        e.evaluate_batch("2").unwrap();
        e.discard_snapshot();
        assert!(!e.can_undo());
        e.evaluate_batch("undo").unwrap();
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
    }

    #[test]
    fn snapshot_tracks_latest_batch() {
        let mut e = Engine::new();
        e.evaluate_batch("1").unwrap();
        e.evaluate_batch("2").unwrap();
        e.evaluate_batch("3").unwrap();
        assert_eq!(e.previous_stack().as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn shared_registry() {
        let registry = Arc::new(Registry::standard());
        let mut a = Engine::with_registry(Arc::clone(&registry));
        let mut b = Engine::with_registry(Arc::clone(&registry));
        a.evaluate_batch("1 2 +").unwrap();
        b.evaluate_batch("pi").unwrap();
        assert_eq!(stack_of(&a), vec![3.0]);
        assert_eq!(stack_of(&b), vec![std::f64::consts::PI]);
        assert!(Arc::ptr_eq(a.registry(), b.registry()));
    }

    #[test]
    fn empty_registry_knows_only_literals_and_undo() {
        let mut e = Engine::with_registry(Arc::new(Registry::empty()));
        e.evaluate_batch("1 2").unwrap();
        assert!(matches!(
            e.evaluate_batch("+"),
            Err(EvalError::UnknownOperation(_))
        ));
        e.evaluate_batch("undo").unwrap();
        assert_eq!(stack_of(&e), vec![1.0, 2.0]);
    }
}
