use hm_core::{read_all, read_one};
use hm_typing::{
    analyze, Constructor, NonGeneric, TypeArena, TypeEnv, TypeError, TypeInferencer, TypeTerm,
};
use pretty_assertions::assert_eq;

#[test]
fn mismatch_reports_argument_before_function() {
    let node = read_one("(lambda (f) (pair (f 4) (f #t)))").unwrap();
    let err = analyze(&node).unwrap_err();
    assert_eq!(
        err,
        TypeError::TypeMismatch {
            left: Constructor::new("bool", 0),
            right: Constructor::new("int", 0),
        }
    );
}

#[test]
fn applying_a_non_function_fails() {
    let node = read_one("(5 5)").unwrap();
    let err = analyze(&node).unwrap_err();
    assert_eq!(
        err,
        TypeError::TypeMismatch {
            left: Constructor::new("->", 2),
            right: Constructor::new("int", 0),
        }
    );
}

#[test]
fn undeclared_symbol_is_unbound() {
    let node = read_one("(let ((x 1)) (succ y))").unwrap();
    let err = analyze(&node).unwrap_err();
    let TypeError::UnboundSymbol { name, available } = err else {
        panic!("expected an unbound symbol error");
    };
    assert_eq!(name, "y");
    assert!(available.contains(&"x".to_string()));
    assert!(available.contains(&"succ".to_string()));
}

#[test]
fn analyses_are_independent() {
    let nodes = read_all("(lambda (x) x) (succ 1) (lambda (x) x)").unwrap();
    let rendered: Vec<String> = nodes
        .iter()
        .map(|node| analyze(node).unwrap().to_string())
        .collect();
    assert_eq!(rendered, vec!["(a -> a)", "int", "(a -> a)"]);
}

#[test]
fn primitives_are_instantiated_per_use() {
    let node = read_one("(pair (hd (cons 1 nil)) (hd (cons #t nil)))").unwrap();
    assert_eq!(analyze(&node).unwrap().to_string(), "(int * bool)");
}

#[test]
fn letrec_supports_mutual_recursion() {
    let node = read_one(
        "(letrec ((even? (lambda (n) (if (zero n) #t (odd? (pred n)))))
                  (odd? (lambda (n) (if (zero n) #f (even? (pred n))))))
           (pair even? odd?))",
    )
    .unwrap();
    assert_eq!(
        analyze(&node).unwrap().to_string(),
        "((int -> bool) * (int -> bool))"
    );
}

#[test]
fn letrec_bindings_are_monomorphic_inside_their_group() {
    let node = read_one("(letrec ((id (lambda (x) x)) (use (pair (id 1) (id #t)))) use)").unwrap();
    assert!(matches!(
        analyze(&node).unwrap_err(),
        TypeError::TypeMismatch { .. }
    ));
}

#[test]
fn letrec_results_generalize_in_the_body() {
    let node = read_one("(letrec ((id (lambda (x) x))) (pair (id 1) (id #t)))").unwrap();
    assert_eq!(analyze(&node).unwrap().to_string(), "(int * bool)");
}

#[test]
fn infer_in_uses_caller_scope() {
    let mut inferencer = TypeInferencer::new();
    let pinned = inferencer.arena_mut().new_variable();
    let env = inferencer.primitives().extend("v", pinned);
    let non_generic = NonGeneric::new().with(pinned);

    let node = read_one("(pair (succ v) v)").unwrap();
    let ty = inferencer.infer_in(&node, &env, &non_generic).unwrap();
    assert_eq!(inferencer.render(ty), "(int * int)");
    assert_eq!(inferencer.render(pinned), "int");
}

#[test]
fn generic_scope_binding_is_copied() {
    let mut inferencer = TypeInferencer::new();
    let free = inferencer.arena_mut().new_variable();
    let env = TypeEnv::new()
        .extend("v", free)
        .extend("succ", inferencer.primitives().lookup("succ").unwrap());

    let node = read_one("(succ v)").unwrap();
    inferencer
        .infer_in(&node, &env, &NonGeneric::new())
        .unwrap();
    assert_eq!(inferencer.arena().term(free), &TypeTerm::Variable(None));
}

#[test]
fn unification_is_order_independent() {
    for flip in [false, true] {
        let mut arena = TypeArena::new();
        let a = arena.new_variable();
        let b = arena.new_variable();
        let left = arena.function(a, arena.int());
        let right = arena.function(arena.bool(), b);
        if flip {
            arena.unify(right, left).unwrap();
        } else {
            arena.unify(left, right).unwrap();
        }
        assert!(arena.structurally_equal(left, right));
        assert_eq!(arena.display(left).to_string(), "(bool -> int)");
        let resolved = arena.resolve(a);
        assert_eq!(arena.resolve(resolved), resolved);
    }
}
