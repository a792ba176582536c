use crate::typing::env::TypeEnv;
use crate::typing::types::TypeId;
use crate::typing::unify::TypeArena;

/// Every name bound by [`install`].
pub const PRIMITIVE_NAMES: &[&str] = &[
    "+", "-", "*", "/", "modulo", "=", "zero", "succ", "pred", "and", "or", "error", "if",
    "pair", "car", "cdr", "nil", "cons", "hd", "tl", "null?", "map", "for-each", "left",
    "right", "either", "just", "nothing", "maybe",
];

struct Signatures<'a> {
    arena: &'a mut TypeArena,
    env: TypeEnv,
}

impl Signatures<'_> {
    fn var(&mut self) -> TypeId {
        self.arena.new_variable()
    }

    fn op(&mut self, name: &str, args: Vec<TypeId>) -> TypeId {
        self.arena.new_operator(name, args)
    }

    /// `p1 -> p2 -> ... -> ret`
    fn curried(&mut self, params: &[TypeId], ret: TypeId) -> TypeId {
        params
            .iter()
            .rev()
            .fold(ret, |acc, param| self.arena.function(*param, acc))
    }

    fn bind(&mut self, name: &str, ty: TypeId) {
        self.env.insert(name, ty);
    }

    fn int_op(&mut self, name: &str, ret: TypeId) {
        let int = self.arena.int();
        let ty = self.curried(&[int, int], ret);
        self.bind(name, ty);
    }
}

/// Build the primitive signatures inside `arena`. No variable is shared
/// between two entries.
pub fn install(arena: &mut TypeArena) -> TypeEnv {
    let int = arena.int();
    let bool = arena.bool();
    let str = arena.str();
    let unit = arena.unit();
    let mut sig = Signatures {
        arena,
        env: TypeEnv::new(),
    };

    for name in ["+", "-", "*", "/", "modulo"] {
        sig.int_op(name, int);
    }
    sig.int_op("=", bool);
    let zero = sig.curried(&[int], bool);
    sig.bind("zero", zero);
    for name in ["succ", "pred"] {
        let ty = sig.curried(&[int], int);
        sig.bind(name, ty);
    }
    for name in ["and", "or"] {
        let ty = sig.curried(&[bool, bool], bool);
        sig.bind(name, ty);
    }

    let bottom = sig.var();
    let error = sig.curried(&[str], bottom);
    sig.bind("error", error);

    let a = sig.var();
    let cond = sig.curried(&[bool, a, a], a);
    sig.bind("if", cond);

    let (a, b) = (sig.var(), sig.var());
    let product = sig.arena.product(a, b);
    let pair = sig.curried(&[a, b], product);
    sig.bind("pair", pair);
    for (name, first) in [("car", true), ("cdr", false)] {
        let (a, b) = (sig.var(), sig.var());
        let product = sig.arena.product(a, b);
        let ty = sig.curried(&[product], if first { a } else { b });
        sig.bind(name, ty);
    }

    let a = sig.var();
    let nil = sig.op("list", vec![a]);
    sig.bind("nil", nil);

    let a = sig.var();
    let list = sig.op("list", vec![a]);
    let cons = sig.curried(&[a, list], list);
    sig.bind("cons", cons);

    let a = sig.var();
    let list = sig.op("list", vec![a]);
    let hd = sig.curried(&[list], a);
    sig.bind("hd", hd);

    let a = sig.var();
    let list = sig.op("list", vec![a]);
    let tl = sig.curried(&[list], list);
    sig.bind("tl", tl);

    let a = sig.var();
    let list = sig.op("list", vec![a]);
    let null = sig.curried(&[list], bool);
    sig.bind("null?", null);

    let (a, b) = (sig.var(), sig.var());
    let f = sig.curried(&[a], b);
    let list_a = sig.op("list", vec![a]);
    let list_b = sig.op("list", vec![b]);
    let map = sig.curried(&[f, list_a], list_b);
    sig.bind("map", map);

    let a = sig.var();
    let f = sig.curried(&[a], unit);
    let list = sig.op("list", vec![a]);
    let for_each = sig.curried(&[f, list], unit);
    sig.bind("for-each", for_each);

    let (a, b) = (sig.var(), sig.var());
    let either = sig.op("either", vec![a, b]);
    let left = sig.curried(&[a], either);
    sig.bind("left", left);

    let (a, b) = (sig.var(), sig.var());
    let either = sig.op("either", vec![a, b]);
    let right = sig.curried(&[b], either);
    sig.bind("right", right);

    let (a, b, c, d) = (sig.var(), sig.var(), sig.var(), sig.var());
    let input = sig.op("either", vec![a, b]);
    let on_left = sig.curried(&[a], c);
    let on_right = sig.curried(&[b], d);
    let output = sig.op("either", vec![c, d]);
    let either = sig.curried(&[input, on_left, on_right], output);
    sig.bind("either", either);

    let a = sig.var();
    let option = sig.op("option", vec![a]);
    let just = sig.curried(&[a], option);
    sig.bind("just", just);

    let a = sig.var();
    let nothing = sig.op("option", vec![a]);
    sig.bind("nothing", nothing);

    let (a, b) = (sig.var(), sig.var());
    let input = sig.op("option", vec![a]);
    let f = sig.curried(&[a], b);
    let output = sig.op("option", vec![b]);
    let maybe = sig.curried(&[input, f], output);
    sig.bind("maybe", maybe);

    tracing::debug!(count = sig.env.len(), "installed primitive environment");
    sig.env
}
