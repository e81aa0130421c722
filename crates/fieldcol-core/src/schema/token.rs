use std::any::{Any, TypeId};
use std::fmt;

/// Identifies one field slot of one live model instance.
///
/// A token is the address of the field inside its instance together with the
/// field's type, so a leaf field never shares a token with the struct that
/// starts at the same address. Tokens only stay meaningful while the instance
/// is alive; column resolution relies on the canonical `'static` instance of
/// each model.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldToken {
    addr: usize,
    ty: TypeId,
}

impl FieldToken {
    /// Token for the field slot `field` points to.
    pub fn of<F: Any>(field: &F) -> FieldToken {
        FieldToken {
            addr: std::ptr::from_ref(field) as usize,
            ty: TypeId::of::<F>(),
        }
    }

    /// Address of the field slot.
    pub fn addr(&self) -> usize {
        self.addr
    }
}

impl fmt::Debug for FieldToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldToken({:#x})", self.addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pair {
        first: u32,
        second: u32,
    }

    #[test]
    fn same_slot_same_token() {
        let pair = Pair::default();
        assert_eq!(FieldToken::of(&pair.first), FieldToken::of(&pair.first));
    }

    #[test]
    fn distinct_slots_distinct_tokens() {
        let pair = Pair::default();
        assert_ne!(FieldToken::of(&pair.first), FieldToken::of(&pair.second));
    }

    #[test]
    fn struct_and_first_field_differ() {
        let pair = Pair::default();
        let whole = FieldToken::of(&pair);
        let first = FieldToken::of(&pair.first);

        // The addresses may coincide, the types keep the tokens apart.
        assert_ne!(whole, first);
    }

    #[test]
    fn distinct_instances_distinct_tokens() {
        let a = Pair::default();
        let b = Pair::default();
        assert_ne!(FieldToken::of(&a.first), FieldToken::of(&b.first));
    }
}
