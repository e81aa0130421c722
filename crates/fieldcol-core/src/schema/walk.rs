use super::{FieldDecl, FieldKind, FieldToken, Model};

/// A column-backed field reached while flattening a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub token: FieldToken,
    pub decl: FieldDecl,
}

/// Flattens `model` into its column-backed leaf fields.
///
/// Embedded sub-structures are descended into recursively, at any depth, using
/// the slots of `model` itself so every token points into the given instance.
/// Leaves come out in declaration order, embedded fields in place of the field
/// that embeds them.
pub fn leaves(model: &dyn Model) -> Vec<Leaf> {
    let mut out = vec![];
    collect(model, &mut out);
    out
}

fn collect(model: &dyn Model, out: &mut Vec<Leaf>) {
    for field in model.fields() {
        match field.kind {
            FieldKind::Column(token) => out.push(Leaf {
                token,
                decl: field.decl,
            }),
            FieldKind::Embedded(embedded) => collect(embedded, out),
            FieldKind::ZeroSized => {}
        }
    }
}
