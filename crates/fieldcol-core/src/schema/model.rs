use super::Field;

use std::any::Any;

/// Upcast to `Any` for trait objects whose concrete type is `'static`.
pub trait AsAny {
    fn as_any(&self) -> &(dyn Any + Send + Sync);
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}

/// A struct whose fields map to database columns.
///
/// Usually implemented with `#[derive(Model)]`. Implementations list every
/// declared field in declaration order, borrowing the field slots of `self`:
/// column tokens are derived from those borrows, so they must point into
/// `self` and not into a copy.
pub trait Model: AsAny + Send + Sync + 'static {
    /// The declared fields of this instance, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Name of the model type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<M: Model> Model for Box<M> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
