mod field;
pub use field::{Field, FieldDecl, FieldKind};

mod model;
pub use model::{AsAny, Model};

mod tag;
pub use tag::TagSettings;

mod token;
pub use token::FieldToken;

mod walk;
pub use walk::{leaves, Leaf};
