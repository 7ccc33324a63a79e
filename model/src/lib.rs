mod snowflake;
pub use snowflake::Snowflake;

mod type_literal;
pub use type_literal::TypeLiteral;

mod error;
pub use error::{ModelError, Result};

pub mod interaction;

mod util;
