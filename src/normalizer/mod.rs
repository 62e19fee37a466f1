mod helper_functions;
pub mod helper_constants;
pub mod enums;
pub mod normalizer;
pub mod formatter;

pub use enums::Dialect;
pub use formatter::format_pretty_ua;
pub use helper_functions::cap_for;
pub use normalizer::{normalize, NormalizedNumber};
