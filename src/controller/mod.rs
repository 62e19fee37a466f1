pub mod errors;
pub mod enums;
pub mod render;
pub mod debounce;
pub mod options;
pub mod session;

pub use debounce::{ManualClock, SystemClock, DEFAULT_DEBOUNCE};
pub use enums::{EditDecision, InputKind, PasteOutcome, Phase, SubmitOutcome};
pub use options::AttachOptions;
pub use render::{render_value, RenderFlags};
pub use session::EditSession;
