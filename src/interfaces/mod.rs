use std::time::Instant;

use crate::controller::errors::PlatformError;

/// Attribute defaults a host may apply to a phone field when it is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHints {
    pub input_mode: &'static str,
    pub autocomplete: &'static str,
    pub max_length: usize,
    pub placeholder: &'static str,
}

/// Text-input-like target the edit session drives.
///
/// Selection offsets are char offsets into [`TextField::value`]. Everything
/// returning `Result` is optional platform functionality: a failure is
/// logged by the session and never interrupts the pipeline.
pub trait TextField {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Current selection as `(start, end)`. `None` means the host does not
    /// track one, in which case the caret is assumed at the end of the text.
    fn selection(&self) -> Option<(usize, usize)>;

    fn set_selection_range(&mut self, start: usize, end: usize) -> Result<(), PlatformError>;

    /// Sets the validation message shown by the host. Empty string clears it.
    fn set_custom_validity(&mut self, message: &str) -> Result<(), PlatformError>;

    fn report_validity(&mut self) -> Result<(), PlatformError>;

    /// Applies attribute defaults. Only the input mode overrides an existing
    /// attribute; autocomplete, max length and placeholder are kept if set.
    fn apply_input_hints(&mut self, _hints: &InputHints) {}
}

/// Auxiliary value carrier receiving a derived value (e164 or last 9 digits).
pub trait ValueSink {
    fn set_value(&mut self, value: &str);
}

/// Time source for deferred passes.
pub trait Clock {
    fn now(&self) -> Instant;
}
