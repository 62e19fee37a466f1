mod interfaces;
pub mod normalizer;
pub mod controller;
pub mod binding;
pub mod i18n;
pub(crate) mod string_util;

/// Small macros for the places where the same few lines would otherwise
/// repeat, e.g. host calls that may fail without consequences.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::{Clock, InputHints, TextField, ValueSink};
pub use normalizer::{cap_for, format_pretty_ua, normalize, Dialect, NormalizedNumber};
pub use controller::{
    render_value, AttachOptions, EditDecision, EditSession, InputKind, ManualClock, PasteOutcome,
    Phase, RenderFlags, SubmitOutcome, SystemClock,
};
pub use binding::{auto_init, init, Document, InitOptions};
