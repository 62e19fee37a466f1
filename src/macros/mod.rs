/// Runs an optional host operation returning `Result<(), PlatformError>`
/// and logs a failure instead of propagating it.
///
/// Hosts may not support selection ranges or validation messages at all,
/// and none of those calls may abort a normalization pass.
macro_rules! best_effort {
    ($op:expr, $what:literal) => {{
        if let Err(err) = $op {
            log::debug!(concat!($what, " skipped: {}"), err);
        }
    }};
}

pub(crate) use best_effort;
