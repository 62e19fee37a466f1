// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod errors;
pub mod memory;
pub mod selector;

use std::time::Duration;

use log::{debug, warn};

use crate::{
    controller::{
        debounce::{SystemClock, DEFAULT_DEBOUNCE},
        options::AttachOptions,
        session::EditSession,
    },
    i18n::messages::PHONE_PLACEHOLDER,
    interfaces::{Clock, InputHints, TextField, ValueSink},
    normalizer::helper_constants::PRETTY_LENGTH,
};
use errors::{InitError, SelectorError};

/// Fields carrying this marker are attached by [`auto_init`].
pub const AUTO_INIT_SELECTOR: &str = "input[data-phone]";

pub const DEFAULT_SELECTOR: &str = "#phone";
pub const DEFAULT_E164_NAME: &str = "phone_e164";
pub const DEFAULT_LAST9_NAME: &str = "phone_last9";

/// Attribute defaults applied to every attached field.
pub const PHONE_INPUT_HINTS: InputHints = InputHints {
    input_mode: "tel",
    autocomplete: "tel",
    max_length: PRETTY_LENGTH,
    placeholder: PHONE_PLACEHOLDER,
};

/// Host document the binding adapter looks fields up in.
pub trait Document {
    type Field: TextField;
    type Sink: ValueSink;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Field>, SelectorError>;

    /// Sink field named `name` next to `field`, created if missing.
    /// `None` if the field has no enclosing form.
    fn sink_for(&mut self, field: &Self::Field, name: &str) -> Option<Self::Sink>;
}

/// Options of [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub selector: String,
    /// Name of the sink receiving `+380XXXXXXXXX`.
    pub e164_name: String,
    /// Name of the sink receiving the last 9 digits.
    pub last9_name: String,
    pub require_valid_on_submit: bool,
    pub debounce: Duration,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_owned(),
            e164_name: DEFAULT_E164_NAME.to_owned(),
            last9_name: DEFAULT_LAST9_NAME.to_owned(),
            require_valid_on_submit: true,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl InitOptions {
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_sink_names(mut self, e164_name: impl Into<String>, last9_name: impl Into<String>) -> Self {
        self.e164_name = e164_name.into();
        self.last9_name = last9_name.into();
        self
    }

    pub fn with_require_valid_on_submit(mut self, require: bool) -> Self {
        self.require_valid_on_submit = require;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    fn validate(&self) -> Result<(), InitError> {
        if self.e164_name.trim().is_empty() {
            return Err(InitError::EmptySinkName("e164"));
        }
        if self.last9_name.trim().is_empty() {
            return Err(InitError::EmptySinkName("last9"));
        }
        Ok(())
    }
}

pub type Sessions<D> = Vec<EditSession<<D as Document>::Field, <D as Document>::Sink>>;

/// Attaches an edit session to every field matching `options.selector`.
/// No match is not an error: the result is just empty.
pub fn init<D: Document>(document: &mut D, options: &InitOptions) -> Result<Sessions<D>, InitError> {
    init_with_clock(document, options, SystemClock)
}

pub fn init_with_clock<D, C>(
    document: &mut D,
    options: &InitOptions,
    clock: C,
) -> Result<Sessions<D>, InitError>
where
    D: Document,
    C: Clock + Clone + 'static,
{
    options.validate()?;
    let fields = document.query_selector_all(&options.selector)?;
    if fields.is_empty() {
        debug!("No phone fields match {:?}", options.selector);
        return Ok(Vec::new());
    }

    let mut sessions = Vec::with_capacity(fields.len());
    for mut field in fields {
        field.apply_input_hints(&PHONE_INPUT_HINTS);

        let e164_sink = document.sink_for(&field, &options.e164_name);
        let last9_sink = document.sink_for(&field, &options.last9_name);
        if e164_sink.is_none() || last9_sink.is_none() {
            warn!("Phone field matching {:?} has no form, derived values are dropped", options.selector);
        }

        let attach_options = AttachOptions {
            e164_sink,
            last9_sink,
            require_valid_on_submit: options.require_valid_on_submit,
            debounce: options.debounce,
        };
        sessions.push(EditSession::attach_with_clock(field, attach_options, Box::new(clock.clone())));
    }
    debug!("Attached {} phone field(s) for {:?}", sessions.len(), options.selector);
    Ok(sessions)
}

/// Page-ready discovery: attaches every marker-attributed field with the
/// default options.
pub fn auto_init<D: Document>(document: &mut D) -> Result<Sessions<D>, InitError> {
    init(document, &InitOptions::default().with_selector(AUTO_INIT_SELECTOR))
}
