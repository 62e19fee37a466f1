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

use std::time::Instant;

use log::{debug, trace};

use super::{
    debounce::{Debouncer, SystemClock},
    enums::{EditDecision, InputKind, PasteOutcome, Phase, SubmitOutcome},
    options::AttachOptions,
    render::{render_value, RenderFlags},
};
use crate::{
    i18n::messages::INVALID_PHONE_MESSAGE,
    interfaces::{Clock, TextField, ValueSink},
    macros::best_effort,
    normalizer::{cap_for, normalize, NormalizedNumber},
    string_util::{phone_digits, splice_chars},
};

/// Live editing state of one phone field.
///
/// The host forwards the field's events to the matching methods. Sinks are
/// written before every event method returns; only the pretty display may
/// lag behind, until [`EditSession::poll`] runs the deferred pass.
pub struct EditSession<F, S> {
    field: F,
    e164_sink: Option<S>,
    last9_sink: Option<S>,
    require_valid_on_submit: bool,

    /// Pending deferred pretty pass.
    debouncer: Debouncer,
    clock: Box<dyn Clock>,

    /// Result of the last completed pass.
    last: NormalizedNumber,
}

impl<F: TextField, S: ValueSink> EditSession<F, S> {
    pub fn attach(field: F, options: AttachOptions<S>) -> Self {
        Self::attach_with_clock(field, options, Box::new(SystemClock))
    }

    /// Attaches with an explicit time source and synchronizes the field and
    /// sinks with its current value.
    pub fn attach_with_clock(field: F, options: AttachOptions<S>, clock: Box<dyn Clock>) -> Self {
        let mut session = Self {
            field,
            e164_sink: options.e164_sink,
            last9_sink: options.last9_sink,
            require_valid_on_submit: options.require_valid_on_submit,
            debouncer: Debouncer::new(options.debounce),
            clock,
            last: NormalizedNumber::default(),
        };
        session.apply_mask(false);
        session
    }

    /// Checks an insertion before the host applies it.
    ///
    /// The prospective text is the current value with `data` spliced over
    /// the selection. If its digits overflow the cap of the dialect they are
    /// in, the edit is rejected. Deletions and history edits always pass,
    /// pastes are left to [`EditSession::paste`].
    pub fn before_input(&self, kind: InputKind, data: Option<&str>) -> EditDecision {
        if kind.is_exempt_from_cap() || kind == InputKind::InsertFromPaste {
            return EditDecision::Accept;
        }

        let current = self.field.value();
        let (sel_start, sel_end) = self.selection_or_end(&current);
        let next = splice_chars(&current, sel_start, sel_end, data.unwrap_or_default());
        let digits = phone_digits(&next);
        let cap = cap_for(&digits);

        if digits.len() > cap {
            debug!("Rejected {:?} edit: {} digits over cap {}", kind, digits.len(), cap);
            return EditDecision::Reject;
        }
        EditDecision::Accept
    }

    /// Handles a clipboard paste.
    ///
    /// A paste whose digits overflow the cap of their own dialect is taken
    /// over: only the first `cap` digits are spliced in at the selection and
    /// the typing pipeline runs. Anything else is left to the host.
    pub fn paste(&mut self, text: &str) -> PasteOutcome {
        let mut pasted = phone_digits(text);
        let cap = cap_for(&pasted);
        if pasted.len() <= cap {
            return PasteOutcome::Default;
        }
        pasted.truncate(cap);

        let current = self.field.value();
        let (sel_start, sel_end) = self.selection_or_end(&current);
        let next = splice_chars(&current, sel_start, sel_end, &pasted);
        debug!("Truncated paste to {} digits", cap);

        self.field.set_value(&next);
        self.input();
        PasteOutcome::Handled
    }

    /// Typing pipeline, run after every change of the field's text.
    pub fn input(&mut self) {
        best_effort!(self.field.set_custom_validity(""), "Clearing validation message");
        self.debouncer.cancel();

        let raw = self.field.value();
        let norm = normalize(&raw);
        let display = render_value(&norm, &raw, RenderFlags::for_raw(&raw, false));
        if display != raw {
            self.field.set_value(&display);
        }

        self.write_sinks(&norm);
        self.last = norm;
        self.debouncer.arm(self.clock.now());
    }

    /// Focus loss: drop the pending pass and pretty-print right away.
    pub fn blur(&mut self) {
        best_effort!(self.field.set_custom_validity(""), "Clearing validation message");
        self.debouncer.cancel();
        self.apply_mask(true);
    }

    /// Form submission. Runs the final pass and decides whether the form
    /// may be sent.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.debouncer.cancel();
        self.apply_mask(true);

        if !self.require_valid_on_submit {
            return SubmitOutcome::Proceed;
        }
        if self.last.e164.is_empty() {
            debug!("Blocked submit of incomplete number {:?}", self.last.digits);
            best_effort!(
                self.field.set_custom_validity(INVALID_PHONE_MESSAGE),
                "Setting validation message"
            );
            best_effort!(self.field.report_validity(), "Reporting validity");
            return SubmitOutcome::Blocked;
        }
        best_effort!(self.field.set_custom_validity(""), "Clearing validation message");
        SubmitOutcome::Proceed
    }

    /// Runs the deferred pass if it is due. Returns whether it ran.
    pub fn poll(&mut self) -> bool {
        if !self.debouncer.take_due(self.clock.now()) {
            return false;
        }
        self.apply_mask(false);
        true
    }

    /// When the host should call [`EditSession::poll`] next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn phase(&self) -> Phase {
        match self.debouncer.deadline() {
            Some(_) => Phase::Typing,
            None => Phase::Idle,
        }
    }

    pub fn snapshot(&self) -> &NormalizedNumber {
        &self.last
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Detaches from the field. A pending deferred pass is dropped.
    pub fn dispose(mut self) -> F {
        if self.debouncer.cancel() {
            trace!("Dropped pending pass on dispose");
        }
        self.field
    }

    fn apply_mask(&mut self, force_pretty: bool) {
        let raw = self.field.value();
        let norm = normalize(&raw);
        self.write_sinks(&norm);

        let rendered = render_value(&norm, &raw, RenderFlags::for_raw(&raw, force_pretty));
        if rendered != raw {
            trace!("Rendering {:?} as {:?}", raw, rendered);
            self.field.set_value(&rendered);
            let end = rendered.chars().count();
            best_effort!(self.field.set_selection_range(end, end), "Moving cursor");
        }
        self.last = norm;
    }

    fn write_sinks(&mut self, norm: &NormalizedNumber) {
        if let Some(sink) = self.e164_sink.as_mut() {
            sink.set_value(&norm.e164);
        }
        if let Some(sink) = self.last9_sink.as_mut() {
            sink.set_value(&norm.last9);
        }
    }

    fn selection_or_end(&self, current: &str) -> (usize, usize) {
        self.field.selection().unwrap_or_else(|| {
            let end = current.chars().count();
            (end, end)
        })
    }
}
