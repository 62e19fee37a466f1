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

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{errors::SelectorError, selector::Selector, Document};
use crate::{
    controller::{
        errors::PlatformError,
        enums::{EditDecision, InputKind},
        session::EditSession,
    },
    interfaces::{InputHints, TextField, ValueSink},
    string_util::splice_chars,
};

const INPUT_TAG: &str = "input";

/// Identifies a form inside a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(usize);

#[derive(Debug, Default)]
struct InputElement {
    attributes: HashMap<String, String>,
    value: String,
    /// `None` keeps the caret at the end of the value.
    selection: Option<(usize, usize)>,
    validity_message: String,
    validity_reports: usize,
    form: Option<FormId>,
}

/// Shared handle to an `<input>` of a [`MemoryDocument`].
///
/// Clones point to the same element, so a host keeps one handle while the
/// edit session owns another.
#[derive(Debug, Clone, Default)]
pub struct InputHandle(Rc<RefCell<InputElement>>);

impl InputHandle {
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn form(&self) -> Option<FormId> {
        self.0.borrow().form
    }

    pub fn validity_message(&self) -> String {
        self.0.borrow().validity_message.clone()
    }

    /// How many times the host was asked to show the validation message.
    pub fn validity_reports(&self) -> usize {
        self.0.borrow().validity_reports
    }

    pub fn set_selection(&self, start: usize, end: usize) {
        self.0.borrow_mut().selection = Some((start, end));
    }

    pub fn caret(&self) -> Option<(usize, usize)> {
        self.0.borrow().selection
    }

    /// Default host insertion: replaces the selection and puts the caret
    /// right after the inserted text.
    pub fn insert_text(&self, text: &str) {
        let mut element = self.0.borrow_mut();
        let len = element.value.chars().count();
        let (start, end) = element.selection.unwrap_or((len, len));
        element.value = splice_chars(&element.value, start, end, text);
        let caret = start.min(len) + text.chars().count();
        element.selection = Some((caret, caret));
    }

    /// Default host backspace.
    pub fn delete_backward(&self) {
        let mut element = self.0.borrow_mut();
        let len = element.value.chars().count();
        let (start, end) = element.selection.unwrap_or((len, len));
        let (start, end) = if start == end {
            (start.min(len).saturating_sub(1), end.min(len))
        } else {
            (start, end)
        };
        element.value = splice_chars(&element.value, start, end, "");
        element.selection = Some((start, start));
    }

    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(INPUT_TAG, &self.0.borrow().attributes)
    }

    fn is_same(&self, other: &InputHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl TextField for InputHandle {
    fn value(&self) -> String {
        InputHandle::value(self)
    }

    /// Like a DOM input, a programmatic write drops the selection and
    /// leaves the caret at the end.
    fn set_value(&mut self, value: &str) {
        let mut element = self.0.borrow_mut();
        element.value = value.to_owned();
        element.selection = None;
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.0.borrow().selection
    }

    fn set_selection_range(&mut self, start: usize, end: usize) -> Result<(), PlatformError> {
        let mut element = self.0.borrow_mut();
        let len = element.value.chars().count();
        if start > end || end > len {
            return Err(PlatformError::SelectionOutOfBounds { start, end });
        }
        element.selection = Some((start, end));
        Ok(())
    }

    fn set_custom_validity(&mut self, message: &str) -> Result<(), PlatformError> {
        self.0.borrow_mut().validity_message = message.to_owned();
        Ok(())
    }

    fn report_validity(&mut self) -> Result<(), PlatformError> {
        self.0.borrow_mut().validity_reports += 1;
        Ok(())
    }

    fn apply_input_hints(&mut self, hints: &InputHints) {
        let mut element = self.0.borrow_mut();
        let attributes = &mut element.attributes;
        attributes.insert("inputmode".to_owned(), hints.input_mode.to_owned());
        attributes
            .entry("autocomplete".to_owned())
            .or_insert_with(|| hints.autocomplete.to_owned());
        attributes
            .entry("maxlength".to_owned())
            .or_insert_with(|| hints.max_length.to_string());
        attributes
            .entry("placeholder".to_owned())
            .or_insert_with(|| hints.placeholder.to_owned());
    }
}

impl ValueSink for InputHandle {
    fn set_value(&mut self, value: &str) {
        self.0.borrow_mut().value = value.to_owned();
    }
}

/// In-memory document of forms and inputs, for hosts without a DOM and
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    form_count: usize,
    inputs: Vec<InputHandle>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_form(&mut self) -> FormId {
        self.form_count += 1;
        FormId(self.form_count - 1)
    }

    pub fn add_input(&mut self, form: Option<FormId>, attributes: &[(&str, &str)]) -> InputHandle {
        let element = InputElement {
            attributes: attributes
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            value: attributes
                .iter()
                .find(|(name, _)| *name == "value")
                .map(|(_, value)| value.to_string())
                .unwrap_or_default(),
            form,
            ..Default::default()
        };
        let handle = InputHandle(Rc::new(RefCell::new(element)));
        self.inputs.push(handle.clone());
        handle
    }

    /// First input of `form` carrying `name`.
    pub fn input_by_name(&self, form: FormId, name: &str) -> Option<InputHandle> {
        self.inputs
            .iter()
            .find(|input| {
                input.form() == Some(form) && input.attribute("name").as_deref() == Some(name)
            })
            .cloned()
    }

    pub fn inputs(&self) -> &[InputHandle] {
        &self.inputs
    }

    pub fn contains(&self, input: &InputHandle) -> bool {
        self.inputs.iter().any(|i| i.is_same(input))
    }
}

impl Document for MemoryDocument {
    type Field = InputHandle;
    type Sink = InputHandle;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<InputHandle>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .inputs
            .iter()
            .filter(|input| input.matches(&selector))
            .cloned()
            .collect())
    }

    /// Hidden input named `name` in the field's form, created if missing.
    /// Fields outside of any form get no sink.
    fn sink_for(&mut self, field: &InputHandle, name: &str) -> Option<InputHandle> {
        let form = field.form()?;
        if let Some(existing) = self.input_by_name(form, name) {
            return Some(existing);
        }
        Some(self.add_input(Some(form), &[("type", "hidden"), ("name", name)]))
    }
}

/// Types `text` one char at a time the way a host would: every char is
/// offered to [`EditSession::before_input`], applied if accepted and
/// followed by [`EditSession::input`]. Returns how many chars landed.
pub fn type_text<S: ValueSink>(session: &mut EditSession<InputHandle, S>, text: &str) -> usize {
    let mut buf = [0u8; 4];
    let mut accepted = 0;
    for c in text.chars() {
        let data: &str = c.encode_utf8(&mut buf);
        if session.before_input(InputKind::Insert, Some(data)) == EditDecision::Reject {
            continue;
        }
        session.field().insert_text(data);
        session.input();
        accepted += 1;
    }
    accepted
}
