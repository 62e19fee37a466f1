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

use strum::EnumIter;

/// Kind of a pending edit, as reported by the host before it lands.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Typed or dropped text.
    Insert,
    /// Clipboard paste. Capped separately by [`super::EditSession::paste`].
    InsertFromPaste,
    /// Any deletion (backward, forward, by word, cut, ...).
    Delete,
    HistoryUndo,
    HistoryRedo,
}

impl InputKind {
    /// Maps a DOM `InputEvent.inputType` name.
    ///
    /// Unknown or empty names are treated as insertions, so they go
    /// through the cap check.
    pub fn from_dom(input_type: &str) -> Self {
        match input_type {
            "insertFromPaste" => InputKind::InsertFromPaste,
            "historyUndo" => InputKind::HistoryUndo,
            "historyRedo" => InputKind::HistoryRedo,
            it if it.contains("delete") => InputKind::Delete,
            _ => InputKind::Insert,
        }
    }

    /// Edits that only remove or restore text are never capped.
    pub fn is_exempt_from_cap(self) -> bool {
        matches!(
            self,
            InputKind::Delete | InputKind::HistoryUndo | InputKind::HistoryRedo
        )
    }
}

/// Verdict of the pre-insertion check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditDecision {
    /// Let the host apply the edit, then report [`super::EditSession::input`].
    Accept,
    /// The edit would overflow the digit cap; the host must drop it.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Host performs its default paste and then reports an input event.
    Default,
    /// The session already spliced a truncated paste into the field and
    /// ran the typing pipeline. The host must suppress its own paste.
    Handled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed,
    /// Number is incomplete or invalid; the validation message is set.
    Blocked,
}

/// Interaction phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No deferred pass pending.
    Idle,
    /// Typing; a deferred pretty pass is armed.
    Typing,
}
