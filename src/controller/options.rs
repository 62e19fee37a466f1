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

use std::time::Duration;

use super::debounce::DEFAULT_DEBOUNCE;

/// Options of [`super::EditSession::attach`].
#[derive(Debug)]
pub struct AttachOptions<S> {
    /// Receives `+380XXXXXXXXX` or an empty string.
    pub e164_sink: Option<S>,
    /// Receives the last 9 digits or an empty string.
    pub last9_sink: Option<S>,
    /// Block submission of incomplete numbers.
    pub require_valid_on_submit: bool,
    /// Delay of the deferred pretty pass.
    pub debounce: Duration,
}

impl<S> Default for AttachOptions<S> {
    fn default() -> Self {
        Self {
            e164_sink: None,
            last9_sink: None,
            require_valid_on_submit: true,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl<S> AttachOptions<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_e164_sink(mut self, sink: S) -> Self {
        self.e164_sink = Some(sink);
        self
    }

    pub fn with_last9_sink(mut self, sink: S) -> Self {
        self.last9_sink = Some(sink);
        self
    }

    pub fn with_require_valid_on_submit(mut self, require: bool) -> Self {
        self.require_valid_on_submit = require;
        self
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }
}
