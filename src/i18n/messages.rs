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

/// Shown by the host when submission is blocked because the number is
/// incomplete or invalid.
pub const INVALID_PHONE_MESSAGE: &str =
    "Введіть номер у форматі +380XXXXXXXXX, 0XXXXXXXXX або 80XXXXXXXXX";

/// Placeholder applied to fields that do not have one.
pub const PHONE_PLACEHOLDER: &str = "+380 97 878 80 99";
