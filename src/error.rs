// Copyright 2025 The mathbin authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// A human-readable error message.
///
/// Rendering itself cannot fail; this type is for the tooling around the
/// views (CLI, preview server).
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorReport {}

impl From<std::io::Error> for ErrorReport {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: &str) -> Fallible<T> {
    Err(ErrorReport::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail("something went wrong");
        assert_eq!(result.unwrap_err().to_string(), "something went wrong");
    }
}
