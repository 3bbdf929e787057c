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

//! HTML views for a math/markdown pastebin: an input page for composing
//! posts, an output sheet for viewing rendered posts, and error pages.
//! Rendering is a pure transformation from a [`bag::PageBag`], an error
//! list, and a static-preview flag to one HTML document; the controller
//! that fills the bag lives elsewhere. The [`preview`] module runs a small
//! local server for working on the views.

pub mod bag;
pub mod cli;
pub mod error;
pub mod markdown;
pub mod preview;
pub mod theme;
pub mod view;
