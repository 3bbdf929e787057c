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

/// All dynamic content for one render call.
///
/// The caller fills this record once per request and hands it to the view
/// functions, which consume it synchronously and hold no state afterwards.
/// Every string field is interpolated into the document verbatim: the
/// caller is responsible for escaping anything user-supplied before it
/// goes into the bag. Empty strings and `false` are the defaults and make
/// the corresponding fragment degrade to "omit" rather than fail.
#[derive(Clone, Debug, Default)]
pub struct PageBag {
    /// Displayable title of the post, used in the document title.
    pub page_title: String,
    /// Title shown in the `outputTitle` heading of the output sheet.
    pub output_title: String,
    /// CSS class for the `outputTitle` heading.
    pub output_title_class: String,
    /// Author name shown in the `outputName` heading.
    pub output_name: String,
    /// CSS class for the `outputName` heading.
    pub output_name_class: String,
    /// Post source code prefilled into the textarea.
    pub input_code: String,
    /// Post title prefilled into the title field.
    pub input_title: String,
    /// Author name prefilled into the name field.
    pub input_name: String,
    /// Whether the secrecy checkbox is checked.
    pub secrecy: bool,
    /// ID of the post being edited; empty for a new post. Drives the
    /// submit button label.
    pub post_id: String,
    /// Date of the post, shown in the output sheet and carried in a
    /// hidden form field.
    pub date: String,
    /// Pre-rendered HTML of the post for the `outputCode` container.
    pub output_code: String,
    /// Source of the static-preview image, if one was rendered.
    pub preview_image_url: String,
    /// Permanent URL of the post; empty until the post is saved.
    pub post_url: String,
    /// URL the input form posts to.
    pub action_url: String,
}
