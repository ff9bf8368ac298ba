// Core data records for the Formdesk API

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// API version tag, embedded as the first path segment of every request
/// (e.g. `/latest/forms`). The service also echoes it inside several
/// response records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The rolling "latest" API revision
    pub fn latest() -> Self {
        Self("latest".to_string())
    }

    /// The pinned 0.4 API revision
    pub fn v0_4() -> Self {
        Self("v0.4".to_string())
    }

    /// A version tag not covered by the named constructors
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured failure description returned by the service on non-success
/// responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorPayload {
    /// Machine-readable error message
    pub error: String,

    /// Name of the offending request field, if any
    pub field: String,

    /// Human-readable description of the failure
    pub description: String,
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error: {:?}; Field: {:?}; Description: {:?}",
            self.error, self.field, self.description
        )
    }
}

/// Service metadata returned by the base endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    pub documentation: String,
    pub support: String,

    /// Server-side time of the response
    pub time: Timestamp,
}

/// A form to be created
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    /// The title of the form (required)
    pub title: String,

    /// The ordered fields the form is made of (required)
    pub fields: Vec<Field>,

    /// Free-form tags attached to the form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// ID of the design to render the form with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_id: Option<String>,

    /// Where responses are POSTed when a respondent submits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_submit_url: Option<String>,

    /// IDs of the URL bindings the form should be reachable at
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub url_ids: Vec<String>,

    /// Enables or disables the service branding on the rendered form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<bool>,

    /// Conditional jumps between fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logic_jumps: Vec<LogicJump>,
}

/// A single field of a form.
///
/// `field_type` and `question` are required; every other attribute applies
/// only to some field types and is omitted from the wire when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    /// What kind of field this is (required)
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// The main question text (required)
    pub question: String,

    /// Sub-text shown below the question in a smaller font
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the respondent must answer this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Free-form tags attached to the field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Unique reference to this field, used as a logic-jump anchor
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    // short_text, long_text
    /// Maximum number of characters accepted as an answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,

    // multiple_choice, picture_choice, dropdown
    /// Choices the respondent can select from
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    /// Whether more than one choice may be selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_multiple_selections: Option<bool>,

    /// Shuffle the choice order on every load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,

    /// One choice per row instead of packing as many as fit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<bool>,

    /// Append an automatic "Other" choice backed by a free-text input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_other_choice: Option<bool>,

    // picture_choice
    /// Show labels beneath the picture choices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,

    /// Render the picture choices at large size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supersize: Option<bool>,

    // statement
    /// Text of the button that advances to the next field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,

    /// Do not surround the statement with quotation marks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_marks: Option<bool>,

    // dropdown
    /// Sort the choices alphabetically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabetical_order: Option<bool>,

    // number
    /// Smallest value accepted as an answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,

    /// Largest value accepted as an answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,

    // rating, opinion_scale
    /// Number of steps in the scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    /// Icon used for the rating steps (e.g. "star", "heart")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    // opinion_scale
    /// Labels shown at the left, center and right of the scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,

    /// Start the scale at one instead of zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at_one: Option<bool>,
}

/// The kind of a form field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Standard one-line text input
    #[default]
    ShortText,

    /// Free-text answer longer than one line
    LongText,

    /// Multiple choice between text answers
    MultipleChoice,

    /// Multiple choice where the options are images
    PictureChoice,

    /// Not a question; a piece of conversation shown to the respondent
    Statement,

    /// Select element with auto-completion, for long choice lists
    Dropdown,

    /// A plain yes-or-no question
    YesNo,

    /// Text input that only accepts numbers
    Number,

    /// Visual rating on a configurable scale
    Rating,

    /// NPS-style opinion scale with configurable labels
    OpinionScale,

    /// Text input validated as an email address
    Email,

    /// Text input validated as a URL
    Website,

    /// Like yes_no, with smaller body text for terms-of-service prompts
    Legal,
}

/// A selectable choice of a multiple_choice, picture_choice or dropdown field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// ID of a previously uploaded image (picture_choice only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,

    /// Text of the choice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Labels positioned at the left, center and right of an opinion scale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// A conditional jump from one field to another, keyed by field references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicJump {
    /// Reference of the field the jump originates from
    pub from: String,

    /// Reference of the field to jump to
    pub to: String,

    /// Answer value that triggers the jump
    #[serde(rename = "if")]
    pub condition: bool,
}

/// Response payload describing a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormInfo {
    #[serde(rename = "_links", default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub fields: Vec<Field>,

    pub id: String,
    pub title: String,

    /// URL bindings the form is reachable at
    #[serde(default)]
    pub urls: Vec<FormUrl>,

    pub version: ApiVersion,
}

/// A hypermedia link attached to a response record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

/// A URL binding as embedded in a `FormInfo` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormUrl {
    pub form_id: String,
    pub id: String,
    pub version: ApiVersion,
}

/// Response payload of a just-created image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewImage {
    pub id: String,
    pub original_url: String,

    #[serde(rename = "type")]
    pub image_type: String,

    pub version: String,
}

/// Response payload describing a stored image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    pub filename: String,
    pub height: u32,
    pub id: String,

    #[serde(rename = "type")]
    pub image_type: String,

    pub url: String,
    pub version: String,
    pub width: u32,
}

/// A design to be created
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Design {
    pub colors: Colors,
    pub font: String,
}

/// Color scheme of a design, as hex strings (e.g. "#3D3D3D")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub question: String,
    pub button: String,
    pub answer: String,
    pub background: String,
}

/// Response payload describing a design
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignInfo {
    pub id: String,
    pub colors: Colors,
    pub font: String,
    pub version: String,
}

/// Response payload describing a URL binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlInfo {
    pub id: String,
    pub form_id: String,
    pub version: String,

    #[serde(rename = "_links", default)]
    pub links: Vec<Link>,
}
