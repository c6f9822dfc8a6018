//! # HAR Document Model
//!
//! Typed representation of the HTTP Archive (HAR 1.2) JSON schema as
//! produced by browser devtools, including the Chromium vendor extensions
//! (`_initiator`, `_priority`, `_resourceType`, `_transferSize`, `_error`,
//! `_blocked_queueing`).
//!
//! ## Schema Assumptions
//!
//! - **Permissive**: unknown members are ignored. Missing or `null` scalars,
//!   arrays and objects fall back to their zero value, so additive schema
//!   changes never break loading. A `null` timing phase is not recorded.
//! - **Sentinels, not nulls**: timing phases that were not recorded are
//!   negative (usually `-1`). They are stored as-is and never coerced to zero.
//!   A timing member that is missing entirely is treated as not recorded.
//! - **Ordered headers**: `Vec<Header>` keeps the order as received and
//!   allows repeated names (`Set-Cookie`).
//! - **Opaque members**: `queryString`, response `cookies`, cookie `expires`,
//!   `cache` and `_error` vary in shape between producers. They are kept as
//!   [`serde_json::Value`] purely so a load/save cycle is lossless.
//!
//! The document is immutable after load; nothing in this module mutates it.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sentinel used by HAR producers for "timing not recorded".
pub const NOT_RECORDED: f64 = -1.0;

fn not_recorded() -> f64 {
    NOT_RECORDED
}

/// Read an explicit `null` as the type's zero value, like an absent member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read an explicit `null` timing as [`NOT_RECORDED`].
fn null_as_not_recorded<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(|ms| ms.unwrap_or(NOT_RECORDED))
}

// ── HarFile ───────────────────────────────────────────────────────────────────

/// Top-level wire wrapper: every HAR file is `{ "log": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: HarDocument,
}

// ── HarDocument ───────────────────────────────────────────────────────────────

/// The HAR log: creator metadata, pages and the captured entries.
///
/// `entries` is in capture order. That order is load-bearing: table row `N`
/// always corresponds to `entries[N]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: Creator,
    #[serde(deserialize_with = "null_as_default")]
    pub pages: Vec<Page>,
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
}

impl HarDocument {
    /// Entry backing the given table row, if the row exists.
    pub fn entry(&self, row: usize) -> Option<&Entry> {
        self.entries.get(row)
    }

    /// Number of captured entries (and therefore data rows).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the page an entry refers to. `pageref` is not required to
    /// resolve, so this is `None` for dangling references.
    pub fn page_for(&self, entry: &Entry) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == entry.pageref)
    }
}

/// Tool that produced the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

// ── Page ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(
        rename = "startedDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "pageTimings")]
    #[serde(deserialize_with = "null_as_default")]
    pub page_timings: PageTimings,
}

/// Page load milestones in milliseconds; negative means not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTimings {
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub on_content_load: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub on_load: f64,
}

impl Default for PageTimings {
    fn default() -> Self {
        Self {
            on_content_load: NOT_RECORDED,
            on_load: NOT_RECORDED,
        }
    }
}

// ── Entry ─────────────────────────────────────────────────────────────────────

/// One captured HTTP transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// What triggered the request. Commonly absent for the root document.
    #[serde(rename = "_initiator", skip_serializing_if = "Option::is_none")]
    pub initiator: Option<Initiator>,
    #[serde(rename = "_priority")]
    #[serde(deserialize_with = "null_as_default")]
    pub priority: String,
    /// Semantic classification such as `document`, `script`, `image`.
    #[serde(rename = "_resourceType")]
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: String,
    pub cache: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub pageref: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request: Request,
    #[serde(deserialize_with = "null_as_default")]
    pub response: Response,
    #[serde(rename = "serverIPAddress")]
    #[serde(deserialize_with = "null_as_default")]
    pub server_ip_address: String,
    #[serde(
        rename = "startedDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<FixedOffset>>,
    /// Total elapsed time in milliseconds.
    #[serde(rename = "time")]
    #[serde(deserialize_with = "null_as_default")]
    pub total_time_ms: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub timings: Timings,
}

impl Entry {
    /// URL of the initiator, or `""` when the entry has none.
    pub fn initiator_url(&self) -> &str {
        self.initiator.as_ref().map_or("", |i| i.url.as_str())
    }
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub http_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<Header>,
    #[serde(deserialize_with = "null_as_default")]
    pub query_string: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub cookies: Vec<Cookie>,
    #[serde(deserialize_with = "null_as_default")]
    pub headers_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub body_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub http_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<Header>,
    #[serde(deserialize_with = "null_as_default")]
    pub cookies: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub content: Content,
    #[serde(rename = "redirectURL")]
    #[serde(deserialize_with = "null_as_default")]
    pub redirect_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headers_size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub body_size: i64,
    /// Bytes on the wire. Zero for cached or failed transfers.
    #[serde(rename = "_transferSize")]
    #[serde(deserialize_with = "null_as_default")]
    pub transfer_size: i64,
    #[serde(rename = "_error", skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Response {
    /// The `_error` member as text, when the producer recorded a string.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Content {
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// A single header line. Names are not unique within a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cookie {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Either an RFC 3339 string, `null`, or absent depending on producer.
    pub expires: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub http_only: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub secure: bool,
}

// ── Timings ───────────────────────────────────────────────────────────────────

/// Phase breakdown in milliseconds. Negative values mean "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub blocked: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub dns: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub ssl: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub connect: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub send: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub wait: f64,
    #[serde(default = "not_recorded", deserialize_with = "null_as_not_recorded")]
    pub receive: f64,
    #[serde(
        rename = "_blocked_queueing",
        default = "not_recorded",
        deserialize_with = "null_as_not_recorded"
    )]
    pub blocked_queueing: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            blocked: NOT_RECORDED,
            dns: NOT_RECORDED,
            ssl: NOT_RECORDED,
            connect: NOT_RECORDED,
            send: NOT_RECORDED,
            wait: NOT_RECORDED,
            receive: NOT_RECORDED,
            blocked_queueing: NOT_RECORDED,
        }
    }
}

// ── Initiator ─────────────────────────────────────────────────────────────────

/// Chromium's record of what triggered a request (parser, script, preload).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Initiator {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub line_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stack {
    #[serde(deserialize_with = "null_as_default")]
    pub call_frames: Vec<CallFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentStack>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParentStack {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub call_frames: Vec<CallFrame>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallFrame {
    #[serde(deserialize_with = "null_as_default")]
    pub function_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub script_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub line_number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub column_number: i64,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
