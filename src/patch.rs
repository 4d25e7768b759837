//! Tri-state optional values for partial updates.
//!
//! PATCH endpoints distinguish three intents for every optional field:
//! *leave unchanged*, *clear to null*, and *set to a value*. A plain
//! `Option<T>` can only express two of those, so update payloads use
//! [`Patch<T>`] instead:
//!
//! - `Patch::Absent`: the field is omitted from the JSON body and the
//!   server leaves the current value untouched.
//! - `Patch::Value(v)`: the field is emitted and set to `v`.
//! - For nullable fields, declare `Patch<Option<T>>`; clearing the field
//!   is `Patch::null()` (i.e. `Patch::Value(None)`), which emits an
//!   explicit JSON `null`. A field declared `Patch<String>` cannot
//!   express null at all, so "clear a non-nullable field" is rejected by
//!   the type system rather than at runtime.
//!
//! ## Declaring a patch object
//!
//! Every field of a patch struct must carry both attributes below; the
//! `skip_serializing_if` is what turns `Absent` into key omission, and
//! `default` is what turns a missing key back into `Absent` when
//! deserializing:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use veridian::Patch;
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct ClientPatch {
//!     #[serde(default, skip_serializing_if = "Patch::is_absent")]
//!     enabled: Patch<bool>,
//!     #[serde(default, skip_serializing_if = "Patch::is_absent")]
//!     description: Patch<Option<String>>,
//! }
//!
//! let patch = ClientPatch {
//!     enabled: Patch::value(true),
//!     description: Patch::null(),
//! };
//! let json = serde_json::to_string(&patch).unwrap();
//! assert_eq!(json, r#"{"enabled":true,"description":null}"#);
//!
//! // Absent fields never reappear on the wire.
//! let empty = ClientPatch::default();
//! assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
//! ```
//!
//! Patch objects nest: a field typed `Patch<InnerPatch>` recurses, and an
//! inner patch whose fields are all `Absent` still emits as `{}` when the
//! outer field is `Value`; presence at the parent level is independent of
//! presence inside the child.
//!
//! Collections are atomic from the codec's point of view: `Value(vec)`
//! replaces the whole collection server-side, there is no element-level
//! patch semantic.

use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

/// A field value on a partial-update payload: absent, or present.
///
/// See the [module documentation](self) for the serialization contract
/// and the required field attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Patch<T> {
    /// The field is not mentioned; the server keeps the current value.
    #[default]
    Absent,
    /// The field is set to the wrapped value. For `Patch<Option<T>>`,
    /// `Value(None)` is an explicit clear and serializes as `null`.
    Value(T),
}

impl<T> Patch<T> {
    /// Returns an absent patch value.
    pub fn absent() -> Self {
        Patch::Absent
    }

    /// Wraps a value as present. Construction is always explicit; there
    /// is deliberately no `From<T>` impl, so a caller cannot silently
    /// promote a plain value into "set this field".
    pub fn value(value: T) -> Self {
        Patch::Value(value)
    }

    /// Returns `true` if the field is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Returns `true` if the field carries a value (including an
    /// explicit null for `Patch<Option<T>>`).
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Value(_))
    }

    /// Converts from `&Patch<T>` to `Patch<&T>`.
    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Value(v) => Patch::Value(v),
        }
    }

    /// Maps the present value, leaving `Absent` untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// Returns the present value, collapsing `Absent` to `None`.
    ///
    /// Note that for `Patch<Option<T>>` this produces `Some(None)` for an
    /// explicit clear, which is still distinguishable from `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Absent => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<T> Patch<Option<T>> {
    /// An explicit clear: present with value `null`.
    ///
    /// Only nullable fields (declared `Patch<Option<T>>`) can be cleared;
    /// this constructor does not exist for `Patch<T>`.
    pub fn null() -> Self {
        Patch::Value(None)
    }

    /// Wraps a non-null value as present, without the caller having to
    /// spell `Patch::value(Some(v))`.
    pub fn some(value: T) -> Self {
        Patch::Value(Some(value))
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            // An Absent value reaching the serializer means the field is
            // missing its `skip_serializing_if = "Patch::is_absent"`
            // attribute. Fail loudly instead of inventing a null.
            Patch::Absent => Err(serde::ser::Error::custom(
                "Patch::Absent fields must be skipped with `skip_serializing_if = \"Patch::is_absent\"`",
            )),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Any key present in the JSON becomes Value, including `null`
        // when T is Option<_>. Missing keys never reach this impl; they
        // fall back to Default (Absent) via `#[serde(default)]`.
        T::deserialize(deserializer).map(Patch::Value)
    }
}
