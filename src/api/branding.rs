//! Tenant branding and theme customization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};
use crate::patch::Patch;

/// Endpoint group for the tenant's branding theme.
///
/// A tenant has exactly one theme, so this group exposes only `get` and
/// `update`. Access via [`Client::branding`](crate::Client::branding).
#[derive(Clone)]
pub struct BrandingApi {
    client: Client,
}

impl BrandingApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Gets the current theme.
    pub async fn get(&self) -> Result<ApiResponse<Theme>> {
        let spec = RequestSpec::get(&["api", "branding", "theme"])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Applies a partial update to the theme.
    ///
    /// ```rust,no_run
    /// # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
    /// use veridian::Patch;
    /// use veridian::api::ThemePatch;
    ///
    /// let patch = ThemePatch {
    ///     primary_color: Patch::value("#1a73e8".into()),
    ///     logo_url: Patch::null(),
    ///     ..Default::default()
    /// };
    /// client.branding().update(patch).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(&self, patch: ThemePatch) -> Result<ApiResponse<Theme>> {
        let spec = RequestSpec::patch(&["api", "branding", "theme"])
            .json(&patch)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::fmt::Debug for BrandingApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandingApi").finish_non_exhaustive()
    }
}

/// The tenant's branding theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Primary brand color as a CSS color string.
    pub primary_color: String,
    /// Secondary brand color.
    #[serde(default)]
    pub secondary_color: Option<String>,
    /// URL of the tenant logo, if one is set.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// URL of the favicon, if one is set.
    #[serde(default)]
    pub favicon_url: Option<String>,
    /// Free-form theme variables (CSS custom properties and the like).
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
    /// When the theme was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Partial update for the tenant theme.
///
/// `logo_url` and `favicon_url` are clearable; `primary_color` is not, a
/// theme always has one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    /// Primary brand color.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub primary_color: Patch<String>,
    /// Secondary brand color.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub secondary_color: Patch<Option<String>>,
    /// Tenant logo URL.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub logo_url: Patch<Option<String>>,
    /// Favicon URL.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub favicon_url: Patch<Option<String>>,
    /// Free-form theme variables.
    ///
    /// The map replaces matching keys server-side; a key whose value is
    /// JSON `null` is removed rather than stored. The SDK serializes the
    /// map verbatim.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub data: Patch<serde_json::Map<String, serde_json::Value>>,
}

impl ThemePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary color.
    #[must_use]
    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Patch::value(color.into());
        self
    }

    /// Sets the logo URL.
    #[must_use]
    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Patch::some(url.into());
        self
    }

    /// Clears the logo.
    #[must_use]
    pub fn clear_logo_url(mut self) -> Self {
        self.logo_url = Patch::null();
        self
    }

    /// Sets a theme variable. A `serde_json::Value::Null` value asks the
    /// server to remove the key.
    #[must_use]
    pub fn data(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let mut map = match std::mem::take(&mut self.data) {
            Patch::Value(map) => map,
            Patch::Absent => serde_json::Map::new(),
        };
        map.insert(key.into(), value.into());
        self.data = Patch::value(map);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_patch_wire_shape() {
        let patch = ThemePatch::new()
            .primary_color("#1a73e8")
            .clear_logo_url();
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"primaryColor": "#1a73e8", "logoUrl": null})
        );
    }

    #[test]
    fn test_empty_patch_is_empty_object() {
        let json = serde_json::to_value(&ThemePatch::new()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_data_null_value_passes_through() {
        let patch = ThemePatch::new()
            .data("--accent", "#ff5722")
            .data("--old-var", serde_json::Value::Null);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data": {"--accent": "#ff5722", "--old-var": null}})
        );
    }

    #[test]
    fn test_theme_deserializes_with_defaults() {
        let theme: Theme = serde_json::from_value(serde_json::json!({
            "primaryColor": "#000000",
            "updatedAt": "2026-02-01T09:00:00Z",
        }))
        .unwrap();
        assert_eq!(theme.primary_color, "#000000");
        assert!(theme.logo_url.is_none());
        assert!(theme.data.is_empty());
    }
}
