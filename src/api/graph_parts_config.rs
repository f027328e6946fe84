use serde::{Deserialize, Serialize};

use crate::core::{LocalRect, Pivot};
use crate::error::{GraphError, GraphResult};
use crate::render::Color32;

/// How a widget treats a zero or non-finite scope size on recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopePolicy {
    /// Divide unconditionally; infinite or NaN scale propagates into geometry.
    #[default]
    Permissive,
    /// Reject the scope, keep the previous transform and skip the redraw.
    Validate,
}

/// Public widget bootstrap configuration.
///
/// Serializable so hosts can persist widget setup alongside their layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPartsConfig {
    #[serde(default)]
    pub local_rect: LocalRect,
    #[serde(default)]
    pub pivot: Pivot,
    #[serde(default)]
    pub color: Color32,
    #[serde(default)]
    pub scope_policy: ScopePolicy,
}

impl GraphPartsConfig {
    #[must_use]
    pub fn new(local_rect: LocalRect, pivot: Pivot) -> Self {
        Self {
            local_rect,
            pivot,
            color: Color32::WHITE,
            scope_policy: ScopePolicy::Permissive,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_scope_policy(mut self, scope_policy: ScopePolicy) -> Self {
        self.scope_policy = scope_policy;
        self
    }

    pub fn validate(self) -> GraphResult<()> {
        self.local_rect.validate()?;
        self.pivot.validate()
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse graph parts config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize graph parts config: {e}"))
        })
    }
}

impl Default for GraphPartsConfig {
    fn default() -> Self {
        Self::new(LocalRect::default(), Pivot::default())
    }
}
