//! Renderer port — turning a [`RotatedTable`] into markup.
//!
//! Two presentation strategies share one contract: a static table and an
//! interactive grid whose cells open a detail view. The strategy is picked
//! by [`RenderStyle`], usually from configuration or a query parameter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bridgeview_domain::error::ValidationError;
use bridgeview_domain::rotation::RotatedTable;

/// How the rotated table is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Static table, no interaction.
    Plain,
    /// Grid whose data cells link to an on-demand detail view.
    #[default]
    Interactive,
}

impl RenderStyle {
    /// Lowercase name as used in configuration and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Interactive => "interactive",
        }
    }

    /// The other style, for toggling.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Plain => Self::Interactive,
            Self::Interactive => Self::Plain,
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "interactive" => Ok(Self::Interactive),
            other => Err(ValidationError::UnknownRenderStyle(other.to_string())),
        }
    }
}

/// A renderer failed to produce markup.
#[derive(Debug, thiserror::Error)]
#[error("failed to render table")]
pub struct RenderError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

/// Renders a rotated table as an HTML fragment.
///
/// Implementations put the `timestamp` row in header cells and every other
/// row in data cells.
pub trait TableRenderer {
    /// Render `table`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the underlying template engine fails.
    fn render(&self, table: &RotatedTable) -> Result<String, RenderError>;
}
