use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Per-series show/hide toggle state, in legend (header) order.
///
/// The set is an explicit value passed into plan computation rather
/// than ambient engine state, so filter-driven behavior stays testable
/// without a rendering surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibilitySet {
    entries: IndexMap<String, bool>,
}

impl VisibilitySet {
    /// Builds the default state: every id visible.
    #[must_use]
    pub fn all_visible<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: ids.into_iter().map(|id| (id.into(), true)).collect(),
        }
    }

    /// Unknown ids read as hidden.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Inverts one id in place and returns its new state.
    pub fn toggle(&mut self, id: &str) -> ChartResult<bool> {
        match self.entries.get_mut(id) {
            Some(visible) => {
                *visible = !*visible;
                Ok(*visible)
            }
            None => Err(ChartError::UnknownSeries(id.to_owned())),
        }
    }

    /// Value-typed mirror of [`VisibilitySet::toggle`].
    pub fn toggled(&self, id: &str) -> ChartResult<Self> {
        let mut next = self.clone();
        next.toggle(id)?;
        Ok(next)
    }

    pub fn set(&mut self, id: &str, visible: bool) -> ChartResult<()> {
        match self.entries.get_mut(id) {
            Some(entry) => {
                *entry = visible;
                Ok(())
            }
            None => Err(ChartError::UnknownSeries(id.to_owned())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(id, visible)| (id.as_str(), *visible))
    }

    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.entries.values().filter(|visible| **visible).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
