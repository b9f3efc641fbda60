//! Column sort model for data tables.
//!
//! Mirrors the small slice of a table library's column API that a sortable
//! header needs: whether the column can sort, its current direction, and the
//! toggle used when the header is clicked.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::nav::NavIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Sort state of a single column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnSort {
    pub can_sort: bool,
    pub sorted: Option<SortDirection>,
}

impl ColumnSort {
    pub fn sortable() -> Self {
        Self {
            can_sort: true,
            sorted: None,
        }
    }

    pub fn fixed() -> Self {
        Self::default()
    }

    pub fn toggle_sorting(&mut self, desc: bool) {
        if !self.can_sort {
            return;
        }
        self.sorted = Some(if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        });
    }

    /// Header click: ascending becomes descending, anything else becomes ascending.
    pub fn on_header_click(&mut self) {
        let desc = self.sorted == Some(SortDirection::Asc);
        self.toggle_sorting(desc);
    }

    pub fn icon(&self) -> NavIcon {
        match self.sorted {
            Some(SortDirection::Desc) => NavIcon::ArrowDown,
            Some(SortDirection::Asc) => NavIcon::ArrowUp,
            None => NavIcon::Sort,
        }
    }
}

/// Single-column sorting across a table: sorting one column clears the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSort {
    columns: Vec<(&'static str, ColumnSort)>,
}

impl TableSort {
    /// `columns` pairs a column key with whether it can be sorted
    pub fn new(columns: &[(&'static str, bool)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|&(key, can_sort)| {
                    let sort = if can_sort {
                        ColumnSort::sortable()
                    } else {
                        ColumnSort::fixed()
                    };
                    (key, sort)
                })
                .collect(),
        }
    }

    /// Sort state of `key`; unknown keys read as not sortable
    pub fn column(&self, key: &str) -> ColumnSort {
        self.columns
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, sort)| *sort)
            .unwrap_or_default()
    }

    pub fn on_header_click(&mut self, key: &str) {
        let Some(index) = self.columns.iter().position(|(k, _)| *k == key) else {
            return;
        };
        if !self.columns[index].1.can_sort {
            return;
        }
        for (i, (_, sort)) in self.columns.iter_mut().enumerate() {
            if i == index {
                sort.on_header_click();
            } else {
                sort.sorted = None;
            }
        }
    }

    /// The column currently sorted, if any
    pub fn active(&self) -> Option<(&'static str, SortDirection)> {
        self.columns
            .iter()
            .find_map(|(key, sort)| sort.sorted.map(|dir| (*key, dir)))
    }
}
