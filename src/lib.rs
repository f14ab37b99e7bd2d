#![warn(missing_docs)]

//! # paginated-table
//!
//! A headless paginated table for host-rendered visuals. The host delivers a
//! tabular payload, a viewport and formatting overrides; this crate turns
//! them into a render-ready frame holding one page of rows and a pair of
//! PREV/NEXT controls, and keeps track of which page is showing.
//!
//! ## Overview
//!
//! Two pieces run on every data or viewport change:
//!
//! - [`builder::build`] converts the raw payload into a [`ViewModel`]. It is
//!   pure and never fails: an absent or incomplete table yields an empty
//!   view model.
//! - [`controller::Model`] owns the starting row, derives the visible window
//!   `starting_row .. starting_row + page_size` and reacts to navigation by
//!   re-running the last update with a new starting row.
//!
//! The starting row is the only state that survives between updates. A data
//! refresh does not reset it, and stepping forward is not bounded by the row
//! count: paging past the end shows an empty page.
//!
//! ## Quick Start
//!
//! ```rust
//! use paginated_table::prelude::*;
//!
//! let rows = (1..=45).map(|i| vec![format!("row {i}").into()]).collect();
//! let payload = DataView::from_table(["Name"], rows);
//!
//! let mut table = PaginatedTable::new();
//! let frame = table.update(UpdateOptions::from_data_view(Viewport::new(640.0, 480.0), payload), None);
//! assert_eq!(frame.rows.len(), 20);
//! assert_eq!(frame.status(), "rows 1-20 of 45");
//!
//! let frame = table.on_navigate(NavigationId::Next).unwrap();
//! assert_eq!(frame.status(), "rows 21-40 of 45");
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The controller accepts key presses and clicks as messages:
//!
//! ```rust
//! use paginated_table::prelude::*;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut table = PaginatedTable::new();
//! let rows = (0..30).map(|i| vec![i.into()]).collect();
//! table.update(UpdateOptions::from_data_view(Viewport::default(), DataView::from_table(["n"], rows)), None);
//!
//! let msg: Msg = Box::new(KeyMsg { key: KeyCode::Right, modifiers: KeyModifiers::NONE });
//! assert!(table.handle(&msg));
//! assert_eq!(table.starting_row(), 20);
//!
//! let click: Msg = Box::new(NavigateMsg(NavigationId::Prev));
//! assert!(table.handle(&click));
//! assert_eq!(table.starting_row(), 0);
//! ```
//!
//! ## Settings
//!
//! | Object | Property | Range | Default |
//! |--------|----------|-------|---------|
//! | `pagesize` | `numberofrows` | 1-500 | 20 |
//! | `general` | `textsize` | 8-40 | 8 |
//!
//! Overrides that are missing or not numeric fall back to the defaults.
//! [`settings::SettingsProperty::validate`] checks a value against the
//! published range for configuration UIs.
//!
//! ## Logging
//!
//! Updates and navigation steps are logged through [`tracing`] under the
//! `paginated_table` target. The crate installs no subscriber.

pub mod builder;
pub mod controller;
pub mod error;
pub mod input;
pub mod key;
pub mod pagination;
pub mod settings;
pub mod table;

pub use builder::build;
pub use controller::{Model as PaginatedTable, NavigateMsg, RenderFrame};
pub use error::{InputError, SettingsError};
pub use input::{CellValue, DataView, DataViewObjects, UpdateOptions, Viewport};
pub use pagination::{NavigationKeyMap, PaginationState};
pub use settings::{Settings, SettingsProperty};
pub use table::{Column, NavigationId, NavigationItem, Row, ViewModel};

/// Prelude module for convenient imports.
///
/// ```rust
/// use paginated_table::prelude::*;
///
/// let table = PaginatedTable::new();
/// assert_eq!(table.starting_row(), 0);
/// ```
pub mod prelude {
    pub use crate::builder::build;
    pub use crate::controller::{Model as PaginatedTable, NavigateMsg, RenderFrame};
    pub use crate::input::{CellValue, DataView, DataViewObjects, UpdateOptions, Viewport};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::pagination::NavigationKeyMap;
    pub use crate::settings::{Settings, SettingsProperty};
    pub use crate::table::{Column, NavigationId, NavigationItem, Row, ViewModel};
}
