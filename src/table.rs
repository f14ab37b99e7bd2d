//! Render-ready table types: columns, rows, navigation controls and the
//! view model that aggregates them.

use crate::input::CellValue;
use crate::settings::Settings;
use once_cell::sync::Lazy;
use std::fmt;

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text, taken verbatim from the host's display name.
    pub header: String,
}

impl Column {
    /// Creates a column with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

/// A table row. Cell count is not checked against the column count.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cells in source order.
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// Identity of a navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationId {
    /// Step back one page.
    Prev,
    /// Step forward one page.
    Next,
}

impl NavigationId {
    /// Stable identifier handed to the renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            NavigationId::Prev => "PREV",
            NavigationId::Next => "NEXT",
        }
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon for a navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// SVG markup for graphical renderers.
    pub svg: String,
    /// Single-symbol fallback for text renderers.
    pub text: String,
}

/// Left-pointing arrow.
pub static PREV_GLYPH: Lazy<Glyph> = Lazy::new(|| Glyph {
    svg: concat!(
        r#"<svg width="15px" height="20px" viewBox="0 0 50 80" xml:space="preserve">"#,
        r#"<polyline class="paginatedTableNavigationButtonArrow" points="45.63,75.8 0.375,38.087 45.63,0.375"/>"#,
        "</svg>"
    )
    .to_string(),
    text: "‹".to_string(),
});

/// Right-pointing arrow.
pub static NEXT_GLYPH: Lazy<Glyph> = Lazy::new(|| Glyph {
    svg: concat!(
        r#"<svg width="15px" height="20px" viewBox="0 0 50 80" xml:space="preserve">"#,
        r#"<polyline class="paginatedTableNavigationButtonArrow" points="0.375,0.375 45.63,38.087 0.375,75.8"/>"#,
        "</svg>"
    )
    .to_string(),
    text: "›".to_string(),
});

/// A clickable navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    /// Which way the control pages.
    pub id: NavigationId,
    /// Icon to paint.
    pub glyph: Glyph,
}

impl NavigationItem {
    /// Creates the control for `id` with its fixed glyph.
    pub fn new(id: NavigationId) -> Self {
        let glyph = match id {
            NavigationId::Prev => PREV_GLYPH.clone(),
            NavigationId::Next => NEXT_GLYPH.clone(),
        };
        Self { id, glyph }
    }

    /// The two controls, previous first.
    pub fn pair() -> Vec<NavigationItem> {
        vec![
            NavigationItem::new(NavigationId::Prev),
            NavigationItem::new(NavigationId::Next),
        ]
    }
}

/// Everything a renderer needs for one update, rebuilt from scratch each time.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Columns in source order.
    pub columns: Vec<Column>,
    /// All rows in source order, not just the visible ones.
    pub rows: Vec<Row>,
    /// Resolved settings.
    pub settings: Settings,
    /// The PREV/NEXT controls, or nothing when there is no table.
    pub navigation_items: Vec<NavigationItem>,
}

impl ViewModel {
    /// A view model with no table and the given settings.
    pub fn empty(settings: Settings) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            settings,
            navigation_items: Vec::new(),
        }
    }

    /// Returns true if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::empty(Settings::default())
    }
}
