//! The paginated table controller.
//!
//! The controller owns the starting row and turns each host update into a
//! [`RenderFrame`]: the columns, the visible window of rows and the two
//! navigation controls, plus layout hints. Navigation is a state transition
//! followed by the same update path, using the host inputs from the most
//! recent update.
//!
//! # Examples
//!
//! ```rust
//! use paginated_table::controller::Model;
//! use paginated_table::input::{DataView, UpdateOptions, Viewport};
//! use paginated_table::table::NavigationId;
//!
//! let rows = (0..45).map(|i| vec![i.into()]).collect();
//! let view = DataView::from_table(["n"], rows);
//!
//! let mut table = Model::new();
//! let frame = table.update(UpdateOptions::from_data_view(Viewport::new(400.0, 300.0), view), None);
//! assert_eq!(frame.rows.len(), 20);
//!
//! table.on_navigate(NavigationId::Next);
//! table.on_navigate(NavigationId::Next);
//! assert_eq!(table.starting_row(), 40);
//! assert_eq!(table.frame().unwrap().rows.len(), 5);
//! ```

use crate::builder;
use crate::input::UpdateOptions;
use crate::pagination::{self, NavigationKeyMap, PaginationState};
use crate::settings::{self, ObjectInstance, Settings};
use crate::table::{Column, NavigationId, NavigationItem, Row};
use bubbletea_rs::{KeyMsg, Msg};
use lipgloss_extras::lipgloss::Style;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Layout units reserved below the table for the navigation strip.
pub const NAVIGATION_STRIP_HEIGHT: f64 = 30.0;

/// Message sent when a rendered navigation control is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateMsg(pub NavigationId);

/// Everything the renderer paints for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Height left for the table once the navigation strip is reserved.
    pub table_height: f64,
    /// Font size for the table.
    pub text_size: u32,
    /// All columns.
    pub columns: Vec<Column>,
    /// Only the visible rows.
    pub rows: Vec<Row>,
    /// The PREV/NEXT controls, empty when there is no table.
    pub navigation_items: Vec<NavigationItem>,
    /// Index of the first visible row.
    pub starting_row: usize,
    /// Rows per page used for this frame.
    pub page_size: usize,
    /// Row count of the whole table.
    pub total_rows: usize,
}

impl RenderFrame {
    /// Indices of the visible rows within the whole table.
    pub fn visible_range(&self) -> Range<usize> {
        pagination::window(self.starting_row, self.page_size, self.total_rows)
    }

    /// Human-readable position, e.g. `rows 21-40 of 45`.
    pub fn status(&self) -> String {
        let range = self.visible_range();
        if self.total_rows == 0 {
            "rows 0 of 0".to_string()
        } else if range.is_empty() {
            format!("rows - of {}", self.total_rows)
        } else {
            format!("rows {}-{} of {}", range.start + 1, range.end, self.total_rows)
        }
    }
}

/// Controller state for one table visual.
#[derive(Debug, Clone, Default)]
pub struct Model {
    state: PaginationState,
    keymap: NavigationKeyMap,
    settings: Settings,
    options: Option<UpdateOptions>,
    frame: Option<RenderFrame>,
}

impl Model {
    /// Creates a controller positioned at the first row with nothing rendered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: NavigationKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Key bindings used by [`Model::handle`].
    pub fn keymap(&self) -> &NavigationKeyMap {
        &self.keymap
    }

    /// Index of the first visible row.
    pub fn starting_row(&self) -> usize {
        self.state.starting_row()
    }

    /// Settings resolved by the most recent update, or the defaults.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The most recent frame, if any update has happened.
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }

    /// Settings objects for a host configuration UI.
    pub fn object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        settings::enumerate_object_instances(object_name, &self.settings)
    }

    /// Applies a host update.
    ///
    /// The view model is rebuilt from scratch. `starting_row` replaces the
    /// current position when given; otherwise the position survives the
    /// refresh, even if the page size changed.
    pub fn update(&mut self, options: UpdateOptions, starting_row: Option<usize>) -> &RenderFrame {
        let frame = self.compose(&options, starting_row);
        self.options = Some(options);
        self.frame.insert(frame)
    }

    /// Steps one page back or forward and re-runs the last update.
    ///
    /// The step uses the page size of the most recent update. Before the
    /// first update the position still moves, but there is nothing to render
    /// and `None` is returned.
    pub fn on_navigate(&mut self, id: NavigationId) -> Option<&RenderFrame> {
        let from = self.state.starting_row();
        let page_size = self.settings.page_size.page_size;
        let to = self.state.navigate(id, page_size);
        tracing::debug!(target: "paginated_table", %id, from, to, page_size, "navigate");

        let options = self.options.take()?;
        Some(self.update(options, Some(to)))
    }

    /// Handles a key press or a click on a navigation control.
    ///
    /// Returns true when a new frame was produced.
    pub fn handle(&mut self, msg: &Msg) -> bool {
        let id = if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.keymap.resolve(key_msg)
        } else {
            msg.downcast_ref::<NavigateMsg>().map(|nav| nav.0)
        };

        match id {
            Some(id) => self.on_navigate(id).is_some(),
            None => false,
        }
    }

    fn compose(&mut self, options: &UpdateOptions, starting_row: Option<usize>) -> RenderFrame {
        let view_model = builder::build(options.data_view.as_ref(), &options.objects);
        if let Some(row) = starting_row {
            self.state.set_starting_row(row);
        }

        let page_size = view_model.settings.page_size.page_size;
        let total_rows = view_model.rows.len();
        tracing::debug!(
            target: "paginated_table",
            starting_row = self.state.starting_row(),
            page_size,
            total_rows,
            visible = ?self.state.window(page_size, total_rows),
            "update"
        );

        let viewport = options.viewport;
        self.settings = view_model.settings;
        RenderFrame {
            width: viewport.width,
            height: viewport.height,
            table_height: (viewport.height - NAVIGATION_STRIP_HEIGHT).max(0.0),
            text_size: view_model.settings.text.text_size,
            rows: self.state.visible(&view_model.rows, page_size).to_vec(),
            columns: view_model.columns,
            navigation_items: view_model.navigation_items,
            starting_row: self.state.starting_row(),
            page_size,
            total_rows,
        }
    }

    /// Renders the current frame as text: a bold header, a separator, the
    /// visible rows and a navigation line.
    pub fn view(&self) -> String {
        match &self.frame {
            Some(frame) => render_text(frame),
            None => String::new(),
        }
    }
}

fn render_text(frame: &RenderFrame) -> String {
    let rows: Vec<Vec<String>> = frame
        .rows
        .iter()
        .map(|row| row.cells.iter().map(ToString::to_string).collect())
        .collect();

    // Ragged rows may be wider than the header.
    let column_count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(frame.columns.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; column_count];
    for (i, column) in frame.columns.iter().enumerate() {
        widths[i] = widths[i].max(column.header.width());
    }
    for cells in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut lines = Vec::new();
    if column_count > 0 {
        let headers: Vec<&str> = frame.columns.iter().map(|c| c.header.as_str()).collect();
        let header = join_padded(&headers, &widths);
        lines.push(Style::new().bold(true).inline(true).render(&header));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        for cells in &rows {
            let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
            lines.push(join_padded(&cells, &widths));
        }
    }

    if let [prev, next] = frame.navigation_items.as_slice() {
        lines.push(format!("{}  {}  {}", prev.glyph.text, frame.status(), next.glyph.text));
    }

    lines.join("\n")
}

fn join_padded(cells: &[&str], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell}{}", " ".repeat(width.saturating_sub(cell.width()))))
        .collect::<Vec<_>>()
        .join(" | ");
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DataView, DataViewObjects, Viewport};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn numbered(count: i64) -> DataView {
        DataView::from_table(["n"], (0..count).map(|i| vec![i.into()]).collect())
    }

    fn options(view: DataView) -> UpdateOptions {
        UpdateOptions::from_data_view(Viewport::new(400.0, 300.0), view)
    }

    fn first_cell(frame: &RenderFrame) -> Option<String> {
        frame.rows.first().map(|row| row.cells[0].to_string())
    }

    #[test]
    fn test_new_starts_at_zero_with_no_frame() {
        let model = Model::new();
        assert_eq!(model.starting_row(), 0);
        assert!(model.frame().is_none());
        assert_eq!(model.view(), "");
    }

    #[test]
    fn test_update_keeps_position_without_override() {
        let mut model = Model::new();
        model.update(options(numbered(45)), Some(20));
        let frame = model.update(options(numbered(45)), None);
        assert_eq!(frame.starting_row, 20);
        assert_eq!(first_cell(frame).as_deref(), Some("20"));
    }

    #[test]
    fn test_page_size_change_keeps_unaligned_start() {
        let mut model = Model::new();
        model.update(options(numbered(100)), Some(20));

        let smaller = numbered(100).with_objects(DataViewObjects::new().with_number(
            "pagesize",
            "numberofrows",
            15.0,
        ));
        let frame = model.update(options(smaller), None);
        assert_eq!(frame.visible_range(), 20..35);
        assert_eq!(frame.rows.len(), 15);
    }

    #[test]
    fn test_navigation_uses_latest_page_size() {
        let view = numbered(100)
            .with_objects(DataViewObjects::new().with_number("pagesize", "numberofrows", 7.0));
        let mut model = Model::new();
        model.update(options(view), None);
        model.on_navigate(NavigationId::Next);
        assert_eq!(model.starting_row(), 7);
    }

    #[test]
    fn test_navigate_before_update_moves_state_only() {
        let mut model = Model::new();
        assert!(model.on_navigate(NavigationId::Next).is_none());
        assert_eq!(model.starting_row(), 20);
        assert!(model.frame().is_none());
    }

    #[test]
    fn test_payload_overrides_apply_whichever_constructor() {
        let view = numbered(30)
            .with_objects(DataViewObjects::new().with_number("pagesize", "numberofrows", 5.0));
        let viewport = Viewport::new(400.0, 300.0);

        let from = Model::new()
            .update(UpdateOptions::from_data_view(viewport, view.clone()), None)
            .clone();
        let with = Model::new()
            .update(UpdateOptions::new(viewport).with_data_view(view), None)
            .clone();
        assert_eq!(from.page_size, 5);
        assert_eq!(from, with);
    }

    #[test]
    fn test_first_update_renders_from_position_moved_before_it() {
        let mut model = Model::new();
        model.on_navigate(NavigationId::Next);
        let frame = model.update(options(numbered(45)), None);
        assert_eq!(frame.starting_row, 20);
        assert_eq!(first_cell(frame).as_deref(), Some("20"));

        // the retained options survive repeated navigation
        assert!(model.on_navigate(NavigationId::Next).is_some());
        assert!(model.on_navigate(NavigationId::Prev).is_some());
        assert_eq!(model.starting_row(), 20);
    }

    #[test]
    fn test_next_past_end_yields_empty_window() {
        let mut model = Model::new();
        model.update(options(numbered(5)), None);
        let frame = model.on_navigate(NavigationId::Next).unwrap();
        assert_eq!(frame.starting_row, 20);
        assert!(frame.rows.is_empty());
        assert_eq!(frame.status(), "rows - of 5");
    }

    #[test]
    fn test_table_height_reserves_navigation_strip() {
        let mut model = Model::new();
        let frame = model.update(options(numbered(1)), None);
        assert_eq!(frame.width, 400.0);
        assert_eq!(frame.table_height, 270.0);

        let tiny = UpdateOptions::from_data_view(Viewport::new(10.0, 12.0), numbered(1));
        assert_eq!(model.update(tiny, None).table_height, 0.0);
    }

    #[test]
    fn test_text_size_flows_into_frame() {
        let view = numbered(1)
            .with_objects(DataViewObjects::new().with_number("general", "textsize", 16.0));
        let mut model = Model::new();
        assert_eq!(model.update(options(view), None).text_size, 16);
        assert_eq!(model.object_instances("general")[0].properties[0].value, 16);
    }

    #[test]
    fn test_handle_key_and_click_messages() {
        let mut model = Model::new();
        model.update(options(numbered(45)), None);

        let next: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        assert!(model.handle(&next));
        assert_eq!(model.starting_row(), 20);

        let click: Msg = Box::new(NavigateMsg(NavigationId::Prev));
        assert!(model.handle(&click));
        assert_eq!(model.starting_row(), 0);

        let other: Msg = Box::new(KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!model.handle(&other));
        assert_eq!(model.starting_row(), 0);
    }

    #[test]
    fn test_status_text() {
        let mut model = Model::new();
        assert_eq!(model.update(options(numbered(45)), None).status(), "rows 1-20 of 45");
        assert_eq!(model.update(UpdateOptions::new(Viewport::default()), None).status(), "rows 0 of 0");
    }

    #[test]
    fn test_view_pads_cells_to_widest_value() {
        let view = DataView::from_table(
            ["id", "name"],
            vec![vec![1.into(), "alpha".into()], vec![22.into(), "b".into()]],
        );
        let mut model = Model::new();
        model.update(options(view), None);

        let plain = strip_ansi_escapes::strip_str(model.view());
        let lines: Vec<&str> = plain.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec![
                "id | name",
                "---+------",
                "1  | alpha",
                "22 | b",
                "‹  rows 1-2 of 2  ›",
            ]
        );
    }

    #[test]
    fn test_view_of_empty_payload_is_blank() {
        let mut model = Model::new();
        model.update(UpdateOptions::new(Viewport::new(10.0, 10.0)), None);
        assert_eq!(model.view(), "");
    }
}
