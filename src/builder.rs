//! Converts a host payload into a [`ViewModel`].
//!
//! Building is a pure function of its inputs and never fails. Absent or
//! incomplete tables produce an empty view model so the visual always has
//! something to paint.

use crate::input::{DataView, DataViewObjects, DataViewTable};
use crate::settings::Settings;
use crate::table::{Column, NavigationItem, Row, ViewModel};

/// Builds a view model from a payload and formatting overrides.
///
/// Columns and rows are copied 1:1 in source order. Cells are not checked
/// against the column count. Settings are resolved from `objects` even when
/// the table is missing.
///
/// # Examples
///
/// ```rust
/// use paginated_table::builder::build;
/// use paginated_table::input::{DataView, DataViewObjects};
///
/// let view = DataView::from_table(["Name"], vec![vec!["a".into()], vec!["b".into()]]);
/// let model = build(Some(&view), &DataViewObjects::new());
/// assert_eq!(model.columns[0].header, "Name");
/// assert_eq!(model.rows.len(), 2);
/// assert_eq!(model.navigation_items.len(), 2);
///
/// let empty = build(None, &DataViewObjects::new());
/// assert!(empty.columns.is_empty());
/// assert!(empty.navigation_items.is_empty());
/// ```
pub fn build(raw: Option<&DataView>, objects: &DataViewObjects) -> ViewModel {
    let settings = Settings::resolve(objects);

    let Some(DataViewTable {
        columns: Some(columns),
        rows: Some(rows),
    }) = raw.and_then(|view| view.table.as_ref())
    else {
        tracing::trace!(
            target: "paginated_table",
            has_payload = raw.is_some(),
            has_table = raw.is_some_and(|view| view.table.is_some()),
            "no complete table in payload, building empty view model"
        );
        return ViewModel::empty(settings);
    };

    ViewModel {
        columns: columns
            .iter()
            .map(|column| Column::new(column.display_name.clone()))
            .collect(),
        rows: rows.iter().map(|cells| Row::new(cells.clone())).collect(),
        settings,
        navigation_items: NavigationItem::pair(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CellValue, DataViewColumn};
    use crate::table::NavigationId;

    fn sample() -> DataView {
        DataView::from_table(
            ["Region", "Sales", "Active"],
            vec![
                vec!["North".into(), 120.into(), true.into()],
                vec!["South".into(), 80.5.into(), false.into()],
                vec!["East".into(), CellValue::Null, true.into()],
            ],
        )
    }

    #[test]
    fn test_columns_preserved_in_order() {
        let model = build(Some(&sample()), &DataViewObjects::new());
        let headers: Vec<&str> = model.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, ["Region", "Sales", "Active"]);
    }

    #[test]
    fn test_rows_preserved_verbatim() {
        let view = sample();
        let model = build(Some(&view), &DataViewObjects::new());
        let source = view.table.unwrap().rows.unwrap();
        assert_eq!(model.rows.len(), source.len());
        for (row, cells) in model.rows.iter().zip(source.iter()) {
            assert_eq!(&row.cells, cells);
        }
    }

    #[test]
    fn test_navigation_items_always_prev_next() {
        let model = build(Some(&sample()), &DataViewObjects::new());
        let ids: Vec<NavigationId> = model.navigation_items.iter().map(|n| n.id).collect();
        assert_eq!(ids, [NavigationId::Prev, NavigationId::Next]);
    }

    #[test]
    fn test_absent_payload_is_empty() {
        let model = build(None, &DataViewObjects::new());
        assert_eq!(model, ViewModel::default());
    }

    #[test]
    fn test_incomplete_tables_are_empty() {
        let no_table = DataView::default();
        let no_rows = DataView {
            table: Some(DataViewTable {
                columns: Some(vec![DataViewColumn::new("A")]),
                rows: None,
            }),
            ..DataView::default()
        };
        let no_columns = DataView {
            table: Some(DataViewTable {
                columns: None,
                rows: Some(vec![vec!["x".into()]]),
            }),
            ..DataView::default()
        };

        for view in [no_table, no_rows, no_columns] {
            assert_eq!(build(Some(&view), &DataViewObjects::new()), ViewModel::default());
        }
    }

    #[test]
    fn test_empty_but_present_table_keeps_navigation() {
        let view = DataView::from_table(Vec::<String>::new(), Vec::new());
        let model = build(Some(&view), &DataViewObjects::new());
        assert!(model.columns.is_empty());
        assert!(model.rows.is_empty());
        assert_eq!(model.navigation_items.len(), 2);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let view = DataView::from_table(
            ["A", "B"],
            vec![vec!["only one".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        let model = build(Some(&view), &DataViewObjects::new());
        assert_eq!(model.rows[0].cells.len(), 1);
        assert_eq!(model.rows[1].cells.len(), 3);
    }

    #[test]
    fn test_settings_resolved_without_data() {
        let objects = DataViewObjects::new().with_number("pagesize", "numberofrows", 5.0);
        let model = build(None, &objects);
        assert_eq!(model.settings.page_size.page_size, 5);
        assert!(model.columns.is_empty());
        assert!(model.rows.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let view = sample();
        let objects = DataViewObjects::new().with_number("general", "textsize", 12.0);
        assert_eq!(build(Some(&view), &objects), build(Some(&view), &objects));
    }
}
