//! Spreadsheet export of the filtered record set
//!
//! The sheet holds the rows that pass the current search and filters (all
//! pages) and the visible data columns in display order. Cells keep their
//! raw type: strings, numbers and booleans are typed cells, compound values
//! are compact JSON, missing values are empty cells.

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::data_table::{RawCell, TableSpec, ViewState, ACTIONS_KEY};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Tabular content of one exported sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetData {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

pub fn build_sheet<T>(spec: &TableSpec<T>, records: &[T], state: &ViewState) -> SheetData {
    let columns: Vec<_> = spec
        .columns
        .iter()
        .filter(|c| c.key != ACTIONS_KEY && state.is_column_visible(c.key))
        .collect();

    let rows = spec
        .filtered_sorted(records, state)
        .into_iter()
        .map(|record| columns.iter().map(|c| c.raw_value(record)).collect())
        .collect();

    SheetData {
        sheet_name: spec.entity_plural.to_string(),
        headers: columns.iter().map(|c| c.title.to_string()).collect(),
        rows,
    }
}

/// Serialize the sheet into an .xlsx file
pub fn to_xlsx(sheet: &SheetData) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.sheet_name)?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let row_idx = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                RawCell::Empty => {}
                RawCell::Text(s) => {
                    worksheet.write_string(row_idx, col, s)?;
                }
                RawCell::Number(n) => {
                    worksheet.write_number(row_idx, col, *n)?;
                }
                RawCell::Bool(b) => {
                    worksheet.write_boolean(row_idx, col, *b)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook for the filtered records and hand it to the browser
pub fn export_to_excel<T>(
    spec: &TableSpec<T>,
    records: &[T],
    state: &ViewState,
) -> Result<usize, ExportError> {
    let sheet = build_sheet(spec, records, state);
    let bytes = to_xlsx(&sheet)?;
    download_xlsx(&bytes, &spec.export_file_name())?;
    log::info!(
        "Exported {} rows to {}",
        sheet.rows.len(),
        spec.export_file_name()
    );
    Ok(sheet.rows.len())
}

fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ExportError::Browser(format!("failed to create blob: {:?}", e)))
}

/// Trigger a file download through a temporary anchor
fn download_xlsx(bytes: &[u8], filename: &str) -> Result<(), ExportError> {
    let browser = |msg: &str| ExportError::Browser(msg.to_string());

    let blob = create_xlsx_blob(bytes)?;
    let window = web_sys::window().ok_or_else(|| browser("no window object"))?;
    let document = window.document().ok_or_else(|| browser("no document object"))?;
    let body = document.body().ok_or_else(|| browser("no body element"))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| ExportError::Browser(format!("failed to create object URL: {:?}", e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| ExportError::Browser(format!("failed to create anchor: {:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| ExportError::Browser(format!("failed to cast to anchor: {:?}", e)))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| ExportError::Browser(format!("failed to set style: {:?}", e)))?;

    body.append_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("failed to append anchor: {:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ExportError::Browser(format!("failed to remove anchor: {:?}", e)))?;

    Url::revoke_object_url(&url)
        .map_err(|e| ExportError::Browser(format!("failed to revoke URL: {:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{CellValue, Column, FlagLabels};

    struct Plan {
        id: &'static str,
        name: &'static str,
        price: f64,
        active: bool,
        features: Vec<String>,
    }

    fn spec() -> TableSpec<Plan> {
        TableSpec::new("Plan", "Plans", "plans", |p: &Plan| p.id.to_string())
            .search("Search...", |p| Some(p.name.to_string()))
            .column(Column::new("name", "Plan Name", |p: &Plan| CellValue::text(p.name)))
            .column(Column::new("price", "Price", |p: &Plan| CellValue::Number(p.price)))
            .column(Column::new("active", "Status", |p: &Plan| {
                CellValue::Flag(p.active, FlagLabels::new("Active", "Inactive"))
            }))
            .column(
                Column::new("features", "Features", |p: &Plan| CellValue::List(p.features.clone()))
                    .hidden(),
            )
            .default_sort("name")
    }

    fn plans() -> Vec<Plan> {
        vec![
            Plan { id: "1", name: "Basic", price: 9.0, active: true, features: vec!["a".into()] },
            Plan { id: "2", name: "Pro", price: 29.5, active: false, features: vec![] },
            Plan { id: "3", name: "Business", price: 99.0, active: true, features: vec![] },
        ]
    }

    #[test]
    fn test_sheet_covers_filtered_rows_and_visible_columns() {
        let spec = spec();
        let records = plans();
        let mut state = ViewState::for_spec(&spec);
        state.rows_per_page = 1;
        state.set_search("b");

        let sheet = build_sheet(&spec, &records, &state);
        assert_eq!(sheet.sheet_name, "Plans");
        assert_eq!(sheet.headers, vec!["Plan Name", "Price", "Status"]);
        assert_eq!(sheet.rows.len(), spec.filtered(&records, &state).len());
        assert_eq!(
            sheet.rows[0],
            vec![
                RawCell::Text("Basic".into()),
                RawCell::Number(9.0),
                RawCell::Bool(true),
            ]
        );
        assert_eq!(sheet.rows[1][0], RawCell::Text("Business".into()));
    }

    #[test]
    fn test_hidden_column_can_be_shown() {
        let spec = spec();
        let records = plans();
        let mut state = ViewState::for_spec(&spec);
        state.toggle_column("features");

        let sheet = build_sheet(&spec, &records, &state);
        assert_eq!(sheet.headers.last().map(String::as_str), Some("Features"));
        assert_eq!(sheet.rows[0][3], RawCell::Text(r#"["a"]"#.into()));
    }

    #[test]
    fn test_empty_set_exports_header_only() {
        let spec = spec();
        let records = plans();
        let mut state = ViewState::for_spec(&spec);
        state.set_search("nothing matches");

        let sheet = build_sheet(&spec, &records, &state);
        assert!(sheet.rows.is_empty());
        assert_eq!(sheet.headers.len(), 3);
        assert!(to_xlsx(&sheet).is_ok());
    }

    #[test]
    fn test_xlsx_is_a_zip_archive() {
        let spec = spec();
        let records = plans();
        let state = ViewState::for_spec(&spec);
        let bytes = to_xlsx(&build_sheet(&spec, &records, &state)).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(spec.export_file_name(), "PlansData.xlsx");
    }
}
