//! Spreadsheet export of joined sessions

use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook};

use super::detail::SessionDetail;
use super::error::ExportError;

/// Worksheet holding the export
pub const SHEET_NAME: &str = "Sesiones";

/// MIME type of the generated workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column headers, in output order
pub const HEADERS: [&str; 11] = [
    "Compañía Mentor",
    "Compañía Startup",
    "Fecha",
    "Tema",
    "Duración (min)",
    "Resumen",
    "Estado",
    "Comentarios",
    "URL Documento",
    "Mentor Firmó",
    "Startup Firmó",
];

/// Most characters an Excel cell holds
pub const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Text cell, cut to [`MAX_CELL_CHARS`] characters
    pub fn text(value: impl Into<String>) -> Self {
        let mut value = value.into();
        if let Some((end, _)) = value.char_indices().nth(MAX_CELL_CHARS) {
            value.truncate(end);
        }
        Cell::Text(value)
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::text).unwrap_or(Cell::Empty)
    }
}

/// Sessions laid out as spreadsheet rows; identifiers are not exported
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn from_sessions(sessions: &[SessionDetail]) -> Result<Self, ExportError> {
        if sessions.is_empty() {
            return Err(ExportError::Empty);
        }

        let rows = sessions.iter().map(session_row).collect();
        Ok(Self { rows })
    }

    pub fn headers(&self) -> &'static [&'static str] {
        &HEADERS
    }

    /// Serialize as a single-sheet workbook
    pub fn to_xlsx(&self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, cells) in self.rows.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row, col, text)?;
                    }
                    Cell::Number(number) => {
                        worksheet.write_number(row, col, *number)?;
                    }
                    Cell::Bool(flag) => {
                        worksheet.write_boolean(row, col, *flag)?;
                    }
                    Cell::Empty => {}
                }
            }
        }
        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }
}

fn session_row(session: &SessionDetail) -> Vec<Cell> {
    vec![
        Cell::text(session.company_name.as_str()),
        Cell::text(session.startup_company.as_str()),
        session.date.clone().into(),
        session.topic.clone().into(),
        session
            .duration
            .map(|minutes| Cell::Number(minutes as f64))
            .unwrap_or(Cell::Empty),
        session.summary.clone().into(),
        session.status.clone().into(),
        Cell::text(session.comments.join(", ")),
        session.pdf_url.clone().into(),
        Cell::Bool(session.mentor_signed),
        Cell::Bool(session.startup_signed),
    ]
}

/// Download name for an export produced at `now` (local time)
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("sesiones_mentorias_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}
