//! CSV serialization for the problems table export.
//!
//! Every cell is quoted, embedded quotes are doubled. No trailing
//! newline and no metadata rows; the download is exactly what the
//! table shows.

pub fn escape_cell(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

pub fn rows_to_csv<R, C>(rows: &[R]) -> String
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|cell| escape_cell(cell.as_ref()))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
