//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use merakiop::Result;

pub mod json;
pub mod table;

/// Types that can be rendered in every output format
pub trait Formattable {
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<D: Tabled + Serialize> Formattable for Vec<D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
    }

    #[test]
    fn test_vec_formats_as_table_and_json() {
        let rows = vec![Row { id: "N_1".into() }];

        let table = rows.format(OutputFormat::Table).unwrap();
        assert!(table.contains("ID"));
        assert!(table.contains("N_1"));

        let json = rows.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"id\": \"N_1\""));
        assert!(json.contains("\"meta\""));
    }

    #[test]
    fn test_empty_vec_table() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(rows.format(OutputFormat::Table).unwrap(), "No results found.");
    }
}
