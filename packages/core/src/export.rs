//! Export formats offered by the admin dashboard.

use serde::{Deserialize, Serialize};

/// Download format for the applications export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Csv, ExportFormat::Pdf];

    /// Path segment for the export endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File name the download is saved under.
    pub fn file_name(&self) -> String {
        format!("applications.{}", self.as_str())
    }

    /// Menu entry label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "Export as CSV",
            ExportFormat::Pdf => "Export as PDF",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format string is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format: {0}")]
pub struct ParseExportFormatError(pub String);

impl std::str::FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ParseExportFormatError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn formats_are_closed() {
        for format in ExportFormat::ALL {
            assert_eq!(ExportFormat::from_str(format.as_str()), Ok(format));
        }
        assert!(ExportFormat::from_str("xlsx").is_err());
    }

    #[test]
    fn file_names_carry_the_extension() {
        assert_eq!(ExportFormat::Csv.file_name(), "applications.csv");
        assert_eq!(ExportFormat::Pdf.file_name(), "applications.pdf");
    }
}
