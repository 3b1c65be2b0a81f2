use serde::{Deserialize, Serialize};

/// Student details printed verbatim in the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub experiment_label: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            student_name: String::new(),
            class_name: "S7 CSE B".to_string(),
            roll_number: String::new(),
            experiment_label: String::new(),
        }
    }
}

impl ReportMetadata {
    /// Download name for a report in the given format, e.g. `exp1_report.pdf`.
    pub fn report_file_name(&self, ext: &str) -> String {
        format!("{}_report.{ext}", self.experiment_label)
    }
}
