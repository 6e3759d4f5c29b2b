use std::path::PathBuf;

use crm_validate::QualityReport;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: QualityReport,
    pub quality_failed: bool,
}
