//! Campaign report rendering — turns a diagnosis into a downloadable
//! document.

pub mod report;

pub use report::{render, report_filename, ReportFormat};
