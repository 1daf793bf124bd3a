pub mod study_report;
