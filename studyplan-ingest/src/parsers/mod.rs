pub mod performance_report;
