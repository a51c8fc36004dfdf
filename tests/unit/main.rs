//! Unit test modules.

mod report_format_test;
