//! Integration test modules.

mod sensor_package_test;
