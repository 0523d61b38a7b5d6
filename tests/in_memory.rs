//! In-memory integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `system_services_tests`: capability wiring and the capability report
//! - `radio_switching_tests`: enumeration and switching through the catalogue
//! - `network_information_tests`: profile listing and internet selection

mod in_memory {
    pub mod helpers;

    mod network_information_tests;
    mod radio_switching_tests;
    mod system_services_tests;
}
