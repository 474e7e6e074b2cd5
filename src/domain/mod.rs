//! Record types, their field parsers, and the ports the managers depend on.

pub mod business;
pub mod fields;
pub mod loan;
pub mod ports;
