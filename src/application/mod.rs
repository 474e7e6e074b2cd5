//! Application layer: the record managers and the operation dispatcher.
//!
//! `BusinessManager` and `LoanManager` each own one store namespace and turn
//! positional text arguments into validated records. `Dispatcher` maps the
//! operation names of the invocation surface onto them.

pub mod business;
pub mod dispatch;
pub mod loan;
pub mod records;
