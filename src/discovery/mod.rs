//! Order discovery.
//!
//! Finds order documents for `anonymat check` from a mix of file and
//! directory arguments.

mod scanner;

pub use scanner::{collect_orders, is_order_file, scan_directory, ORDER_EXTENSIONS};
