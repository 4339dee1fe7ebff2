pub mod errors;
pub mod ports;
pub mod sales_order;
pub mod validation;
