pub mod in_memory;
pub mod models;
pub mod sales_order_repo;
