pub mod sales_orders;
