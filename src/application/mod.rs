pub mod sales_order_service;
