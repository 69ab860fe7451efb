pub mod add_sale;
pub mod date_filter;
pub mod page;
pub mod sales_table;
pub mod summary;
