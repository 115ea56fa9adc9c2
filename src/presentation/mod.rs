/// Agreement product summaries and tables
pub mod product;
