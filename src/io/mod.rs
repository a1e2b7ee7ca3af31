pub mod edge_list_reader;
pub mod query_report;

pub use edge_list_reader::load_instance;
