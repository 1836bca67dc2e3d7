pub mod reply;
pub mod table;

pub use reply::Reply;
pub use table::RecordTable;
