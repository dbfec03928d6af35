pub mod snapshot_reader;
pub mod summary_writer;
