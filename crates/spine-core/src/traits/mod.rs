pub mod storage;

pub use storage::{RecordSink, RecordSource};
