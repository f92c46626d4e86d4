pub mod offload;
pub mod worker;

pub use offload::TextOffload;
pub use worker::{WorkerHandle, WorkerSpawner};
