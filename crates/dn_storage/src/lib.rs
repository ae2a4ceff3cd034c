pub mod backends;

pub use backends::{FileStore, MemoryStore};

pub mod prelude {
    pub use super::backends::{FileStore, MemoryStore};
    pub use dn_core::{DatasetStore, NewsDataset};
}
