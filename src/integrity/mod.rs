pub mod checksum;
pub mod observer;

pub use checksum::ChecksumAlgorithm;
pub use observer::RepositoryObserver;
