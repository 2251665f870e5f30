mod snapshot_io;

pub use snapshot_io::load_snapshot;
