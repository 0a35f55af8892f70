/// Result for I/O and input plumbing. Domain operations return their own typed errors.
pub type Result<T = ()> = anyhow::Result<T>;
