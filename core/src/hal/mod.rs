pub mod filesystem;
pub mod traversal;
