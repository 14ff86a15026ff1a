pub mod rate_store;
pub mod writeback_impl;
