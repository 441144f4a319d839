/// CSV export of dashboard tables.
pub mod export;
