//! Accept-loop bootstrap.

pub mod listener;
