//! Host UI bridge for `projboard_core`.

pub mod api;
