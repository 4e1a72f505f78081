pub mod accept;

pub use accept::require_json_accept;
