pub mod indoor_map;

pub use indoor_map::{IndoorMapCatalog, DEFAULT_ALLOW_LIST};
