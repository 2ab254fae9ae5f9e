pub mod dp_cache;
