mod lru;
mod opt;

pub use {lru::LruPolicy, opt::OptPolicy};
