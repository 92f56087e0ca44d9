mod use_router;

pub use use_router::*;
