pub mod closure;
pub mod forced_decay;
pub mod model;
