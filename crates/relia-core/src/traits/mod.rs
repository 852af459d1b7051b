pub mod cut_set_strategy;
pub mod path_source;

pub use cut_set_strategy::ICutSetStrategy;
pub use path_source::IPathSource;
