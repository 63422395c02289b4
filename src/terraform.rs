pub mod flatmap;
pub mod state;

pub use flatmap::{FlatList, FlatMap, FlatScope, FlatmapError};
pub use state::{StateError, StateFile, StateResource};
