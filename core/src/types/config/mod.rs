mod settings;

pub use settings::{MAX_EDIT_DISTANCE_LIMIT, SearchMode, SearchSettings, SortingOption};
