mod row_priority;

pub use row_priority::{RowPriority, SortOrder};
