pub mod alert_box;
pub mod page_header;
pub mod sortable_header_cell;

pub use alert_box::AlertBox;
pub use page_header::PageHeader;
pub use sortable_header_cell::SortableHeaderCell;
