//! sea-orm entities for the work-orders service.

pub mod groups;
pub mod progress_attachments;
pub mod progress_entries;
pub mod statuses;
pub mod user_groups;
pub mod users;
pub mod work_orders;
