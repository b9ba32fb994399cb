pub mod cache;
pub mod charities;
pub mod dispatch;
pub mod heat;
pub mod list;
pub mod load;
pub mod schema;
pub mod shared;
pub mod show;
pub mod top;
