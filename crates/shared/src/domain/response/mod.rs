mod api;
mod category;

pub use self::api::{ResponseStatus, WebResponse};
pub use self::category::CategoryResponse;
