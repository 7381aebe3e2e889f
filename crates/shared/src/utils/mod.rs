mod di;
mod errors;
mod log;
mod metrics;

pub use self::di::DependenciesInject;
pub use self::errors::{AppError, ErrorKind};
pub use self::log::init_logger;
pub use self::metrics::{Method, MethodLabels, Metrics, Status};
