mod category;

pub use self::category::CategoryRepository;
