mod persistence;
mod validation;

pub use persistence::PersistenceInstance;
pub use validation::ValidationInstance;
