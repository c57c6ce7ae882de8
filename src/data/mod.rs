mod earnings_repo;

pub use earnings_repo::{BlockWin, EarningsRepository, EarningsRepositoryTrait};
