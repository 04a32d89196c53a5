pub mod create_life_plan;
pub mod expenses;
pub mod home;
pub mod income_input;
pub mod not_found;
pub mod salary;

pub use create_life_plan::CreateLifePlanPage;
pub use expenses::ExpensesPage;
pub use home::HomePage;
pub use income_input::IncomeInputPage;
pub use not_found::NotFoundPage;
pub use salary::SalaryPage;
