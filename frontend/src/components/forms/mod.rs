pub mod expense_form;
pub mod income_form;
pub mod life_plan_form;
pub mod salary_form;

pub use expense_form::ExpenseForm;
pub use income_form::IncomeForm;
pub use life_plan_form::LifePlanForm;
pub use salary_form::SalaryForm;
