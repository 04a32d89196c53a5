pub mod expense_modal;
pub mod expense_pie_chart;
pub mod expense_table;

pub use expense_modal::{DeleteExpenseModal, ExpenseModal};
pub use expense_pie_chart::ExpensePieChart;
pub use expense_table::ExpenseTable;
