use log::info;
use shared::Income;

/// A validated income entry waiting for an id
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeDraft {
    pub name: String,
    pub amount: u64,
}

/// Return a new list with the draft appended under the next free id
pub fn with_income_added(incomes: &[Income], draft: IncomeDraft) -> Vec<Income> {
    let id = incomes.iter().map(|income| income.id).max().unwrap_or(0) + 1;
    info!("Adding income {} ({})", id, draft.name);

    let mut updated = incomes.to_vec();
    updated.push(Income {
        id,
        name: draft.name,
        amount: draft.amount,
    });
    updated
}

pub fn without_income(incomes: &[Income], id: u32) -> Vec<Income> {
    incomes.iter().filter(|income| income.id != id).cloned().collect()
}

pub fn total_income(incomes: &[Income]) -> u64 {
    incomes.iter().map(|income| income.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, amount: u64) -> IncomeDraft {
        IncomeDraft {
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn test_add_and_total() {
        let incomes = with_income_added(&[], draft("Salary", 4_000_000));
        let incomes = with_income_added(&incomes, draft("Bonus", 600_000));

        assert_eq!(incomes.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(total_income(&incomes), 4_600_000);
    }

    #[test]
    fn test_remove() {
        let incomes = with_income_added(&[], draft("Salary", 100));
        let incomes = with_income_added(&incomes, draft("Rent income", 50));

        let remaining = without_income(&incomes, 1);

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Rent income");
        assert_eq!(incomes.len(), 2);
    }
}
