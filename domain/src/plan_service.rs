use log::info;
use shared::LifePlan;

#[derive(Debug, Clone, PartialEq)]
pub struct LifePlanDraft {
    pub name: String,
    pub inflation_rate: f64,
}

/// Return a new plan list with the draft appended; the new plan's id is
/// one past the highest existing id
pub fn with_plan_added(plans: &[LifePlan], draft: LifePlanDraft) -> (Vec<LifePlan>, u32) {
    let id = plans.iter().map(|plan| plan.id).max().unwrap_or(0) + 1;
    info!("Creating life plan {} ({}, {}% inflation)", id, draft.name, draft.inflation_rate);

    let mut updated = plans.to_vec();
    updated.push(LifePlan {
        id,
        name: draft.name,
        inflation_rate: draft.inflation_rate,
    });
    (updated, id)
}

pub fn find_plan(plans: &[LifePlan], id: u32) -> Option<&LifePlan> {
    plans.iter().find(|plan| plan.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_plan_gets_id_one() {
        let (plans, id) = with_plan_added(
            &[],
            LifePlanDraft {
                name: "Base".to_string(),
                inflation_rate: 2.0,
            },
        );
        assert_eq!(id, 1);
        assert_eq!(plans.len(), 1);
        assert_eq!(find_plan(&plans, 1).map(|p| p.name.as_str()), Some("Base"));
    }

    #[test]
    fn test_ids_follow_maximum() {
        let existing = vec![
            LifePlan { id: 3, name: "A".to_string(), inflation_rate: 1.0 },
            LifePlan { id: 7, name: "B".to_string(), inflation_rate: 1.0 },
        ];
        let (plans, id) = with_plan_added(
            &existing,
            LifePlanDraft {
                name: "C".to_string(),
                inflation_rate: 0.5,
            },
        );
        assert_eq!(id, 8);
        assert_eq!(plans.len(), 3);
        assert!(find_plan(&plans, 4).is_none());
    }
}
