//! Repair of ideas whose category key drifted from the active set.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMove {
    pub idea_id: DbId,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcilePlan {
    pub moves: Vec<CategoryMove>,
    /// Ideas still outside the active set after the plan is applied.
    pub unresolved: Vec<DbId>,
}

/// Work out which ideas need a new category key.
///
/// An explicit rename always applies, even to a key that is still active.
/// Otherwise ideas with an inactive or unknown key move to `fallback` when
/// one is given. Rename targets and the fallback must be active keys.
pub fn plan_reconciliation<'a, I>(
    ideas: I,
    active_keys: &[String],
    renames: &HashMap<String, String>,
    fallback: Option<&str>,
) -> Result<ReconcilePlan, CoreError>
where
    I: IntoIterator<Item = (DbId, &'a str)>,
{
    let is_active = |key: &str| active_keys.iter().any(|k| k == key);

    for (from, to) in renames {
        if !is_active(to) {
            return Err(CoreError::Validation(format!(
                "Rename target '{to}' for '{from}' is not an active category"
            )));
        }
    }
    if let Some(fb) = fallback {
        if !is_active(fb) {
            return Err(CoreError::Validation(format!(
                "Fallback '{fb}' is not an active category"
            )));
        }
    }

    let mut plan = ReconcilePlan::default();
    for (idea_id, key) in ideas {
        let target = match renames.get(key) {
            Some(to) => Some(to.as_str()),
            None if is_active(key) => continue,
            None => fallback,
        };
        match target {
            Some(to) if to != key => plan.moves.push(CategoryMove {
                idea_id,
                from: key.to_string(),
                to: to.to_string(),
            }),
            Some(_) => {}
            None => plan.unresolved.push(idea_id),
        }
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        vec!["ai_idea".to_string(), "ai_story".to_string()]
    }

    #[test]
    fn renames_and_fallback_apply() {
        let renames = HashMap::from([("ai_solution".to_string(), "ai_idea".to_string())]);
        let ideas = [(1, "ai_solution"), (2, "ai_story"), (3, "legacy")];
        let plan = plan_reconciliation(ideas, &keys(), &renames, Some("ai_story")).unwrap();
        assert_eq!(
            plan.moves,
            vec![
                CategoryMove {
                    idea_id: 1,
                    from: "ai_solution".to_string(),
                    to: "ai_idea".to_string(),
                },
                CategoryMove {
                    idea_id: 3,
                    from: "legacy".to_string(),
                    to: "ai_story".to_string(),
                },
            ]
        );
        assert!(plan.unresolved.is_empty());
    }

    #[test]
    fn without_fallback_unknown_keys_stay_unresolved() {
        let ideas = [(7, "legacy"), (8, "ai_idea")];
        let plan = plan_reconciliation(ideas, &keys(), &HashMap::new(), None).unwrap();
        assert!(plan.moves.is_empty());
        assert_eq!(plan.unresolved, vec![7]);
    }

    #[test]
    fn inactive_rename_target_is_rejected() {
        let renames = HashMap::from([("a".to_string(), "missing".to_string())]);
        assert!(plan_reconciliation([(1, "a")], &keys(), &renames, None).is_err());
        assert!(plan_reconciliation([(1, "a")], &keys(), &HashMap::new(), Some("nope")).is_err());
    }
}
