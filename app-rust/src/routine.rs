//! Generated daily routines and their checklists.

use crate::{
    config::require_model,
    store::{JsonStore, ROUTINES_KEY},
    types::{new_id, today, Category, Routine, RoutineItem},
    ScholarError, ScholarResult,
};
use cognipath_sdk::{LanguageModel, LanguageModelInput, Message, Part, ResponseFormatOption};
use serde_json::{json, Value};
use std::sync::Arc;

pub(crate) fn routine_schema() -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "time": { "type": "string", "description": "e.g., 08:00 AM - 09:00 AM" },
                "activity": { "type": "string" },
                "category": { "type": "string", "enum": ["academic", "personal", "health"] },
                "completed": { "type": "boolean" }
            },
            "required": ["time", "activity", "category"]
        }
    })
}

pub(crate) fn routine_prompt(preferences: &str) -> String {
    format!(
        "Create a daily routine based on the following user preferences and goals: \"{preferences}\".
The routine should balance academic study, personal time, and health.
Return a list of specific time slots and activities."
    )
}

/// Item counts per category, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutineStats {
    pub academic: usize,
    pub personal: usize,
    pub health: usize,
}

impl RoutineStats {
    #[must_use]
    pub fn entries(&self) -> [(Category, usize); 3] {
        [
            (Category::Academic, self.academic),
            (Category::Personal, self.personal),
            (Category::Health, self.health),
        ]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.academic + self.personal + self.health
    }
}

impl From<&Routine> for RoutineStats {
    fn from(routine: &Routine) -> Self {
        routine
            .items
            .iter()
            .fold(Self::default(), |mut stats, item| {
                match item.category {
                    Category::Academic => stats.academic += 1,
                    Category::Personal => stats.personal += 1,
                    Category::Health => stats.health += 1,
                }
                stats
            })
    }
}

/// The most recently generated routine in `store`.
pub fn latest(store: &JsonStore) -> ScholarResult<Option<Routine>> {
    Ok(store.load_list::<Routine>(ROUTINES_KEY)?.pop())
}

pub struct RoutinePlanner {
    model: Option<Arc<dyn LanguageModel>>,
    store: JsonStore,
}

impl RoutinePlanner {
    pub fn new(model: Option<Arc<dyn LanguageModel>>, store: JsonStore) -> Self {
        Self { model, store }
    }

    pub fn routines(&self) -> ScholarResult<Vec<Routine>> {
        self.store.load_list(ROUTINES_KEY)
    }

    /// The most recently generated routine.
    pub fn current(&self) -> ScholarResult<Option<Routine>> {
        latest(&self.store)
    }

    /// Generate a routine from free-text preferences. It becomes the current
    /// routine.
    #[tracing::instrument(skip(self, preferences), fields(len = preferences.len()))]
    pub async fn generate(&self, preferences: &str) -> ScholarResult<Routine> {
        if preferences.trim().is_empty() {
            return Err(ScholarError::InvalidInput(
                "describe your schedule and goals first".to_string(),
            ));
        }

        let model = require_model(self.model.as_ref())?;

        let input = LanguageModelInput {
            messages: vec![Message::user([Part::text(routine_prompt(preferences))])],
            response_format: Some(ResponseFormatOption::json("routine", routine_schema())),
            ..Default::default()
        };

        let response = model.generate(input).await.map_err(|error| {
            tracing::error!(%error, "routine request failed");
            ScholarError::from(error)
        })?;
        let raw = response.text().ok_or(ScholarError::EmptyResponse)?;
        let items: Vec<RoutineItem> = serde_json::from_str(&raw)?;

        let routine = Routine {
            id: new_id(),
            date: today(),
            items,
        };

        let mut routines = self.routines()?;
        routines.push(routine.clone());
        self.store.save(ROUTINES_KEY, &routines)?;

        tracing::info!(id = %routine.id, items = routine.items.len(), "routine stored");
        Ok(routine)
    }

    /// Flip the completion mark of one item of the current routine.
    pub fn toggle(&self, index: usize) -> ScholarResult<Routine> {
        let mut routines = self.routines()?;
        let current = routines
            .last_mut()
            .ok_or_else(|| ScholarError::NotFound("no routine has been generated".to_string()))?;

        let count = current.items.len();
        let item = current.items.get_mut(index).ok_or_else(|| {
            ScholarError::InvalidInput(format!(
                "item {index} is out of range (routine has {count} items)"
            ))
        })?;
        item.completed = !item.completed;

        let updated = current.clone();
        self.store.save(ROUTINES_KEY, &routines)?;
        Ok(updated)
    }

    pub fn stats(&self) -> ScholarResult<RoutineStats> {
        Ok(self
            .current()?
            .as_ref()
            .map(RoutineStats::from)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category) -> RoutineItem {
        RoutineItem {
            time: "07:00 AM".to_string(),
            activity: "x".to_string(),
            category,
            completed: false,
        }
    }

    #[test]
    fn stats_count_each_category() {
        let routine = Routine {
            id: "r".to_string(),
            date: "1/1/2025".to_string(),
            items: vec![
                item(Category::Academic),
                item(Category::Health),
                item(Category::Academic),
            ],
        };

        let stats = RoutineStats::from(&routine);
        assert_eq!(
            stats,
            RoutineStats {
                academic: 2,
                personal: 0,
                health: 1
            }
        );
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn prompt_quotes_preferences() {
        assert!(routine_prompt("run at 6").contains("\"run at 6\""));
    }
}
