//! Meal windows and menus, one `MealTiming` per meal.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use mess_core::entities::MealTiming;
use mess_core::enums::{EntityType, Meal};
use mess_core::errors::CoreError;

/// Keyed collection of meal timings, iterated breakfast → lunch → dinner.
#[derive(Debug, Clone, Default)]
pub struct MenuBoard {
    timings: BTreeMap<Meal, MealTiming>,
}

impl MenuBoard {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if two timings share a meal or a
    /// window does not end after it starts.
    pub fn from_timings(timings: Vec<MealTiming>) -> Result<Self, CoreError> {
        let mut board = Self::default();
        for timing in timings {
            check_window(timing.start_time, timing.end_time)?;
            if board.timings.insert(timing.meal, timing.clone()).is_some() {
                return Err(CoreError::validation(format!(
                    "duplicate timing for {}",
                    timing.meal
                )));
            }
        }
        Ok(board)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no timing exists for `meal`.
    pub fn get(&self, meal: Meal) -> Result<&MealTiming, CoreError> {
        self.timings.get(&meal).ok_or_else(|| not_found(meal))
    }

    pub fn iter(&self) -> impl Iterator<Item = &MealTiming> {
        self.timings.values()
    }

    /// Set the serving window, creating the timing if the meal has none.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` unless `start < end`.
    pub fn set_window(
        &mut self,
        meal: Meal,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<&MealTiming, CoreError> {
        check_window(start, end)?;
        let timing = self.timings.entry(meal).or_insert_with(|| MealTiming {
            meal,
            start_time: start,
            end_time: end,
            items: Vec::new(),
        });
        timing.start_time = start;
        timing.end_time = end;
        Ok(timing)
    }

    /// Append a menu item. The name is trimmed; duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name, or
    /// `CoreError::NotFound` if the meal has no timing.
    pub fn add_item(&mut self, meal: Meal, name: &str) -> Result<&MealTiming, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("menu item name must not be empty"));
        }
        let timing = self.timings.get_mut(&meal).ok_or_else(|| not_found(meal))?;
        timing.items.push(name.to_string());
        Ok(timing)
    }

    /// Remove the first item named exactly `name`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the meal has no timing or no such item.
    pub fn remove_item(&mut self, meal: Meal, name: &str) -> Result<&MealTiming, CoreError> {
        let timing = self.timings.get_mut(&meal).ok_or_else(|| not_found(meal))?;
        let index = timing
            .items
            .iter()
            .position(|item| item == name)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: EntityType::MealTiming,
                id: format!("{meal}/{name}"),
            })?;
        timing.items.remove(index);
        Ok(timing)
    }
}

fn check_window(start: NaiveTime, end: NaiveTime) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::validation(format!(
            "meal window must end after it starts ({} >= {})",
            start.format("%H:%M"),
            end.format("%H:%M")
        )));
    }
    Ok(())
}

fn not_found(meal: Meal) -> CoreError {
    CoreError::NotFound {
        entity_type: EntityType::MealTiming,
        id: meal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use mess_core::clock_serde::parse_hhmm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn board() -> MenuBoard {
        let mut board = MenuBoard::default();
        board
            .set_window(
                Meal::Breakfast,
                parse_hhmm("07:00").unwrap(),
                parse_hhmm("09:00").unwrap(),
            )
            .unwrap();
        board
    }

    #[test]
    fn inverted_window_is_rejected_and_board_unchanged() {
        let mut board = board();
        let err = board
            .set_window(
                Meal::Breakfast,
                parse_hhmm("09:00").unwrap(),
                parse_hhmm("07:00").unwrap(),
            )
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        let timing = board.get(Meal::Breakfast).unwrap();
        assert_eq!(timing.window_label(), "07:00 - 09:00");
    }

    #[test]
    fn equal_start_and_end_is_rejected() {
        let mut board = board();
        let t = parse_hhmm("08:00").unwrap();
        assert!(board.set_window(Meal::Breakfast, t, t).is_err());
    }

    #[test]
    fn remove_item_drops_first_duplicate_only() {
        let mut board = board();
        board.add_item(Meal::Breakfast, "Milk").unwrap();
        board.add_item(Meal::Breakfast, " Poha ").unwrap();
        board.add_item(Meal::Breakfast, "Milk").unwrap();

        let timing = board.remove_item(Meal::Breakfast, "Milk").unwrap();
        assert_eq!(timing.items, vec!["Poha", "Milk"]);
    }

    #[test]
    fn remove_missing_item_is_not_found() {
        let mut board = board();
        let err = board.remove_item(Meal::Breakfast, "Dosa").unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                entity_type: EntityType::MealTiming,
                id: "breakfast/Dosa".into(),
            }
        );
    }

    #[test]
    fn add_item_to_unknown_meal_is_not_found() {
        let mut board = board();
        assert!(matches!(
            board.add_item(Meal::Dinner, "Rice"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn blank_item_is_rejected() {
        let mut board = board();
        assert!(matches!(
            board.add_item(Meal::Breakfast, "   "),
            Err(CoreError::Validation(_))
        ));
    }
}
