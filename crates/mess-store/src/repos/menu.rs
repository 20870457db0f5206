//! Menu repository: audited edits to meal windows and item lists.

use mess_core::audit_detail::MenuChangedDetail;
use mess_core::clock_serde::{format_hhmm, parse_hhmm};
use mess_core::entities::MealTiming;
use mess_core::enums::{AuditAction, EntityType, Meal};
use mess_core::errors::CoreError;

use crate::service::MessService;

impl MessService {
    /// Set a meal's serving window from `"HH:MM"` strings.
    ///
    /// # Errors
    ///
    /// `Validation` for malformed times or a window that does not end after
    /// it starts. The board is unchanged on error.
    pub fn set_window(
        &mut self,
        meal: Meal,
        start_time: &str,
        end_time: &str,
    ) -> Result<MealTiming, CoreError> {
        let start = parse_hhmm(start_time)?;
        let end = parse_hhmm(end_time)?;
        let timing = self.menu.set_window(meal, start, end)?.clone();

        self.record_menu_change(
            meal,
            &MenuChangedDetail::Window {
                start_time: format_hhmm(start),
                end_time: format_hhmm(end),
            },
        );
        tracing::info!(%meal, window = %timing.window_label(), "meal window set");
        Ok(timing)
    }

    pub fn add_item(&mut self, meal: Meal, name: &str) -> Result<MealTiming, CoreError> {
        let timing = self.menu.add_item(meal, name)?.clone();
        self.record_menu_change(
            meal,
            &MenuChangedDetail::ItemAdded {
                name: name.trim().to_string(),
            },
        );
        Ok(timing)
    }

    pub fn remove_item(&mut self, meal: Meal, name: &str) -> Result<MealTiming, CoreError> {
        let timing = self.menu.remove_item(meal, name)?.clone();
        self.record_menu_change(
            meal,
            &MenuChangedDetail::ItemRemoved {
                name: name.to_string(),
            },
        );
        Ok(timing)
    }

    pub fn menu_for(&self, meal: Meal) -> Result<&MealTiming, CoreError> {
        self.menu.get(meal)
    }

    /// All timings in meal order.
    #[must_use]
    pub fn menu(&self) -> Vec<MealTiming> {
        self.menu.iter().cloned().collect()
    }

    fn record_menu_change(&mut self, meal: Meal, detail: &MenuChangedDetail) {
        self.audit
            .record(EntityType::MealTiming, meal, AuditAction::Updated, Some(detail));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::audit::AuditFilter;
    use crate::test_support::helpers::test_service;

    #[test]
    fn inverted_breakfast_window_fails_without_audit() {
        let mut svc = test_service();
        svc.set_window(Meal::Breakfast, "07:00", "09:00").unwrap();
        let entries = svc.audit(&AuditFilter::default()).len();

        let err = svc.set_window(Meal::Breakfast, "09:00", "07:00").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(svc.menu_for(Meal::Breakfast).unwrap().window_label(), "07:00 - 09:00");
        assert_eq!(svc.audit(&AuditFilter::default()).len(), entries);
    }

    #[test]
    fn malformed_time_is_validation() {
        let mut svc = test_service();
        assert!(matches!(
            svc.set_window(Meal::Lunch, "noon", "14:00"),
            Err(CoreError::Validation(_))
        ));
        assert!(svc.menu().is_empty());
    }

    #[test]
    fn item_changes_are_audited_against_the_meal() {
        let mut svc = test_service();
        svc.set_window(Meal::Dinner, "19:30", "21:00").unwrap();
        svc.add_item(Meal::Dinner, " Paneer ").unwrap();
        let timing = svc.remove_item(Meal::Dinner, "Paneer").unwrap();
        assert!(timing.items.is_empty());

        let entries = svc.audit(&AuditFilter {
            entity_type: Some(EntityType::MealTiming),
            ..AuditFilter::default()
        });
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entity_id, "dinner");
        let detail = entries[0].detail.as_ref().unwrap();
        assert_eq!(detail["change"], "item_removed");
        assert_eq!(detail["name"], "Paneer");
    }

    #[test]
    fn menu_lists_in_meal_order() {
        let mut svc = test_service();
        svc.set_window(Meal::Dinner, "19:30", "21:00").unwrap();
        svc.set_window(Meal::Breakfast, "07:00", "09:00").unwrap();
        let meals: Vec<_> = svc.menu().iter().map(|t| t.meal).collect();
        assert_eq!(meals, vec![Meal::Breakfast, Meal::Dinner]);
    }
}
