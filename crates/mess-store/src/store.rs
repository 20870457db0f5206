//! Generic insertion-ordered record collection.
//!
//! `EntityStore<T>` owns one homogeneous collection. Ids come from a
//! monotonic counter and are never reused, even after deletes. Every
//! mutating method either commits fully or leaves the store untouched.

use mess_core::RecordId;
use mess_core::entities::{Announcement, Feedback, PaymentRecord, Poll};
use mess_core::enums::EntityType;
use mess_core::errors::CoreError;

/// Where newly created records land in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// Newest first.
    Prepend,
    /// As created.
    Append,
}

/// A record that can live in an `EntityStore`.
pub trait Record: Clone {
    const ENTITY: EntityType;
    const ORDER: InsertOrder;

    fn id(&self) -> RecordId;
}

impl Record for Announcement {
    const ENTITY: EntityType = EntityType::Announcement;
    const ORDER: InsertOrder = InsertOrder::Prepend;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Poll {
    const ENTITY: EntityType = EntityType::Poll;
    const ORDER: InsertOrder = InsertOrder::Prepend;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Feedback {
    const ENTITY: EntityType = EntityType::Feedback;
    const ORDER: InsertOrder = InsertOrder::Prepend;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for PaymentRecord {
    const ENTITY: EntityType = EntityType::Payment;
    const ORDER: InsertOrder = InsertOrder::Append;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// A pure predicate over records.
pub trait Filter<T> {
    fn matches(&self, record: &T) -> bool;
}

impl<T, F> Filter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, record: &T) -> bool {
        self(record)
    }
}

/// Accept everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct All;

impl<T> Filter<T> for All {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

/// Case-insensitive substring match. An empty needle matches everything.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Lazy filtered view over a store. Iterate it as many times as needed.
pub struct View<'a, T, F> {
    records: &'a [T],
    filter: F,
}

impl<'a, T, F: Filter<T>> View<'a, T, F> {
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.records.iter().filter(|record| self.filter.matches(record))
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Materialize the view into owned records.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Owning, insertion-ordered collection of one record type.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    records: Vec<T>,
    next_id: RecordId,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from existing records kept in the given display order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if two records share an id.
    pub fn from_records(records: Vec<T>) -> Result<Self, CoreError> {
        let mut seen = std::collections::BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(CoreError::validation(format!(
                    "duplicate {} id {}",
                    T::ENTITY,
                    record.id()
                )));
            }
        }
        let next_id = seen.last().map_or(1, |max| max + 1);
        Ok(Self { records, next_id })
    }

    /// Build a record with the next id and store it.
    ///
    /// The id is only consumed when `build` succeeds.
    ///
    /// # Errors
    ///
    /// Propagates whatever `build` returns.
    pub fn create<F>(&mut self, build: F) -> Result<&T, CoreError>
    where
        F: FnOnce(RecordId) -> Result<T, CoreError>,
    {
        let record = build(self.next_id)?;
        self.next_id += 1;
        let index = match T::ORDER {
            InsertOrder::Prepend => {
                self.records.insert(0, record);
                0
            }
            InsertOrder::Append => {
                self.records.push(record);
                self.records.len() - 1
            }
        };
        Ok(&self.records[index])
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn get(&self, id: RecordId) -> Result<&T, CoreError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| CoreError::not_found(T::ENTITY, id))
    }

    /// Apply `mutate` to a copy of the record and commit only on success.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id, or whatever
    /// `mutate` returns. The stored record is unchanged on error.
    pub fn update<F>(&mut self, id: RecordId, mutate: F) -> Result<&T, CoreError>
    where
        F: FnOnce(&mut T) -> Result<(), CoreError>,
    {
        let index = self.position(id)?;
        let mut draft = self.records[index].clone();
        mutate(&mut draft)?;
        self.records[index] = draft;
        Ok(&self.records[index])
    }

    /// Remove a record permanently.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no record has this id.
    pub fn delete(&mut self, id: RecordId) -> Result<T, CoreError> {
        let index = self.position(id)?;
        Ok(self.records.remove(index))
    }

    /// Lazy view of records matching `filter`, in display order.
    pub fn list<F: Filter<T>>(&self, filter: F) -> View<'_, T, F> {
        View {
            records: &self.records,
            filter,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Result<usize, CoreError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| CoreError::not_found(T::ENTITY, id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mess_core::enums::AnnouncementCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    fn announcement(id: RecordId, title: &str) -> Announcement {
        Announcement {
            id,
            title: title.to_string(),
            message: format!("{title} body"),
            category: AnnouncementCategory::General,
            created_at: Utc::now(),
        }
    }

    fn titles(store: &EntityStore<Announcement>) -> Vec<String> {
        store.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn create_assigns_sequential_ids_and_prepends() {
        let mut store = EntityStore::<Announcement>::new();
        let first = store.create(|id| Ok(announcement(id, "first"))).unwrap().id;
        let second = store.create(|id| Ok(announcement(id, "second"))).unwrap().id;

        assert_eq!((first, second), (1, 2));
        assert_eq!(titles(&store), vec!["second", "first"]);
    }

    #[test]
    fn failed_build_does_not_consume_id() {
        let mut store = EntityStore::<Announcement>::new();
        let err = store
            .create(|_| Err(CoreError::validation("title is required")))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.is_empty());

        let id = store.create(|id| Ok(announcement(id, "ok"))).unwrap().id;
        assert_eq!(id, 1);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = EntityStore::<Announcement>::new();
        store.create(|id| Ok(announcement(id, "a"))).unwrap();
        let b = store.create(|id| Ok(announcement(id, "b"))).unwrap().id;
        store.delete(b).unwrap();

        let c = store.create(|id| Ok(announcement(id, "c"))).unwrap().id;
        assert_eq!(c, 3);
    }

    #[test]
    fn delete_then_update_or_delete_is_not_found() {
        let mut store = EntityStore::<Announcement>::new();
        let id = store.create(|id| Ok(announcement(id, "gone"))).unwrap().id;
        store.delete(id).unwrap();

        assert!(matches!(store.delete(id), Err(CoreError::NotFound { .. })));
        assert!(matches!(
            store.update(id, |_| Ok(())),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn failed_update_leaves_record_untouched() {
        let mut store = EntityStore::<Announcement>::new();
        let id = store.create(|id| Ok(announcement(id, "keep"))).unwrap().id;

        let result = store.update(id, |record| {
            record.title = String::from("changed");
            Err(CoreError::validation("nope"))
        });

        assert!(result.is_err());
        assert_eq!(store.get(id).unwrap().title, "keep");
    }

    #[test]
    fn from_records_continues_after_max_id() {
        let mut store =
            EntityStore::from_records(vec![announcement(7, "x"), announcement(3, "y")]).unwrap();
        let id = store.create(|id| Ok(announcement(id, "z"))).unwrap().id;
        assert_eq!(id, 8);
    }

    #[test]
    fn from_records_rejects_duplicate_ids() {
        let err =
            EntityStore::from_records(vec![announcement(1, "x"), announcement(1, "y")]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn list_view_is_lazy_and_restartable() {
        let mut store = EntityStore::<Announcement>::new();
        for title in ["Holiday", "menu change", "Holiday menu"] {
            store.create(|id| Ok(announcement(id, title))).unwrap();
        }

        let view = store.list(|a: &Announcement| contains_ci(&a.title, "holiday"));
        assert_eq!(view.count(), 2);
        let again: Vec<_> = view.iter().map(|a| a.id).collect();
        assert_eq!(again, vec![3, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn contains_ci_ignores_case_and_empty_needle() {
        assert!(contains_ci("Food Quality", "food"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Hygiene", "menu"));
    }
}
