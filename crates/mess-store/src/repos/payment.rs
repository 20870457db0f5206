//! Payment repository: billing plus the `pending → overdue → paid` workflow.
//!
//! The overdue transition is clock driven, but the clock is not ours:
//! callers pass `today` into [`MessService::sweep_overdue`] or flip a single
//! record with [`MessService::mark_overdue`].

use chrono::NaiveDate;
use mess_core::RecordId;
use mess_core::audit_detail::StatusChangedDetail;
use mess_core::entities::{NewPayment, PaymentRecord};
use mess_core::enums::{AuditAction, EntityType, PaymentStatus};
use mess_core::errors::CoreError;
use mess_core::responses::PaymentSummary;

use crate::service::MessService;
use crate::store::{Filter, View, contains_ci};
use crate::updates::payment::PaymentUpdate;
use crate::updates::{Patch, require_text};

/// Status filter plus search over student name and email.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub status: Option<PaymentStatus>,
    pub search: Option<String>,
}

impl Filter<PaymentRecord> for PaymentFilter {
    fn matches(&self, p: &PaymentRecord) -> bool {
        self.status.is_none_or(|s| p.status == s)
            && self.search.as_deref().is_none_or(|q| {
                contains_ci(&p.student_name, q) || contains_ci(&p.student_email, q)
            })
    }
}

impl MessService {
    /// Bill a student for one period. Records start `pending`.
    pub fn create_payment(&mut self, fields: NewPayment) -> Result<PaymentRecord, CoreError> {
        require_text("student_ref", &fields.student_ref)?;
        require_text("student_name", &fields.student_name)?;
        require_text("period", &fields.period)?;
        let amount_due = fields
            .amount_due
            .unwrap_or(self.payment_config.monthly_fee);
        if amount_due == 0 {
            return Err(CoreError::validation("amount_due must be greater than zero"));
        }

        let created = self
            .payments
            .create(|id| {
                Ok(PaymentRecord {
                    id,
                    student_ref: fields.student_ref,
                    student_name: fields.student_name,
                    student_email: fields.student_email,
                    room: fields.room,
                    period: fields.period,
                    amount_due,
                    status: PaymentStatus::Pending,
                    due_date: fields.due_date,
                    paid_on: None,
                    transaction_id: None,
                })
            })?
            .clone();

        self.audit
            .record::<()>(EntityType::Payment, created.id, AuditAction::Created, None);
        tracing::debug!(id = created.id, student = %created.student_ref, amount = created.amount_due, "payment billed");
        Ok(created)
    }

    pub fn get_payment(&self, id: RecordId) -> Result<&PaymentRecord, CoreError> {
        self.payments.get(id)
    }

    pub fn update_payment(
        &mut self,
        id: RecordId,
        update: PaymentUpdate,
    ) -> Result<PaymentRecord, CoreError> {
        if update.is_empty() {
            return self.payments.get(id).cloned();
        }
        let updated = self
            .payments
            .update(id, |record| update.apply_to(record))?
            .clone();
        self.audit
            .record(EntityType::Payment, id, AuditAction::Updated, Some(&update));
        Ok(updated)
    }

    /// Settle a pending or overdue record.
    ///
    /// # Errors
    ///
    /// `NotFound`, or `AlreadyPaid` carrying the original payment date.
    pub fn record_payment(
        &mut self,
        id: RecordId,
        paid_on: NaiveDate,
        transaction_id: Option<String>,
    ) -> Result<PaymentRecord, CoreError> {
        let transaction_id = transaction_id
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self.transition_payment(id, PaymentStatus::Paid, |record| {
            record.paid_on = Some(paid_on);
            record.transaction_id = transaction_id;
        })
    }

    /// Flip one pending record to overdue.
    ///
    /// # Errors
    ///
    /// `NotFound`, `AlreadyPaid` for a paid record, or `InvalidTransition`
    /// if it is already overdue.
    pub fn mark_overdue(&mut self, id: RecordId) -> Result<PaymentRecord, CoreError> {
        self.transition_payment(id, PaymentStatus::Overdue, |_| {})
    }

    /// Mark every pending record due before `today` overdue and return them.
    pub fn sweep_overdue(&mut self, today: NaiveDate) -> Result<Vec<PaymentRecord>, CoreError> {
        let due: Vec<RecordId> = self
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Pending && p.due_date < today)
            .map(|p| p.id)
            .collect();

        let mut changed = Vec::with_capacity(due.len());
        for id in due {
            changed.push(self.mark_overdue(id)?);
        }
        tracing::info!(%today, count = changed.len(), "overdue sweep finished");
        Ok(changed)
    }

    fn transition_payment(
        &mut self,
        id: RecordId,
        to: PaymentStatus,
        on_success: impl FnOnce(&mut PaymentRecord),
    ) -> Result<PaymentRecord, CoreError> {
        let mut from = None;
        let updated = self
            .payments
            .update(id, |record| {
                if let Some(paid_on) = record.paid_on {
                    return Err(CoreError::AlreadyPaid {
                        id: record.id,
                        paid_on,
                    });
                }
                if !record.status.can_transition_to(to) {
                    return Err(CoreError::InvalidTransition {
                        entity_type: EntityType::Payment,
                        id: record.id,
                        from: record.status.to_string(),
                        to: to.to_string(),
                    });
                }
                from = Some(record.status);
                record.status = to;
                on_success(record);
                Ok(())
            })?
            .clone();

        let from = from.unwrap_or(to);
        self.audit.record(
            EntityType::Payment,
            id,
            AuditAction::StatusChanged,
            Some(StatusChangedDetail {
                from: from.to_string(),
                to: to.to_string(),
            }),
        );
        tracing::info!(id, %from, %to, "payment status changed");
        Ok(updated)
    }

    #[must_use]
    pub fn list_payments(&self, filter: PaymentFilter) -> View<'_, PaymentRecord, PaymentFilter> {
        self.payments.list(filter)
    }

    #[must_use]
    pub fn payment_summary(&self) -> PaymentSummary {
        let mut summary = PaymentSummary {
            currency: self.payment_config.currency.clone(),
            ..PaymentSummary::default()
        };
        for p in self.payments.iter() {
            let amount = u64::from(p.amount_due);
            match p.status {
                PaymentStatus::Paid => {
                    summary.paid += 1;
                    summary.total_collected += amount;
                }
                PaymentStatus::Pending => {
                    summary.pending += 1;
                    summary.total_outstanding += amount;
                }
                PaymentStatus::Overdue => {
                    summary.overdue += 1;
                    summary.total_outstanding += amount;
                }
            }
        }
        summary
    }

    /// Every unpaid record: the target set for fee reminders.
    #[must_use]
    pub fn reminder_recipients(&self) -> Vec<PaymentRecord> {
        self.payments
            .iter()
            .filter(|p| p.status.is_unpaid())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn payment_history(&self, student_ref: &str) -> Vec<PaymentRecord> {
        self.payments
            .iter()
            .filter(|p| p.student_ref == student_ref)
            .cloned()
            .collect()
    }
}
