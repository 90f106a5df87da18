use crate::domain::catalog::{CatalogRepository, Department};
use std::sync::Arc;

/// Identifies one department request: the wing it was issued for and its
/// position in the sequence of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentTicket {
    pub wing_id: i64,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentResponse {
    pub ticket: DepartmentTicket,
    pub departments: Vec<Department>,
}

/// Department dropdown state for the wing currently selected on the form.
///
/// Only the response to the most recently issued ticket is accepted. A slow
/// response for an earlier wing can therefore never overwrite the list for
/// the wing the user has since picked, even when the same wing was picked
/// again in between.
#[derive(Debug, Clone, Default)]
pub struct DepartmentOptions {
    latest: Option<DepartmentTicket>,
    next_sequence: u64,
    departments: Vec<Department>,
}

impl DepartmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading departments for `wing_id`; the current list is cleared
    /// until the matching response arrives. `None` clears the selection.
    pub fn select_wing(&mut self, wing_id: Option<i64>) -> Option<DepartmentTicket> {
        self.departments.clear();
        let Some(wing_id) = wing_id else {
            self.latest = None;
            return None;
        };
        let ticket = DepartmentTicket {
            wing_id,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.latest = Some(ticket);
        Some(ticket)
    }

    /// Stores the response if it answers the latest ticket. Returns whether it
    /// was accepted.
    pub fn accept(&mut self, response: DepartmentResponse) -> bool {
        if self.latest != Some(response.ticket) {
            tracing::debug!(
                "discarding stale departments for wing {} (request #{})",
                response.ticket.wing_id,
                response.ticket.sequence
            );
            return false;
        }
        self.departments = response.departments;
        true
    }

    pub fn wing_id(&self) -> Option<i64> {
        self.latest.map(|t| t.wing_id)
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn contains(&self, department_id: i64) -> bool {
        self.departments.iter().any(|d| d.id == department_id)
    }
}

pub struct LoadDepartmentsUseCase {
    repo: Arc<dyn CatalogRepository>,
}

impl LoadDepartmentsUseCase {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Fetches departments for the ticket's wing. A failed fetch is logged and
    /// answered with an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, ticket: DepartmentTicket) -> DepartmentResponse {
        let departments = match self.repo.departments(ticket.wing_id).await {
            Ok(departments) => departments,
            Err(e) => {
                tracing::warn!("Failed to load departments for wing {}: {:?}", ticket.wing_id, e);
                Vec::new()
            }
        };
        DepartmentResponse {
            ticket,
            departments,
        }
    }
}
