//! Reservation store
//!
//! Shared state for the admin interface: the authoritative branch
//! list, a loading flag, and the last error message. One instance is
//! constructed at startup and handed to every consumer by `Arc`;
//! tests build their own isolated instances against a mock gateway.
//!
//! Derived views are recomputed from the current state on every call.
//! Mutations are never applied locally — after a successful write the
//! store re-fetches so the server stays authoritative. Read failures
//! are absorbed into the `error` field; write failures set `error`
//! and are also returned to the caller.

use crate::api::BranchApi;
use crate::error::ClientError;
use futures::future;
use shared::{Branch, ReservationTimes, UpdateBranchPayload};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Reservation-eligible table presented for selection
///
/// Derived from a branch's sections on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOption {
    pub id: String,
    /// `"<sectionName> - <tableName>"`
    pub label: String,
    pub section_id: String,
}

#[derive(Default)]
struct StoreState {
    branches: Vec<Branch>,
    loading: bool,
    error: Option<String>,
}

/// Shared reservation state over a branch gateway
pub struct ReservationStore {
    api: Arc<dyn BranchApi>,
    state: RwLock<StoreState>,
}

impl ReservationStore {
    /// Create an empty store over the given gateway
    pub fn new(api: Arc<dyn BranchApi>) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::default()),
        }
    }

    // ==================== Snapshot reads ====================

    /// Current branch list
    pub async fn branches(&self) -> Vec<Branch> {
        self.state.read().await.branches.clone()
    }

    /// Whether a fetch is in flight
    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Message of the last failed operation, cleared by the next fetch
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Branches currently accepting reservations
    pub async fn branches_with_reservations(&self) -> Vec<Branch> {
        self.state
            .read()
            .await
            .branches
            .iter()
            .filter(|b| b.accepts_reservations)
            .cloned()
            .collect()
    }

    /// Branches not accepting reservations
    pub async fn branches_without_reservations(&self) -> Vec<Branch> {
        self.state
            .read()
            .await
            .branches
            .iter()
            .filter(|b| !b.accepts_reservations)
            .cloned()
            .collect()
    }

    // ==================== Operations ====================

    /// Refresh the branch list from the server
    ///
    /// Replaces the local list wholesale on success. Failure is
    /// absorbed: `error` is set and the call still resolves. `loading`
    /// is cleared on both paths.
    pub async fn fetch_branches(&self) {
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = self.api.get_branches().await;

        let mut state = self.state.write().await;
        match result {
            Ok(response) => {
                tracing::debug!(count = response.data.len(), "Branches refreshed");
                state.branches = response.data;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch branches");
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
    }

    /// Enable reservations for one branch
    ///
    /// Does NOT refresh the branch list — callers that need updated
    /// state trigger [`fetch_branches`](Self::fetch_branches)
    /// themselves. This asymmetry with the other write operations is
    /// part of the external contract.
    pub async fn enable_branch_reservations(&self, branch_id: &str) -> Result<(), ClientError> {
        match self.api.enable_reservations(branch_id).await {
            Ok(_) => Ok(()),
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    /// Disable reservations for every branch that currently accepts
    /// them
    ///
    /// One disable request per eligible branch, all in flight at once,
    /// fail-fast: the first failure aborts the aggregate and which of
    /// the remaining requests completed server-side is unspecified.
    /// The list is refreshed only when every request succeeded.
    pub async fn disable_all_reservations(&self) -> Result<(), ClientError> {
        let targets = self.branches_with_reservations().await;
        tracing::debug!(count = targets.len(), "Disabling reservations");

        let result = future::try_join_all(
            targets.iter().map(|b| self.api.disable_reservations(&b.id)),
        )
        .await;

        match result {
            Ok(_) => {
                self.fetch_branches().await;
                Ok(())
            }
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    /// Update one branch's reservation duration and weekly windows,
    /// then refresh
    pub async fn update_branch_settings(
        &self,
        branch_id: &str,
        duration: u32,
        times: ReservationTimes,
    ) -> Result<(), ClientError> {
        let payload = UpdateBranchPayload::settings(duration, times);
        match self.api.update_branch(branch_id, &payload).await {
            Ok(_) => {
                self.fetch_branches().await;
                Ok(())
            }
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    async fn record_error(&self, e: &ClientError) {
        tracing::error!(error = %e, "Branch update failed");
        self.state.write().await.error = Some(e.to_string());
    }
}

// ==================== Pure helpers ====================

/// Count of reservation-accepting tables across a branch's sections
///
/// Returns 0 both when no sections were fetched and when no table
/// qualifies.
pub fn reservation_tables_count(branch: &Branch) -> usize {
    let Some(sections) = branch.sections.as_deref() else {
        return 0;
    };
    sections
        .iter()
        .map(|s| s.tables.iter().filter(|t| t.accepts_reservations).count())
        .sum()
}

/// Selectable options for every reservation-accepting table of a
/// branch, in section-then-table order
pub fn table_options(branch: &Branch) -> Vec<TableOption> {
    let Some(sections) = branch.sections.as_deref() else {
        return Vec::new();
    };
    let mut options = Vec::new();
    for section in sections {
        for table in &section.tables {
            if table.accepts_reservations {
                options.push(TableOption {
                    id: table.id.clone(),
                    label: format!("{} - {}", section.name, table.name),
                    section_id: section.id.clone(),
                });
            }
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Section, Table};

    fn table(id: &str, section_id: &str, name: &str, accepts: bool) -> Table {
        Table {
            id: id.into(),
            section_id: section_id.into(),
            name: name.into(),
            status: 1,
            seats: 4,
            created_at: "2024-01-01 00:00:00".into(),
            updated_at: "2024-01-01 00:00:00".into(),
            deleted_at: None,
            accepts_reservations: accepts,
        }
    }

    fn section(id: &str, name: &str, tables: Vec<Table>) -> Section {
        Section {
            id: id.into(),
            branch_id: "br-1".into(),
            name: name.into(),
            name_localized: None,
            created_at: "2024-01-01 00:00:00".into(),
            updated_at: "2024-01-01 00:00:00".into(),
            deleted_at: None,
            tables,
        }
    }

    fn branch(sections: Option<Vec<Section>>) -> Branch {
        Branch {
            id: "br-1".into(),
            name: "Downtown".into(),
            name_localized: None,
            reference: "B01".into(),
            branch_type: 1,
            latitude: None,
            longitude: None,
            phone: None,
            opening_from: "08:00".into(),
            opening_to: "23:00".into(),
            inventory_end_of_day_time: "03:00".into(),
            receipt_header: None,
            receipt_footer: None,
            settings: None,
            created_at: "2024-01-01 00:00:00".into(),
            updated_at: "2024-01-01 00:00:00".into(),
            deleted_at: None,
            receives_online_orders: false,
            accepts_reservations: true,
            reservation_duration: 30,
            reservation_times: ReservationTimes::default(),
            address: None,
            sections,
        }
    }

    #[test]
    fn test_count_without_sections_is_zero() {
        assert_eq!(reservation_tables_count(&branch(None)), 0);
    }

    #[test]
    fn test_count_sums_qualifying_tables_across_sections() {
        let b = branch(Some(vec![
            section(
                "sec-1",
                "Hall",
                vec![
                    table("tbl-1", "sec-1", "T1", true),
                    table("tbl-2", "sec-1", "T2", false),
                ],
            ),
            section("sec-2", "Terrace", vec![table("tbl-3", "sec-2", "T3", true)]),
        ]));
        assert_eq!(reservation_tables_count(&b), 2);
    }

    #[test]
    fn test_count_with_no_qualifying_tables_is_zero() {
        let b = branch(Some(vec![section(
            "sec-1",
            "Hall",
            vec![table("tbl-1", "sec-1", "T1", false)],
        )]));
        assert_eq!(reservation_tables_count(&b), 0);
    }

    #[test]
    fn test_options_without_sections_is_empty() {
        assert!(table_options(&branch(None)).is_empty());
    }

    #[test]
    fn test_options_preserve_section_then_table_order() {
        let b = branch(Some(vec![
            section(
                "sec-1",
                "Hall",
                vec![
                    table("tbl-1", "sec-1", "T1", true),
                    table("tbl-2", "sec-1", "T2", false),
                ],
            ),
            section("sec-2", "Terrace", vec![table("tbl-3", "sec-2", "T3", true)]),
        ]));

        let options = table_options(&b);
        assert_eq!(options.len(), 2);
        assert_eq!(
            options[0],
            TableOption {
                id: "tbl-1".into(),
                label: "Hall - T1".into(),
                section_id: "sec-1".into(),
            }
        );
        assert_eq!(options[1].label, "Terrace - T3");
        assert_eq!(options[1].section_id, "sec-2");
    }
}
