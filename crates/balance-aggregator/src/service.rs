//! # Aggregator Service
//!
//! Request/response front of a deployed [`BalanceAggregator`].
//!
//! - Caller identity comes from the envelope, never from the payload
//! - Mutations take the write lock, so calls execute one at a time
//! - Reads share the lock and run concurrently
//! - Emitted events are buffered until drained

use crate::contract::BalanceAggregator;
use crate::domain::value_objects::Address;
use crate::errors::AggregatorError;
use crate::events::{AggregatorEvent, AggregatorRequest, AggregatorResponse};
use crate::ports::inbound::BalanceAggregatorApi;
use crate::ports::outbound::ContractHost;

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Statistics for the aggregator service.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceStats {
    /// Total requests handled.
    pub calls: u64,
    /// Requests that returned a response.
    pub successful_calls: u64,
    /// Requests that reverted.
    pub reverted_calls: u64,
    /// Reverts caused by the ownership gate.
    pub unauthorized_calls: u64,
}

/// Serves contract calls against a shared host.
pub struct AggregatorService<H: ContractHost> {
    /// The deployed contract.
    contract: RwLock<BalanceAggregator>,
    /// Chain state the contract reads.
    host: Arc<H>,
    /// Service statistics.
    stats: RwLock<ServiceStats>,
}

impl<H: ContractHost> AggregatorService<H> {
    /// Serve `contract` against `host`.
    pub fn new(contract: BalanceAggregator, host: Arc<H>) -> Self {
        Self {
            contract: RwLock::new(contract),
            host,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Current service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// The host this service reads from.
    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Events emitted since the last drain, oldest first.
    pub fn drain_events(&self) -> Vec<AggregatorEvent> {
        self.contract.write().drain_events()
    }

    /// Handle one call from `caller`.
    ///
    /// # Errors
    ///
    /// Whatever the contract reverts with; state is unchanged in that case.
    #[instrument(skip(self, request), fields(correlation_id = %correlation_id, method = request.method(), mutation = request.is_mutation()))]
    pub fn handle(
        &self,
        caller: Address,
        correlation_id: Uuid,
        request: AggregatorRequest,
    ) -> Result<AggregatorResponse, AggregatorError> {
        let result = self.dispatch(caller, request);

        let mut stats = self.stats.write();
        stats.calls += 1;
        match &result {
            Ok(response) => {
                stats.successful_calls += 1;
                debug!(?response, "Call succeeded");
            }
            Err(e) => {
                stats.reverted_calls += 1;
                if e.is_unauthorized() {
                    stats.unauthorized_calls += 1;
                }
                warn!(caller = ?caller, error = %e, "Call reverted");
            }
        }
        result
    }

    fn dispatch(
        &self,
        caller: Address,
        request: AggregatorRequest,
    ) -> Result<AggregatorResponse, AggregatorError> {
        let response = match request {
            AggregatorRequest::AddAdapter { adapter } => {
                self.contract.write().add_adapter(caller, adapter)?;
                AggregatorResponse::Done
            }
            AggregatorRequest::RemoveAdapter {
                prev_adapter,
                adapter,
            } => {
                self.contract
                    .write()
                    .remove_adapter(caller, prev_adapter, adapter)?;
                AggregatorResponse::Done
            }
            AggregatorRequest::TransferOwnership { new_owner } => {
                self.contract.write().transfer_ownership(caller, new_owner)?;
                AggregatorResponse::Done
            }
            AggregatorRequest::RenounceOwnership => {
                self.contract.write().renounce_ownership(caller)?;
                AggregatorResponse::Done
            }
            AggregatorRequest::GetAdapters => {
                AggregatorResponse::Adapters(self.contract.read().get_adapters())
            }
            AggregatorRequest::AdapterCount => {
                AggregatorResponse::Count(self.contract.read().adapter_count())
            }
            AggregatorRequest::BalanceOf { account } => {
                let contract = self.contract.read();
                AggregatorResponse::Balance(contract.balance_of(self.host.as_ref(), account)?)
            }
            AggregatorRequest::Owner => AggregatorResponse::Address(self.contract.read().owner()),
            AggregatorRequest::BaseAsset => {
                AggregatorResponse::Address(self.contract.read().base_asset())
            }
        };
        Ok(response)
    }
}

// =============================================================================
// TESTS
// =============================================================================
