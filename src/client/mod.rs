//! The Astute client and its injected capabilities.
//!
//! Every operation follows the same path: render the envelope, send it,
//! turn a non-OK status into a fault error, decode the envelope, then
//! decode or parse the `Results` text into the typed result. Nothing is
//! retried.

mod capabilities;
mod transport;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AuthParams;
use crate::error::ClientResult;
use crate::models::{
    QueryTimesheetParams, QueryTimesheetResponse, QueryUserParams, QueryUserResponse,
    SaveTimesheetParams, SaveTimesheetResponse, SubmitTimesheetParams,
};
use crate::soap::{
    Operation, TimesheetFilter, check_status, decode_inner, decode_results, extract_timesheet_id,
    render_timesheet_query, render_timesheet_save, render_timesheet_submit, render_user_query,
};

pub use capabilities::{Clock, SystemClock, TransactionIdGenerator, UuidTransactionIds};
pub use transport::{
    HttpTransport, SOAP_ACTION_HEADER, SOAP_CONTENT_TYPE, SoapRequest, Transport,
    TransportResponse,
};

/// Typed client for the Astute web service.
///
/// Holds only immutable state, so one client can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use astute_client::client::{AstuteClient, HttpTransport};
/// use astute_client::config::ConfigLoader;
/// use astute_client::models::QueryUserParams;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConfigLoader::load("./astute.yaml")?.into_config();
/// let transport = HttpTransport::from_settings(&config.transport)?;
/// let client = AstuteClient::new(config.auth, transport);
///
/// let result = client
///     .query_user(&QueryUserParams { job_code: "NURSE".to_string() })
///     .await?;
/// println!("{} users", result.users.len());
/// # Ok(())
/// # }
/// ```
pub struct AstuteClient<T> {
    auth: AuthParams,
    transport: T,
    ids: Arc<dyn TransactionIdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<T: Transport> AstuteClient<T> {
    /// Creates a client using UUID transaction ids and the system clock.
    pub fn new(auth: AuthParams, transport: T) -> Self {
        Self {
            auth,
            transport,
            ids: Arc::new(UuidTransactionIds),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the transaction id generator.
    pub fn with_id_generator(mut self, ids: impl TransactionIdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Replaces the clock used for default submission times.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns the credentials the client was built with.
    pub fn auth(&self) -> &AuthParams {
        &self.auth
    }

    /// Queries users whose job code contains `params.job_code`.
    pub async fn query_user(&self, params: &QueryUserParams) -> ClientResult<QueryUserResponse> {
        let transaction_id = self.ids.next_id();
        let body = render_user_query(&self.auth, params);
        let results = self
            .call(Operation::UserQuery, &transaction_id, body)
            .await?;
        self.decode_query(Operation::UserQuery, &transaction_id, &results)
    }

    /// Queries all timesheets of the user `params.uid`.
    pub async fn query_timesheet_by_job(
        &self,
        params: &QueryTimesheetParams,
    ) -> ClientResult<QueryTimesheetResponse> {
        self.query_timesheets(TimesheetFilter::Uid(&params.uid))
            .await
    }

    /// Queries a single timesheet by its identifier.
    pub async fn query_timesheet_by_id(&self, id: &str) -> ClientResult<QueryTimesheetResponse> {
        self.query_timesheets(TimesheetFilter::Tsid(id)).await
    }

    /// Saves a timesheet, optionally submitting it, and returns its id.
    ///
    /// # Errors
    ///
    /// Local validation errors are returned before anything is sent. A
    /// result text without a timesheet id is returned as
    /// [`ClientError::Rejected`](crate::error::ClientError::Rejected).
    pub async fn save_timesheet(
        &self,
        params: &SaveTimesheetParams,
    ) -> ClientResult<SaveTimesheetResponse> {
        let transaction_id = self.ids.next_id();
        let body =
            render_timesheet_save(&self.auth, &transaction_id, params, || self.clock.now())?;
        let results = self
            .call(Operation::TimesheetSave, &transaction_id, body)
            .await?;
        self.saved_timesheet(&transaction_id, &results)
    }

    /// Submits an already-saved timesheet without resending its days.
    pub async fn submit_timesheet(
        &self,
        params: &SubmitTimesheetParams,
    ) -> ClientResult<SaveTimesheetResponse> {
        let transaction_id = self.ids.next_id();
        let body =
            render_timesheet_submit(&self.auth, &transaction_id, params, || self.clock.now());
        let results = self
            .call(Operation::TimesheetSave, &transaction_id, body)
            .await?;
        self.saved_timesheet(&transaction_id, &results)
    }

    async fn query_timesheets(
        &self,
        filter: TimesheetFilter<'_>,
    ) -> ClientResult<QueryTimesheetResponse> {
        let transaction_id = self.ids.next_id();
        let body = render_timesheet_query(&self.auth, filter);
        let results = self
            .call(Operation::TimesheetQuery, &transaction_id, body)
            .await?;
        self.decode_query(Operation::TimesheetQuery, &transaction_id, &results)
    }

    /// Sends one envelope and returns the `Results` text of a successful response.
    async fn call(
        &self,
        operation: Operation,
        transaction_id: &str,
        body: String,
    ) -> ClientResult<String> {
        debug!(
            transaction_id = %transaction_id,
            operation = %operation,
            request_bytes = body.len(),
            "Sending SOAP request"
        );

        let request = SoapRequest {
            endpoint: self.auth.api_url.clone(),
            action_name: operation.name(),
            action_uri: operation.action_uri(),
            body,
        };

        let response = self.transport.send(request).await.map_err(|err| {
            warn!(
                transaction_id = %transaction_id,
                operation = %operation,
                error = %err,
                "SOAP transport failed"
            );
            err
        })?;

        debug!(
            transaction_id = %transaction_id,
            operation = %operation,
            status = response.status,
            response_bytes = response.body.len(),
            "Received SOAP response"
        );

        check_status(response.status, &response.body)
            .and_then(|()| decode_results(&response.body, operation))
            .inspect_err(|err| {
                warn!(
                    transaction_id = %transaction_id,
                    operation = %operation,
                    status = response.status,
                    error = %err,
                    "SOAP call failed"
                );
            })
    }

    fn decode_query<R: serde::de::DeserializeOwned>(
        &self,
        operation: Operation,
        transaction_id: &str,
        results: &str,
    ) -> ClientResult<R> {
        decode_inner(results).inspect_err(|err| {
            warn!(
                transaction_id = %transaction_id,
                operation = %operation,
                error = %err,
                "Query results could not be decoded"
            );
        })
    }

    fn saved_timesheet(
        &self,
        transaction_id: &str,
        results: &str,
    ) -> ClientResult<SaveTimesheetResponse> {
        let timesheet_id = extract_timesheet_id(results).inspect_err(|err| {
            warn!(
                transaction_id = %transaction_id,
                error = %err,
                "Timesheet save rejected"
            );
        })?;

        debug!(
            transaction_id = %transaction_id,
            timesheet_id = %timesheet_id,
            "Timesheet saved"
        );

        Ok(SaveTimesheetResponse { timesheet_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AstuteClient<HttpTransport>>();
    }
}
