use std::sync::Arc;

use crate::application::display::SolutionDisplay;
use crate::application::headers::DEFAULT_USER_ID;
use crate::domain::models::{SolveInput, SolveParameters, SolveRequest, ValidationError};
use crate::domain::solver_gateway::{GatewayError, SolveCompletion, SolverGateway};
use crate::domain::value_objects::{Endpoint, InteractionState};

/// Notification text for a rejected submission.
const VALIDATION_MESSAGE: &str = "Some values are not integers";

/// What a submission attempt turned into.
#[derive(Debug)]
pub enum SolveOutcome {
    /// A request was already in flight; the submission was ignored.
    Busy,
    /// Validation failed; nothing was sent and no state changed.
    Rejected(ValidationError),
    /// The backend delivered a completion (any status code).
    Completed(SolveCompletion),
    /// The transport gave up before a completion was delivered.
    Failed(GatewayError),
}

/// Orchestrates one solve interaction at a time against the backend.
///
/// Owns the solve parameters (no globals; one parameter set per controller), the
/// in-flight guard, and the two outbound ports: the gateway for the solve
/// request itself and the display for everything the user sees.
pub struct SolveRequestController {
    endpoint: Endpoint,
    user_id: String,
    parameters: SolveParameters,
    state: InteractionState,
    gateway: Arc<dyn SolverGateway>,
    display: Arc<dyn SolutionDisplay>,
}

impl SolveRequestController {
    pub fn new(
        endpoint: Endpoint,
        gateway: Arc<dyn SolverGateway>,
        display: Arc<dyn SolutionDisplay>,
    ) -> Self {
        Self {
            endpoint,
            user_id: DEFAULT_USER_ID.to_string(),
            parameters: SolveParameters::default(),
            state: InteractionState::Idle,
            gateway,
            display,
        }
    }

    pub fn parameters(&self) -> &SolveParameters {
        &self.parameters
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == InteractionState::AwaitingResponse
    }

    /// The user picked a different problem instance.
    ///
    /// Updates the stored instance and refreshes the preview plot. Never sends
    /// a solve request and never fails; a preview URL that turns out not to
    /// load is the display's problem, not ours.
    pub fn instance_changed(&mut self, instance: &str) {
        self.parameters.instance = instance.to_string();
        let url = self.endpoint.preview_plot_url(instance);
        tracing::debug!(%instance, %url, "instance changed, refreshing preview");
        self.display.set_preview_plot(&url);
    }

    /// The user asked for a solve.
    ///
    /// Validates the form snapshot, and on success dispatches exactly one
    /// request built from a snapshot of the parameters. The snapshot (not the
    /// live instance field) drives the solution-plot refresh on completion, so
    /// an instance change racing the in-flight request cannot mislabel the
    /// plot.
    pub async fn solve_requested(&mut self, input: &SolveInput) -> SolveOutcome {
        if self.is_busy() {
            tracing::warn!("solve ignored: a request is already in flight");
            return SolveOutcome::Busy;
        }

        let (time_limit_seconds, seed) = match input.validate() {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::info!(%err, "rejecting solve request");
                self.display.show_validation_error(VALIDATION_MESSAGE);
                return SolveOutcome::Rejected(err);
            }
        };

        self.parameters = SolveParameters {
            instance: input.instance.clone(),
            method: input.method,
            time_limit_seconds,
            seed,
        };
        let request = SolveRequest::snapshot(self.user_id.clone(), &self.parameters);

        self.state = InteractionState::AwaitingResponse;
        self.display.set_busy(true);
        tracing::info!(
            instance = %request.instance,
            method = %request.method,
            time_limit = request.time_limit_seconds,
            seed = request.seed,
            "dispatching solve request"
        );

        let result = self.gateway.compute(&request).await;

        // Any outcome, delivered or not, releases the busy guard exactly once.
        // A transport that never answers must not leave submissions locked
        // forever.
        self.state = InteractionState::Idle;
        self.display.set_busy(false);

        match result {
            Ok(completion) => {
                tracing::info!(status = completion.status, "solve completed");
                self.refresh_solution_plot(&request.instance);
                self.refresh_cost_plot();
                SolveOutcome::Completed(completion)
            }
            Err(err) => {
                tracing::warn!(%err, "solve request did not complete");
                SolveOutcome::Failed(err)
            }
        }
    }

    /// Swap the solution plot to a freshly rendered image for `instance`,
    /// with a random token so a cached rendering of an earlier solve is never
    /// shown again.
    fn refresh_solution_plot(&self, instance: &str) {
        let token: u128 = rand::random();
        let url = self.endpoint.solved_plot_url(instance, token);
        self.display.set_solution_plot(&url);
    }

    /// The cost-over-iteration plot is not produced by the backend yet.
    fn refresh_cost_plot(&self) {}
}
