// End-to-end controller behavior against stub transport and display surfaces.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tspweb::{
    Endpoint, GatewayError, SolutionDisplay, SolveCompletion, SolveInput, SolveMethod,
    SolveOutcome, SolveRequest, SolveRequestController, SolverGateway,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum DisplayEvent {
    Busy(bool),
    ValidationError(String),
    Preview(String),
    Solution(String),
}

#[derive(Default)]
struct RecordingDisplay {
    events: Mutex<Vec<DisplayEvent>>,
}

impl RecordingDisplay {
    fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().unwrap().clone()
    }

    fn solution_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                DisplayEvent::Solution(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn busy_transitions(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                DisplayEvent::Busy(b) => Some(b),
                _ => None,
            })
            .collect()
    }
}

impl SolutionDisplay for RecordingDisplay {
    fn set_busy(&self, busy: bool) {
        self.events.lock().unwrap().push(DisplayEvent::Busy(busy));
    }

    fn show_validation_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::ValidationError(message.to_string()));
    }

    fn set_preview_plot(&self, url: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::Preview(url.to_string()));
    }

    fn set_solution_plot(&self, url: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::Solution(url.to_string()));
    }
}

/// Records every dispatched request; optionally checks the display was busy at
/// dispatch time and can be told to fail instead of completing.
struct StubGateway {
    requests: Mutex<Vec<SolveRequest>>,
    display: Option<Arc<RecordingDisplay>>,
    fail: bool,
}

impl StubGateway {
    fn completing() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            display: None,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::completing()
        }
    }

    fn watching(display: Arc<RecordingDisplay>) -> Self {
        Self {
            display: Some(display),
            ..Self::completing()
        }
    }

    fn requests(&self) -> Vec<SolveRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SolverGateway for StubGateway {
    async fn compute(
        &self,
        request: &SolveRequest,
    ) -> Result<SolveCompletion, GatewayError> {
        if let Some(display) = &self.display {
            // The submit affordance must already be locked when the request
            // goes out.
            assert_eq!(display.busy_transitions(), vec![true]);
        }
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            Err(GatewayError::Transport("connection refused".to_string()))
        } else {
            Ok(SolveCompletion {
                status: 200,
                body: "tour length 33523".to_string(),
            })
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

fn endpoint() -> Endpoint {
    Endpoint::parse("http://solver.example.org").unwrap()
}

fn valid_input() -> SolveInput {
    SolveInput {
        instance: "att48.tsp".to_string(),
        method: SolveMethod::Greedy,
        time_limit: "100".to_string(),
        seed: "123".to_string(),
    }
}

fn controller_with(
    gateway: Arc<StubGateway>,
    display: Arc<RecordingDisplay>,
) -> SolveRequestController {
    SolveRequestController::new(endpoint(), gateway, display)
}

#[tokio::test]
async fn non_integer_input_is_rejected_without_dispatching() {
    for (time_limit, seed) in [("abc", "123"), ("100", "12.5"), ("", "123"), ("100", " ")] {
        let gateway = Arc::new(StubGateway::completing());
        let display = Arc::new(RecordingDisplay::default());
        let mut controller = controller_with(gateway.clone(), display.clone());

        let input = SolveInput {
            time_limit: time_limit.to_string(),
            seed: seed.to_string(),
            ..valid_input()
        };
        let outcome = controller.solve_requested(&input).await;

        assert!(matches!(outcome, SolveOutcome::Rejected(_)));
        assert!(gateway.requests().is_empty());
        assert_eq!(
            display.events(),
            vec![DisplayEvent::ValidationError(
                "Some values are not integers".to_string()
            )]
        );
    }
}

#[tokio::test]
async fn zero_values_are_rejected_like_parse_failures() {
    for (time_limit, seed) in [("0", "123"), ("100", "0")] {
        let gateway = Arc::new(StubGateway::completing());
        let display = Arc::new(RecordingDisplay::default());
        let mut controller = controller_with(gateway.clone(), display.clone());

        let input = SolveInput {
            time_limit: time_limit.to_string(),
            seed: seed.to_string(),
            ..valid_input()
        };
        let outcome = controller.solve_requested(&input).await;

        assert!(matches!(outcome, SolveOutcome::Rejected(_)));
        assert!(gateway.requests().is_empty());
    }
}

#[tokio::test]
async fn rejection_leaves_parameters_unchanged() {
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway, display);

    let before = controller.parameters().clone();
    let input = SolveInput {
        instance: "berlin52.tsp".to_string(),
        method: SolveMethod::TabuLinear,
        time_limit: "not a number".to_string(),
        seed: "99".to_string(),
    };
    controller.solve_requested(&input).await;

    assert_eq!(controller.parameters(), &before);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn valid_submission_dispatches_exactly_one_request() {
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway.clone(), display.clone());

    let outcome = controller.solve_requested(&valid_input()).await;

    assert!(matches!(outcome, SolveOutcome::Completed(_)));
    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.user_id, "stefano");
    assert_eq!(request.instance, "att48.tsp");
    assert_eq!(request.method, SolveMethod::Greedy);
    assert_eq!(request.time_limit_seconds, 100);
    assert_eq!(request.seed, 123);

    // The wire serialization of that request is the five fixed headers.
    let headers = tspweb::application::headers::request_headers(request);
    assert_eq!(
        headers,
        vec![
            ("Userid", "stefano".to_string()),
            ("Instance", "att48.tsp".to_string()),
            ("Method", "GREEDY".to_string()),
            ("Time-Limit", "100".to_string()),
            ("Seed", "123".to_string()),
        ]
    );
}

#[tokio::test]
async fn completion_refreshes_the_solution_plot_for_the_requested_instance() {
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway, display.clone());

    controller.solve_requested(&valid_input()).await;

    let urls = display.solution_urls();
    assert_eq!(urls.len(), 1);
    let prefix = "http://solver.example.org/get_image?instance=att48.tsp&a=";
    assert!(urls[0].starts_with(prefix), "unexpected url: {}", urls[0]);
    let token = &urls[0][prefix.len()..];
    assert!(!token.is_empty());
    assert!(token.bytes().all(|b| b.is_ascii_digit()));
}

#[tokio::test]
async fn busy_is_held_during_flight_and_released_exactly_once() {
    let display = Arc::new(RecordingDisplay::default());
    let gateway = Arc::new(StubGateway::watching(display.clone()));
    let mut controller = controller_with(gateway, display.clone());

    controller.solve_requested(&valid_input()).await;

    // The watching gateway asserted busy=true at dispatch; afterwards there is
    // exactly one release.
    assert_eq!(display.busy_transitions(), vec![true, false]);
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn instance_change_refreshes_the_preview_and_sends_nothing() {
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway.clone(), display.clone());

    controller.instance_changed("berlin52.tsp");

    assert_eq!(controller.parameters().instance, "berlin52.tsp");
    assert!(gateway.requests().is_empty());
    assert_eq!(
        display.events(),
        vec![DisplayEvent::Preview(
            "http://solver.example.org/get_instance_not_solved?instance=berlin52.tsp".to_string()
        )]
    );
}

#[tokio::test]
async fn consecutive_solves_use_distinct_cache_tokens() {
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway, display.clone());

    controller.solve_requested(&valid_input()).await;
    controller.solve_requested(&valid_input()).await;

    let urls = display.solution_urls();
    assert_eq!(urls.len(), 2);
    assert_ne!(urls[0], urls[1]);
}

#[tokio::test]
async fn solution_plot_uses_the_instance_captured_at_dispatch() {
    // An instance change racing the in-flight request must not redirect the
    // refreshed plot; the dispatch-time snapshot wins.
    let gateway = Arc::new(StubGateway::completing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway, display.clone());

    controller.solve_requested(&valid_input()).await;
    controller.instance_changed("berlin52.tsp");

    let urls = display.solution_urls();
    assert!(urls[0].contains("instance=att48.tsp&"));
}

#[tokio::test]
async fn transport_failure_releases_busy_without_refreshing_the_plot() {
    let gateway = Arc::new(StubGateway::failing());
    let display = Arc::new(RecordingDisplay::default());
    let mut controller = controller_with(gateway.clone(), display.clone());

    let outcome = controller.solve_requested(&valid_input()).await;

    assert!(matches!(outcome, SolveOutcome::Failed(_)));
    assert_eq!(gateway.requests().len(), 1);
    assert_eq!(display.busy_transitions(), vec![true, false]);
    assert!(display.solution_urls().is_empty());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn completion_is_reported_regardless_of_status_code() {
    // A 500 from the backend is still a completion: unlock and refresh.
    struct ErrorStatusGateway;

    #[async_trait]
    impl SolverGateway for ErrorStatusGateway {
        async fn compute(
            &self,
            _request: &SolveRequest,
        ) -> Result<SolveCompletion, GatewayError> {
            Ok(SolveCompletion {
                status: 500,
                body: "Some error occured when executing".to_string(),
            })
        }

        fn name(&self) -> &str {
            "error-status"
        }
    }

    let display = Arc::new(RecordingDisplay::default());
    let mut controller =
        SolveRequestController::new(endpoint(), Arc::new(ErrorStatusGateway), display.clone());

    let outcome = controller.solve_requested(&valid_input()).await;

    match outcome {
        SolveOutcome::Completed(completion) => {
            assert_eq!(completion.status, 500);
            assert!(!completion.is_success());
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert_eq!(display.busy_transitions(), vec![true, false]);
    assert_eq!(display.solution_urls().len(), 1);
}
