// Domain value objects representing core business concepts

use std::fmt;
use std::str::FromStr;

/// Algorithm the backend should run for a solve request.
///
/// The variants mirror the method catalog the solver backend accepts; the wire
/// identifier (what goes into the `Method` request header) is the `Display`
/// rendering, not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    /// MTZ with static constraints
    Mtz,
    /// MTZ with lazy constraints
    MtzLazy,
    /// MTZ with static constraints and subtour elimination of degree 2
    MtzSec2,
    /// MTZ with lazy constraints and subtour elimination of degree 2
    MtzLazySec2,
    /// MTZ with indicator constraints
    MtzIndicator,
    /// GG constraints
    Gg,
    /// Benders method
    BendersLoop,
    /// Callback method
    Callback,
    /// Callback method with 2-opt refinement
    CallbackTwoOpt,
    /// Callback method using usercuts
    UserCut,
    /// Callback method using usercuts with 2-opt refinement
    UserCutTwoOpt,
    /// Hard fixing heuristic with fixed probability
    HardFix,
    /// Hard fixing heuristic with variable probability
    HardFixVariable,
    /// Soft fixing heuristic
    SoftFix,
    /// Greedy construction
    Greedy,
    /// Iterative greedy construction
    GreedyIter,
    /// Extra mileage construction
    ExtraMileage,
    /// GRASP construction
    Grasp,
    /// Iterative GRASP construction
    GraspIter,
    /// 2-opt with GRASP initialization
    TwoOptGrasp,
    /// 2-opt with iterative GRASP initialization
    TwoOptGraspIter,
    /// 2-opt with greedy initialization
    TwoOptGreedy,
    /// 2-opt with iterative greedy initialization
    TwoOptGreedyIter,
    /// 2-opt with extra mileage initialization
    TwoOptExtraMileage,
    /// Variable neighborhood search
    Vns,
    /// Tabu search with step tenure policy
    TabuStep,
    /// Tabu search with linear tenure policy
    TabuLinear,
    /// Tabu search with random tenure policy
    TabuRandom,
    /// Genetic algorithm
    Genetic,
}

impl SolveMethod {
    /// Identifier the backend expects in the `Method` header.
    pub fn wire_id(&self) -> &'static str {
        match self {
            SolveMethod::Mtz => "MTZ",
            SolveMethod::MtzLazy => "MTZL",
            SolveMethod::MtzSec2 => "MTZI",
            SolveMethod::MtzLazySec2 => "MTZLI",
            SolveMethod::MtzIndicator => "MTZ_IND",
            SolveMethod::Gg => "GG",
            SolveMethod::BendersLoop => "LOOP",
            SolveMethod::Callback => "CALLBACK",
            SolveMethod::CallbackTwoOpt => "CALLBACK_2OPT",
            SolveMethod::UserCut => "USER_CUT",
            SolveMethod::UserCutTwoOpt => "USER_CUT_2OPT",
            SolveMethod::HardFix => "HARD_FIX",
            SolveMethod::HardFixVariable => "HARD_FIX2",
            SolveMethod::SoftFix => "SOFT_FIX",
            SolveMethod::Greedy => "GREEDY",
            SolveMethod::GreedyIter => "GREEDY_ITER",
            SolveMethod::ExtraMileage => "EXTR_MILE",
            SolveMethod::Grasp => "GRASP",
            SolveMethod::GraspIter => "GRASP_ITER",
            SolveMethod::TwoOptGrasp => "2OPT_GRASP",
            SolveMethod::TwoOptGraspIter => "2OPT_GRASP_ITER",
            SolveMethod::TwoOptGreedy => "2OPT_GREEDY",
            SolveMethod::TwoOptGreedyIter => "2OPT_GREEDY_ITER",
            SolveMethod::TwoOptExtraMileage => "2OPT_EXTR_MIL",
            SolveMethod::Vns => "VNS",
            SolveMethod::TabuStep => "TABU_STEP",
            SolveMethod::TabuLinear => "TABU_LIN",
            SolveMethod::TabuRandom => "TABU_RAND",
            SolveMethod::Genetic => "GENETIC",
        }
    }

    /// Human-readable description of the algorithm.
    pub fn description(&self) -> &'static str {
        match self {
            SolveMethod::Mtz => "MTZ with static constraints",
            SolveMethod::MtzLazy => "MTZ with lazy constraints",
            SolveMethod::MtzSec2 => {
                "MTZ with static constraints and subtour elimination of degree 2"
            }
            SolveMethod::MtzLazySec2 => {
                "MTZ with lazy constraints and subtour elimination of degree 2"
            }
            SolveMethod::MtzIndicator => "MTZ with indicator constraints",
            SolveMethod::Gg => "GG constraints",
            SolveMethod::BendersLoop => "Benders method",
            SolveMethod::Callback => "Callback method",
            SolveMethod::CallbackTwoOpt => "Callback method with 2-opt refinement",
            SolveMethod::UserCut => "Callback method using usercuts",
            SolveMethod::UserCutTwoOpt => "Callback method using usercuts with 2-opt refinement",
            SolveMethod::HardFix => "Hard fixing heuristic with fixed probability",
            SolveMethod::HardFixVariable => "Hard fixing heuristic with variable probability",
            SolveMethod::SoftFix => "Soft fixing heuristic",
            SolveMethod::Greedy => "Greedy algorithm",
            SolveMethod::GreedyIter => "Iterative greedy algorithm",
            SolveMethod::ExtraMileage => "Extra mileage heuristic",
            SolveMethod::Grasp => "GRASP",
            SolveMethod::GraspIter => "Iterative GRASP",
            SolveMethod::TwoOptGrasp => "2-opt with GRASP initialization",
            SolveMethod::TwoOptGraspIter => "2-opt with iterative GRASP initialization",
            SolveMethod::TwoOptGreedy => "2-opt with greedy initialization",
            SolveMethod::TwoOptGreedyIter => "2-opt with iterative greedy initialization",
            SolveMethod::TwoOptExtraMileage => "2-opt with extra mileage initialization",
            SolveMethod::Vns => "Variable neighborhood search",
            SolveMethod::TabuStep => "Tabu search with step tenure policy",
            SolveMethod::TabuLinear => "Tabu search with linear tenure policy",
            SolveMethod::TabuRandom => "Tabu search with random tenure policy",
            SolveMethod::Genetic => "Genetic algorithm",
        }
    }

    /// Every method the backend knows, in catalog order.
    pub fn all() -> &'static [SolveMethod] {
        &[
            SolveMethod::Mtz,
            SolveMethod::MtzLazy,
            SolveMethod::MtzSec2,
            SolveMethod::MtzLazySec2,
            SolveMethod::MtzIndicator,
            SolveMethod::Gg,
            SolveMethod::BendersLoop,
            SolveMethod::Callback,
            SolveMethod::CallbackTwoOpt,
            SolveMethod::UserCut,
            SolveMethod::UserCutTwoOpt,
            SolveMethod::HardFix,
            SolveMethod::HardFixVariable,
            SolveMethod::SoftFix,
            SolveMethod::Greedy,
            SolveMethod::GreedyIter,
            SolveMethod::ExtraMileage,
            SolveMethod::Grasp,
            SolveMethod::GraspIter,
            SolveMethod::TwoOptGrasp,
            SolveMethod::TwoOptGraspIter,
            SolveMethod::TwoOptGreedy,
            SolveMethod::TwoOptGreedyIter,
            SolveMethod::TwoOptExtraMileage,
            SolveMethod::Vns,
            SolveMethod::TabuStep,
            SolveMethod::TabuLinear,
            SolveMethod::TabuRandom,
            SolveMethod::Genetic,
        ]
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}

/// Error for an unrecognized method identifier.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown solve method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for SolveMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolveMethod::all()
            .iter()
            .copied()
            .find(|m| m.wire_id() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Where the controller is within a single solve interaction.
///
/// Validation is synchronous and never observable from outside, so it has no
/// state of its own. There is no cancelled or timed-out state; a transport
/// failure lands back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// No request in flight; the submit affordance is live.
    Idle,
    /// One solve request dispatched and not yet completed.
    AwaitingResponse,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionState::Idle => write!(f, "Idle"),
            InteractionState::AwaitingResponse => write!(f, "Awaiting Response"),
        }
    }
}

/// Error for an unusable backend endpoint value.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid backend endpoint {0:?}: must be a non-empty http(s) origin")]
pub struct InvalidEndpoint(pub String);

/// Base URL of the solver backend.
///
/// Owns the URL formats of the three backend routes so nothing else in the
/// crate concatenates paths by hand. The value must be available before any
/// handler runs; constructing it is the startup precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn parse(base: &str) -> Result<Self, InvalidEndpoint> {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidEndpoint(base.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the solve route. Parameters travel as headers, so there is no
    /// query string here.
    pub fn compute_url(&self) -> String {
        format!("{}/compute", self.0)
    }

    /// URL of the rendered solution plot for `instance`. `token` defeats the
    /// consumer's cache so a re-solve of the same instance fetches the fresh
    /// rendering.
    pub fn solved_plot_url(&self, instance: &str, token: u128) -> String {
        format!("{}/get_image?instance={}&a={}", self.0, instance, token)
    }

    /// URL of the unsolved-instance preview plot for `instance`.
    pub fn preview_plot_url(&self, instance: &str) -> String {
        format!("{}/get_instance_not_solved?instance={}", self.0, instance)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
