//! Domain wiring: detectors, concepts, codelets, schemes, and motor
//! plans for the tic-tac-toe agent.

use tracing::debug;

use cognitive_cycle_core::action::{CommandValue, MotorCommand, MotorPlanTemplate};
use cognitive_cycle_core::attention::{AttentionCodelet, CodeletDomain};
use cognitive_cycle_core::config::Config;
use cognitive_cycle_core::cycle::Agent;
use cognitive_cycle_core::memory::{PerceptualAssociativeMemory, SensoryScene};
use cognitive_cycle_core::traits::{CueMatcher, FeatureDetector, SensorReading, Trigger};
use cognitive_cycle_core::types::{Action, CognitiveContent, MotorPlanKey, Percept, Scheme};

use crate::board::{Mark, CELL_COUNT};

/// Percept domain for board cells.
pub const CELL_DOMAIN: &str = "cell";
/// Percept domain for affective nodes.
pub const FEELING_DOMAIN: &str = "feeling";
/// Percept domain for positional concepts.
pub const CONCEPT_DOMAIN: &str = "concept";
/// The actuator every motor plan addresses.
pub const MARK_CELL_ACTUATOR: &str = "mark-cell";

/// Activation a cell percept enters the scene with.
pub const CELL_ACTIVATION: f32 = 1.0;
/// Base level carried by stored positional concepts.
pub const CONCEPT_BASE_LEVEL: f32 = 0.5;

/// The percept for one cell in one state.
pub fn cell_percept(position: usize, mark: Mark) -> Percept {
    Percept::new(CELL_DOMAIN, format!("{position}={}", mark.label()))
}

/// Reports `cell/<p>=<mark>` for one board position. Abstains when the
/// observation value falls outside the mark set.
#[derive(Debug, Clone)]
pub struct CellDetector {
    position: usize,
    activation: f32,
    name: String,
}

impl CellDetector {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            activation: CELL_ACTIVATION,
            name: format!("cell-{position}"),
        }
    }

    pub fn with_activation(mut self, activation: f32) -> Self {
        self.activation = activation;
        self
    }
}

impl FeatureDetector<[i8; CELL_COUNT]> for CellDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, reading: &SensorReading<[i8; CELL_COUNT]>) -> Option<CognitiveContent> {
        let mark = Mark::try_from(reading.observation[self.position]).ok()?;
        Some(
            CognitiveContent::new(cell_percept(self.position, mark))
                .with_current_activation(self.activation),
        )
    }
}

/// Reports the step reward as an affective node: `feeling/reward` with
/// valence `+1.0` for positive rewards, `feeling/penalty` with valence
/// `-1.0` for negative ones, activation `|reward|`. Abstains on zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewardFeelingDetector;

impl<Obs> FeatureDetector<Obs> for RewardFeelingDetector {
    fn name(&self) -> &str {
        "reward-feeling"
    }

    fn apply(&self, reading: &SensorReading<Obs>) -> Option<CognitiveContent> {
        if reading.reward == 0.0 {
            return None;
        }
        let (symbol, valence) = if reading.reward > 0.0 {
            ("reward", 1.0)
        } else {
            ("penalty", -1.0)
        };
        CognitiveContent::feeling(
            Percept::new(FEELING_DOMAIN, symbol),
            valence,
            reading.reward.abs(),
        )
        .ok()
    }
}

fn position_class(position: usize) -> &'static str {
    match position {
        4 => "center",
        0 | 2 | 6 | 8 => "corner",
        _ => "edge",
    }
}

/// The stored positional concepts the cue matcher can answer with.
pub fn board_concepts() -> Vec<CognitiveContent> {
    ["center", "corner", "edge"]
        .into_iter()
        .map(|class| {
            CognitiveContent::new(Percept::new(CONCEPT_DOMAIN, class))
                .with_base_level_activation(CONCEPT_BASE_LEVEL)
        })
        .collect()
}

/// Associates *marked* cell percepts with their positional concept:
/// `cell/4=x` cues `concept/center` at full strength. Blank cells never
/// match, so cue-merging cannot replace the blank percepts the motor
/// triggers and the blank-cell codelet read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionConceptMatcher;

impl CueMatcher for PositionConceptMatcher {
    fn strength(&self, cue: &Percept, concept: &Percept) -> f32 {
        if cue.domain != CELL_DOMAIN || concept.domain != CONCEPT_DOMAIN {
            return 0.0;
        }
        let marked = cue
            .symbol
            .split_once('=')
            .filter(|(_, label)| *label != Mark::Blank.label())
            .and_then(|(position, _)| position.parse::<usize>().ok());
        match marked {
            Some(position) if position_class(position) == concept.symbol => 1.0,
            _ => 0.0,
        }
    }
}

/// Nine template schemes, one `move` per board position.
pub fn move_schemes() -> Vec<Scheme> {
    (0..CELL_COUNT as i64)
        .map(|position| Scheme::template(Action::move_to(position)))
        .collect()
}

/// Gates a mark command on its target cell reading blank in the current
/// scene, which keeps selected-but-stale moves from reaching the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankCellTrigger;

impl Trigger for BlankCellTrigger {
    fn holds(&self, command: &MotorCommand, scene: &SensoryScene) -> bool {
        usize::try_from(command.value)
            .map(|position| scene.contains(&cell_percept(position, Mark::Blank)))
            .unwrap_or(false)
    }
}

/// One motor plan template per position, keyed by the move value and
/// carrying a single gated `mark-cell` command.
pub fn motor_plans() -> Vec<(MotorPlanKey, MotorPlanTemplate)> {
    (0..CELL_COUNT as i64)
        .map(|position| {
            (
                MotorPlanKey::Position(position),
                MotorPlanTemplate::new(format!("mark-{position}"))
                    .with_command(MARK_CELL_ACTUATOR, CommandValue::FromAction)
                    .with_trigger(BlankCellTrigger),
            )
        })
        .collect()
}

/// The domain's attention codelets: a scene watcher proposing blank
/// cells and a situational watcher proposing feeling nodes.
pub fn attention_codelets() -> Vec<AttentionCodelet> {
    vec![
        AttentionCodelet::new(
            "blank-cells",
            CodeletDomain::Scene,
            |content: &CognitiveContent| {
                content.content.domain == CELL_DOMAIN && content.content.symbol.ends_with("=blank")
            },
        ),
        AttentionCodelet::new("feelings", CodeletDomain::Csm, |content: &CognitiveContent| {
            content.is_feeling()
        }),
    ]
}

/// A ready-to-run tic-tac-toe agent assembled over the configuration.
pub fn build_agent(config: &Config) -> Agent<[i8; CELL_COUNT]> {
    let mut agent = Agent::new(config);

    for position in 0..CELL_COUNT {
        agent.sensory.register_detector(CellDetector::new(position));
    }
    agent.sensory.register_detector(RewardFeelingDetector);

    agent.pam =
        PerceptualAssociativeMemory::new(PositionConceptMatcher).with_concepts(board_concepts());

    agent.codelets = attention_codelets();
    agent.procedural.add_schemes(move_schemes());

    for (key, template) in motor_plans() {
        agent.sensory_motor.register_template(key, template);
    }
    agent
        .sensory_motor
        .register_actuator(MARK_CELL_ACTUATOR, |command: &MotorCommand| command.value);

    debug!(
        detectors = agent.sensory.detector_count(),
        codelets = agent.codelets.len(),
        schemes = agent.procedural.schemes().len(),
        motor_plans = agent.sensory_motor.template_count(),
        "tic-tac-toe agent wired"
    );
    agent
}
