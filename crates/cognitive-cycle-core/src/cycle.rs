//! The cognitive cycle: one agent, one environment, one pass of
//! sense → cue → attend → broadcast → select → act → housekeep.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::action::{ActionSelection, SensoryMotorSystem};
use crate::attention::{AttentionCodelet, CoalitionManager};
use crate::config::Config;
use crate::error::CoreResult;
use crate::global_workspace::GlobalWorkspace;
use crate::housekeeping::Housekeeping;
use crate::memory::{CueingProcess, PerceptualAssociativeMemory, ProceduralMemory, SensoryMemory, Workspace};
use crate::traits::{Cueable, Environment, RenderMode, SensorReading, StepInfo};

/// What one cycle did.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// The action issued to the environment at the *next* step, if any.
    pub action: Option<i64>,
    /// Reward the environment reported for this cycle's step.
    pub reward: f32,
    /// Whether the environment reports a finished episode.
    pub done: bool,
    /// Whether any coalition won the competition this cycle.
    pub broadcast: bool,
    /// The environment's side channel for this step.
    pub info: StepInfo,
}

/// Aggregated result of a bounded run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Cycles actually executed.
    pub cycles: u64,
    /// Reward at the first `done` transition, when one occurred.
    pub terminal_reward: Option<f32>,
    /// Sum of all step rewards.
    pub total_reward: f32,
}

/// Bounds and display options for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Cycles to execute; `None` runs until externally interrupted.
    pub cycles: Option<u64>,
    /// Render the environment each cycle.
    pub render: bool,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cycles: config.run.cycles,
            render: config.run.render,
        }
    }
}

/// One agent: every store and process of the cycle plus the seeded RNG,
/// owned in one place. Construct it, wire detectors/codelets/schemes/
/// motor templates for the domain, then drive it with [`Agent::run`].
/// Instances are independent; nothing is shared or global.
pub struct Agent<Obs> {
    pub sensory: SensoryMemory<Obs>,
    pub pam: PerceptualAssociativeMemory,
    pub cueing: CueingProcess,
    pub workspace: Workspace,
    pub codelets: Vec<AttentionCodelet>,
    pub coalition_manager: CoalitionManager,
    pub global_workspace: GlobalWorkspace,
    pub procedural: ProceduralMemory,
    pub action_selection: ActionSelection,
    pub sensory_motor: SensoryMotorSystem,
    pub housekeeping: Housekeeping,
    pub rng: ChaCha8Rng,
    expectation_decay_rate: f32,
    pending_action: Option<i64>,
    cycles_run: u64,
}

impl<Obs> Agent<Obs> {
    pub fn new(config: &Config) -> Self {
        Self {
            sensory: SensoryMemory::new(),
            pam: PerceptualAssociativeMemory::default(),
            cueing: CueingProcess::new(),
            workspace: Workspace::new(),
            codelets: Vec::new(),
            coalition_manager: CoalitionManager::new(),
            global_workspace: GlobalWorkspace::new(),
            procedural: ProceduralMemory::new(config.procedural.activation_threshold),
            action_selection: ActionSelection::new(),
            sensory_motor: SensoryMotorSystem::new(),
            housekeeping: Housekeeping::from_config(&config.housekeeping),
            rng: ChaCha8Rng::seed_from_u64(config.run.seed),
            expectation_decay_rate: config.attention.expectation_decay_rate,
            pending_action: None,
            cycles_run: 0,
        }
    }

    /// Total cycles executed over the agent's lifetime.
    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    /// Runs one full cycle against the environment.
    ///
    /// The pending action from the previous cycle is applied first; the
    /// rest of the cycle computes the action the *next* step will apply.
    /// Stage order is fixed: sense, cue, attend, broadcast, learn and
    /// select, act, housekeep.
    pub fn run_cycle<E>(&mut self, env: &mut E, render: bool) -> CoreResult<CycleOutcome>
    where
        E: Environment<Obs = Obs>,
    {
        let step = env.step(self.pending_action.take());
        if render {
            env.render(RenderMode::Human);
        }

        // sense
        let reading = SensorReading {
            observation: step.observation,
            reward: step.reward,
            done: step.done,
        };
        let scene = self.sensory.sense(&reading);
        trace!(scene = scene.len(), reward = step.reward, "scene built");
        self.workspace.receive_scene(scene);

        // cue
        self.cueing
            .process(&mut self.workspace, &[&self.pam as &dyn Cueable]);

        // attend
        for codelet in &self.codelets {
            let selected = codelet.apply(&self.workspace);
            self.coalition_manager.receive(codelet, selected);
        }
        self.global_workspace
            .receive_coalitions(self.coalition_manager.take_coalitions());

        // broadcast
        let broadcast = self.global_workspace.broadcast().cloned();
        if let Some(winner) = &broadcast {
            self.global_workspace.record_broadcast(winner);
        }

        // learn and select
        self.procedural.receive_broadcast(broadcast.as_ref());
        let candidates = self.procedural.candidate_behaviors(&mut self.rng);
        self.action_selection.receive_behaviors(candidates);
        let selected = self.action_selection.selected_behavior(&mut self.rng);

        // act
        let mut action = None;
        if let Some(behavior) = &selected {
            self.codelets.push(AttentionCodelet::expectation(
                behavior,
                self.expectation_decay_rate,
            ));
            self.sensory_motor.receive_selected_behavior(Some(behavior))?;
            if let Some(command) = self
                .sensory_motor
                .motor_command(self.workspace.scene(), &mut self.rng)
            {
                action = Some(self.sensory_motor.execute(&command)?);
            }
        }
        self.pending_action = action;

        // housekeep
        self.housekeeping.run_cycle(
            &mut self.workspace,
            &mut self.global_workspace,
            &mut self.codelets,
            broadcast.as_ref(),
        );

        self.cycles_run += 1;
        debug!(
            cycle = self.cycles_run,
            broadcast = broadcast.is_some(),
            action = ?action,
            reward = step.reward,
            done = step.done,
            "cycle complete"
        );
        Ok(CycleOutcome {
            action,
            reward: step.reward,
            done: step.done,
            broadcast: broadcast.is_some(),
            info: step.info,
        })
    }

    /// Drives the cycle until the bound is reached (or forever when
    /// unbounded). Episodes that finish early keep cycling; post-game
    /// steps are the environment's soft no-ops.
    pub fn run<E>(&mut self, env: &mut E, options: &RunOptions) -> CoreResult<RunSummary>
    where
        E: Environment<Obs = Obs>,
    {
        let mut summary = RunSummary::default();
        loop {
            if let Some(bound) = options.cycles {
                if summary.cycles >= bound {
                    break;
                }
            }
            let outcome = self.run_cycle(env, options.render)?;
            summary.cycles += 1;
            summary.total_reward += outcome.reward;
            if outcome.done && summary.terminal_reward.is_none() {
                summary.terminal_reward = Some(outcome.reward);
            }
        }
        Ok(summary)
    }
}
