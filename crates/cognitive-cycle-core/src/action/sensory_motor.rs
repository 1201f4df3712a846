//! Sensory-motor system: from a selected behavior to an executable
//! environment action.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::memory::sensory::SensoryScene;
use crate::traits::{CommandChoice, Trigger};
use crate::types::{MotorPlanKey, Scheme};

/// One concrete instruction for a named actuator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorCommand {
    pub actuator: String,
    pub value: i64,
}

impl MotorCommand {
    pub fn new(actuator: impl Into<String>, value: i64) -> Self {
        Self {
            actuator: actuator.into(),
            value,
        }
    }
}

/// Where a command template takes its value from when instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandValue {
    /// Always this value.
    Fixed(i64),
    /// The selected action's value.
    FromAction,
}

#[derive(Debug, Clone)]
struct CommandTemplate {
    actuator: String,
    value: CommandValue,
}

/// Uniform random choice among the triggered commands; the default
/// choice function.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformChoice;

impl CommandChoice for UniformChoice {
    fn choose(&self, commands: &[MotorCommand], rng: &mut dyn RngCore) -> Option<MotorCommand> {
        commands.choose(rng).cloned()
    }
}

/// A reusable recipe for a family of actions: a fixed command list,
/// trigger conditions gating each command on the current scene, and a
/// choice function picking one of the survivors. Registered once at
/// configuration time and instantiated per selected behavior.
#[derive(Clone)]
pub struct MotorPlanTemplate {
    name: String,
    commands: Vec<CommandTemplate>,
    triggers: Vec<Arc<dyn Trigger>>,
    choice: Arc<dyn CommandChoice>,
}

impl MotorPlanTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
            triggers: Vec::new(),
            choice: Arc::new(UniformChoice),
        }
    }

    pub fn with_command(mut self, actuator: impl Into<String>, value: CommandValue) -> Self {
        self.commands.push(CommandTemplate {
            actuator: actuator.into(),
            value,
        });
        self
    }

    pub fn with_trigger(mut self, trigger: impl Trigger + 'static) -> Self {
        self.triggers.push(Arc::new(trigger));
        self
    }

    pub fn with_choice(mut self, choice: impl CommandChoice + 'static) -> Self {
        self.choice = Arc::new(choice);
        self
    }

    /// Resolves the command templates against the action value.
    pub fn instantiate(&self, action_value: i64) -> MotorPlan {
        let commands = self
            .commands
            .iter()
            .map(|template| MotorCommand {
                actuator: template.actuator.clone(),
                value: match template.value {
                    CommandValue::Fixed(value) => value,
                    CommandValue::FromAction => action_value,
                },
            })
            .collect();
        MotorPlan {
            name: self.name.clone(),
            commands,
            triggers: self.triggers.clone(),
            choice: Arc::clone(&self.choice),
        }
    }
}

impl fmt::Debug for MotorPlanTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotorPlanTemplate")
            .field("name", &self.name)
            .field("commands", &self.commands)
            .field("triggers", &self.triggers.len())
            .finish_non_exhaustive()
    }
}

/// A template bound to one selected action: the cycle's motor plan.
#[derive(Clone)]
pub struct MotorPlan {
    name: String,
    commands: Vec<MotorCommand>,
    triggers: Vec<Arc<dyn Trigger>>,
    choice: Arc<dyn CommandChoice>,
}

impl MotorPlan {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commands(&self) -> &[MotorCommand] {
        &self.commands
    }

    /// Keeps the commands every trigger holds for, then lets the choice
    /// function pick exactly one. `None` when the scene gates everything
    /// out; the agent simply issues no action this cycle.
    pub fn choose_motor_command<R: Rng>(
        &self,
        scene: &SensoryScene,
        rng: &mut R,
    ) -> Option<MotorCommand> {
        let triggered: Vec<MotorCommand> = self
            .commands
            .iter()
            .filter(|command| self.triggers.iter().all(|t| t.holds(command, scene)))
            .cloned()
            .collect();
        self.choice.choose(&triggered, rng)
    }
}

impl fmt::Debug for MotorPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotorPlan")
            .field("name", &self.name)
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

/// A handler that turns a motor command into the integer action the
/// environment understands.
pub trait Actuator: Send + Sync {
    fn execute(&self, command: &MotorCommand) -> i64;
}

impl<F> Actuator for F
where
    F: Fn(&MotorCommand) -> i64 + Send + Sync,
{
    fn execute(&self, command: &MotorCommand) -> i64 {
        self(command)
    }
}

/// Owns the motor plan templates and actuator registry, and carries the
/// current cycle's instantiated plan.
#[derive(Default)]
pub struct SensoryMotorSystem {
    templates: HashMap<MotorPlanKey, MotorPlanTemplate>,
    actuators: HashMap<String, Arc<dyn Actuator>>,
    current_plan: Option<MotorPlan>,
}

impl SensoryMotorSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_template(&mut self, key: MotorPlanKey, template: MotorPlanTemplate) {
        self.templates.insert(key, template);
    }

    pub fn register_actuator(&mut self, name: impl Into<String>, actuator: impl Actuator + 'static) {
        self.actuators.insert(name.into(), Arc::new(actuator));
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Binds the selected behavior to its motor plan template. A missing
    /// behavior is an invalid input (the cycle must not ask for a plan it
    /// has no behavior for); a missing template is a configuration-time
    /// contract violation.
    pub fn receive_selected_behavior(&mut self, behavior: Option<&Scheme>) -> CoreResult<()> {
        let Some(behavior) = behavior else {
            return Err(CoreError::invalid_input(
                "selected_behavior",
                "cannot instantiate a motor plan without a behavior",
            ));
        };
        let key = behavior.action.motor_key();
        let template = self
            .templates
            .get(&key)
            .ok_or_else(|| CoreError::MissingTemplate {
                key: key.to_string(),
            })?;
        let plan = template.instantiate(behavior.action.value);
        debug!(plan = plan.name(), commands = plan.commands().len(), "motor plan instantiated");
        self.current_plan = Some(plan);
        Ok(())
    }

    pub fn current_plan(&self) -> Option<&MotorPlan> {
        self.current_plan.as_ref()
    }

    /// The current plan's command for this scene, if any.
    pub fn motor_command<R: Rng>(
        &self,
        scene: &SensoryScene,
        rng: &mut R,
    ) -> Option<MotorCommand> {
        self.current_plan
            .as_ref()
            .and_then(|plan| plan.choose_motor_command(scene, rng))
    }

    /// Dispatches a command to its actuator and returns the environment
    /// action. Naming an unregistered actuator is a hard error: motor
    /// commands are produced by registered templates, so an unknown name
    /// means the configuration is inconsistent.
    pub fn execute(&self, command: &MotorCommand) -> CoreResult<i64> {
        let actuator =
            self.actuators
                .get(&command.actuator)
                .ok_or_else(|| CoreError::UnexpectedActuator {
                    actuator: command.actuator.clone(),
                })?;
        let action = actuator.execute(command);
        debug!(actuator = %command.actuator, value = command.value, action, "motor command executed");
        Ok(action)
    }
}

impl fmt::Debug for SensoryMotorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensoryMotorSystem")
            .field("templates", &self.templates.len())
            .field("actuators", &self.actuators.len())
            .field("current_plan", &self.current_plan)
            .finish()
    }
}
