//! From broadcast to behavior to motor command.

pub mod selection;
pub mod sensory_motor;

pub use selection::{behavior_value, ActionSelection};
pub use sensory_motor::{
    Actuator, CommandValue, MotorCommand, MotorPlan, MotorPlanTemplate, SensoryMotorSystem,
    UniformChoice,
};
