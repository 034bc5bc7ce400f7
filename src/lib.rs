pub mod amount;
pub mod config;
pub mod csv;
pub mod engine;
pub mod event;
pub mod model;

pub use amount::Amount;
pub use config::Config;
pub use engine::{
    CancelActor, CashCollection, Command, DeclineOutcome, Engine, EngineError, WithdrawalDecision,
};
pub use event::Event;
pub use model::{TaskFlavor, TaskId, TaskState, VendorId, WithdrawalId};
