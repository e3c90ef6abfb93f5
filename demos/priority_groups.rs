//! # Example: priority_groups
//!
//! Demonstrates ordered dispatch across priority groups.
//!
//! Shows how to:
//! - Connect slots into numeric groups (lower ids run earlier).
//! - Insert at an explicit index within a group.
//! - Isolate a flaky subscriber with [`EmitPolicy::Isolate`].
//!
//! ## Flow
//! ```text
//! emit("save")
//!   ├─ group -1: validators        (run first)
//!   ├─ group  0: command handlers
//!   └─ group 10: audit / metrics   (run last, failures isolated)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example priority_groups
//! ```

use signalcast::{EmitPolicy, Signal, SignalConfig, SlotError, SlotFn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let commands: Signal<(String,), ()> = Signal::with_config(SignalConfig {
        name: "commands".into(),
        policy: EmitPolicy::Isolate,
    });

    commands.connect_in(
        SlotFn::arc("validate", |(cmd,): (String,)| async move {
            println!("[validate] {cmd}");
            Ok::<_, SlotError>(())
        }),
        -1,
    );
    commands.connect(SlotFn::arc("handle", |(cmd,): (String,)| async move {
        println!("[handle]   {cmd}");
        Ok::<_, SlotError>(())
    }));
    commands.connect_in(
        SlotFn::arc("audit", |(cmd,): (String,)| async move {
            println!("[audit]    {cmd}");
            Ok::<_, SlotError>(())
        }),
        10,
    );
    // Metrics are flaky today; under Isolate the failure is logged and the
    // rest of the pass still runs.
    commands.connect_in(
        SlotFn::arc("metrics", |(_,): (String,)| async move {
            Err::<(), _>(SlotError::fail("collector offline"))
        }),
        10,
    );

    // Jump the queue: index 0 puts this slot at the front of group -1.
    commands.connect_at(
        SlotFn::arc("trace", |(cmd,): (String,)| async move {
            println!("[trace]    {cmd}");
            Ok::<_, SlotError>(())
        }),
        -1,
        Some(0),
    );

    commands.emit(("save".to_string(),)).await?;
    Ok(())
}
