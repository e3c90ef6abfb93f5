//! # Example: wiring
//!
//! Demonstrates the basic signal/slot lifecycle.
//!
//! Shows how to:
//! - Create a [`Signal`] with a typed argument tuple.
//! - Connect function-backed slots ([`SlotFn`]) and collect their results.
//! - Block a connection without losing its position, then sever it.
//!
//! ## Run
//! ```bash
//! cargo run --example wiring
//! ```

use signalcast::{Signal, SlotError, SlotFn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let math: Signal<(i32, i32), i32> = Signal::new();

    math.connect(SlotFn::arc("sum", |(x, y): (i32, i32)| async move {
        Ok::<_, SlotError>(x + y)
    }));
    let product = math.connect(SlotFn::arc("product", |(x, y): (i32, i32)| async move {
        Ok::<_, SlotError>(x * y)
    }));

    println!("emit(2, 4)  -> {:?}", math.emit((2, 4)).await?);

    product.set_blocked(true);
    println!("blocked     -> {:?}", math.emit((2, 4)).await?);

    product.set_blocked(false);
    product.disconnect();
    println!("severed     -> {:?}", math.emit((2, 4)).await?);

    Ok(())
}
