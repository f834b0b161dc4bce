//! Steps the built-in sample puzzle to completion, printing every
//! explanation the engine produces along the way.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example walkthrough
//! ```
//!
//! Set `RUST_LOG=debug` to also see the engine's rule-level logging.

use lucidoku_game::Session;

fn main() {
    env_logger::init();

    let mut session = Session::new();
    session
        .begin_solve()
        .expect("a fresh session can enter solve mode");

    let mut step_number = 1_u32;
    loop {
        let step = session.step().expect("the session is solving");
        for message in &step.messages {
            println!("step {step_number}: {message}");
        }
        if step.actions.is_empty() {
            break;
        }
        step_number += 1;
    }
}
