//! Example: Headless scope fed by the built-in square-wave source
//!
//! What it demonstrates
//! - Feeding binary sample frames into a `ScopeSession` through `channel_scope()`.
//! - Composing a `FramePlan` each tick and reading the status and readout text.
//!
//! How to run
//! ```bash
//! cargo run --example synthetic
//! ```
//! Prints the status line and plan geometry for a couple of seconds of
//! simulated streaming, then exits.

use std::time::Duration;

use adcscope::{channel_scope, encode_sample_frame, ScopeConfig, ScopeSession, TestSignal};

fn main() {
    env_logger::init();

    let (sink, rx) = channel_scope();
    let mut session = ScopeSession::new();
    session.set_rx(rx);

    let _ = sink.resize(800.0, 600.0);
    let _ = sink.link_up();
    let _ = sink.pointer_moved(400.0, 300.0);

    // Producer: the device's 100 Hz square-wave test pattern at 10 kS/s,
    // chopped into 25 ms frames like the firmware sends them.
    let producer = {
        let sink = sink.clone();
        std::thread::spawn(move || {
            let mut signal = TestSignal::new(&ScopeConfig::default());
            for _ in 0..80 {
                let frame = encode_sample_frame(&signal.next_batch(250));
                // Ignore errors once the session side hangs up
                let _ = sink.send_frame(frame);
                std::thread::sleep(Duration::from_millis(25));
            }
        })
    };

    for _ in 0..80 {
        std::thread::sleep(Duration::from_millis(25));
        session.update();
        let plan = session.compose_frame();
        println!(
            "{:<28} trace {:>4} pts, {:>2} grid lines, {} bands, readout {}",
            session.status_line(),
            plan.trace.len(),
            plan.gridlines.len(),
            plan.band_segments.len(),
            plan.readout.as_deref().unwrap_or("-")
        );
    }

    producer.join().expect("producer thread panicked");
}
