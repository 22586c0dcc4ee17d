//! Print the frames of one sampled gesture, one line per event.
//!
//! Usage:
//!   cargo run -p compass --example gesture_trace -- [body|rotate-tip|leg-tip] [seed]

use compass::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let handle = match args.next().as_deref() {
        None | Some("body") => Handle::Body,
        Some("rotate-tip") => Handle::RotateTip,
        Some("leg-tip") => Handle::LegTip,
        Some(other) => {
            eprintln!("unknown handle {other:?}; usage: gesture_trace [body|rotate-tip|leg-tip] [seed]");
            return;
        }
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = SampleCfg {
        handle,
        steps: 8,
        ..SampleCfg::default()
    };
    let mut adapter = PointerAdapter::default();
    for event in sample_path(cfg, seed) {
        match adapter.handle(event) {
            Ok(frame) => println!(
                "{:<16} {:<40} spread={:>8.3}° pen=({:.1}, {:.1})",
                format!("{:?}", frame.mode),
                frame.svg,
                frame.spread_deg,
                frame.right_tip.x,
                frame.right_tip.y
            ),
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        }
    }
}
