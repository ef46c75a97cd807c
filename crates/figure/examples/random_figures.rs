//! Print a few random grid figures with their classification.
//!
//! Usage:
//!   cargo run -p figure --example random_figures -- [seed] [count]

use figure::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let count: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);

    let mut stream = match FigureGenerator::new(FigureGenCfg::default(), seed) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("seed {seed}, vertex count {:?}", stream.cfg().grid.vertex_count);
    for _ in 0..count {
        match stream.generate_next() {
            Ok(s) => {
                let coords: Vec<String> = s
                    .report
                    .points
                    .iter()
                    .map(|p| format!("({},{})", p.x, p.y))
                    .collect();
                println!("#{:<3} {:<36} {}", s.replay.index, s.report.label, coords.join(" "));
            }
            Err(e) => eprintln!("{e}"),
        }
    }
}
