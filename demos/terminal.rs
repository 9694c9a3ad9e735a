//! Terminal sort demo.
//!
//! Slices a synthetic image, shuffles the slices and sorts them back, drawing
//! the slice order as a bar line after every swap.
//!
//! ```text
//! cargo run --example terminal --features logging -- quick 24
//! RUST_LOG=sortvisor=debug cargo run --example terminal --features logging -- bubble
//! ```
//!
//! Press Ctrl-C to cancel a run in flight.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sortvisor::{Callbacks, Config, LogWriter, Raster, Session, SortError, StrategyKind, Tee};
use tokio::signal;
use tracing_subscriber::EnvFilter;

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Stand-in for a decoded picture; only its size matters to the engine.
struct Canvas {
    width: u32,
    height: u32,
}

impl Raster for Canvas {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
}

fn render(order: &[usize]) -> String {
    let n = order.len().max(1);
    order
        .iter()
        .map(|&v| BARS[v * BARS.len() / n])
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortvisor=info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let kind: StrategyKind = args
        .next()
        .as_deref()
        .unwrap_or("bubble")
        .parse()
        .context("choose a strategy")?;
    let slices: usize = match args.next() {
        Some(raw) => raw.parse().context("slice count must be a number")?,
        None => 32,
    };

    let cfg = Config {
        compare_delay: Duration::from_millis(5),
        swap_delay: Duration::from_millis(15),
        slice_count: slices,
    };
    let canvas = Arc::new(Canvas {
        width: 640,
        height: 480,
    });
    let session = Session::new(Some(canvas), cfg);

    session.slice()?;
    session.shuffle(&mut rand::rng())?;

    let mut order = session.snapshot_values()?;
    println!("{}  shuffled", render(&order));

    let bars = Callbacks::new()
        .with_swap(move |a, b| {
            order.swap(a, b);
            println!("{}", render(&order));
        })
        .with_complete(|| println!("done"));
    let mut observer = Tee::new(bars, LogWriter::new());

    let strategy = kind.strategy();
    let sort = session.sort(Some(strategy.as_ref()), &mut observer);
    tokio::pin!(sort);

    let outcome = tokio::select! {
        res = &mut sort => res,
        _ = signal::ctrl_c() => {
            session.cancel();
            sort.await
        }
    };

    match outcome {
        Ok(report) => println!(
            "{}: {} compares, {} swaps in {:?}",
            report.strategy, report.compares, report.swaps, report.elapsed
        ),
        Err(SortError::Canceled) => {
            println!("{}  cancelled", render(&session.snapshot_values()?));
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
