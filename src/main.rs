use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{Level, LevelFilter, Log, Metadata, Record};

use indexed_heap::graph::{build_benchmark_graph, dijkstra_with};
use indexed_heap::{HeapConfig, HeapObserver, IndexedMinHeap};

/// Demonstrations of the indexed min-heap
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log every heap mutation (shown with -vvv)
    #[arg(long, global = true)]
    trace: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert ids 1..=8, remove a few by id, then drain by minimum key
    Sample {
        #[arg(long, default_value_t = 10)]
        capacity: usize,
    },
    /// Shortest path on the built-in five-node graph (A..E)
    Path {
        #[arg(long, default_value = "A")]
        from: String,
        #[arg(long, default_value = "E")]
        to: String,
    },
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:>5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => Level::Info.to_level_filter(),
        2 => Level::Debug.to_level_filter(),
        _ => Level::Trace.to_level_filter(),
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow!("failed to install logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

fn run_sample<O: HeapObserver>(heap: &mut IndexedMinHeap<O>) -> Result<()> {
    for i in 1..9 {
        heap.insert(i as i64, i)
            .with_context(|| format!("inserting element {}", i))?;
    }
    println!("{}", heap);

    for id in [2, 5, 8] {
        heap.remove(id)
            .with_context(|| format!("removing element {}", id))?;
        println!("{}", heap);
    }

    while !heap.is_empty() {
        let id = heap.remove_min()?;
        println!("{}", id);
        println!("{}", heap);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Sample { capacity } => {
            let mut heap = HeapConfig::with_capacity(capacity).trace(cli.trace).build();
            log::info!("running sample driver with capacity {}", capacity);
            run_sample(&mut heap)?;
        }
        Command::Path { from, to } => {
            let graph = build_benchmark_graph();
            let source = graph
                .node_index(&from)
                .ok_or_else(|| anyhow!("Node {} not found", from))?;
            let target = graph
                .node_index(&to)
                .ok_or_else(|| anyhow!("Node {} not found", to))?;

            let mut frontier = HeapConfig::with_capacity(graph.num_nodes())
                .trace(cli.trace)
                .build();
            match dijkstra_with(&mut frontier, &graph, source, target)? {
                Some(path) => println!(
                    "Shortest {}->{}: cost {}, path {}",
                    from,
                    to,
                    path.cost,
                    graph.format_path(&path.nodes)
                ),
                None => println!("No path from {} to {}", from, to),
            }
        }
    }
    Ok(())
}
