use anyhow::{bail, Result};
use clap::Parser;
use std::str::FromStr;

use graph_impact_analyzer::data::preprocessing::{parse_node_list, process_graph};
use graph_impact_analyzer::{compute_analysis, make_graph, storage, viz, CentralityMetric, Config, GraphType};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-impact-analyzer",
    about = "Centrality impact of node removal on seeded random graphs"
)]
struct Cli {
    /// Random graph model: erdos_renyi, barabasi_albert or watts_strogatz
    #[clap(long, default_value = "erdos_renyi", value_parser = GraphType::from_str)]
    graph_type: GraphType,

    /// Number of nodes to generate
    #[clap(long, default_value = "50")]
    size: usize,

    /// Seed for the graph generator
    #[clap(long, default_value = "42")]
    seed: u32,

    /// Comma separated node IDs to remove
    #[clap(long, default_value = "")]
    remove: String,

    /// Comma separated centrality metrics
    #[clap(
        long,
        value_delimiter = ',',
        default_value = "degree,betweenness,closeness",
        value_parser = CentralityMetric::from_str
    )]
    metrics: Vec<CentralityMetric>,

    /// Drop isolated nodes before analysis
    #[clap(long)]
    remove_zero_degree: bool,

    /// Analyze only the largest connected component
    #[clap(long)]
    largest_component: bool,

    /// Output directory for results
    #[clap(long, default_value = "analysis_results")]
    output_dir: String,

    /// Skip the XGMML network export
    #[clap(long)]
    skip_export: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    if args.metrics.is_empty() {
        bail!("Please select at least one centrality measure");
    }

    let config = Config::new(args.remove_zero_degree, args.largest_component);

    // 1. Generate graph
    let graph = make_graph(args.graph_type, args.size, args.seed)?;
    log::info!(
        "Generated {} graph with {} nodes and {} edges",
        args.graph_type.display_name(),
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    // 2. Preprocess
    let graph = process_graph(&graph, &config);

    // 3. Analyze
    let removed = parse_node_list(&args.remove);
    for node in removed.iter().filter(|n| !graph.has_node(n)) {
        log::warn!("Node {} is not in the graph and will be ignored", node);
    }

    let report = compute_analysis(&graph, &removed, &args.metrics, &config);

    log::info!("{}", report.label);
    log::info!(
        "Components: {} -> {}",
        report.graph_info.before.component_count,
        report.graph_info.after.component_count
    );

    // 4. Save results
    storage::save_results(&report, &args.output_dir)?;

    // 5. Export network if requested
    if !args.skip_export {
        let network_name = format!("Random {}", args.graph_type.display_name());
        viz::generate_visualizations(&report, &graph, &network_name, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
