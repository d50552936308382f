use clap::Parser;
use sdf_explorer::{FractalKind, SimulateArgs, SimulationSummary, init_tracing, simulate, simulate_sweep};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    let args = SimulateArgs::parse();
    let config = args.simulation_config();

    let summaries = if args.sweep {
        simulate_sweep(FractalKind::ALL, &config)?
    } else {
        vec![simulate(&config)?]
    };

    for summary in &summaries {
        print_summary(summary);
    }

    Ok(())
}

fn print_summary(summary: &SimulationSummary) {
    println!(
        "{:?}: {} frames in {:.1}s simulated",
        summary.fractal, summary.frames, summary.simulated_secs
    );
    println!(
        "  zoom: {} wraps ({} completed), {} emergency resets, depth {}, scale {:.3}, iterations {}",
        summary.wraps_started,
        summary.wraps_completed,
        summary.emergency_resets + summary.non_finite_resets,
        summary.zoom_depth_label,
        summary.final_scale,
        summary.final_iterations
    );
    println!(
        "  resolution: {} changes, final {:.0}% (range {:.0}%..{:.0}%), fps ema {:.1}",
        summary.resolution_changes,
        summary.final_render_scale * 100.0,
        summary.min_render_scale * 100.0,
        summary.max_render_scale * 100.0,
        summary.final_fps_ema
    );
}
