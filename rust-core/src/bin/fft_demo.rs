//! Runs the multi-tone FFT demonstration and writes `fft_analysis.png`

use anyhow::Context;
use fft_analysis::demo::{run_demo, DemoConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::default();
    let report = run_demo(&config)
        .with_context(|| format!("FFT demo failed writing {}", config.output.display()))?;

    println!("FFT Analysis complete. The signal contains frequencies at:");
    for peak in &report.peaks {
        println!("- {:.0} Hz (magnitude {:.1})", peak.frequency, peak.magnitude);
    }
    println!("Figure saved to {}", report.output.display());

    Ok(())
}
