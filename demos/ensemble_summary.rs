//! Ensemble runup summary for a short storm sequence.
//!
//! Prints every model's R2 estimate per case, the ensemble mean, and the
//! mean of each other runup parameter.
//!
//! Run with: `RUST_LOG=wave_runup=debug cargo run --example ensemble_summary`

use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wave_runup::{
    EnsembleMean, EnsembleRaw, FnRegressor, RunupError, RunupParameter, WaveInputs,
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RunupError> {
    // Storm build-up, peak and decay on an intermediate beach
    let hs = vec![1.2, 2.0, 3.1, 4.0, 2.6];
    let tp = vec![8.0, 9.5, 11.0, 12.5, 10.0];
    let beta = vec![0.08, 0.08, 0.07, 0.06, 0.07];
    let roughness = vec![0.00075; hs.len()];

    println!("Wave Runup Ensemble");
    println!("===================");
    println!("Cases: {}", hs.len());
    println!();

    let inputs = WaveInputs::new(hs.clone(), beta)
        .with_period(tp.clone())
        .with_roughness(roughness);

    // Stand-in for a trained Beuzen2019 regressor: Stockdon-like scaling
    let regressor = Arc::new(FnRegressor::new(|row: &[f64; 3]| {
        let [hs, tp, beta] = *row;
        let lp = wave_runup::waves::deep_water_wavelength(tp);
        0.75 * beta * (hs * lp).sqrt() + 0.2 * hs
    }));

    let raw = EnsembleRaw::new(inputs.clone())?.with_regressor(regressor.clone());
    let table = raw.estimate_parameter(RunupParameter::R2);

    print!("{:>6} {:>6}", "Hs", "Tp");
    for name in table.column_names() {
        print!(" {:>18}", name);
    }
    println!();
    for case in 0..table.n_rows() {
        print!("{:>6.2} {:>6.2}", hs[case], tp[case]);
        for value in table.row(case) {
            print!(" {:>18.3}", value);
        }
        println!();
    }
    println!();

    let mean = EnsembleMean::new(inputs)?.with_regressor(regressor);
    for param in RunupParameter::ALL {
        let series = mean.estimate_parameter(param);
        let values: Vec<String> = series.values.iter().map(|v| format!("{:.3}", v)).collect();
        println!("{:>12}: [{}]", series.name, values.join(", "));
    }

    Ok(())
}
