use hamming_sim::sim::{PixelBuffer, Rgb, RunStatus, Selection, SimulationConfig, Simulator};
use std::process::ExitCode;

fn parse_arg(args: &[String], index: usize, default: usize) -> Result<usize, String> {
    match args.get(index) {
        Some(value) => value
            .parse()
            .map_err(|_| format!("expected an unsigned integer, got {:?}", value)),
        None => Ok(default),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let dims = parse_arg(&args, 0, 16).and_then(|w| parse_arg(&args, 1, 16).map(|h| (w, h)));
    let (width, height) = match dims {
        Ok(dims) => dims,
        Err(message) => {
            eprintln!("usage: hamming_sim [WIDTH HEIGHT [SEED]]: {}", message);
            return ExitCode::FAILURE;
        }
    };

    let config = match args.get(2) {
        Some(seed) => match seed.parse() {
            Ok(seed) => SimulationConfig::default().with_seed(seed),
            Err(_) => {
                eprintln!("usage: hamming_sim [WIDTH HEIGHT [SEED]]: bad seed {:?}", seed);
                return ExitCode::FAILURE;
            }
        },
        None => match SimulationConfig::from_env() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    let image = PixelBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb::new(r, g, r / 2 + g / 2)
    });

    let mut simulator = Simulator::from_config(&config);
    let run = match simulator.run_on_region(&image, &Selection::whole(&image)) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if run.status() == RunStatus::RegionTooSmall {
        println!("Selection region is too small. Please select a larger area.");
        return ExitCode::SUCCESS;
    }

    println!(
        "Region {}x{} at ({}, {}): {} pixels",
        run.region.width,
        run.region.height,
        run.region.x,
        run.region.y,
        run.region.pixel_count()
    );
    println!("{}", run.stats);
    println!("Correction rate:    {:.3}", run.stats.correction_rate());
    println!();
    if let Some((index, record)) = run.inspect(1) {
        println!("Codeword {} of {}", index, run.records.len());
        println!("{}", record);
    }

    ExitCode::SUCCESS
}
