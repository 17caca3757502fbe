//! Sample the BMP085, L3GD20 and LSM303DLHC on a Linux I2C bus.
//!
//! Prints one table row per tick. Blank columns mean that sensor had no new
//! sample on that tick.
//!
//! Usage:
//!   i2c-sensors [OPTIONS]
//!
//! Options:
//!   --device <PATH>        i2c-dev bus (default: /dev/i2c-1)
//!   --gpio <N>             BMP085 end-of-conversion GPIO (default: 38)
//!   --oss <0-3>            BMP085 oversampling (default: 3)
//!   --samples <N>          Number of ticks (default: 1000)
//!   --interval-ms <MS>     Delay between ticks (default: 10)
//!   --sea-level <PA>       Sea level pressure for altitude (default: 100500)
//!   --dump                 Print barometer calibration to stderr first
//!
//! Set `RUST_LOG=debug` (or `trace` for every register transaction) for logs.

use std::env;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use i2c_sensors::devices::barometer::bmp085::TEMPERATURE_CONVERSION_TIME;
use i2c_sensors::error::report;
use i2c_sensors::sensors::report::{format_row, header};
use i2c_sensors::{log_debug, log_warn, I2cSensors, SensorsConfig};

struct Args {
    config: SensorsConfig,
    samples: u32,
    dump: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: SensorsConfig::default(),
        samples: 1000,
        dump: false,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "--device" => {
                i += 1;
                args.config.device = parse_arg::<PathBuf>(&raw, i, "device");
            }
            "--gpio" => {
                i += 1;
                args.config.eoc_gpio = parse_arg(&raw, i, "gpio");
            }
            "--oss" => {
                i += 1;
                args.config.barometer.oversampling = parse_arg(&raw, i, "oss");
            }
            "--samples" => {
                i += 1;
                args.samples = parse_arg(&raw, i, "samples");
            }
            "--interval-ms" => {
                i += 1;
                args.config.interval = Duration::from_millis(parse_arg(&raw, i, "interval-ms"));
            }
            "--sea-level" => {
                i += 1;
                args.config.sea_level_pressure = parse_arg(&raw, i, "sea-level");
            }
            "--dump" => args.dump = true,
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if args.config.sea_level_pressure <= 0.0 {
        eprintln!("Error: sea-level must be positive");
        process::exit(1);
    }

    args
}

fn parse_arg<T: FromStr>(raw: &[String], i: usize, name: &str) -> T {
    raw.get(i)
        .unwrap_or_else(|| {
            eprintln!("Error: --{name} requires a value");
            process::exit(1);
        })
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Error: invalid value for --{name}");
            process::exit(1);
        })
}

fn print_usage() {
    eprintln!(
        "Usage: i2c-sensors [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --device <PATH>        i2c-dev bus (default: /dev/i2c-1)\n\
         \x20 --gpio <N>             BMP085 end-of-conversion GPIO (default: 38)\n\
         \x20 --oss <0-3>            BMP085 oversampling (default: 3)\n\
         \x20 --samples <N>          Number of ticks (default: 1000)\n\
         \x20 --interval-ms <MS>     Delay between ticks (default: 10)\n\
         \x20 --sea-level <PA>       Sea level pressure for altitude (default: 100500)\n\
         \x20 --dump                 Print barometer calibration to stderr first\n\
         \x20 -h, --help             Show this help"
    );
}

fn fail(program: &str, err: &dyn std::error::Error) -> ! {
    eprintln!("{program}: {}", report(err));
    process::exit(1);
}

fn main() {
    env_logger::init();

    let program = env::args().next().unwrap_or_else(|| "i2c-sensors".into());
    let args = parse_args();
    let config = &args.config;

    let mut sensors = I2cSensors::open(config).unwrap_or_else(|e| fail(&program, &e));

    if args.dump {
        eprintln!("{}", sensors.dump());
    }

    log_debug!(
        "{}: sampling {} ticks every {:?}",
        sensors.bus().path().display(),
        args.samples,
        config.interval
    );

    // Every barometer sample spans a temperature and a pressure conversion
    let cycle = sensors.barometer().oversampling().cycle_time();
    if config.interval < TEMPERATURE_CONVERSION_TIME {
        log_warn!(
            "interval {:?} is shorter than a temperature conversion ({:?})",
            config.interval,
            TEMPERATURE_CONVERSION_TIME
        );
    }
    log_debug!("bmp085: one sample per {:?} at most", cycle);

    println!("{}", header());
    for _ in 0..args.samples {
        let reading = sensors.run().unwrap_or_else(|e| fail(&program, &e));
        println!("{}", format_row(&reading, config.sea_level_pressure));
        thread::sleep(config.interval);
    }
}
