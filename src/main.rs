use std::error::Error;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use votematch::{DemoParams, load_config, run_demo};

const USAGE: &str = "usage: votematch [--config <path>] [--json-logs] [--sub-group <n>]";

struct Args {
    config: Option<PathBuf>,
    json_logs: bool,
    sub_group: usize,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        config: None,
        json_logs: false,
        sub_group: 2,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json-logs" => args.json_logs = true,
            "--sub-group" => {
                let n = iter.next().ok_or("--sub-group needs a number")?;
                args.sub_group = n.parse()?;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`\n{USAGE}").into()),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = load_config(args.config.as_deref())?;
    let params = DemoParams {
        sub_group: args.sub_group,
        ..DemoParams::default()
    };

    print!("{}", run_demo(&config, params)?);
    Ok(())
}
