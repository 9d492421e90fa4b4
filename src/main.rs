use artistat::{core, error::Result, fetch::INVENTORY_URL, Config};

use std::{
    collections::HashMap,
    io::Write as _,
    iter::Peekable,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum Mode {
    Report(Args),
    About,
}

#[derive(Debug)]
pub struct Args {
    user_id: Option<String>,
    url: String,
    json: bool,
    levels: Option<PathBuf>,
    config: Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = flexi_logger::Logger::with_str("info, artistat = trace")
        .format(flexi_logger::default_format)
        .start()
    {
        eprintln!("failed to start logger: {}", e);
    }

    let args = match parse_args() {
        Mode::Report(args) => args,
        Mode::About => about(),
    };

    if let Err(e) = run(args).await {
        log::error!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(mut args: Args) -> Result<()> {
    if let Some(path) = &args.levels {
        if args.config.options.ignore_enhancements {
            args.config.options.substat_levels = read_levels(path).await?;
        } else {
            log::warn!("sub-stat levels are only used with --simulate, ignoring `{}`", path.display());
        }
    }

    let user_id = match args.user_id {
        Some(user_id) => user_id,
        None => prompt_user_id()?,
    };

    let stdout = std::io::stdout();
    if args.json {
        core::json(&args.url, &user_id, args.config, stdout).await
    } else {
        core::text(&args.url, &user_id, args.config, stdout).await
    }
}

async fn read_levels(path: &Path) -> Result<HashMap<u64, Vec<u8>>> {
    let data = tokio::fs::read_to_string(path).await?;
    let levels: HashMap<u64, Vec<u8>> = serde_json::from_str(&data)?;
    log::info!("loaded sub-stat levels for {} artifacts", levels.len());
    Ok(levels)
}

fn prompt_user_id() -> Result<String> {
    print!("Input the user's discord id: ");
    std::io::stdout().flush()?;

    let mut user_id = String::new();
    std::io::stdin().read_line(&mut user_id)?;
    Ok(user_id.trim().to_owned())
}

fn parse_args() -> Mode {
    use std::env;

    let mut args = env::args().skip(1).peekable();
    let mut parsed = Args {
        user_id: None,
        url: INVENTORY_URL.to_owned(),
        json: false,
        levels: None,
        config: Config::default(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "about" if parsed.user_id.is_none() => return Mode::About,
            "-h" | "--help" => usage(),
            "--all" => parsed.config.equipped_only = false,
            "--json" => parsed.json = true,
            "--simulate" => {
                parsed.config.options.ignore_enhancements = true;
                if let Some(level) = next_number(&mut args) {
                    parsed.config.options.enhancement_override = level;
                }
            }
            "--levels" => {
                let path = required(&mut args, "--levels <file>");
                parsed.levels = Some(path.into());
            }
            "--url" => parsed.url = required(&mut args, "--url <base url>"),
            flag if flag.starts_with("--") => {
                eprintln!("unknown option `{}`: try `./artistat --help` for usage", flag);
                std::process::exit(1);
            }
            _ if parsed.user_id.is_some() => {
                eprintln!("invalid arguments: more than one user id given");
                std::process::exit(1);
            }
            user_id => parsed.user_id = Some(user_id.to_owned()),
        }
    }

    Mode::Report(parsed)
}

fn next_number<I>(args: &mut Peekable<I>) -> Option<u32>
where
    I: Iterator<Item = String>,
{
    let level = args.peek()?.parse().ok()?;
    args.next();
    Some(level)
}

fn required<I>(args: &mut I, usage: &str) -> String
where
    I: Iterator<Item = String>,
{
    args.next().unwrap_or_else(|| {
        eprintln!("invalid arguments: try `./artistat {}`", usage);
        std::process::exit(1);
    })
}

fn usage() -> ! {
    println!("\
usage:
    ./artistat [<user id>] [options]
        Total the stats of a user's equipped artifacts. Without <user id> the
        id is read from standard input.

    ./artistat about
        Version and background information

options:
    --all
        Use every artifact in the inventory instead of the equipped ones

    --simulate [<enhancement>]
        Ignore the artifacts' own enhancement and sub-stat levels and use
        <enhancement> (default 10) for every main stat

    --levels <file>
        With --simulate, JSON file of sub-stat levels per artifact id, i.e.
        {{\"1234567\": [4, 4, 2, 1]}}

    --json
        Print the totals as JSON

    --url <base url>
        Inventory page location, the user id is appended (default {})", INVENTORY_URL);
    std::process::exit(0)
}

fn about() -> ! {
    println!(
        "  v{}

artistat totals the main and sub-stats of a player's artifacts as listed on
their inventory page, along with how many artifacts of each set are counted.
Stats are printed by name; flat stats have no percent sign.
",
        env!("CARGO_PKG_VERSION")
    );

    std::process::exit(0)
}
