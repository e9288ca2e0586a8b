use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use memory_match::{GameConfig, Overlay, Table, TableEvent, TilePosition, TileView};
use memory_match::view::HELP_TEXT;

#[derive(Parser, Debug)]
#[command(about = "Play the memory card game in a terminal")]
struct Args {
    /// Path to a TOML game config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Shuffle seed (overrides the config file)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut table = Table::from_config(&config).context("failed to set up table")?;
    info!("{} tiles on the table", table.engine().deck().len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(&table, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => table.restart(),
            "h" | "help" => table.show_help(),
            "c" | "close" => table.close_overlay(),
            "" => {}
            input => match input.parse::<usize>() {
                Ok(index) => match table.click(TilePosition::new(index), Instant::now()) {
                    Ok(_) => settle(&mut table, &mut stdout)?,
                    Err(err) => writeln!(stdout, "{}", err)?,
                },
                Err(_) => writeln!(stdout, "unknown command {:?}", input)?,
            },
        }
        render(&table, &mut stdout)?;
    }

    Ok(())
}

/// Run scheduled actions to completion, redrawing after each one.
fn settle(table: &mut Table, out: &mut impl Write) -> Result<()> {
    while let Some(deadline) = table.deadline() {
        render(table, out)?;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        if let Some(TableEvent::Resolved(resolution)) = table.tick(Instant::now())? {
            let verdict = if resolution.is_match() { "Match!" } else { "No match." };
            writeln!(out, "{}", verdict)?;
        }
    }
    Ok(())
}

fn render(table: &Table, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", table.status())?;
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(cell).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }

    match table.overlay() {
        Some(Overlay::GameOver) => {
            writeln!(out, "{}", table.game_over_text())?;
            writeln!(out, "Type r to play again.")?;
        }
        Some(Overlay::Help) => {
            writeln!(out, "{}", HELP_TEXT)?;
            writeln!(out, "Type c to close.")?;
        }
        None => write!(out, "tile number, r(estart), h(elp) or q(uit)> ")?,
    }
    out.flush()?;
    Ok(())
}

fn cell(tile: &TileView<'_>) -> String {
    let face = if tile.inactive {
        "-".repeat(18)
    } else if tile.flipped {
        format!("{:<18}", tile.item.name)
    } else {
        "#".repeat(18)
    };
    format!("[{:>2} {}]", tile.position.index(), face)
}
