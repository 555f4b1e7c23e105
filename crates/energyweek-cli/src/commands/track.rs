//! Interactive weekly energy tracking session.
//!
//! The terminal rendition of the tracker form: a week grid of selection
//! cells, a pattern analysis card, and recommendation blocks. The grid
//! lives only in this loop's local variable and is discarded on quit;
//! every edit produces a new grid value and a full recompute.

use std::io::{self, BufRead, Write};

use chrono::{Datelike, Local, Timelike};
use energyweek_core::{
    Config, GridEdit, PatternAnalyzer, TimeBlock, WeekGrid, Weekday,
};

pub fn run(plain: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_default();
    let emoji = !plain && config.display.emoji_labels;
    let show_recommendations = config.display.show_recommendations;

    let analyzer = PatternAnalyzer::new();
    let mut grid = WeekGrid::new();

    println!("Weekly Energy Pattern Tracker");
    println!();
    println!("{}", grid.render_table(emoji));
    println!();
    print_analysis(&analyzer, &grid, show_recommendations);
    println!();
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "quit" | "done" | "exit" => break,
            "help" => print_help(),
            "show" => println!("{}", grid.render_table(emoji)),
            "patterns" => {
                print_averages(&analyzer, &grid);
                print_analysis(&analyzer, &grid, show_recommendations);
            }
            "set" => match parse_set(&args) {
                Ok(edit) => grid = apply_edit(&analyzer, grid, edit, show_recommendations),
                Err(e) => eprintln!("error: {e}"),
            },
            "clear" => match parse_clear(&args) {
                Ok(edit) => grid = apply_edit(&analyzer, grid, edit, show_recommendations),
                Err(e) => eprintln!("error: {e}"),
            },
            other => eprintln!("unknown command: {other} (try 'help')"),
        }
    }

    println!(
        "Session ended ({}/15 cells filled, entries are not saved).",
        grid.filled_count()
    );
    Ok(())
}

/// Apply one edit and rerun the full analysis on the new grid.
fn apply_edit(
    analyzer: &PatternAnalyzer,
    grid: WeekGrid,
    edit: GridEdit,
    show_recommendations: bool,
) -> WeekGrid {
    let next = grid.apply(edit);
    match edit.level {
        Some(level) => println!("{} {} -> {}", edit.day, edit.block, level),
        None => println!("{} {} -> unset", edit.day, edit.block),
    }
    println!();
    print_analysis(analyzer, &next, show_recommendations);
    next
}

fn print_analysis(analyzer: &PatternAnalyzer, grid: &WeekGrid, show_recommendations: bool) {
    let summary = analyzer.analyze(grid);
    println!("{}", summary.render_report());
    if show_recommendations {
        let recommendations = analyzer.recommendations(&summary);
        if !recommendations.is_empty() {
            println!("Recommendations:");
            for rec in recommendations {
                println!("  * {rec}");
            }
        }
    }
}

fn print_averages(analyzer: &PatternAnalyzer, grid: &WeekGrid) {
    println!("Block averages:");
    for entry in analyzer.block_averages(grid) {
        if entry.sample_count > 0 {
            println!(
                "  {:<11} avg {:.1} over {} day(s)",
                entry.block.as_str(),
                entry.average,
                entry.sample_count
            );
        } else {
            println!("  {:<11} no entries yet", entry.block.as_str());
        }
    }
    println!();
}

fn parse_set(args: &[&str]) -> Result<GridEdit, Box<dyn std::error::Error>> {
    match args {
        [level] => {
            let (day, block) = current_slot()?;
            Ok(GridEdit {
                day,
                block,
                level: Some(level.parse()?),
            })
        }
        [block, level] => {
            let (day, _) = current_slot()?;
            Ok(GridEdit {
                day,
                block: block.parse()?,
                level: Some(level.parse()?),
            })
        }
        [day, block, level] => Ok(GridEdit {
            day: day.parse()?,
            block: block.parse()?,
            level: Some(level.parse()?),
        }),
        _ => Err("usage: set [<day>] [<block>] <level>".into()),
    }
}

fn parse_clear(args: &[&str]) -> Result<GridEdit, Box<dyn std::error::Error>> {
    match args {
        [day, block] => Ok(GridEdit {
            day: day.parse()?,
            block: block.parse()?,
            level: None,
        }),
        _ => Err("usage: clear <day> <block>".into()),
    }
}

/// Default day and block from the local clock.
fn current_slot() -> Result<(Weekday, TimeBlock), Box<dyn std::error::Error>> {
    let now = Local::now();
    let day = Weekday::from_chrono(now.weekday())
        .ok_or("today is a weekend; name a weekday explicitly")?;
    Ok((day, TimeBlock::from_hour(now.hour())))
}

fn print_help() {
    println!("Commands:");
    println!("  set [<day>] [<block>] <level>   record a level (1-4 or rest/low/good/high)");
    println!("                                  day/block default to the current weekday and time");
    println!("  clear <day> <block>             unset a cell");
    println!("  show                            redraw the week grid");
    println!("  patterns                        show block averages and detected patterns");
    println!("  help                            show this help");
    println!("  quit                            end the session (entries are not saved)");
}
