// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use fretboard::music::to_roman;
use fretboard::{note_name_to_number, number_to_note_name, InstrumentConfig, NeckPosition};
use std::env;
use tracing::Level;

fn print_usage() {
    println!("fretboard - Chord positions on fretted instruments");
    println!();
    println!("Usage: fretboard [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --note2num <NAME>                          Print the MIDI number of a note (e.g. C#4)");
    println!("  --num2note <N>                             Print the note name of a MIDI number");
    println!("  --position <STRINGS> <FRETS> <FINGERS>     Describe a position (comma-separated lists)");
    println!("  --sound <FILE> <STRINGS> <FRETS> <FINGERS> Print the notes a position sounds on an instrument");
    println!("  --help                                     Show this help message");
}

fn parse_list(arg: &str) -> Result<Vec<i32>> {
    arg.split(',')
        .map(|item| {
            item.trim()
                .parse::<i32>()
                .map_err(|_| anyhow!("Invalid number {:?} in list {:?}", item, arg))
        })
        .collect()
}

fn parse_position(args: &[String]) -> Result<NeckPosition> {
    let strings = parse_list(&args[0])?;
    let frets = parse_list(&args[1])?;
    let fingers = parse_list(&args[2])?;
    NeckPosition::from_strings_frets(&fingers, &strings, &frets, None)
        .context("Failed to build position")
}

fn describe_position(position: &NeckPosition) -> Result<()> {
    println!("{}", position);
    println!("{}", serde_json::to_string(&position.to_json())?);
    println!("Barre: {}", position.is_barre());
    Ok(())
}

fn sound_position(config_path: &str, position: &NeckPosition) -> Result<()> {
    let instrument = InstrumentConfig::load(config_path)?;
    let notes = instrument.sounding_notes(position)?;

    println!("{} ({} strings)", instrument.name, instrument.num_strings());
    for (placement, note) in position.notes().iter().zip(notes) {
        let sounded = match note {
            Some(number) => number_to_note_name(number as i32)?,
            None => "-".to_string(),
        };
        println!(
            "  string {} fret {:>4}: {}",
            placement.string,
            to_roman(placement.fret),
            sounded
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("fretboard - Chord positions on fretted instruments");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--note2num" => {
            if args.len() < 3 {
                eprintln!("Error: --note2num requires a note name");
                std::process::exit(1);
            }
            println!("{}", note_name_to_number(&args[2])?);
        }
        "--num2note" => {
            if args.len() < 3 {
                eprintln!("Error: --num2note requires a number");
                std::process::exit(1);
            }
            let number: i32 = args[2]
                .parse()
                .map_err(|_| anyhow!("Invalid note number: {}", args[2]))?;
            println!("{}", number_to_note_name(number)?);
        }
        "--position" => {
            if args.len() < 5 {
                eprintln!("Error: --position requires strings, frets and fingers");
                std::process::exit(1);
            }
            let position = parse_position(&args[2..5])?;
            describe_position(&position)?;
        }
        "--sound" => {
            if args.len() < 6 {
                eprintln!("Error: --sound requires an instrument file, strings, frets and fingers");
                std::process::exit(1);
            }
            let position = parse_position(&args[3..6])?;
            sound_position(&args[2], &position)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
