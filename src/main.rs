use anyhow::{anyhow, Context, Result};
use std::env;

use guitar_catalog::{
    Builder, Guitar, GuitarSpec, GuitarType, Inventory, MatchOptions, SpecField, Wood,
};

const USAGE: &str = "\
Usage:
  guitar-finder                      search the demo stock for Erin's Stratocastor
  guitar-finder list [--json]
  guitar-finder search <builder> <type> <back-wood> <top-wood> [model] [--strict-model] [--json]";

/// Command-line flags shared by every mode
#[derive(Debug, Default, PartialEq)]
struct Flags {
    json: bool,
    strict_model: bool,
}

impl Flags {
    fn match_options(&self) -> MatchOptions {
        if self.strict_model {
            MatchOptions::case_insensitive_model()
        } else {
            MatchOptions::literal()
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (flags, positional) = parse_args(&args)?;

    let inventory = Inventory::sample();

    match positional.first() {
        None => run_search(&inventory, &erins_spec(), &flags),
        Some(&"list") => run_list(&inventory, &flags),
        Some(&"search") => {
            let wanted = parse_spec(&positional[1..])?;
            run_search(&inventory, &wanted, &flags)
        }
        Some(&"help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => Err(anyhow!("unknown command '{}'\n{}", other, USAGE)),
    }
}

/// Split arguments into known flags and positionals
fn parse_args(args: &[String]) -> Result<(Flags, Vec<&str>)> {
    let mut flags = Flags::default();
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => flags.json = true,
            "--strict-model" => flags.strict_model = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!("unknown flag '{}'\n{}", flag, USAGE));
            }
            value => positional.push(value),
        }
    }

    Ok((flags, positional))
}

/// Erin is looking for a Fender Stratocastor
fn erins_spec() -> GuitarSpec {
    GuitarSpec::new(
        Builder::Fender,
        "Stratocastor",
        GuitarType::Electric,
        6,
        Wood::Alder,
        Wood::Alder,
    )
}

fn parse_spec(args: &[&str]) -> Result<GuitarSpec> {
    if args.len() < 4 {
        return Err(anyhow!("search needs builder, type, back wood and top wood\n{}", USAGE));
    }

    let builder: Builder = args[0].parse().context("reading builder")?;
    let guitar_type: GuitarType = args[1].parse().context("reading guitar type")?;
    let back_wood: Wood = args[2].parse().context("reading back wood")?;
    let top_wood: Wood = args[3].parse().context("reading top wood")?;
    let model = args.get(4).copied().unwrap_or("");

    Ok(GuitarSpec::new(builder, model, guitar_type, 6, back_wood, top_wood))
}

fn run_search(inventory: &Inventory, wanted: &GuitarSpec, flags: &Flags) -> Result<()> {
    let options = flags.match_options();
    let hits = inventory.search_with(wanted, &options);

    if flags.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    println!("🔍 Looking for: {}", wanted);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if hits.is_empty() {
        println!("Sorry, we have nothing for you.");
        let misses = near_misses(inventory, wanted, &options);
        if !misses.is_empty() {
            println!("\nSame builder, but:");
            for (guitar, field) in misses {
                println!("  {} differs in {}", guitar.serial_number(), field.as_str());
            }
        }
        return Ok(());
    }

    println!("✓ {} match(es)\n", hits.len());
    for guitar in hits {
        print_guitar(guitar);
    }

    Ok(())
}

/// Guitars from the wanted builder that fail on a later field
fn near_misses<'a>(
    inventory: &'a Inventory,
    wanted: &GuitarSpec,
    options: &MatchOptions,
) -> Vec<(&'a Guitar, SpecField)> {
    inventory
        .by_builder(wanted.builder())
        .into_iter()
        .filter_map(|g| g.spec().mismatch(wanted, options).map(|field| (g, field)))
        .collect()
}

fn run_list(inventory: &Inventory, flags: &Flags) -> Result<()> {
    let guitars: Vec<&Guitar> = inventory.guitars().collect();

    if flags.json {
        println!("{}", serde_json::to_string_pretty(&guitars)?);
        return Ok(());
    }

    println!("🎸 {} guitars in stock", inventory.count());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for guitar in guitars {
        print_guitar(guitar);
    }
    println!("\nTotal value: ${:.2}", inventory.total_value());

    Ok(())
}

fn print_guitar(guitar: &Guitar) {
    let spec = guitar.spec();
    println!(
        "  {} {} {} guitar",
        spec.builder(),
        spec.model(),
        spec.guitar_type()
    );
    println!(
        "     {} back and sides, {} top",
        spec.back_wood(),
        spec.top_wood()
    );
    println!(
        "     serial {}, ${:.2}\n",
        guitar.serial_number(),
        guitar.price()
    );
}
