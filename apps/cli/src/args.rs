//! CLI argument definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cutlist_core::{PricingBasis, MAX_BORDERS_PER_SIDE, MAX_SIDE_MM, MIN_SIDE_MM};

/// cutlist: price cut pieces, keep an order's cutlist and print piece tags
#[derive(Parser, Debug)]
#[command(name = "cutlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Material catalog (JSON array of materials)
    #[arg(long, global = true, env = "CUTLIST_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Session cache file holding the current cutlist
    #[arg(long, global = true, env = "CUTLIST_SESSION")]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a piece and append it to the cutlist
    Add(AddArgs),

    /// Remove an entry
    Remove {
        /// Entry id
        id: String,
    },

    /// Take an entry out for editing; prints its form values as JSON
    Edit {
        /// Entry id
        id: String,
    },

    /// Switch the pricing basis and re-price every entry
    Basis {
        /// Preset (counter, cabinetmaker, none) or a percentage
        value: PricingBasis,
    },

    /// Show entries and totals
    List,

    /// Print the tag batch as JSON, largest pieces first
    Tags,

    /// Write the cutlist snapshot to stdout
    Export,

    /// Replace the cutlist with a snapshot file
    Import {
        /// Snapshot file (JSON array of entries)
        file: PathBuf,
    },

    /// Empty the cutlist
    Clear,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Material id from the catalog
    #[arg(long)]
    pub material: String,

    /// Number of identical pieces
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub qty: u32,

    /// First side, in millimetres
    #[arg(long, value_parser = side_parser())]
    pub side_a: u32,

    /// Second side, in millimetres
    #[arg(long, value_parser = side_parser())]
    pub side_b: u32,

    /// Banded edges along side A (0-2)
    #[arg(long, default_value_t = 0, value_parser = border_parser())]
    pub border_a: u8,

    /// Banded edges along side B (0-2)
    #[arg(long, default_value_t = 0, value_parser = border_parser())]
    pub border_b: u8,
}

fn side_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(MIN_SIDE_MM as i64..=MAX_SIDE_MM as i64)
}

fn border_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=MAX_BORDERS_PER_SIDE as i64)
}
