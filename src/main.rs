use clap::Parser;
use colored::*;
use csv2md::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_report) => {
            // Warnings have already been logged by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}
