use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser as _, ValueEnum};
use pegtree::fmt::render;
use pegtree::grammar::Grammar;
use pegtree::parser::Parser;

const INPUT: &str = r#"

    const x = 100
    const y = 200

    struct Point {
        int x;
        int y;
    }

    struct Line {
        Point a;
        Point b;

        function toString() { }
        function interesect(Line other) { }
    }

    struct Triangle {
        Point a;
        Point b;
        Point c;
    }

    function main (int a, int b, int c) {
        if a * b * c * d + 5*5 == 1000 * 20 {

        }
    }
"#;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Start {
    Program,
    Expression,
    Constant,
    Struct,
    Function,
}

/// Parse source text with the example grammar and print the match tree
#[derive(Debug, clap::Parser)]
#[command(name = "pegtree", version)]
struct Cli {
    /// Source file to parse; a built-in sample program when omitted
    file: Option<PathBuf>,

    /// Grammar rule to start from
    #[arg(long, value_enum, default_value_t = Start::Program)]
    rule: Start,

    /// Print the node tree as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => INPUT.to_string(),
    };

    let grammar = Grammar::new()?;
    let parser = match cli.rule {
        Start::Program => grammar.program(),
        Start::Expression => grammar.expression(),
        Start::Constant => grammar.constant(),
        Start::Struct => grammar.structure(),
        Start::Function => grammar.function(),
    };

    let result = parser.parse(&source);

    if let Ok(found) = &result {
        if !found.rest.trim().is_empty() {
            log::warn!("{} bytes of input were not consumed", found.rest.len());
        }
    }

    if cli.json {
        let output = match &result {
            Ok(found) => serde_json::to_string_pretty(&found.nodes)?,
            Err(err) => serde_json::to_string_pretty(&serde_json::json!({ "error": err.message }))?,
        };
        println!("{output}");
    } else {
        println!("{}", render(&result));
    }

    Ok(())
}
