// SPDX-License-Identifier: MIT
//
// brandkit — brand palette preview for the terminal.
//
// Wires the workspace crates into a command-line tool:
//
//   bk-color   → hex / HSL conversion, ANSI truecolor encoding
//   bk-palette → six-swatch derivation, contrast policy
//   bk-preview → questionnaire state, derived view, directives
//
// One-shot mode renders the preview for the given choices and exits.
// Interactive mode reads one directive per line and re-renders after each:
//
//   stdin → parse_directive → PreviewModel setter → view → Renderer → stdout

mod render;

use std::io::{self, BufRead, Write};
use std::process;

use bk_color::HexColor;
use bk_palette::{ContrastMode, PaletteKind};
use bk_preview::{PreviewDefaults, PreviewModel, font};
use clap::Parser;
use tracing::{debug, info};

use crate::render::{Renderer, Style};

const HELP: &str = "\
commands:
  primary <#hex>          set the primary seed
  secondary <#hex>        set the secondary seed
  text <#hex>             set the preferred text color
  font <name|stack>       set the font
  palette <name>          show the primary or secondary palette
  select <1-6|#hex>       choose the example card background
  reset                   restore the starting choices
  show                    render again
  help                    this list
  quit                    leave";

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(version)]
#[command(about = "Preview brand palettes derived from two seed colors")]
struct Args {
    /// Primary brand color (#RGB or #RRGGBB)
    #[arg(long, default_value = "#2CC295")]
    primary: HexColor,

    /// Secondary brand color
    #[arg(long, default_value = "#095544")]
    secondary: HexColor,

    /// Preferred body text color
    #[arg(long, default_value = "#333333")]
    text: HexColor,

    /// Font name from the catalog, or any CSS font stack
    #[arg(long)]
    font: Option<String>,

    /// Palette shown in the grid (primary or secondary)
    #[arg(long, default_value = "primary")]
    palette: PaletteKind,

    /// Card background: grid position 1-6 or a color from the shown palette
    #[arg(long)]
    select: Option<String>,

    /// Judge label legibility by WCAG contrast ratio instead of brightness
    #[arg(long)]
    wcag: bool,

    /// Plain text output without escape sequences
    #[arg(long)]
    no_color: bool,

    /// Read directives from stdin and re-render after each
    #[arg(short, long)]
    interactive: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn defaults(&self) -> PreviewDefaults {
        let font = self.font.as_deref().map_or_else(
            || font::DEFAULT_FONT.to_string(),
            |f| font::lookup(f).map_or_else(|| f.to_string(), |choice| choice.stack.to_string()),
        );
        PreviewDefaults {
            primary_seed: self.primary,
            secondary_seed: self.secondary,
            text_color: self.text,
            font,
            active_palette: self.palette,
            contrast: if self.wcag { ContrastMode::Wcag } else { ContrastMode::Brightness },
        }
    }

    const fn style(&self) -> Style {
        if self.no_color { Style::Plain } else { Style::Color }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut model = PreviewModel::new(args.defaults());
    if let Some(select) = &args.select {
        if let Err(err) = model.run(&format!("select {select}")) {
            eprintln!("brandkit: --select: {err}");
            process::exit(2);
        }
    }

    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), args.style());

    let result = if args.interactive {
        interactive(&mut model, &mut renderer, io::stdin().lock())
    } else {
        renderer.render(&model.view())
    };

    if let Err(err) = result {
        // A closed pipe is a normal way for `brandkit | head` to end.
        if err.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("brandkit: {err}");
            process::exit(1);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}

// ─── Interactive mode ───────────────────────────────────────────────────────

/// Outcome of one interactive input line.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// State changed or a redraw was asked for.
    Render,
    /// Message for the user; nothing to redraw.
    Message(String),
    Quit,
}

/// Handle one line: the session words first, everything else as a directive.
fn step(model: &mut PreviewModel, line: &str) -> Step {
    match line.trim() {
        "" => Step::Message(String::new()),
        "quit" | "exit" | "q" => Step::Quit,
        "help" | "?" => Step::Message(HELP.to_string()),
        "show" => Step::Render,
        line => match model.run(line) {
            Ok(()) => {
                debug!(line, "directive applied");
                Step::Render
            }
            Err(err) => Step::Message(format!("error: {err} (type `help` for commands)")),
        },
    }
}

fn interactive<W: Write>(
    model: &mut PreviewModel,
    renderer: &mut Renderer<W>,
    input: impl BufRead,
) -> io::Result<()> {
    info!("interactive session started");
    renderer.render(&model.view())?;
    prompt()?;

    for line in input.lines() {
        match step(model, &line?) {
            Step::Render => renderer.render(&model.view())?,
            Step::Message(msg) if msg.is_empty() => {}
            Step::Message(msg) => eprintln!("{msg}"),
            Step::Quit => break,
        }
        prompt()?;
    }

    info!("interactive session ended");
    Ok(())
}

/// Prompt on stderr so piped stdout carries only renders.
fn prompt() -> io::Result<()> {
    let mut err = io::stderr();
    write!(err, "> ")?;
    err.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
