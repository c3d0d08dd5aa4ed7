use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;

use astatus::blocks::default_blocks;
use astatus::core::{
    LineRenderer, LoopControl, Options, OutputMode, RefreshLoop, Sink, StreamSink, TitleSink,
};
use astatus::platform::{install_signal_handlers, title};

fn cli() -> Command {
    let command = Command::new("astatus")
        .about("Print a one-line host status summary")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("once")
                .short('1')
                .help("Print a single line and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stream")
                .short('s')
                .help("Write lines to standard output (default)")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "x11")]
    let command = command.arg(
        Arg::new("title")
            .short('x')
            .help("Set the root window name instead of printing")
            .action(ArgAction::SetTrue)
            .overrides_with("stream"),
    );

    command
}

fn parse_options(matches: &ArgMatches) -> Options {
    #[cfg(feature = "x11")]
    let mode = if matches.get_flag("title") {
        OutputMode::Title
    } else {
        OutputMode::Stream
    };
    #[cfg(not(feature = "x11"))]
    let mode = OutputMode::Stream;

    Options {
        mode,
        once: matches.get_flag("once"),
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    if matches.get_flag("version") {
        eprintln!("astatus {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    astatus::init_logging();
    let options = parse_options(&matches);
    log::debug!("starting with {:?}", options);

    run(&options).inspect_err(|e| log::error!("{}", describe(e)))
}

/// The whole context chain on one line
fn describe(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}

fn run(options: &Options) -> Result<()> {
    let control = LoopControl::new();
    if options.once {
        control.request_stop();
    }
    install_signal_handlers(&control).context("Failed to install signal handlers")?;

    let renderer = LineRenderer::new(default_blocks());
    match options.mode {
        OutputMode::Stream => drive(renderer, StreamSink::new(io::stdout().lock()), control),
        OutputMode::Title => {
            let setter = title::open().context("Failed to open display")?;
            drive(renderer, TitleSink::new(setter), control)
        }
    }
}

fn drive<S: Sink>(renderer: LineRenderer, sink: S, control: LoopControl) -> Result<()> {
    let mut refresh = RefreshLoop::new(renderer, sink, control.clone(), control);
    refresh.run().context("Failed to update status")
}
