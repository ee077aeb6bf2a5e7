use anyhow::Context;
use bucket_draw::config::DrawConfig;
use bucket_draw::io::{FileSink, FileSource};
use bucket_draw::{logger, make_rng};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = DrawConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let seed = config.seed();
    tracing::info!(seed, "shuffling entrants (rerun with --seed {seed} to reproduce)");

    let source = FileSource::new(&config.input);
    let mut sink = FileSink::new(&config.output, config.format);
    let draw = bucket_draw::run(&source, &mut sink, &mut make_rng(seed)).with_context(|| {
        format!(
            "couldn't draw {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!(
        "Drew {} buckets and {} matches into {}",
        draw.groups().len(),
        draw.matches().len(),
        config.output.display()
    );
    Ok(())
}
