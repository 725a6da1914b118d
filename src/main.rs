use std::env;

use accuracy_eval::{Evaluator, JobBuilder, JobConfig};
use anyhow::{Context, bail};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map_or("accuracy-eval", String::as_str);
        bail!("Usage: {program} <job.json>");
    }

    let path = &args[1];
    let job = JobConfig::from_path(path).with_context(|| format!("cannot load job '{path}'"))?;
    info!("loaded job from {path}");

    let (mut model, mut loader) = JobBuilder::new()
        .build(&job)
        .context("invalid job")?;

    let report = Evaluator::new(job.eval)
        .run(&mut model, &mut loader)
        .context("evaluation failed")?;

    println!(
        "{}/{} {:.6}",
        report.correct(),
        report.denominator(),
        report.accuracy()
    );

    Ok(())
}
