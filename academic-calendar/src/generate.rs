use anyhow::{bail, Context, Result};
use tracing::{info, info_span};

use academic_calendar::config::CalendarConfig;
use academic_calendar::presets::{residency_example, Program};
use academic_calendar::report::{grid_report, period_report, summary_report};
use academic_calendar::schedule::{BlockSequence, ConsumptionMode, Generation, Generator};
use academic_calendar::session::Session;
use academic_calendar::time::HolidayCalendar;

use crate::cli::{ExampleArgs, GenerateArgs};

/// Run the `generate` subcommand.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let config = CalendarConfig::from_path(&args.config)
        .with_context(|| format!("failed to load config file: {}", args.config.display()))?;
    let strict = config.strict || args.strict;
    let request = config.into_request().context("invalid configuration")?;
    info!(
        years = request.years.len(),
        blocks = request.blocks.len(),
        mode = %request.mode,
        "configuration loaded"
    );

    let (generator, blocks) = request.into_generator()?;
    execute(&generator, &blocks, args.grid, strict)
}

/// Run the `example` subcommand.
pub fn run_example(args: ExampleArgs) -> Result<()> {
    let _cmd = info_span!("example").entered();

    let years = Program::Residency.default_years(args.start_year)?;
    let generator = Generator::new(
        years,
        Box::new(HolidayCalendar::russia()),
        ConsumptionMode::WorkingDays,
    )?;
    let blocks = residency_example()?;
    execute(&generator, &blocks, args.grid, false)
}

fn execute(generator: &Generator, blocks: &BlockSequence, grid: bool, strict: bool) -> Result<()> {
    let session = Session::new();
    let generation: Generation = session.run(|| generator.generate(blocks))?;

    print!("{}", period_report(&generation.periods, generator.years()));
    println!();
    print!("{}", summary_report(&generation.summary, generator.years().len()));
    if grid {
        for g in &generation.grids {
            println!();
            print!("{}", grid_report(g));
        }
    }

    if let Some(exhaustion) = generation.exhaustion {
        if strict {
            bail!(exhaustion.into_error());
        }
        eprintln!(
            "Warning: {} of {} working days assigned; {} block(s) not scheduled",
            exhaustion.assigned, exhaustion.requested, exhaustion.blocks_unscheduled
        );
    }
    Ok(())
}
