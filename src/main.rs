use anyhow::Context;
use clap::Parser;
use sitefix::{
    cli::{init_logging, Args, Command},
    passes::{LogicalPropsPass, NavbarPass},
    report, Pass, Runner, SiteConfig,
};

fn main() {
    let args = Args::parse();
    init_logging(args.log_level());

    let result = (|| -> anyhow::Result<()> {
        let pass: Box<dyn Pass> = match args.command {
            Command::Schema => {
                println!("{}", SiteConfig::json_schema()?);
                return Ok(());
            }
            Command::Logical => Box::new(LogicalPropsPass::new()?),
            Command::Navbar => Box::new(NavbarPass::new()?),
        };

        let config = SiteConfig::load(args.root.as_deref(), args.config.as_deref())
            .context("Failed to load site config")?;

        let summary = Runner::new()
            .run(pass.as_ref(), &config)
            .with_context(|| format!("{} pass aborted", pass.name()))?;

        println!(
            "{}",
            report::render(&summary, pass.completion_message(), args.format)?
        );
        Ok(())
    })();

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
