use clap::Parser;
use scentsearch::Opts;
use scentsearch::cli::SubCommandExtend;
use scentsearch::config::SubCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();

    match &opts.subcmd {
        SubCommand::Server(config) => config.run(&opts).await,
        SubCommand::Search(config) => config.run(&opts).await,
        SubCommand::Recommend(config) => config.run(&opts).await,
        SubCommand::Show(config) => config.run(&opts).await,
    }
}
