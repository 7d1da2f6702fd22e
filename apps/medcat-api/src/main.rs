use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = medcat_api::Args::parse();

	medcat_api::run(args).await
}
