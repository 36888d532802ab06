// Entrypoint: parse flags, set up logging, fetch and print the list.
// Errors go to stderr with a non-zero exit; stdout only ever carries the
// finished list.

use anyhow::Result;
use clap::Parser;
use todoist_shoplist::api::ApiClient;
use todoist_shoplist::app::fetch_shopping_list;
use todoist_shoplist::cli::Args;
use todoist_shoplist::secret::GopassProvider;
use todoist_shoplist::ui::spinner;

fn run(args: &Args) -> Result<String> {
    let secrets = GopassProvider::new(&args.gopass_bin, &args.secret_path);
    let progress = spinner("Fetching shopping list...");
    let list = fetch_shopping_list(
        &secrets,
        |token| ApiClient::new(&args.api_base, token, args.http_timeout()),
        &args.project,
        &progress,
    );
    progress.finish_and_clear();
    Ok(list?)
}

fn main() {
    let args = Args::parse();
    let env = env_logger::Env::default().default_filter_or(args.log_filter());
    let _ = env_logger::Builder::from_env(env).try_init();

    match run(&args) {
        Ok(list) => println!("{}", list),
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    }
}
