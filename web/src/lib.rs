use clap::Parser;
use wasm_bindgen::prelude::*;

mod catalog;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads options from the URL hash, e.g. `#-vv&--pool-size=50`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = match Args::from_location_hash(&location_hash) {
        Ok(args) => args,
        Err(err) => {
            gloo::console::warn!(format!("Ignoring options in URL hash: {err}"));
            Args::parse_from([""])
        }
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {err}"));
        }
    }
    log::debug!("options: {:?}", args.game);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.api_url, trivia_protocol::DEFAULT_API_URL);
        assert_eq!(args.game.pool_size, trivia_core::LoaderConfig::DEFAULT_POOL_SIZE);
        assert_eq!(args.game.seed, None);
    }

    #[test]
    fn hash_options_are_parsed() {
        let args =
            Args::from_location_hash("#-vv&--pool-size=40&--seed=7&--api-url=http://localhost:3000/api/")
                .unwrap();

        assert_eq!(args.game.pool_size, 40);
        assert_eq!(args.game.seed, Some(7));
        assert_eq!(args.game.api_url, "http://localhost:3000/api/");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_hash_option_is_an_error() {
        assert!(Args::from_location_hash("#--board-size=9").is_err());
    }
}
