use crate::catalog::HttpCatalog;
use crate::utils::*;
use clap::Args;
use trivia_core as game;
use web_time::Instant;
use yew::prelude::*;

#[derive(Debug)]
pub(crate) enum Msg {
    Restart,
    Loaded {
        ticket: game::LoadTicket,
        result: game::Result<[game::Category; game::NUM_CATEGORIES]>,
        started: Instant,
    },
    Activate(game::CellEvent),
}

fn cell_class(text: &str) -> Classes {
    classes!("cell", (text == game::HIDDEN_PLACEHOLDER).then_some("hidden"))
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    event: game::CellEvent,
    text: AttrValue,
    callback: Callback<game::CellEvent>,
}

#[function_component(ClueCell)]
fn clue_cell_component(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        event,
        text,
        callback,
    } = props.clone();

    let id = event.addr.to_string();
    let class = cell_class(&text);
    let onclick = Callback::from(move |_: MouseEvent| {
        callback.emit(event);
        log::trace!("{} clicked", event.addr);
    });

    html! {
        <td {id} {class} {onclick}>{ text.to_string() }</td>
    }
}

fn view_row(
    board: game::BoardId,
    clue: usize,
    row: &[String],
    callback: &Callback<game::CellEvent>,
) -> Html {
    html! {
        <tr>
            {
                for row.iter().enumerate().map(|(category, text)| {
                    let event = game::CellEvent::new(board, game::CellAddr::new(category, clue));
                    html! {
                        <ClueCell {event} text={text.clone()} callback={callback.clone()}/>
                    }
                })
            }
        </tr>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the trivia catalog API
    #[arg(long, default_value = trivia_protocol::DEFAULT_API_URL)]
    pub api_url: String,

    /// How many categories to fetch before picking the board's six
    #[arg(long, default_value_t = game::LoaderConfig::DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    lifecycle: game::GameLifecycle,
    surface: game::GridSurface,
    catalog: HttpCatalog,
    config: game::LoaderConfig,
    seed: u64,
}

impl GameView {
    fn start_load(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.lifecycle.begin_load(&mut self.surface) else {
            return false;
        };

        let seed = std::mem::replace(&mut self.seed, js_random_seed());
        log::debug!("seed: {}", seed);
        let mut loader = game::CategoryLoader::new(
            self.catalog.clone(),
            game::Sampler::new(seed),
            self.config,
        );
        let started = Instant::now();

        ctx.link().send_future(async move {
            let result = loader.load_categories().await;
            Msg::Loaded {
                ticket,
                result,
                started,
            }
        });
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        ctx.link().send_message(Msg::Restart);

        Self {
            lifecycle: game::GameLifecycle::new(),
            surface: game::GridSurface::new(),
            catalog: HttpCatalog::new(props.api_url.clone()),
            config: game::LoaderConfig::new(props.pool_size),
            seed: props.seed.unwrap_or_else(js_random_seed),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => self.start_load(ctx),
            Loaded {
                ticket,
                result,
                started,
            } => {
                let outcome = self
                    .lifecycle
                    .complete_load(ticket, result, &mut self.surface);
                log::info!(
                    "load of {:?} finished in {:?}: {:?}",
                    ticket.board(),
                    started.elapsed(),
                    outcome
                );
                !matches!(outcome, game::LoadOutcome::Stale)
            }
            Activate(event) => {
                let outcome = self.lifecycle.activate(event, &mut self.surface);
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let surface = &self.surface;

        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });
        let cb_activate = ctx.link().callback(Msg::Activate);

        let rows = match surface.board() {
            Some(board) => surface
                .rows()
                .iter()
                .enumerate()
                .map(|(clue, row)| view_row(board, clue, row, &cb_activate))
                .collect::<Html>(),
            None => html! {},
        };

        html! {
            <div class="trivia">
                <nav>
                    <button id="restart" onclick={cb_restart} disabled={!surface.restart_enabled()}>
                        { surface.restart_label().to_string() }
                    </button>
                    if surface.is_loading() {
                        <aside class="spinner"/>
                    }
                    if let Some(error) = surface.error() {
                        <aside class="error">{ error.to_string() }</aside>
                    }
                </nav>
                <table id="jeopardy" class={classes!(surface.is_loading().then_some("loading"))}>
                    <thead>
                        <tr>
                            { for surface.header().iter().map(|title| html! { <th>{ title.clone() }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cells_get_hidden_class() {
        assert!(cell_class(game::HIDDEN_PLACEHOLDER).contains("hidden"));
        assert!(cell_class(game::HIDDEN_PLACEHOLDER).contains("cell"));
        assert!(!cell_class("What is Rust?").contains("hidden"));
    }
}
