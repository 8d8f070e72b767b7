use crate::canvas;
use crate::utils::*;
use chrono::TimeDelta;
use clap::{Args, ValueEnum};
use concorde_core as game;
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::utils::window;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum CompareArg {
    /// Compare the first two picks when a third cell is clicked
    #[default]
    ThirdClick,
    /// Compare as soon as two cells are face up
    Pair,
}

impl From<CompareArg> for game::ComparePolicy {
    fn from(arg: CompareArg) -> Self {
        match arg {
            CompareArg::ThirdClick => Self::ThirdClick,
            CompareArg::Pair => Self::Pair,
        }
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first board instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of columns
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SIZE.0)]
    pub columns: game::Coord,

    /// Number of rows
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SIZE.1)]
    pub rows: game::Coord,

    /// Time limit in seconds
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_DURATION_SECS)]
    pub duration: i64,

    /// When face-up cells are compared
    #[arg(long, value_enum, default_value_t)]
    pub compare: CompareArg,
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            seed: None,
            columns: game::GameConfig::DEFAULT_SIZE.0,
            rows: game::GameConfig::DEFAULT_SIZE.1,
            duration: game::GameConfig::DEFAULT_DURATION_SECS,
            compare: CompareArg::default(),
        }
    }
}

impl GameProps {
    pub(crate) fn game_config(&self) -> game::Result<game::GameConfig> {
        let duration = TimeDelta::try_seconds(self.duration).ok_or(game::GameError::InvalidDuration)?;
        game::GameConfig::new((self.columns, self.rows), duration, self.compare.into())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Frame,
    Click(game::Point),
    Reset,
    Resize,
}

fn window_canvas() -> game::Canvas {
    let window = window();
    let dim = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.);
    game::Canvas::new(dim(window.inner_width()), dim(window.inner_height()))
}

fn log_board(board: &game::Board) {
    match serde_json::to_string(board) {
        Ok(json) => log::debug!("new board: {}", json),
        Err(err) => log::warn!("could not serialize board: {}", err),
    }
}

pub(crate) struct GameView {
    engine: game::MatchEngine,
    scene: game::Scene,
    pending_click: Option<game::Point>,
    canvas_ref: NodeRef,
    _frame: AnimationFrame,
    _resize_listener: EventListener,
}

impl GameView {
    fn request_frame(ctx: &Context<Self>) -> AnimationFrame {
        let link = ctx.link().clone();
        request_animation_frame(move |_timestamp| link.send_message(Msg::Frame))
    }

    fn listen_resize(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&window(), "resize", move |_| link.send_message(Msg::Resize))
    }

    fn refresh_scene(&mut self) -> bool {
        let scene = self.engine.scene(utc_now());
        let changed = scene != self.scene;
        self.scene = scene;
        changed
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let now = utc_now();
        let deal = |config| {
            game::MatchEngine::new(
                config,
                game::Canvas::default(),
                game::RandomBoardGenerator::new(seed),
                now,
            )
        };
        let engine = props
            .game_config()
            .and_then(deal)
            .or_else(|err| {
                log::error!("invalid game settings ({}), using defaults", err);
                deal(game::GameConfig::default())
            })
            .expect("default game settings are valid");
        log_board(engine.board());
        let scene = engine.scene(now);

        Self {
            engine,
            scene,
            pending_click: None,
            canvas_ref: NodeRef::default(),
            _frame: Self::request_frame(ctx),
            _resize_listener: Self::listen_resize(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Frame => {
                self._frame = Self::request_frame(ctx);
                let scene = self.engine.frame(utc_now(), self.pending_click.take());
                let changed = scene != self.scene;
                self.scene = scene;
                changed
            }
            Click(point) => {
                let outcome = self.engine.click(point);
                log::debug!("click at ({}, {}): {:?}", point.x, point.y, outcome);
                self.pending_click = Some(point);
                outcome.has_update() && self.refresh_scene()
            }
            Reset => {
                let generator = game::RandomBoardGenerator::new(js_random_seed());
                if let Err(err) = self.engine.reset(generator, utc_now()) {
                    log::error!("could not deal a new board: {}", err);
                    return false;
                }
                self.pending_click = None;
                log_board(self.engine.board());
                self.refresh_scene()
            }
            Resize => {
                self.engine.resize(window_canvas());
                self.refresh_scene()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let canvas = self.engine.canvas();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            Click(game::Point::new(e.offset_x().into(), e.offset_y().into()))
        });
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Reset
        });

        html! {
            <div class="concorde">
                <canvas
                    ref={self.canvas_ref.clone()}
                    width={(canvas.width.max(0.) as u32).to_string()}
                    height={(canvas.height.max(0.) as u32).to_string()}
                    {onclick}
                />
                <button class="reset" onclick={cb_reset}>{"Reset"}</button>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        if let Err(err) = canvas::paint(&canvas, &self.scene) {
            log::error!("failed to paint frame: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        game: GameProps,
    }

    fn parse(args: &[&str]) -> GameProps {
        TestArgs::try_parse_from(std::iter::once("concorde").chain(args.iter().copied()))
            .unwrap()
            .game
    }

    #[test]
    fn defaults_match_default_config() {
        let props = parse(&[]);

        assert_eq!(props, GameProps::default());
        assert_eq!(props.game_config().unwrap(), game::GameConfig::default());
    }

    #[test]
    fn compare_and_size_flags_reach_the_config() {
        let props = parse(&["--compare=pair", "--columns", "4", "--rows=2", "--duration", "30"]);
        let config = props.game_config().unwrap();

        assert_eq!(config.size, (4, 2));
        assert_eq!(config.compare, game::ComparePolicy::Pair);
        assert_eq!(config.duration, TimeDelta::seconds(30));
    }

    #[test]
    fn odd_board_is_rejected_by_config() {
        let props = parse(&["--columns", "3", "--rows", "3"]);

        assert_eq!(props.game_config(), Err(game::GameError::OddCellCount));
    }

    #[test]
    fn non_positive_duration_is_rejected_by_config() {
        let props = parse(&["--duration=0"]);

        assert_eq!(props.game_config(), Err(game::GameError::InvalidDuration));
    }
}
