use bjround::{Card, Controls, Hand, RoundEngine, RoundOptions, RoundResult, RoundState, Suit};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    engine: RoundEngine,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            engine: RoundEngine::new(RoundOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.engine = RoundEngine::new(RoundOptions::default(), seed as u64);
    }

    pub fn start(&mut self) -> Result<JsValue, JsValue> {
        self.engine.start_round();
        self.snapshot()
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        self.engine.hit().map_err(js_err)?;
        self.snapshot()
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        self.engine.stand().map_err(js_err)?;
        self.snapshot()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.engine.state();
        let result = self.engine.result();
        let controls = Controls::for_state(state);

        let snapshot = Snapshot {
            state: state_to_str(state),
            status: bjround::status_text(state, result.map(|r| r.outcome)),
            player: JsHand::from(self.engine.player_hand()),
            dealer: JsHand::from(self.engine.dealer_hand()),
            result: result.map(JsRoundResult::from),
            controls: JsControls {
                start: controls.start,
                hit: controls.hit,
                stand: controls.stand,
            },
            cards_remaining: self.engine.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    status: &'static str,
    player: JsHand,
    dealer: JsHand,
    result: Option<JsRoundResult>,
    controls: JsControls,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsControls {
    start: bool,
    hit: bool,
    stand: bool,
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: &'static str,
    label: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u16,
    is_soft: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: String,
    player_won: bool,
    player_value: u16,
    dealer_value: u16,
    dealer_bust: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: result.outcome.to_string(),
            player_won: result.outcome.player_won(),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.symbol(),
        suit: suit_to_str(card.suit),
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::NotStarted => "NotStarted",
        RoundState::PlayerTurn => "PlayerTurn",
        RoundState::Resolved => "Resolved",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
