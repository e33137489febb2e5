use crate::deck::Deck;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use crate::evaluator::{RankingRules, StandardRanker};
use crate::hand::{best_hands, Hand, HandError, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Deal,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub players: usize,
    pub rules: RankingRules,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_players: usize,
    pub cfg_rules: RankingRules,
    // Last dealt round
    pub hands: Vec<Hand>,
    pub winners: Vec<usize>,
    pub round: u64,
    rng: ChaCha8Rng,
    deck: Deck,
    help_open: bool,
    deal_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_seed(rand::random())
    }
}

impl AppState {
    pub const MIN_PLAYERS: usize = 2;
    /// Most seats a 52-card deck can serve in one round.
    pub const MAX_PLAYERS: usize = 52 / HAND_SIZE;

    /// Start in the menu with a deck shuffled from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let players = 4;
        let rules = RankingRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);
        Self {
            scene: Scene::Menu,
            players,
            rules,
            menu_index: 0,
            cfg_players: players,
            cfg_rules: rules,
            hands: Vec::new(),
            winners: Vec::new(),
            round: 0,
            rng,
            deck,
            help_open: false,
            deal_error: None,
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn deal_error(&self) -> Option<&str> {
        self.deal_error.as_deref()
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Deal => {
                if self.scene == Scene::Table && !self.help_open {
                    return self.deal_round();
                }
                false
            }
        }
    }

    /// Deal one hand per seat and work out the winners. Reshuffles a fresh deck first
    /// when the current one cannot cover the whole table.
    pub fn deal_round(&mut self) -> bool {
        if self.deck.len() < self.players * HAND_SIZE {
            log::debug!("deck has {} cards left, reshuffling", self.deck.len());
            self.deck = Deck::standard();
            self.deck.shuffle_with(&mut self.rng);
        }
        let ranker = StandardRanker::new(self.rules);
        let dealt: Result<Vec<Hand>, HandError> =
            (0..self.players).map(|_| Hand::deal(&mut self.deck, &ranker)).collect();
        match dealt {
            Ok(hands) => {
                self.winners = best_hands(&hands);
                self.hands = hands;
                self.round += 1;
                self.deal_error = None;
                true
            }
            Err(err) => {
                self.deal_error = Some(err.to_string());
                false
            }
        }
    }

    pub(crate) fn reset_table(&mut self) {
        self.hands.clear();
        self.winners.clear();
        self.round = 0;
        self.deal_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_fills_every_seat() {
        let mut app = AppState::with_seed(5);
        app.apply_menu();
        assert!(app.deal_round());
        assert_eq!(app.hands.len(), app.players);
        assert!(!app.winners.is_empty());
        assert_eq!(app.cards_left(), 52 - app.players * HAND_SIZE);
    }

    #[test]
    fn deal_ignored_outside_table() {
        let mut app = AppState::with_seed(5);
        assert!(!app.handle_input(InputAction::Deal));
        assert_eq!(app.round, 0);
    }

    #[test]
    fn reshuffles_when_deck_runs_short() {
        let mut app = AppState::with_seed(9);
        app.cfg_players = AppState::MAX_PLAYERS;
        app.apply_menu();
        for _ in 0..3 {
            assert!(app.deal_round());
        }
        assert_eq!(app.round, 3);
        assert_eq!(app.cards_left(), 52 - AppState::MAX_PLAYERS * HAND_SIZE);
    }

    #[test]
    fn same_seed_deals_same_rounds() {
        let mut a = AppState::with_seed(21);
        let mut b = AppState::with_seed(21);
        a.apply_menu();
        b.apply_menu();
        // enough rounds to force a reshuffle
        for _ in 0..4 {
            assert!(a.deal_round());
            assert!(b.deal_round());
            let cards_a: Vec<_> = a.hands.iter().map(|h| h.cards().to_vec()).collect();
            let cards_b: Vec<_> = b.hands.iter().map(|h| h.cards().to_vec()).collect();
            assert_eq!(cards_a, cards_b);
        }
    }
}
