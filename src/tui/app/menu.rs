use crate::evaluator::RankingRules;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Rules,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Players, MenuItem::Rules];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_players),
            MenuItem::Rules => {
                let label = if app.cfg_rules.ace_low_straights {
                    "Ace-low straights allowed"
                } else {
                    "Ace high only"
                };
                format!("Straights: {label} ({})", app.cfg_rules)
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_players < AppState::MAX_PLAYERS {
                    app.cfg_players += 1;
                }
            }
            MenuItem::Rules => app.cfg_rules = toggled(app.cfg_rules),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_players > AppState::MIN_PLAYERS {
                    app.cfg_players -= 1;
                }
            }
            MenuItem::Rules => app.cfg_rules = toggled(app.cfg_rules),
        }
    }
}

fn toggled(rules: RankingRules) -> RankingRules {
    RankingRules { ace_low_straights: !rules.ace_low_straights }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_players = self.players;
        self.cfg_rules = self.rules;
        self.scene = super::Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.cfg_players = self.cfg_players.clamp(Self::MIN_PLAYERS, Self::MAX_PLAYERS);
        if self.cfg_players != self.players || self.cfg_rules != self.rules {
            self.reset_table();
        }
        self.players = self.cfg_players;
        self.rules = self.cfg_rules;
        log::debug!("table set to {} players, {} rules", self.players, self.rules);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
