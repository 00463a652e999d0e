//! Placeholder rotation through example job descriptions.

use std::time::Duration;

pub const ROTATE_INTERVAL: Duration = Duration::from_millis(3000);

pub const SEARCH_SUGGESTIONS: [&str; 10] = [
    "Jestem marketingowcem w firmie e-commerce i tworzę kampanie reklamowe",
    "Pracuję jako HR manager i rekrutuję nowych pracowników",
    "Jestem analitykiem danych i analizuję trendy sprzedażowe",
    "Prowadzę własny biznes online i zarządzam social media",
    "Jestem copywriterem i piszę treści marketingowe",
    "Pracuję w IT jako project manager i koordynuję zespoły",
    "Jestem księgowym i przygotowuję raporty finansowe",
    "Prowadzę sklep internetowy i obsługuję klientów",
    "Jestem consultantem biznesowym i doradzam firmom",
    "Pracuję jako content creator i tworzę materiały wideo",
];

/// Cycles through `SEARCH_SUGGESTIONS`. Ticks only count while active.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRotator {
    index: usize,
    active: bool,
}

impl SuggestionRotator {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn current(&self) -> &'static str {
        SEARCH_SUGGESTIONS[self.index]
    }

    pub fn tick(&mut self) {
        if self.active {
            self.index = (self.index + 1) % SEARCH_SUGGESTIONS.len();
        }
    }
}
